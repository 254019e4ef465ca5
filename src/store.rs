use tracing::error;

use loupe_macros::impl_default_for;

use crate::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The presentation layer asked for a row that does not exist, an
    /// integration bug rather than a runtime condition
    #[error("message index {index} out of range, store holds {count}")]
    OutOfRange { index: usize, count: usize },
}

impl_default_for!(MessageStore);

/// Session scoped list of decoded messages. Index 0 is always the most
/// recently appended message; internally stored oldest first and
/// inverted at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Insert at the logical front: the new message becomes index 0 and
    /// every stored message shifts back one position.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Newest first lookup.
    pub fn at(&self, index: usize) -> Result<&Message, StoreError> {
        let count = self.count();
        if index >= count {
            error!(index, count, "message index out of range");
            return Err(StoreError::OutOfRange { index, count });
        }

        Ok(&self.messages[count - 1 - index])
    }
}

#[cfg(test)]
mod tests {
    use loupe_nfc::{NdefRecord, NdefType};

    use super::*;

    fn message(text: &str) -> Message {
        let record = NdefRecord::from_parts(
            NdefType::Media,
            b"text/plain".to_vec(),
            None,
            text.as_bytes().to_vec(),
        );

        Message::try_new(vec![record]).unwrap()
    }

    #[test]
    fn newest_message_is_index_zero() {
        let mut store = MessageStore::new();
        let first = message("first");
        let second = message("second");

        store.append(first.clone());
        store.append(second.clone());

        assert_eq!(store.count(), 2);
        assert_eq!(store.at(0), Ok(&second));
        assert_eq!(store.at(1), Ok(&first));
    }

    #[test]
    fn index_at_count_is_out_of_range() {
        let mut store = MessageStore::new();
        assert_eq!(
            store.at(0),
            Err(StoreError::OutOfRange { index: 0, count: 0 })
        );

        store.append(message("only"));
        assert_eq!(
            store.at(1),
            Err(StoreError::OutOfRange { index: 1, count: 1 })
        );
        assert_eq!(
            store.at(5),
            Err(StoreError::OutOfRange { index: 5, count: 1 })
        );
    }
}
