use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use loupe_macros::impl_default_for;
use loupe_nfc::{NdefRecord, NdefType};

use crate::{
    message::{IngestError, Message},
    store::{MessageStore, StoreError},
};

impl_default_for!(ScanSession);

/// Owns the detected message store for one scanning session and
/// serializes access to it. Tag reads and web activity launches may
/// arrive on different execution contexts; every entry point locks the
/// same store, so a count observed by a reader is always consistent with
/// the messages addressable up to it.
#[derive(Debug, Clone)]
pub struct ScanSession {
    store: Arc<Mutex<MessageStore>>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(MessageStore::new())),
        }
    }

    /// Core ingestion contract: a non empty batch of records becomes one
    /// stored message, atomically visible to readers.
    pub fn ingest(&self, records: Vec<NdefRecord>) -> Result<(), IngestError> {
        let message = Message::try_new(records)?;

        let mut store = self.store.lock();
        store.append(message);
        debug!(count = store.count(), "stored NDEF message");

        Ok(())
    }

    /// Batch freshly read from a physical tag.
    pub fn ingest_tag_read(&self, records: Vec<NdefRecord>) -> Result<(), IngestError> {
        info!(records = records.len(), "ingesting records from tag read");
        self.ingest(records)
    }

    /// Batch carried by a browsing launch event. The platform hands these
    /// over already parsed; a batch leading with an Empty record carries
    /// no information and is dropped before it reaches the store.
    pub fn ingest_web_activity(&self, records: Vec<NdefRecord>) -> Result<(), IngestError> {
        if records.first().map(NdefRecord::type_name_format) == Some(NdefType::Empty) {
            debug!("web activity leads with an empty record, dropping");
            return Err(IngestError::Empty);
        }

        info!(records = records.len(), "ingesting records from web activity");
        self.ingest(records)
    }

    pub fn message_count(&self) -> usize {
        self.store.lock().count()
    }

    /// Clone of the message at `index`, newest first.
    pub fn message_at(&self, index: usize) -> Result<Message, StoreError> {
        self.store.lock().at(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_record(text: &str) -> NdefRecord {
        NdefRecord::from_parts(
            NdefType::Media,
            b"text/plain".to_vec(),
            None,
            text.as_bytes().to_vec(),
        )
    }

    fn empty_record() -> NdefRecord {
        NdefRecord::from_parts(NdefType::Empty, Vec::new(), None, Vec::new())
    }

    #[test]
    fn empty_batch_is_rejected_and_nothing_stored() {
        let session = ScanSession::new();

        assert_eq!(session.ingest(Vec::new()), Err(IngestError::Empty));
        assert_eq!(session.ingest_tag_read(Vec::new()), Err(IngestError::Empty));
        assert_eq!(session.message_count(), 0);
    }

    #[test]
    fn messages_come_back_newest_first() {
        let session = ScanSession::new();

        session.ingest(vec![text_record("r1")]).unwrap();
        session
            .ingest(vec![text_record("r2"), text_record("r3")])
            .unwrap();

        assert_eq!(session.message_count(), 2);
        assert_eq!(session.message_at(0).unwrap().len(), 2);
        assert_eq!(session.message_at(1).unwrap().len(), 1);
    }

    #[test]
    fn web_activity_leading_empty_record_is_dropped() {
        let session = ScanSession::new();

        let result = session.ingest_web_activity(vec![empty_record(), text_record("r1")]);
        assert_eq!(result, Err(IngestError::Empty));
        assert_eq!(session.message_count(), 0);

        // an empty record deeper in the batch is stored as delivered
        session
            .ingest_web_activity(vec![text_record("r1"), empty_record()])
            .unwrap();
        assert_eq!(session.message_count(), 1);
    }

    #[test]
    fn lookup_past_the_count_errors() {
        let session = ScanSession::new();
        session.ingest_tag_read(vec![text_record("r1")]).unwrap();

        assert_eq!(
            session.message_at(1),
            Err(StoreError::OutOfRange { index: 1, count: 1 })
        );
    }

    #[test]
    fn entry_paths_share_one_store_across_threads() {
        let session = ScanSession::new();

        std::thread::scope(|scope| {
            let tag_session = session.clone();
            scope.spawn(move || {
                tag_session.ingest_tag_read(vec![text_record("tag")]).unwrap();
            });

            let activity_session = session.clone();
            scope.spawn(move || {
                activity_session
                    .ingest_web_activity(vec![text_record("web")])
                    .unwrap();
            });
        });

        assert_eq!(session.message_count(), 2);
        assert_eq!(session.message_at(0).unwrap().len(), 1);
        assert_eq!(session.message_at(1).unwrap().len(), 1);
    }
}
