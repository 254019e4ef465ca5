use derive_more::Deref;
use loupe_nfc::NdefRecord;

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("message contains no records")]
    Empty,
}

pub type Error = IngestError;
type Result<T, E = Error> = std::result::Result<T, E>;

/// One NDEF message as received from a tag read or a launch event.
/// Always holds at least one record and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct Message(Vec<NdefRecord>);

impl Message {
    /// A message with no records carries no information and is rejected
    /// before it can reach the store.
    pub fn try_new(records: Vec<NdefRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(IngestError::Empty);
        }

        Ok(Self(records))
    }

    pub fn records(&self) -> &[NdefRecord] {
        &self.0
    }

    pub fn into_records(self) -> Vec<NdefRecord> {
        self.0
    }
}
