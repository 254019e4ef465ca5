//! Decode NDEF messages read from NFC tags into typed, display ready
//! record descriptions, and keep the messages of one scanning session in
//! a newest first store for a presentation layer to query by index.

pub mod classify;
pub mod logging;
pub mod message;
pub mod session;
pub mod store;

pub use classify::{RecordCategory, RecordView, classify};
pub use message::{IngestError, Message};
pub use session::ScanSession;
pub use store::{MessageStore, StoreError};

// the wire level domain lives in its own crate
pub use loupe_nfc as nfc;
