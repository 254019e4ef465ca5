pub mod header;
pub mod message_info;
pub mod ndef_type;
pub mod parser;
pub mod payload;
pub mod reader;
pub mod record;
pub mod resume;

pub use header::NdefHeader;
pub use message_info::MessageInfo;
pub use ndef_type::NdefType;
pub use payload::{NdefPayload, TextPayload, TextPayloadFormat};
pub use reader::{NdefReader, ParseResult, PartialMessage};
pub use record::NdefRecord;
pub use resume::ResumeError;

/// Number of blocks read from the tag in one radio round trip
pub const NUMBER_OF_BLOCKS_PER_CHUNK: u16 = 32;

/// Number of bytes in a single tag block
pub const BYTES_PER_BLOCK: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NdefReaderError {
    #[error("error decoding the NDEF message: {0}")]
    ParsingError(String),

    #[error("not enough data to decode the message framing")]
    NotEnoughData,

    #[error("the message has already been fully parsed")]
    AlreadyParsed,
}
