use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use winnow::error::{ErrMode, Needed};

use loupe_macros::impl_default_for;

use crate::{
    BYTES_PER_BLOCK, NUMBER_OF_BLOCKS_PER_CHUNK, NdefReaderError,
    message_info::MessageInfo,
    parser::{
        self,
        stream::{IntoStream, stream},
    },
    record::NdefRecord,
    resume::ResumeError,
};

impl_default_for!(NdefReader);

/// Accumulates chunked tag reads until a whole NDEF message is on hand,
/// then hands back its records. One reader per physical read session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefReader {
    state: ReaderState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReaderState {
    #[default]
    NotStarted,
    Reading(ReadingContext),
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingContext {
    message_info: MessageInfo,

    /// Message body bytes still to collect after the framing was consumed
    needed: u16,

    /// Identity of the tag being read, None until a full chunk was seen
    first_chunk_hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    /// The whole message was collected and decoded
    Complete(MessageInfo, Vec<NdefRecord>),

    /// More chunks are needed, hold on to the left over bytes
    Incomplete(PartialMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialMessage {
    pub message_info: MessageInfo,
    pub left_over_bytes: Vec<u8>,
}

impl NdefReader {
    pub fn new() -> Self {
        Self {
            state: ReaderState::default(),
        }
    }

    /// Feed the next batch of bytes. Callers pass the previous call's
    /// left over bytes plus the freshly read chunk.
    pub fn parse(&mut self, data: Vec<u8>) -> Result<ParseResult, NdefReaderError> {
        match &self.state {
            ReaderState::NotStarted => {
                let mut input = stream(&data);
                let message_info = parser::parse_message_header(&mut input).map_err(|e| {
                    if e.is_incomplete() {
                        NdefReaderError::NotEnoughData
                    } else {
                        NdefReaderError::ParsingError(
                            "input does not start with an NDEF message TLV".to_string(),
                        )
                    }
                })?;

                let header_bytes = data.len() - input.remaining();
                let needed = message_info.full_message_length() - header_bytes as u16;

                self.state = ReaderState::Reading(ReadingContext {
                    message_info,
                    needed,
                    first_chunk_hash: first_chunk_hash(&data),
                });

                self.parse_body(input)
            }

            ReaderState::Reading(_) => self.parse_body(data),

            ReaderState::Complete => Err(NdefReaderError::AlreadyParsed),
        }
    }

    fn parse_body(&mut self, data: impl IntoStream) -> Result<ParseResult, NdefReaderError> {
        let reading = match &mut self.state {
            ReaderState::Reading(reading) => reading,
            _ => unreachable!("parse_body is only entered from the reading state"),
        };

        if data.remaining() < reading.needed as usize {
            debug!(
                have = data.remaining(),
                needed = reading.needed,
                "message incomplete, waiting for more chunks"
            );

            return Ok(ParseResult::Incomplete(PartialMessage {
                message_info: reading.message_info,
                left_over_bytes: data.into_bytes(),
            }));
        }

        let mut input = data.to_stream();
        match parser::parse_ndef_records(&mut input, &reading.message_info) {
            Ok(records) => {
                let message_info = reading.message_info;
                self.state = ReaderState::Complete;
                Ok(ParseResult::Complete(message_info, records))
            }

            Err(ErrMode::Incomplete(Needed::Size(more))) => {
                warn!(
                    more = more.get(),
                    "framed length understated, widening the expected message length"
                );

                reading.message_info.extend_payload(more.get() as u16);
                reading.needed += more.get() as u16;

                Ok(ParseResult::Incomplete(PartialMessage {
                    message_info: reading.message_info,
                    left_over_bytes: data.into_bytes(),
                }))
            }

            Err(error) => Err(NdefReaderError::ParsingError(format!(
                "failed to decode NDEF records: {error}"
            ))),
        }
    }

    /// Check whether bytes from a fresh scan continue the partial read,
    /// comparing the hash of the first chunk against the one on file.
    pub fn check_resume(&self, data: &[u8]) -> Result<(), ResumeError> {
        let expected = BYTES_PER_BLOCK * NUMBER_OF_BLOCKS_PER_CHUNK;
        if data.len() < expected as usize {
            return Err(ResumeError::ChunkSizeMismatch {
                expected,
                actual: data.len() as u16,
            });
        }

        let reading = match &self.state {
            ReaderState::Reading(reading) => reading,
            ReaderState::Complete => return Err(ResumeError::AlreadyParsed),
            ReaderState::NotStarted => {
                warn!("resume requested before any chunk was parsed, starting over");
                return Ok(());
            }
        };

        let Some(scanned_hash) = first_chunk_hash(data) else {
            return Err(ResumeError::MissingFirstChunkHash);
        };

        let Some(known_hash) = &reading.first_chunk_hash else {
            return Err(ResumeError::MissingFirstChunkHash);
        };

        if &scanned_hash != known_hash {
            return Err(ResumeError::TagMismatch);
        }

        Ok(())
    }

    pub fn is_started(&self) -> bool {
        matches!(self.state, ReaderState::Reading(_))
    }

    pub fn message_info(&self) -> Option<&MessageInfo> {
        match &self.state {
            ReaderState::Reading(reading) => Some(&reading.message_info),
            ReaderState::Complete | ReaderState::NotStarted => None,
        }
    }
}

fn first_chunk_hash(data: &[u8]) -> Option<String> {
    let chunk_length = (BYTES_PER_BLOCK * NUMBER_OF_BLOCKS_PER_CHUNK) as usize;
    let chunk = data.get(..chunk_length)?;

    let mut hasher = Sha256::new();
    hasher.update(chunk);

    Some(hex::encode(hasher.finalize()))
}
