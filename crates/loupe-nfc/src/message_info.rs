/// Lengths recovered from the TLV framing of an NDEF message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageInfo {
    /// Bytes consumed by the framing itself (tag byte plus length bytes)
    pub header_length: u16,

    /// Length of the framed NDEF message body
    pub payload_length: u16,
}

impl MessageInfo {
    pub fn new(header_length: u16, payload_length: u16) -> Self {
        Self {
            header_length,
            payload_length,
        }
    }

    /// Framing plus body, the total the reader has to collect.
    pub fn full_message_length(&self) -> u16 {
        self.header_length + self.payload_length
    }

    /// Tags sometimes under-report the body length; the reader widens the
    /// expectation when record parsing asks for more bytes.
    pub(crate) fn extend_payload(&mut self, extra: u16) {
        self.payload_length += extra;
    }
}
