use crate::ndef_type::NdefType;

/// Decoded record header: the flags byte plus the length fields that
/// follow it on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub has_id_length: bool,
    pub type_name_format: NdefType,
    pub type_length: u8,
    pub payload_length: u32,
    pub id_length: Option<u8>,
}

impl NdefHeader {
    /// Header for a record that arrives already parsed. Platform radio
    /// APIs hand over the format code and field contents, never the wire
    /// bytes, so the flag bits and lengths are derived from the fields.
    pub fn synthesized(
        type_name_format: NdefType,
        type_length: u8,
        payload_length: u32,
        id_length: Option<u8>,
    ) -> Self {
        Self {
            message_begin: false,
            message_end: false,
            chunked: false,
            short_record: payload_length < 256,
            has_id_length: id_length.is_some(),
            type_name_format,
            type_length,
            payload_length,
            id_length,
        }
    }
}
