use crate::{header::NdefHeader, ndef_type::NdefType, payload::NdefPayload};

/// One decoded record of an NDEF message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    pub header: NdefHeader,
    pub type_bytes: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub payload: NdefPayload,
}

impl NdefRecord {
    /// Build a record from fields the platform radio layer already
    /// parsed, synthesizing the wire header from the field sizes. The
    /// payload stays raw; decoding happens at classification time.
    pub fn from_parts(
        type_name_format: NdefType,
        type_bytes: Vec<u8>,
        id: Option<Vec<u8>>,
        payload: Vec<u8>,
    ) -> Self {
        let header = NdefHeader::synthesized(
            type_name_format,
            type_bytes.len() as u8,
            payload.len() as u32,
            id.as_ref().map(|id| id.len() as u8),
        );

        Self {
            header,
            type_bytes,
            id,
            payload: NdefPayload::Data(payload),
        }
    }

    pub fn type_name_format(&self) -> NdefType {
        self.header.type_name_format
    }

    /// Type field as text, if it is valid UTF-8.
    pub fn type_str(&self) -> Option<String> {
        String::from_utf8(self.type_bytes.clone()).ok()
    }

    /// Identifier field as text, if present and valid UTF-8.
    pub fn id_str(&self) -> Option<String> {
        let id = self.id.as_ref()?;
        String::from_utf8(id.clone()).ok()
    }
}
