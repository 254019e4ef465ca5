/// Decoded payload of a record. Text and URI records are decoded by the
/// parser, everything else keeps its raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NdefPayload {
    Text(TextPayload),
    Uri(String),
    Data(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPayload {
    pub format: TextPayloadFormat,
    pub language: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPayloadFormat {
    Utf8,
    Utf16,
}

impl NdefPayload {
    /// Fold any payload into displayable text. Raw bytes qualify only if
    /// they are valid UTF-8.
    pub fn display_text(&self) -> Option<String> {
        match self {
            NdefPayload::Text(text_payload) => Some(text_payload.text.clone()),
            NdefPayload::Uri(uri) => Some(uri.clone()),
            NdefPayload::Data(data) => String::from_utf8(data.clone()).ok(),
        }
    }

    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            NdefPayload::Data(data) => Some(data),
            _ => None,
        }
    }
}

/// URI prefix codes as defined in NFC Forum RTD URI specification
pub const URI_PREFIXES: &[&str] = &[
    "",                           // 0x00 - no prepending
    "http://www.",                // 0x01
    "https://www.",               // 0x02
    "http://",                    // 0x03
    "https://",                   // 0x04
    "tel:",                       // 0x05
    "mailto:",                    // 0x06
    "ftp://anonymous:anonymous@", // 0x07
    "ftp://ftp.",                 // 0x08
    "ftps://",                    // 0x09
    "sftp://",                    // 0x0A
    "smb://",                     // 0x0B
    "nfs://",                     // 0x0C
    "ftp://",                     // 0x0D
    "dav://",                     // 0x0E
    "news:",                      // 0x0F
    "telnet://",                  // 0x10
    "imap:",                      // 0x11
    "rtsp://",                    // 0x12
    "urn:",                       // 0x13
    "pop:",                       // 0x14
    "sip:",                       // 0x15
    "sips:",                      // 0x16
    "tftp:",                      // 0x17
    "btspp://",                   // 0x18
    "btl2cap://",                 // 0x19
    "btgoep://",                  // 0x1A
    "tcpobex://",                 // 0x1B
    "irdaobex://",                // 0x1C
    "file://",                    // 0x1D
    "urn:epc:id:",                // 0x1E
    "urn:epc:tag:",               // 0x1F
    "urn:epc:pat:",               // 0x20
    "urn:epc:raw:",               // 0x21
    "urn:epc:",                   // 0x22
    "urn:nfc:",                   // 0x23
];

/// Expand a URI record's prefix byte. Codes past the table are reserved
/// and decode as no prefix.
pub fn expand_uri_prefix(code: u8) -> &'static str {
    URI_PREFIXES.get(code as usize).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_expansion() {
        assert_eq!(expand_uri_prefix(0x00), "");
        assert_eq!(expand_uri_prefix(0x04), "https://");
        assert_eq!(expand_uri_prefix(0x23), "urn:nfc:");
        assert_eq!(expand_uri_prefix(0x24), "");
        assert_eq!(expand_uri_prefix(0xFF), "");
    }

    #[test]
    fn display_text_only_for_valid_utf8_data() {
        assert_eq!(
            NdefPayload::Data(b"hello".to_vec()).display_text(),
            Some("hello".to_string())
        );
        assert_eq!(NdefPayload::Data(vec![0xFF, 0xFE]).display_text(), None);
        assert_eq!(
            NdefPayload::Uri("https://example.com".to_string()).display_text(),
            Some("https://example.com".to_string())
        );
    }
}
