use loupe_nfc::{NdefRecord, NdefType};

/// Human readable category of a record. Display strings are the row
/// labels the inspection UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum RecordCategory {
    #[strum(to_string = "NFC Well Known type")]
    WellKnown,

    #[strum(to_string = "Media type")]
    Media,

    #[strum(to_string = "Absolute URI")]
    AbsoluteUri,

    #[strum(to_string = "NFC External type")]
    External,

    #[strum(to_string = "Unknown type")]
    Unknown,

    #[strum(to_string = "Unchanged type")]
    Unchanged,

    #[strum(to_string = "Invalid data")]
    Invalid,
}

/// Display ready projection of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    pub category: RecordCategory,
    pub text: Option<String>,
    pub is_valid: bool,
}

impl RecordView {
    fn valid(category: RecordCategory, text: Option<String>) -> Self {
        Self {
            category,
            text,
            is_valid: true,
        }
    }

    fn invalid() -> Self {
        Self {
            category: RecordCategory::Invalid,
            text: None,
            is_valid: false,
        }
    }

    /// Single line row text: "<category>: <text>" for typed records, the
    /// bare URI for absolute URIs, the bare category otherwise.
    pub fn row_label(&self) -> String {
        match (self.category, &self.text) {
            (RecordCategory::AbsoluteUri, Some(text)) => text.clone(),
            (category, Some(text)) => format!("{category}: {text}"),
            (category, None) => category.to_string(),
        }
    }
}

/// Classify one record for display. Pure and total: malformed bytes fold
/// into the Invalid category, never an error.
pub fn classify(record: &NdefRecord) -> RecordView {
    match record.type_name_format() {
        NdefType::WellKnown => match record.type_str() {
            Some(type_str) => RecordView::valid(RecordCategory::WellKnown, Some(type_str)),
            None => RecordView::invalid(),
        },

        NdefType::Media => match record.type_str() {
            Some(type_str) => RecordView::valid(RecordCategory::Media, Some(type_str)),
            None => RecordView::invalid(),
        },

        // for absolute URIs the payload itself is the text, not the type
        NdefType::AbsoluteUri => match record.payload.display_text() {
            Some(uri) => RecordView::valid(RecordCategory::AbsoluteUri, Some(uri)),
            None => RecordView::invalid(),
        },

        NdefType::External => RecordView::valid(RecordCategory::External, None),
        NdefType::Unknown => RecordView::valid(RecordCategory::Unknown, None),
        NdefType::Unchanged => RecordView::valid(RecordCategory::Unchanged, None),

        // empty records are filtered before ingestion and reserved never
        // appears in a well formed message, both render as invalid data
        NdefType::Empty | NdefType::Reserved => RecordView::invalid(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(type_name_format: NdefType, type_bytes: &[u8], payload: &[u8]) -> NdefRecord {
        NdefRecord::from_parts(type_name_format, type_bytes.to_vec(), None, payload.to_vec())
    }

    #[test]
    fn well_known_type_decodes_type_bytes() {
        let view = classify(&record(NdefType::WellKnown, b"T", b"\x02enhello"));

        assert_eq!(view.category, RecordCategory::WellKnown);
        assert_eq!(view.text.as_deref(), Some("T"));
        assert!(view.is_valid);
        assert_eq!(view.row_label(), "NFC Well Known type: T");
    }

    #[test]
    fn media_type_decodes_type_bytes() {
        let view = classify(&record(NdefType::Media, b"text/plain", b"hello"));

        assert_eq!(view.category, RecordCategory::Media);
        assert_eq!(view.text.as_deref(), Some("text/plain"));
        assert!(view.is_valid);
        assert_eq!(view.row_label(), "Media type: text/plain");
    }

    #[test]
    fn absolute_uri_decodes_payload_bytes() {
        let view = classify(&record(NdefType::AbsoluteUri, b"", b"https://example.com"));

        assert_eq!(view.category, RecordCategory::AbsoluteUri);
        assert_eq!(view.text.as_deref(), Some("https://example.com"));
        assert!(view.is_valid);

        // the row shows the URI itself, no category prefix
        assert_eq!(view.row_label(), "https://example.com");
    }

    #[test]
    fn invalid_utf8_type_bytes_fold_to_invalid() {
        for type_name_format in [NdefType::WellKnown, NdefType::Media] {
            let view = classify(&record(type_name_format, &[0xFF, 0xFE], b""));

            assert_eq!(view.category, RecordCategory::Invalid);
            assert_eq!(view.text, None);
            assert!(!view.is_valid);
            assert_eq!(view.row_label(), "Invalid data");
        }
    }

    #[test]
    fn invalid_utf8_uri_payload_folds_to_invalid() {
        let view = classify(&record(NdefType::AbsoluteUri, b"", &[0xFF, 0xFE]));

        assert_eq!(view.category, RecordCategory::Invalid);
        assert_eq!(view.text, None);
        assert!(!view.is_valid);
    }

    #[test]
    fn external_type_never_decodes() {
        let view = classify(&record(NdefType::External, b"", b""));

        assert_eq!(view.category, RecordCategory::External);
        assert_eq!(view.text, None);
        assert!(view.is_valid);
        assert_eq!(view.row_label(), "NFC External type");
    }

    #[test]
    fn unknown_and_unchanged_are_bare_categories() {
        let unknown = classify(&record(NdefType::Unknown, b"", b""));
        assert_eq!(unknown.row_label(), "Unknown type");
        assert!(unknown.is_valid);

        let unchanged = classify(&record(NdefType::Unchanged, b"", b""));
        assert_eq!(unchanged.row_label(), "Unchanged type");
        assert!(unchanged.is_valid);
    }

    #[test]
    fn empty_and_reserved_render_as_invalid() {
        for type_name_format in [NdefType::Empty, NdefType::Reserved] {
            let view = classify(&record(type_name_format, b"", b""));

            assert_eq!(view.category, RecordCategory::Invalid);
            assert!(!view.is_valid);
        }
    }
}
