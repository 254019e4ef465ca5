/// Type Name Format, the 3 bit code in every record header that says how
/// the record's type field is to be interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NdefType {
    Empty,
    WellKnown,
    Media,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

impl NdefType {
    /// Map a raw wire code onto the closed set. The field is 3 bits wide,
    /// values above 7 do not exist on the wire.
    pub fn from_bits(bits: u8) -> Option<Self> {
        let type_name_format = match bits {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Media,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            7 => Self::Reserved,
            _ => return None,
        };

        Some(type_name_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bits_covers_the_wire_range() {
        assert_eq!(NdefType::from_bits(0), Some(NdefType::Empty));
        assert_eq!(NdefType::from_bits(1), Some(NdefType::WellKnown));
        assert_eq!(NdefType::from_bits(7), Some(NdefType::Reserved));
        assert_eq!(NdefType::from_bits(8), None);
    }
}
