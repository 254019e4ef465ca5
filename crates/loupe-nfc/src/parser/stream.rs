use winnow::{Bytes, Partial};

/// Tag reads arrive in chunks, so every parser runs over a partial
/// stream and reports how much more input it needs.
pub type Stream<'i> = Partial<&'i Bytes>;

pub fn stream(bytes: &[u8]) -> Stream<'_> {
    Partial::new(Bytes::new(bytes))
}

/// Either accumulated left-over bytes or a stream already in flight; the
/// reader accepts both.
pub trait IntoStream {
    fn remaining(&self) -> usize;
    fn to_stream(&self) -> Stream<'_>;
    fn into_bytes(self) -> Vec<u8>;

    fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

impl IntoStream for Stream<'_> {
    fn remaining(&self) -> usize {
        self.as_ref().len()
    }

    fn to_stream(&self) -> Stream<'_> {
        *self
    }

    fn into_bytes(self) -> Vec<u8> {
        self.as_ref().to_vec()
    }
}

impl IntoStream for Vec<u8> {
    fn remaining(&self) -> usize {
        self.len()
    }

    fn to_stream(&self) -> Stream<'_> {
        stream(self)
    }

    fn into_bytes(self) -> Vec<u8> {
        self
    }
}
