/// Ways a partially read message cannot be resumed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeError {
    /// The tag now being scanned is not the one the partial read came from
    #[error("scanned tag does not match the partially read message")]
    TagMismatch,

    #[error("the message was already fully parsed")]
    AlreadyParsed,

    /// Resume identity is taken over the first full chunk, shorter input
    /// cannot be compared
    #[error("chunk size mismatch, expected at least {expected} bytes, got {actual}")]
    ChunkSizeMismatch { expected: u16, actual: u16 },

    #[error("unable to compute the first chunk hash")]
    MissingFirstChunkHash,
}
