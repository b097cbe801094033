use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtoError {
    #[error("malformed domain name: {0}")]
    MalformedName(String),

    #[error("label exceeds 63 octets: {0}")]
    LabelTooLong(String),

    #[error("encoded name exceeds 255 octets: {0}")]
    NameTooLong(String),

    #[error("message truncated or section counts inconsistent")]
    TruncatedMessage,

    #[error("compression pointer loop at offset {offset}")]
    CompressionLoop { offset: usize },

    #[error("unexpected rdata length {len} for A record, expected 4")]
    UnexpectedRdataLength { len: usize },
}
