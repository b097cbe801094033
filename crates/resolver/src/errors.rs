use dnsq_proto::{rcode_str, ProtoError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Proto(#[from] ProtoError),

    #[error("transport error: {0}")]
    Transport(#[source] std::io::Error),

    #[error("timed out waiting for a reply")]
    Timeout,

    #[error("no usable answer after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    #[error("server returned {} (rcode {code})", rcode_str(*.code))]
    ResponseCode { code: u8 },

    #[error("resolution cancelled")]
    Cancelled,
}
