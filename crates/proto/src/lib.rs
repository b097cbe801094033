//! DNS wire format codec (RFC 1035 §4)
//!
//! Encoding and decoding of DNS messages: header, question section and
//! resource records, including compressed domain names. Pure transforms
//! over byte buffers, no I/O.

pub mod errors;
pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod reader;
pub mod record;

pub use errors::ProtoError;
pub use header::{rcode_str, Header, HEADER_LEN};
pub use message::{Message, MAX_SECTION_RECORDS};
pub use name::{read_name, write_name, MAX_LABEL_LEN, MAX_NAME_LEN, ROOT_NAME};
pub use question::Question;
pub use reader::Reader;
pub use record::{RData, RecordType, ResourceRecord};

/// The Internet class (IN).
pub const CLASS_IN: u16 = 1;
