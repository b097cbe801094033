//! DNS message header (RFC 1035 §4.1.1)

use crate::errors::ProtoError;
use crate::reader::Reader;

/// Wire size of the header, always 12 bytes.
pub const HEADER_LEN: usize = 12;

const FLAG_QR: u16 = 0x8000;
const FLAG_AA: u16 = 0x0400;
const FLAG_TC: u16 = 0x0200;
const FLAG_RD: u16 = 0x0100;
const FLAG_RA: u16 = 0x0080;

/// The fixed 12-byte message header. All multi-byte fields are big-endian
/// on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags >> 11) & 0x0f) as u8
    }

    pub fn authoritative(&self) -> bool {
        self.flags & FLAG_AA != 0
    }

    pub fn truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RD != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & FLAG_RA != 0
    }

    /// The 4-bit response code. Reported as parsed; whether a non-zero
    /// code is an error is the caller's decision.
    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000f) as u8
    }

    pub fn write(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&self.question_count.to_be_bytes());
        buf.extend_from_slice(&self.answer_count.to_be_bytes());
        buf.extend_from_slice(&self.authority_count.to_be_bytes());
        buf.extend_from_slice(&self.additional_count.to_be_bytes());
    }

    pub fn read(reader: &mut Reader<'_>) -> Result<Self, ProtoError> {
        Ok(Header {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            question_count: reader.read_u16()?,
            answer_count: reader.read_u16()?,
            authority_count: reader.read_u16()?,
            additional_count: reader.read_u16()?,
        })
    }
}

/// Human-readable name for a response code.
pub fn rcode_str(rcode: u8) -> &'static str {
    match rcode {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        _ => "UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_round_trip() {
        let header = Header {
            id: 0x1234,
            flags: 0x8180,
            question_count: 1,
            answer_count: 2,
            authority_count: 3,
            additional_count: 4,
        };
        let mut buf = Vec::new();
        header.write(&mut buf);
        assert_eq!(buf.len(), HEADER_LEN);
        assert_eq!(&buf[0..2], &[0x12, 0x34]);

        let mut reader = Reader::new(&buf);
        assert_eq!(Header::read(&mut reader).unwrap(), header);
    }

    #[test]
    fn test_flag_accessors() {
        let header = Header {
            flags: 0x8183,
            ..Default::default()
        };
        assert!(header.is_response());
        assert_eq!(header.opcode(), 0);
        assert!(header.recursion_desired());
        assert!(header.recursion_available());
        assert!(!header.authoritative());
        assert!(!header.truncated());
        assert_eq!(header.rcode(), 3);
        assert_eq!(rcode_str(header.rcode()), "NXDOMAIN");
    }

    #[test]
    fn test_read_short_buffer() {
        let mut reader = Reader::new(&[0u8; 11]);
        assert_eq!(Header::read(&mut reader), Err(ProtoError::TruncatedMessage));
    }
}
