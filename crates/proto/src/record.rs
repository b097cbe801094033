//! Resource records (RFC 1035 §3.2, §4.1.3)

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::errors::ProtoError;
use crate::name::read_name;
use crate::reader::Reader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    AAAA,
    Unknown(u16),
}

impl RecordType {
    pub fn to_u16(self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::Unknown(code) => code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            12 => RecordType::PTR,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            other => RecordType::Unknown(other),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
            RecordType::NS => write!(f, "NS"),
            RecordType::CNAME => write!(f, "CNAME"),
            RecordType::SOA => write!(f, "SOA"),
            RecordType::PTR => write!(f, "PTR"),
            RecordType::MX => write!(f, "MX"),
            RecordType::TXT => write!(f, "TXT"),
            RecordType::AAAA => write!(f, "AAAA"),
            RecordType::Unknown(code) => write!(f, "TYPE{}", code),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "SOA" => Ok(RecordType::SOA),
            "PTR" => Ok(RecordType::PTR),
            "MX" => Ok(RecordType::MX),
            "TXT" => Ok(RecordType::TXT),
            "AAAA" => Ok(RecordType::AAAA),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}

/// Type-dependent rdata payload.
///
/// A records carry a 4-byte IPv4 address. Everything else is decoded as a
/// (possibly compressed) name, which is strictly correct only for
/// name-valued types like NS, CNAME and PTR; for other types the decoded
/// string is best-effort and may be meaningless, but decoding never
/// panics or reads out of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Name(String),
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::Name(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub rtype: RecordType,
    pub class: u16,
    pub ttl: u32,
    pub data: RData,
}

impl ResourceRecord {
    /// Decodes one record at the reader's position: owner name, 10 fixed
    /// bytes (type, class, ttl, rdata length), then the rdata.
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, ProtoError> {
        let name = read_name(reader)?;
        let rtype = RecordType::from_u16(reader.read_u16()?);
        let class = reader.read_u16()?;
        let ttl = reader.read_u32()?;
        let rdata_len = reader.read_u16()? as usize;

        // The declared rdata must fit whatever the type turns out to be.
        if reader.remaining() < rdata_len {
            return Err(ProtoError::TruncatedMessage);
        }

        let data = match rtype {
            RecordType::A => {
                if rdata_len != 4 {
                    return Err(ProtoError::UnexpectedRdataLength { len: rdata_len });
                }
                let bytes = reader.read_bytes(4)?;
                RData::A(Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]))
            }
            // The cursor advances by what the name decoder consumed, not
            // by the declared rdata length.
            _ => RData::Name(read_name(reader)?),
        };

        Ok(ResourceRecord {
            name,
            rtype,
            class,
            ttl,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::write_name;

    fn record_at(buf: &[u8], at: usize) -> (Result<ResourceRecord, ProtoError>, usize) {
        let mut reader = Reader::new(buf).fork_at(at).unwrap();
        let record = ResourceRecord::read(&mut reader);
        (record, reader.pos())
    }

    #[test]
    fn test_record_type_codes() {
        assert_eq!(RecordType::from_u16(1), RecordType::A);
        assert_eq!(RecordType::from_u16(2), RecordType::NS);
        assert_eq!(RecordType::from_u16(999), RecordType::Unknown(999));
        assert_eq!(RecordType::Unknown(999).to_u16(), 999);
        for code in [1u16, 2, 5, 6, 12, 15, 16, 28] {
            assert_eq!(RecordType::from_u16(code).to_u16(), code);
        }
    }

    #[test]
    fn test_record_type_from_str() {
        assert_eq!("a".parse::<RecordType>().unwrap(), RecordType::A);
        assert_eq!("NS".parse::<RecordType>().unwrap(), RecordType::NS);
        assert!("BOGUS".parse::<RecordType>().is_err());
        assert_eq!(RecordType::Unknown(47).to_string(), "TYPE47");
    }

    #[test]
    fn test_parse_a_record() {
        let mut buf = Vec::new();
        write_name(&mut buf, "example.com").unwrap();
        buf.extend_from_slice(&[0x00, 0x01]); // type A
        buf.extend_from_slice(&[0x00, 0x01]); // class IN
        buf.extend_from_slice(&[0x00, 0x00, 0x01, 0x2c]); // ttl 300
        buf.extend_from_slice(&[0x00, 0x04]); // rdata length
        buf.extend_from_slice(&[0x5d, 0xb8, 0xd8, 0x22]); // 93.184.216.34

        let (record, consumed) = record_at(&buf, 0);
        let record = record.unwrap();
        assert_eq!(record.name, "example.com");
        assert_eq!(record.rtype, RecordType::A);
        assert_eq!(record.rtype.to_u16(), 1);
        assert_eq!(record.class, 1);
        assert_eq!(record.ttl, 300);
        assert_eq!(record.data, RData::A(Ipv4Addr::new(93, 184, 216, 34)));
        assert_eq!(consumed, buf.len());
    }

    #[test]
    fn test_a_record_bad_rdata_length() {
        let mut buf = Vec::new();
        write_name(&mut buf, "example.com").unwrap();
        buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x3c]);
        buf.extend_from_slice(&[0x00, 0x05]); // declares 5 bytes
        buf.extend_from_slice(&[1, 2, 3, 4, 5]);

        let (record, _) = record_at(&buf, 0);
        assert_eq!(
            record,
            Err(ProtoError::UnexpectedRdataLength { len: 5 })
        );
    }

    #[test]
    fn test_a_record_rdata_past_end() {
        let mut buf = Vec::new();
        write_name(&mut buf, "example.com").unwrap();
        buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x3c]);
        buf.extend_from_slice(&[0x00, 0x04]);
        buf.extend_from_slice(&[1, 2]); // only 2 of 4 bytes present

        let (record, _) = record_at(&buf, 0);
        assert_eq!(record, Err(ProtoError::TruncatedMessage));
    }

    #[test]
    fn test_ns_record_rdata_past_end() {
        let mut buf = Vec::new();
        write_name(&mut buf, "com").unwrap();
        buf.extend_from_slice(&[0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x00, 0x3c]);
        buf.extend_from_slice(&[0x00, 0x20]); // declares 32 bytes, none present

        let (record, _) = record_at(&buf, 0);
        assert_eq!(record, Err(ProtoError::TruncatedMessage));
    }

    #[test]
    fn test_ns_record_compressed_rdata() {
        // Owner "com" at offset 0, NS rdata "ns1" + pointer back to "com".
        let mut buf = Vec::new();
        write_name(&mut buf, "com").unwrap(); // 5 bytes
        buf.extend_from_slice(&[0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x0e, 0x10]);
        buf.extend_from_slice(&[0x00, 0x06]); // rdata length
        buf.extend_from_slice(&[3, b'n', b's', b'1', 0xc0, 0x00]);

        let (record, consumed) = record_at(&buf, 0);
        let record = record.unwrap();
        assert_eq!(record.name, "com");
        assert_eq!(record.rtype, RecordType::NS);
        assert_eq!(record.ttl, 3600);
        assert_eq!(record.data, RData::Name("ns1.com".to_owned()));
        assert_eq!(consumed, buf.len());
    }
}
