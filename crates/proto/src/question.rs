//! Question section entries (RFC 1035 §4.1.2)

use crate::errors::ProtoError;
use crate::name::{read_name, write_name};
use crate::reader::Reader;
use crate::record::RecordType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: RecordType,
    pub qclass: u16,
}

impl Question {
    pub fn write(&self, buf: &mut Vec<u8>) -> Result<(), ProtoError> {
        write_name(buf, &self.name)?;
        buf.extend_from_slice(&self.qtype.to_u16().to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
        Ok(())
    }

    /// Decodes an echoed question; arbitrary type and class codes are
    /// accepted on the way back in.
    pub fn read(reader: &mut Reader<'_>) -> Result<Self, ProtoError> {
        Ok(Question {
            name: read_name(reader)?,
            qtype: RecordType::from_u16(reader.read_u16()?),
            qclass: reader.read_u16()?,
        })
    }
}
