//! Whole-message assembly and parsing (RFC 1035 §4.1)

use crate::errors::ProtoError;
use crate::header::{Header, HEADER_LEN};
use crate::question::Question;
use crate::reader::Reader;
use crate::record::{RecordType, ResourceRecord};
use crate::CLASS_IN;

/// Upper bound on the record count a single section may declare. A 512
/// byte datagram cannot legitimately carry more; a larger count means the
/// header is lying about the body.
pub const MAX_SECTION_RECORDS: usize = 64;

/// A fully decoded DNS message: header plus all four sections in wire
/// order.
#[derive(Debug, Clone)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    /// Serializes a single-question query: question count 1, all other
    /// counts 0, opcode 0, recursion-desired clear (queries go out as
    /// non-recursive probes).
    pub fn build_query(id: u16, name: &str, qtype: RecordType) -> Result<Vec<u8>, ProtoError> {
        let header = Header {
            id,
            flags: 0,
            question_count: 1,
            ..Default::default()
        };
        let question = Question {
            name: name.to_owned(),
            qtype,
            qclass: CLASS_IN,
        };

        let mut buf = Vec::with_capacity(HEADER_LEN + name.len() + 6);
        header.write(&mut buf);
        question.write(&mut buf)?;
        Ok(buf)
    }

    /// Parses a reply buffer: header, echoed questions, then answer,
    /// authority and additional records in wire order. Either the full
    /// record set decodes or an error is returned; no partial results.
    pub fn parse(bytes: &[u8]) -> Result<Self, ProtoError> {
        let mut reader = Reader::new(bytes);
        let header = Header::read(&mut reader)?;

        for count in [
            header.question_count,
            header.answer_count,
            header.authority_count,
            header.additional_count,
        ] {
            if count as usize > MAX_SECTION_RECORDS {
                return Err(ProtoError::TruncatedMessage);
            }
        }

        let mut questions = Vec::with_capacity(header.question_count as usize);
        for _ in 0..header.question_count {
            questions.push(Question::read(&mut reader)?);
        }

        let answers = Self::read_section(&mut reader, header.answer_count)?;
        let authorities = Self::read_section(&mut reader, header.authority_count)?;
        let additionals = Self::read_section(&mut reader, header.additional_count)?;

        Ok(Message {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    fn read_section(
        reader: &mut Reader<'_>,
        count: u16,
    ) -> Result<Vec<ResourceRecord>, ProtoError> {
        let mut records = Vec::with_capacity(count as usize);
        for _ in 0..count {
            records.push(ResourceRecord::read(reader)?);
        }
        Ok(records)
    }
}
