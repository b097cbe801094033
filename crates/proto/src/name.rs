//! Domain name encoding and decoding (RFC 1035 §3.1, §4.1.4)
//!
//! Wire form is a sequence of length-prefixed labels terminated by a zero
//! octet. Inside a message a name may instead end in a 2-byte compression
//! pointer (top two bits set, low 14 bits an absolute offset into the
//! message) redirecting decoding to an earlier occurrence.

use std::collections::HashSet;

use crate::errors::ProtoError;
use crate::reader::Reader;

/// Maximum length of a single label, in octets.
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum length of an encoded name, including length octets and the
/// terminating zero.
pub const MAX_NAME_LEN: usize = 255;

const POINTER_MASK: u8 = 0b1100_0000;

/// The textual form of the root name. Names with zero labels decode to
/// this; anything else decodes without a trailing dot.
pub const ROOT_NAME: &str = ".";

/// Appends the wire form of a dotted domain name to `buf`.
///
/// A single trailing dot (absolute-name form) is accepted and stripped;
/// the terminating root label is always written by this function. `""`
/// and `"."` encode as the bare root.
pub fn write_name(buf: &mut Vec<u8>, name: &str) -> Result<(), ProtoError> {
    let name = name.strip_suffix('.').unwrap_or(name);

    if name.is_empty() {
        buf.push(0);
        return Ok(());
    }

    // One length octet per label plus the terminator.
    if name.len() + 2 > MAX_NAME_LEN {
        return Err(ProtoError::NameTooLong(name.to_owned()));
    }

    for label in name.split('.') {
        if label.is_empty() {
            return Err(ProtoError::MalformedName(name.to_owned()));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(ProtoError::LabelTooLong(label.to_owned()));
        }
    }

    for label in name.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);

    Ok(())
}

/// Decodes a (possibly compressed) name starting at the reader's position.
///
/// The reader advances past the bytes the name occupies at its original
/// position only: up to and including the terminating zero when no pointer
/// occurs, or past the 2 bytes of the first pointer otherwise. Bytes read
/// at pointer targets never move the caller's cursor.
pub fn read_name(reader: &mut Reader<'_>) -> Result<String, ProtoError> {
    let mut labels: Vec<String> = Vec::new();
    let mut visited: HashSet<usize> = HashSet::new();
    let mut cursor = *reader;
    let mut jumped = false;

    loop {
        let len = cursor.read_u8()?;

        if len & POINTER_MASK == POINTER_MASK {
            let low = cursor.read_u8()?;
            let target = ((len & !POINTER_MASK) as usize) << 8 | low as usize;
            if !jumped {
                reader.seek(cursor.pos());
                jumped = true;
            }
            if !visited.insert(target) {
                return Err(ProtoError::CompressionLoop { offset: target });
            }
            cursor = cursor.fork_at(target)?;
        } else if len & POINTER_MASK != 0 {
            // 0b01 / 0b10 label types are reserved and never valid here.
            return Err(ProtoError::MalformedName(format!(
                "reserved label type {:#04x}",
                len
            )));
        } else if len == 0 {
            if !jumped {
                reader.seek(cursor.pos());
            }
            break;
        } else {
            let bytes = cursor.read_bytes(len as usize)?;
            labels.push(String::from_utf8_lossy(bytes).into_owned());
            if !jumped {
                reader.seek(cursor.pos());
            }
        }
    }

    if labels.is_empty() {
        Ok(ROOT_NAME.to_owned())
    } else {
        Ok(labels.join("."))
    }
}
