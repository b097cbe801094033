use crate::errors::ProtoError;

/// Bounds-checked cursor over a full DNS message buffer.
///
/// Keeps the whole message in view so that compression pointers can jump
/// to absolute offsets. Cheap to copy; name decoding forks a detached
/// cursor to follow pointers without moving the caller's position.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// A detached cursor over the same buffer, positioned at `offset`.
    pub fn fork_at(&self, offset: usize) -> Result<Self, ProtoError> {
        if offset >= self.buf.len() {
            return Err(ProtoError::TruncatedMessage);
        }
        Ok(Self {
            buf: self.buf,
            pos: offset,
        })
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn seek(&mut self, pos: usize) {
        debug_assert!(pos <= self.buf.len());
        self.pos = pos;
    }

    pub fn read_u8(&mut self) -> Result<u8, ProtoError> {
        let byte = *self.buf.get(self.pos).ok_or(ProtoError::TruncatedMessage)?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, ProtoError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, ProtoError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], ProtoError> {
        let end = self
            .pos
            .checked_add(len)
            .ok_or(ProtoError::TruncatedMessage)?;
        let bytes = self
            .buf
            .get(self.pos..end)
            .ok_or(ProtoError::TruncatedMessage)?;
        self.pos = end;
        Ok(bytes)
    }
}
