//! Buffer utilities for reading and writing protocol payloads.
//!
//! Multi-byte integers on this protocol are little-endian. Strings and
//! blobs are prefixed with a length-encoded integer.

use crate::error::{Error, Result};
use crate::protocol::constants::*;
use bytes::{BufMut, Bytes, BytesMut};

/// A buffer for reading protocol data.
///
/// Errors carry ordinal `0`; callers that know which column they were
/// decoding rewrite it.
pub struct ReadBuffer {
    data: Bytes,
    pos: usize,
}

impl ReadBuffer {
    /// Create a new read buffer from bytes.
    pub fn new(data: Bytes) -> Self {
        Self { data, pos: 0 }
    }

    /// Get the remaining bytes in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Check if the buffer has at least `n` bytes remaining.
    pub fn has_remaining(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    #[track_caller]
    fn ensure(&self, n: usize) -> Result<()> {
        if !self.has_remaining(n) {
            return Err(Error::BufferTooSmall {
                needed: n,
                available: self.remaining(),
                location: std::panic::Location::caller(),
            });
        }
        Ok(())
    }

    /// Skip `n` bytes.
    #[track_caller]
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    /// Read a single byte.
    #[track_caller]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let val = self.data[self.pos];
        self.pos += 1;
        Ok(val)
    }

    /// Read a little-endian u16.
    #[track_caller]
    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.ensure(2)?;
        let val = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(val)
    }

    /// Read a little-endian 3-byte integer.
    #[track_caller]
    pub fn read_u24_le(&mut self) -> Result<u32> {
        self.ensure(3)?;
        let val = u32::from_le_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            0,
        ]);
        self.pos += 3;
        Ok(val)
    }

    /// Read a little-endian u32.
    #[track_caller]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.ensure(4)?;
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.data[self.pos..self.pos + 4]);
        self.pos += 4;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Read a little-endian u64.
    #[track_caller]
    pub fn read_u64_le(&mut self) -> Result<u64> {
        self.ensure(8)?;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.data[self.pos..self.pos + 8]);
        self.pos += 8;
        Ok(u64::from_le_bytes(bytes))
    }

    /// Read raw bytes.
    #[track_caller]
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        self.ensure(n)?;
        let bytes = self.data.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(bytes)
    }

    /// Read a length-encoded integer.
    ///
    /// Returns `None` for the NULL marker (`0xFB`), which is only legal
    /// inside text-protocol rows.
    pub fn read_lenenc_int(&mut self) -> Result<Option<u64>> {
        let first = self.read_u8()?;
        match first {
            LENENC_NULL => Ok(None),
            LENENC_U16 => Ok(Some(self.read_u16_le()? as u64)),
            LENENC_U24 => Ok(Some(self.read_u24_le()? as u64)),
            LENENC_U64 => Ok(Some(self.read_u64_le()?)),
            LENENC_ERR => Err(Error::protocol(
                0,
                format!("Invalid length-encoded integer marker: {:#04x}", first),
            )),
            n => Ok(Some(n as u64)),
        }
    }

    /// Read length-encoded bytes. `None` for the NULL marker.
    pub fn read_lenenc_bytes(&mut self) -> Result<Option<Bytes>> {
        match self.read_lenenc_int()? {
            Some(len) => {
                let len = usize::try_from(len).map_err(|_| {
                    Error::protocol(0, format!("Length-encoded value too large: {}", len))
                })?;
                Ok(Some(self.read_bytes(len)?))
            }
            None => Ok(None),
        }
    }

    /// Read a length-encoded string that must not be NULL.
    /// Uses lossy UTF-8 conversion so odd server charsets still decode.
    pub fn read_lenenc_str(&mut self) -> Result<String> {
        match self.read_lenenc_bytes()? {
            Some(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            None => Err(Error::protocol(0, "Unexpected NULL marker in string field")),
        }
    }
}

/// A buffer for writing protocol data.
pub struct WriteBuffer {
    data: BytesMut,
}

impl WriteBuffer {
    /// Create a new write buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a new write buffer with specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
        }
    }

    /// Get the current length of the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the buffer contents as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Freeze the buffer into immutable bytes.
    pub fn freeze(self) -> Bytes {
        self.data.freeze()
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, val: u8) {
        self.data.put_u8(val);
    }

    /// Write a little-endian u16.
    pub fn write_u16_le(&mut self, val: u16) {
        self.data.put_u16_le(val);
    }

    /// Write a little-endian u32.
    pub fn write_u32_le(&mut self, val: u32) {
        self.data.put_u32_le(val);
    }

    /// Write raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Write a length-encoded integer.
    pub fn write_lenenc_int(&mut self, val: u64) {
        if val < LENENC_NULL as u64 {
            self.write_u8(val as u8);
        } else if val <= 0xFFFF {
            self.write_u8(LENENC_U16);
            self.data.put_u16_le(val as u16);
        } else if val <= 0xFF_FFFF {
            self.write_u8(LENENC_U24);
            self.data.put_slice(&(val as u32).to_le_bytes()[..3]);
        } else {
            self.write_u8(LENENC_U64);
            self.data.put_u64_le(val);
        }
    }

    /// Write bytes with a length-encoded prefix.
    pub fn write_lenenc_bytes(&mut self, bytes: &[u8]) {
        self.write_lenenc_int(bytes.len() as u64);
        self.write_bytes(bytes);
    }

    /// Write a string with a length-encoded prefix.
    pub fn write_lenenc_str(&mut self, s: &str) {
        self.write_lenenc_bytes(s.as_bytes());
    }

    /// Write the NULL marker used by text-protocol rows.
    pub fn write_null(&mut self) {
        self.write_u8(LENENC_NULL);
    }

    /// Write padding zeros.
    pub fn write_zeros(&mut self, count: usize) {
        self.data.put_bytes(0, count);
    }
}

impl Default for WriteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenenc_int_widths() {
        let mut w = WriteBuffer::new();
        w.write_lenenc_int(0xFA);
        w.write_lenenc_int(0xFB);
        w.write_lenenc_int(0x1_0000);
        w.write_lenenc_int(0x100_0000);
        assert_eq!(
            w.as_bytes(),
            &[
                0xFA, // one byte
                0xFC, 0xFB, 0x00, // u16
                0xFD, 0x00, 0x00, 0x01, // u24
                0xFE, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, // u64
            ]
        );

        let mut r = ReadBuffer::new(w.freeze());
        assert_eq!(r.read_lenenc_int().unwrap(), Some(0xFA));
        assert_eq!(r.read_lenenc_int().unwrap(), Some(0xFB));
        assert_eq!(r.read_lenenc_int().unwrap(), Some(0x1_0000));
        assert_eq!(r.read_lenenc_int().unwrap(), Some(0x100_0000));
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_lenenc_null_and_error_markers() {
        let mut r = ReadBuffer::new(Bytes::from_static(&[0xFB, 0xFF]));
        assert_eq!(r.read_lenenc_bytes().unwrap(), None);
        assert!(matches!(
            r.read_lenenc_int(),
            Err(Error::ProtocolDecode { .. })
        ));
    }

    #[test]
    fn test_read_lenenc_str_truncated() {
        // Claims 5 bytes, carries 2
        let mut r = ReadBuffer::new(Bytes::from_static(&[0x05, b'i', b'd']));
        match r.read_lenenc_str() {
            Err(Error::BufferTooSmall {
                needed, available, ..
            }) => {
                assert_eq!(needed, 5);
                assert_eq!(available, 2);
            }
            other => panic!("Expected BufferTooSmall, got {:?}", other),
        }
    }

    #[test]
    fn test_read_lenenc_str_rejects_null() {
        let mut r = ReadBuffer::new(Bytes::from_static(&[0xFB]));
        assert!(r.read_lenenc_str().is_err());
    }

    #[test]
    fn test_fixed_width_reads() {
        let mut r = ReadBuffer::new(Bytes::from_static(&[
            0x21, 0x00, 0x50, 0x00, 0x00, 0x00, 0x03,
        ]));
        assert_eq!(r.read_u16_le().unwrap(), 33);
        assert_eq!(r.read_u32_le().unwrap(), 80);
        assert_eq!(r.remaining(), 1);
        assert_eq!(r.read_u8().unwrap(), 3);
        assert!(r.read_u8().is_err());
    }
}
