//! Binary reader for zero-copy parsing of byte slices.
//!
//! [`BinaryReader`] is a forward cursor over a borrowed buffer. Every read is
//! little-endian and bounds-checked, so a truncated stream surfaces as
//! [`Error::UnexpectedEof`] instead of a panic.

use zerocopy::FromBytes;

use crate::{Error, Result};

/// A binary reader that provides zero-copy reading from a byte slice.
///
/// # Example
///
/// ```
/// use mcctex_common::BinaryReader;
///
/// let data = [0x90, 0xA0, 0xBF, 0xCD, 0x10, 0x00, 0x00, 0x00];
/// let mut reader = BinaryReader::new(&data);
///
/// assert_eq!(reader.read_u32().unwrap(), 0xCDBFA090);
/// assert_eq!(reader.read_i32().unwrap(), 16);
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Get the current position in the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the total length of the underlying buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Peek at bytes without advancing the position.
    #[inline]
    pub fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                position: self.position,
                needed: count,
                available: self.remaining(),
            });
        }
        Ok(&self.data[self.position..self.position + count])
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(count)?;
        self.position += count;
        Ok(bytes)
    }

    /// Skip `count` bytes, failing if fewer remain.
    #[inline]
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.read_bytes(count).map(|_| ())
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a little-endian i32.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a struct using zerocopy.
    ///
    /// The struct must implement `FromBytes` from the zerocopy crate. Use
    /// the `zerocopy::byteorder` field types to keep the layout endian-safe.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let position = self.position;
        let bytes = self.read_bytes(size)?;
        T::read_from_bytes(bytes).map_err(|_| Error::UnexpectedEof {
            position,
            needed: size,
            available: bytes.len(),
        })
    }
}

/// Decode a fixed-size ASCII field, stopping at the first null byte.
///
/// Bytes after the first null are ignored. Non-ASCII bytes are replaced
/// with `?`.
pub fn fixed_ascii(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    field[..end]
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_primitives() {
        let data = [
            0x01u8, 0x02, 0x03, 0x04, // u32: 0x04030201
            0xFF, 0xFF, 0xFF, 0xFF, // i32: -1
            0x34, 0x12, // u16: 0x1234
        ];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_u32().unwrap(), 0x04030201);
        assert_eq!(reader.read_i32().unwrap(), -1);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_eof_error_reports_position() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let mut reader = BinaryReader::new(&data);
        reader.read_u32().unwrap();

        match reader.read_u32() {
            Err(Error::UnexpectedEof {
                position,
                needed,
                available,
            }) => {
                assert_eq!(position, 4);
                assert_eq!(needed, 4);
                assert_eq!(available, 2);
            }
            other => panic!("expected EOF, got {:?}", other),
        }
        // A failed read does not advance
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn test_skip() {
        let data = [0u8; 8];
        let mut reader = BinaryReader::new(&data);
        reader.skip(6).unwrap();
        assert_eq!(reader.remaining(), 2);
        assert!(reader.skip(3).is_err());
    }

    #[test]
    fn test_fixed_ascii_stops_at_null() {
        let mut field = [0u8; 32];
        field[..3].copy_from_slice(b"foo");
        assert_eq!(fixed_ascii(&field), "foo");

        field[4] = b'x';
        assert_eq!(fixed_ascii(&field), "foo");
    }

    #[test]
    fn test_fixed_ascii_full_field() {
        let field = [b'a'; 32];
        assert_eq!(fixed_ascii(&field).len(), 32);
        assert_eq!(fixed_ascii(&[b'a', 0xE9, b'b']), "a?b");
    }
}
