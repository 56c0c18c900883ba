use crate::{BitAccess, ReadError};
use alloc::string::String;
use alloc::vec::Vec;

macro_rules! gen_cursor_read {
    ($(#[$meta:meta])* $name:ident, $t:ty, $width:expr) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(&mut self) -> Result<$t, ReadError> {
            let value = self.data.$name(self.pos)?;
            self.pos += $width;
            Ok(value)
        }
    };
}

/// Reads consecutive fields from a byte slice
///
/// The cursor tracks a 1-indexed bit position, starting at the first bit.
/// Each read decodes at the current position with the same rules as
/// [`BitAccess`] and only advances when the read succeeds, so a failed read
/// leaves the cursor where it was.
///
/// ```rust
/// use bitspan::BitCursor;
/// let mut cursor = BitCursor::new(&[0b1011_0000, 0xab, 0xcd]);
/// assert_eq!(cursor.read_bool(), Ok(true));
/// assert_eq!(cursor.read_bits(3), Ok(vec![0b0110_0000]));
/// assert_eq!(cursor.position(), 5);
/// assert!(cursor.read_u32().is_err());
/// assert_eq!(cursor.position(), 5);
/// assert_eq!(cursor.read_hex_string(0).as_deref(), Ok("0abcd0"));
/// assert!(cursor.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    data: &'a [u8],

    /// 1-indexed position of the next bit to read, at most `bit_len + 1`
    pos: usize,
}

impl<'a> BitCursor<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 1 }
    }

    /// The underlying data
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// 1-indexed position of the next bit to be read
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bits left to read
    ///
    /// ```rust
    /// use bitspan::BitCursor;
    /// let mut cursor = BitCursor::new(&[0xff, 0x00]);
    /// assert_eq!(cursor.bits_remaining(), 16);
    /// cursor.skip(3).unwrap();
    /// assert_eq!(cursor.bits_remaining(), 13);
    /// ```
    #[inline]
    pub fn bits_remaining(&self) -> usize {
        self.data.bit_len() + 1 - self.pos
    }

    #[inline]
    pub fn has_bits_remaining(&self, bits: usize) -> bool {
        self.bits_remaining() >= bits
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Returns true if the next bit is the first bit of a byte
    #[inline]
    pub fn byte_aligned(&self) -> bool {
        (self.pos - 1) % 8 == 0
    }

    /// Advances the cursor by `bits` without decoding them
    ///
    /// # Errors
    ///
    /// [`ReadError::OutOfBounds`] if fewer than `bits` remain. The position
    /// is left unchanged.
    pub fn skip(&mut self, bits: usize) -> Result<(), ReadError> {
        if !self.has_bits_remaining(bits) {
            return Err(ReadError::OutOfBounds {
                start_bit_pos: self.pos,
                num_of_bits: bits,
                bit_len: self.data.bit_len(),
            });
        }

        self.pos += bits;
        Ok(())
    }

    /// Moves the cursor to the 1-indexed `pos`. Seeking to one past the last
    /// bit is allowed and leaves the cursor empty.
    ///
    /// ```rust
    /// use bitspan::{BitCursor, ErrorKind};
    /// let mut cursor = BitCursor::new(&[0x0f]);
    /// cursor.seek(5).unwrap();
    /// assert_eq!(cursor.read_bool(), Ok(true));
    /// assert_eq!(cursor.seek(0).unwrap_err().kind(), ErrorKind::InvalidRange);
    /// assert_eq!(cursor.seek(10).unwrap_err().kind(), ErrorKind::OutOfBounds);
    /// cursor.seek(9).unwrap();
    /// assert!(cursor.is_empty());
    /// ```
    pub fn seek(&mut self, pos: usize) -> Result<(), ReadError> {
        if pos == 0 {
            return Err(ReadError::InvalidRange { start_bit_pos: pos });
        }

        let bit_len = self.data.bit_len();
        if pos - 1 > bit_len {
            return Err(ReadError::OutOfBounds {
                start_bit_pos: pos,
                num_of_bits: 0,
                bit_len,
            });
        }

        self.pos = pos;
        Ok(())
    }

    gen_cursor_read!(
        /// Consume a bit and return if the bit was enabled
        read_bool, bool, 1
    );

    gen_cursor_read!(
        /// Consume 8 bits as an unsigned byte
        read_u8, u8, 8
    );

    gen_cursor_read!(
        /// Consume 16 bits as a big endian integer
        read_u16, u16, 16
    );

    gen_cursor_read!(
        /// Consume 32 bits as a big endian integer
        read_u32, u32, 32
    );

    gen_cursor_read!(
        /// Consume 64 bits as a big endian integer
        read_u64, u64, 64
    );

    /// Resolves the zero sentinel to the remaining bit count
    #[inline]
    fn width(&self, bits: usize) -> usize {
        if bits == 0 {
            self.bits_remaining()
        } else {
            bits
        }
    }

    /// Consume `bits` bits into a left justified buffer. Zero consumes the
    /// rest of the data.
    pub fn read_bits(&mut self, bits: usize) -> Result<Vec<u8>, ReadError> {
        let width = self.width(bits);
        let value = self.data.sub_bits(self.pos, width)?;
        self.pos += width;
        Ok(value)
    }

    /// Consume `bits` bits and hex encode them. Zero consumes the rest of the
    /// data.
    pub fn read_hex_string(&mut self, bits: usize) -> Result<String, ReadError> {
        let width = self.width(bits);
        let value = self.data.read_hex_string(self.pos, width)?;
        self.pos += width;
        Ok(value)
    }

    /// Consume `bits` bits as text. Zero consumes the rest of the data.
    pub fn read_string(&mut self, bits: usize) -> Result<String, ReadError> {
        let width = self.width(bits);
        let value = self.data.read_string(self.pos, width)?;
        self.pos += width;
        Ok(value)
    }
}
