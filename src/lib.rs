/*!

***Exact bit ranges out of a byte slice***

Bitspan pulls arbitrary, non byte aligned bit ranges out of an immutable byte
slice and decodes them as the fields of packed binary formats: protocol
headers, flag words, and other sub-byte structures.

## Features

 - ✔ 1-indexed, MSB-first bit positions (bit 1 is the high bit of the first byte)
 - ✔ extraction of any bit range into a minimal, left justified buffer
 - ✔ big endian `u8` ... `u64`, `bool`, hex and text accessors
 - ✔ whole-buffer shifts with carry propagation
 - ✔ a sequential cursor for decoding fields back to back
 - ✔ zero dependencies
 - ✔ `no_std` compatible (requires `alloc`)

## Example

The positional API takes the start position of every field. A start of `1`
is the first bit of the data.

```rust
use bitspan::BitAccess;
let data = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
assert_eq!(data.read_u32(1), Ok(0x0102_0304));
assert_eq!(data.read_u16(17), Ok(0x0506));
assert_eq!(data.read_bool(1), Ok(false));
assert_eq!(data.read_bool(8), Ok(true));
assert_eq!(data.read_u8(5), Ok(0x10));
```

Any range can be extracted as bytes. The result is left justified and the
bits past the requested count are zero:

```rust
use bitspan::BitAccess;
let data = [0xffu8, 0x00];
assert_eq!(data.sub_bits(1, 4), Ok(vec![0xf0]));
assert_eq!(data.sub_bits(5, 8), Ok(vec![0xf0]));

// Zero bits means "everything from the start position onward"
assert_eq!(data.sub_bits(9, 0), Ok(vec![0x00]));
```

Decoders that walk a header field by field can use [`BitCursor`] instead of
tracking offsets by hand:

```rust
use bitspan::BitCursor;

// version: 4 bits, flags: 4 bits, length: 16 bits
let mut cursor = BitCursor::new(&[0x4a, 0x01, 0x00]);
assert_eq!(cursor.read_bits(4), Ok(vec![0x40]));
assert_eq!(cursor.read_bool(), Ok(true));
assert_eq!(cursor.read_bits(3), Ok(vec![0x40]));
assert_eq!(cursor.read_u16(), Ok(0x0100));
assert!(cursor.is_empty());
```

## Errors

Every read validates its range first and either returns the complete value
or a [`ReadError`]; nothing is partially decoded.

```rust
use bitspan::{BitAccess, ErrorKind};
let data = [0xffu8, 0x00];
assert_eq!(data.sub_bits(0, 1).unwrap_err().kind(), ErrorKind::InvalidRange);
assert_eq!(data.sub_bits(1, 17).unwrap_err().kind(), ErrorKind::OutOfBounds);
assert_eq!(data.read_u32(1).unwrap_err().to_string(), "input is less than 32 bits");
```

### `no_std` crates

This crate has a feature, `std`, that is enabled by default. To use this crate
in a `no_std` context, add the following to your `Cargo.toml`:

```toml
[dependencies]
bitspan = { version = "x", default-features = false }
```

*/

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

mod cursor;
mod error;
mod extract;
mod shift;

pub use crate::cursor::BitCursor;
pub use crate::error::{ErrorKind, ReadError};
pub use crate::extract::sub_bits;
pub use crate::shift::{shift_left, shift_right};

/// Returns the number of bits in the data
///
/// Saturates at `usize::MAX` for slices too large to count in bits.
///
/// ```rust
/// assert_eq!(bitspan::bit_len(&[0xff, 0x00]), 16);
/// assert_eq!(bitspan::bit_len(&[]), 0);
/// ```
#[inline]
pub fn bit_len(data: &[u8]) -> usize {
    data.len().saturating_mul(8)
}

/// Number of bits from the 1-indexed `start_bit_pos` to the end of the data,
/// inclusive of the start bit
#[inline]
fn bits_from(data: &[u8], start_bit_pos: usize) -> usize {
    bit_len(data)
        .saturating_add(1)
        .saturating_sub(start_bit_pos)
}

/// Extracts exactly `width` bits, reporting a shortfall in terms of the
/// caller's width rather than the literal range
fn read_exact(data: &[u8], start_bit_pos: usize, width: usize) -> Result<Vec<u8>, ReadError> {
    if start_bit_pos == 0 {
        return Err(ReadError::InvalidRange { start_bit_pos });
    }

    let available = bits_from(data, start_bit_pos);
    if available < width {
        return Err(ReadError::InsufficientBits {
            required: width,
            available,
        });
    }

    sub_bits(data, start_bit_pos, width)
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
        out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
    }
    out
}

/// Positional, read-only access to the bits of a byte buffer
///
/// All positions are 1-indexed and MSB-first. Multi-byte integers are decoded
/// as big endian. Implemented for `[u8]`, so arrays, slices, and vectors can
/// call these methods directly.
pub trait BitAccess {
    /// Returns the number of bits in the buffer
    ///
    /// ```rust
    /// use bitspan::BitAccess;
    /// assert_eq!([0u8; 3].bit_len(), 24);
    /// ```
    fn bit_len(&self) -> usize;

    /// Returns true if at least `bits` bits are available starting at (and
    /// including) `start_bit_pos`
    ///
    /// ```rust
    /// use bitspan::BitAccess;
    /// let data = [0xffu8];
    /// assert!(data.has_bits_from(1, 8));
    /// assert!(data.has_bits_from(8, 1));
    /// assert!(!data.has_bits_from(8, 2));
    /// assert!(data.has_bits_from(9, 0));
    /// ```
    fn has_bits_from(&self, start_bit_pos: usize, bits: usize) -> bool;

    /// Extracts an arbitrary bit range. See [`sub_bits`](crate::sub_bits).
    ///
    /// ```rust
    /// use bitspan::BitAccess;
    /// let data = [0b1010_1100u8, 0b0101_0011];
    /// assert_eq!(data.sub_bits(3, 10), Ok(vec![0b1011_0001, 0b0100_0000]));
    /// ```
    fn sub_bits(&self, start_bit_pos: usize, num_of_bits: usize) -> Result<Vec<u8>, ReadError>;

    /// Reads the bit at `start_bit_pos`
    ///
    /// ```rust
    /// use bitspan::BitAccess;
    /// let data = [0b1001_0011u8];
    /// assert_eq!(data.read_bool(1), Ok(true));
    /// assert_eq!(data.read_bool(2), Ok(false));
    /// assert!(data.read_bool(9).is_err());
    /// ```
    fn read_bool(&self, start_bit_pos: usize) -> Result<bool, ReadError>;

    /// Reads 8 bits as an unsigned byte
    ///
    /// ```rust
    /// use bitspan::BitAccess;
    /// let data = [0x0fu8, 0xf0];
    /// assert_eq!(data.read_u8(5), Ok(0xff));
    /// ```
    fn read_u8(&self, start_bit_pos: usize) -> Result<u8, ReadError>;

    /// Reads 8 bits as a raw byte. Same as [`read_u8`](BitAccess::read_u8).
    fn read_byte(&self, start_bit_pos: usize) -> Result<u8, ReadError>;

    /// Reads 16 bits as a big endian integer
    ///
    /// ```rust
    /// use bitspan::BitAccess;
    /// let data = (500u16).to_be_bytes();
    /// assert_eq!(data.read_u16(1), Ok(500));
    /// ```
    fn read_u16(&self, start_bit_pos: usize) -> Result<u16, ReadError>;

    /// Reads 32 bits as a big endian integer
    ///
    /// ```rust
    /// use bitspan::BitAccess;
    /// let data = [0xffu8, 0x00, 0xab, 0xcd, 0xef];
    /// assert_eq!(data.read_u32(1), Ok(0xff00_abcd));
    /// assert_eq!(data.read_u32(5), Ok(0xf00a_bcde));
    /// ```
    fn read_u32(&self, start_bit_pos: usize) -> Result<u32, ReadError>;

    /// Reads 64 bits as a big endian integer
    ///
    /// ```rust
    /// use bitspan::BitAccess;
    /// let data = (22000u64).to_be_bytes();
    /// assert_eq!(data.read_u64(1), Ok(22000));
    /// ```
    fn read_u64(&self, start_bit_pos: usize) -> Result<u64, ReadError>;

    /// Reads 64 bits like [`read_u64`](BitAccess::read_u64) and reinterprets
    /// them as an `isize`. On targets where `isize` is narrower than 64 bits
    /// the high bits are truncated.
    ///
    /// ```rust
    /// use bitspan::BitAccess;
    /// let data = (-2i64).to_be_bytes();
    /// assert_eq!(data.read_int(1), Ok(-2));
    /// ```
    fn read_int(&self, start_bit_pos: usize) -> Result<isize, ReadError>;

    /// Extracts `num_of_bits` bits and encodes them as lowercase hex, two
    /// characters per extracted byte. Zero bits reads to the end of the
    /// buffer.
    ///
    /// ```rust
    /// use bitspan::BitAccess;
    /// let data = [0xdeu8, 0xad, 0xbe, 0xef];
    /// assert_eq!(data.read_hex_string(9, 16).as_deref(), Ok("adbe"));
    /// assert_eq!(data.read_hex_string(1, 4).as_deref(), Ok("d0"));
    /// assert_eq!(data.read_hex_string(17, 0).as_deref(), Ok("beef"));
    /// ```
    fn read_hex_string(
        &self,
        start_bit_pos: usize,
        num_of_bits: usize,
    ) -> Result<String, ReadError>;

    /// Extracts `num_of_bits` bits and interprets them as text. Zero bits
    /// reads to the end of the buffer.
    ///
    /// Content is never validated: byte sequences that aren't UTF-8 are
    /// replaced with `U+FFFD`.
    ///
    /// ```rust
    /// use bitspan::BitAccess;
    /// let data = b"\x00hello";
    /// assert_eq!(data.read_string(9, 40).as_deref(), Ok("hello"));
    /// assert_eq!(data.read_string(9, 0).as_deref(), Ok("hello"));
    /// ```
    fn read_string(&self, start_bit_pos: usize, num_of_bits: usize) -> Result<String, ReadError>;
}

macro_rules! gen_read {
    ($name:ident, $t:ty) => {
        #[inline]
        fn $name(&self, start_bit_pos: usize) -> Result<$t, ReadError> {
            const BYTES: usize = core::mem::size_of::<$t>();
            let bits = read_exact(self, start_bit_pos, BYTES * 8)?;
            let mut buf = [0u8; BYTES];
            buf.copy_from_slice(&bits);
            Ok(<$t>::from_be_bytes(buf))
        }
    };
}

impl BitAccess for [u8] {
    #[inline]
    fn bit_len(&self) -> usize {
        bit_len(self)
    }

    #[inline]
    fn has_bits_from(&self, start_bit_pos: usize, bits: usize) -> bool {
        start_bit_pos > 0 && bits_from(self, start_bit_pos) >= bits
    }

    #[inline]
    fn sub_bits(&self, start_bit_pos: usize, num_of_bits: usize) -> Result<Vec<u8>, ReadError> {
        sub_bits(self, start_bit_pos, num_of_bits)
    }

    #[inline]
    fn read_bool(&self, start_bit_pos: usize) -> Result<bool, ReadError> {
        read_exact(self, start_bit_pos, 1).map(|bits| bits[0] & 0x80 != 0)
    }

    gen_read!(read_u8, u8);
    gen_read!(read_u16, u16);
    gen_read!(read_u32, u32);
    gen_read!(read_u64, u64);

    #[inline]
    fn read_byte(&self, start_bit_pos: usize) -> Result<u8, ReadError> {
        self.read_u8(start_bit_pos)
    }

    #[inline]
    fn read_int(&self, start_bit_pos: usize) -> Result<isize, ReadError> {
        self.read_u64(start_bit_pos).map(|x| x as isize)
    }

    fn read_hex_string(
        &self,
        start_bit_pos: usize,
        num_of_bits: usize,
    ) -> Result<String, ReadError> {
        read_exact(self, start_bit_pos, num_of_bits).map(|bits| encode_hex(&bits))
    }

    fn read_string(&self, start_bit_pos: usize, num_of_bits: usize) -> Result<String, ReadError> {
        read_exact(self, start_bit_pos, num_of_bits)
            .map(|bits| String::from_utf8_lossy(&bits).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{BitAccess, ErrorKind, ReadError};

    const SEQ: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn test_u32_at_start() {
        assert_eq!(SEQ.read_u32(1), Ok(0x0102_0304));
    }

    #[test]
    fn test_u16_mid_buffer() {
        assert_eq!(SEQ.read_u16(17), Ok(0x0506));
    }

    #[test]
    fn test_bool_reads_msb_first() {
        assert_eq!(SEQ.read_bool(1), Ok(false));
        assert_eq!(SEQ.read_bool(8), Ok(true));
        assert_eq!(SEQ.read_bool(64), Ok(false));
        assert_eq!(SEQ.read_bool(61), Ok(true));
    }

    #[test]
    fn test_u64_whole_buffer() {
        assert_eq!(SEQ.read_u64(1), Ok(0x0102_0304_0506_0708));
        assert_eq!(SEQ.read_int(1), Ok(0x0102_0304_0506_0708u64 as isize));
    }

    #[test]
    fn test_unaligned_reads() {
        let data = [0xabu8, 0xcd, 0xef, 0x01, 0x23];
        assert_eq!(data.read_u8(5), Ok(0xbc));
        assert_eq!(data.read_byte(5), Ok(0xbc));
        assert_eq!(data.read_u16(5), Ok(0xbcde));
        assert_eq!(data.read_u32(5), Ok(0xbcde_f012));
    }

    #[test]
    fn test_u8_at_last_byte() {
        assert_eq!(SEQ.read_u8(57), Ok(0x08));
        assert_eq!(
            SEQ.read_u8(58),
            Err(ReadError::InsufficientBits {
                required: 8,
                available: 7
            })
        );
    }

    #[test]
    fn test_insufficient_width() {
        let data = [0xffu8, 0xff];
        let err = data.read_u32(1).unwrap_err();
        assert_eq!(
            err,
            ReadError::InsufficientBits {
                required: 32,
                available: 16
            }
        );
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert_eq!(err.to_string(), "input is less than 32 bits");

        assert_eq!(
            data.read_u64(9).unwrap_err().to_string(),
            "input is less than 64 bits"
        );
        assert_eq!(
            data.read_int(9).unwrap_err().to_string(),
            "input is less than 64 bits"
        );
        assert_eq!(
            data.read_bool(17).unwrap_err().to_string(),
            "input is less than 1 bit"
        );
    }

    #[test]
    fn test_zero_start_is_invalid() {
        assert_eq!(
            SEQ.read_u16(0),
            Err(ReadError::InvalidRange { start_bit_pos: 0 })
        );
        assert_eq!(
            SEQ.read_string(0, 8),
            Err(ReadError::InvalidRange { start_bit_pos: 0 })
        );
    }

    #[test]
    fn test_start_far_past_end() {
        assert_eq!(
            SEQ.read_bool(usize::MAX),
            Err(ReadError::InsufficientBits {
                required: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_hex_string() {
        let data = [0xdeu8, 0xad, 0xbe, 0xef];
        assert_eq!(data.read_hex_string(1, 32).as_deref(), Ok("deadbeef"));
        assert_eq!(data.read_hex_string(5, 8).as_deref(), Ok("ea"));
        assert_eq!(data.read_hex_string(5, 0).as_deref(), Ok("eadbeef0"));
        assert_eq!(data.read_hex_string(33, 0).as_deref(), Ok(""));
    }

    #[test]
    fn test_hex_string_insufficient_names_width() {
        let data = [0xdeu8, 0xad];
        assert_eq!(
            data.read_hex_string(9, 24).unwrap_err().to_string(),
            "input is less than 24 bits"
        );
    }

    #[test]
    fn test_string() {
        let data = b"GET /index.html";
        assert_eq!(data.read_string(1, 24).as_deref(), Ok("GET"));
        assert_eq!(data.read_string(41, 0).as_deref(), Ok("index.html"));
        assert_eq!(data.read_string(33, 8).as_deref(), Ok("/"));
    }

    #[test]
    fn test_string_does_not_validate_content() {
        let data = [0x66u8, 0xff, 0x6f];
        assert_eq!(data.read_string(1, 0).as_deref(), Ok("f\u{fffd}o"));
    }

    #[test]
    fn test_string_insufficient_names_width() {
        assert_eq!(
            b"ab".read_string(1, 40).unwrap_err().to_string(),
            "input is less than 40 bits"
        );
    }

    #[test]
    fn test_sentinel_past_end() {
        assert_eq!(
            SEQ.read_string(66, 0).unwrap_err().kind(),
            ErrorKind::OutOfBounds
        );
    }

    #[test]
    fn test_has_bits_from() {
        assert!(SEQ.has_bits_from(1, 64));
        assert!(!SEQ.has_bits_from(2, 64));
        assert!(SEQ.has_bits_from(65, 0));
        assert!(!SEQ.has_bits_from(0, 1));
    }

    #[test]
    fn test_vec_deref() {
        let data = SEQ.to_vec();
        assert_eq!(data.bit_len(), 64);
        assert_eq!(data.read_u16(1), Ok(0x0102));
    }
}
