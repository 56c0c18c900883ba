use crate::error::ReadError;
use crate::shift::shift_left;
use alloc::vec::Vec;

/// Resolves the `num_of_bits == 0` sentinel and validates the range, returning
/// the inclusive end position and the number of bits.
fn resolve_range(
    bit_len: usize,
    start_bit_pos: usize,
    num_of_bits: usize,
) -> Result<(usize, usize), ReadError> {
    if start_bit_pos == 0 {
        return Err(ReadError::InvalidRange { start_bit_pos });
    }

    let out_of_bounds = ReadError::OutOfBounds {
        start_bit_pos,
        num_of_bits,
        bit_len,
    };

    let num_of_bits = if num_of_bits == 0 {
        bit_len
            .saturating_add(1)
            .checked_sub(start_bit_pos)
            .ok_or(out_of_bounds)?
    } else {
        num_of_bits
    };

    let end_bit_pos = (start_bit_pos - 1)
        .checked_add(num_of_bits)
        .filter(|&end| end <= bit_len)
        .ok_or(ReadError::OutOfBounds {
            start_bit_pos,
            num_of_bits,
            bit_len,
        })?;

    Ok((end_bit_pos, num_of_bits))
}

/// Extracts `num_of_bits` bits starting at the 1-indexed `start_bit_pos`.
///
/// The result is a freshly allocated buffer of exactly
/// `ceil(num_of_bits / 8)` bytes. The requested bits start at the MSB of the
/// first byte and any unused trailing bits of the last byte are zero.
///
/// A `num_of_bits` of zero means every bit from `start_bit_pos` to the end
/// of the data.
///
/// ```rust
/// use bitspan::sub_bits;
/// let data = [0xff, 0x00];
/// assert_eq!(sub_bits(&data, 1, 4), Ok(vec![0xf0]));
/// assert_eq!(sub_bits(&data, 5, 8), Ok(vec![0xf0]));
/// assert_eq!(sub_bits(&data, 9, 0), Ok(vec![0x00]));
/// ```
///
/// # Errors
///
/// [`ReadError::InvalidRange`] when `start_bit_pos` is zero and
/// [`ReadError::OutOfBounds`] when the range ends past the last bit.
///
/// ```rust
/// use bitspan::{sub_bits, ErrorKind};
/// let data = [0xff, 0x00];
/// assert_eq!(sub_bits(&data, 0, 1).unwrap_err().kind(), ErrorKind::InvalidRange);
/// assert_eq!(sub_bits(&data, 1, 17).unwrap_err().kind(), ErrorKind::OutOfBounds);
/// ```
pub fn sub_bits(
    data: &[u8],
    start_bit_pos: usize,
    num_of_bits: usize,
) -> Result<Vec<u8>, ReadError> {
    let bit_len = crate::bit_len(data);
    let (end_bit_pos, num_of_bits) = resolve_range(bit_len, start_bit_pos, num_of_bits)?;
    if num_of_bits == 0 {
        return Ok(Vec::new());
    }

    let start_index = (start_bit_pos - 1) / 8;
    let start_offset = (start_bit_pos - 1) % 8;
    let end_index = (end_bit_pos - 1) / 8;
    let end_offset = (end_bit_pos - 1) % 8;

    let mut span = data[start_index..=end_index].to_vec();

    // Clear the bits trailing the range so they can't leak into the result
    if end_offset < 7 {
        if let Some(last) = span.last_mut() {
            *last &= 0xffu8 << (7 - end_offset);
        }
    }

    // The carry holds a bit before the range, it is of no interest
    let (mut result, _) = shift_left(&span, start_offset);
    result.resize((num_of_bits + 7) / 8, 0);
    Ok(result)
}
