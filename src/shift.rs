//! Whole-buffer logical shifts with carry propagation.
//!
//! The buffer is treated as one contiguous big endian bit sequence: a left
//! shift moves bits towards the MSB of the first byte and a right shift
//! towards the LSB of the last byte. Bits carried out of one byte land in its
//! neighbor and vacated bits are zero.
//!
//! A shift by `n` is defined as `n` single-bit passes. The returned carry
//! flag is the bit pushed past the buffer's edge by the final pass only.
//! Rather than looping `n` times, the result is computed directly from a byte
//! offset (`n / 8`) and a bit offset (`n % 8`), which is equivalent.

use alloc::vec;
use alloc::vec::Vec;

/// Returns whether the 1-indexed bit at `pos` is set. Positions outside of
/// the data read as zero.
#[inline]
fn bit_at(data: &[u8], pos: usize) -> bool {
    if pos == 0 {
        return false;
    }

    let index = pos - 1;
    data.get(index / 8)
        .map_or(false, |byte| byte & (0x80u8 >> (index % 8)) != 0)
}

/// Shifts the entire byte slice left by `count` bits.
///
/// Returns a new buffer of the same length and the carry flag: the bit that
/// left the MSB of the first byte during the last single-bit step. A `count`
/// of zero returns an unchanged copy with a carry of `false`.
///
/// ```rust
/// use bitspan::shift_left;
/// assert_eq!(shift_left(&[0x80, 0x00], 1), (vec![0x00, 0x00], true));
/// assert_eq!(shift_left(&[0x01, 0x80], 1), (vec![0x03, 0x00], false));
/// assert_eq!(shift_left(&[0x12, 0x34], 4), (vec![0x23, 0x40], true));
/// ```
pub fn shift_left(data: &[u8], count: usize) -> (Vec<u8>, bool) {
    if count == 0 {
        return (data.to_vec(), false);
    }

    let carry = bit_at(data, count);
    let bytes = count / 8;
    let bits = (count % 8) as u32;

    let mut result = vec![0u8; data.len()];
    for (i, dst) in result.iter_mut().enumerate() {
        let src = match i.checked_add(bytes) {
            Some(src) if src < data.len() => src,
            _ => break,
        };

        let mut byte = data[src] << bits;
        if bits > 0 {
            if let Some(&next) = data.get(src + 1) {
                byte |= next >> (8 - bits);
            }
        }

        *dst = byte;
    }

    (result, carry)
}

/// Shifts the entire byte slice right by `count` bits.
///
/// Mirror of [`shift_left`]: the carry flag is the bit that left the LSB of
/// the last byte during the last single-bit step.
///
/// ```rust
/// use bitspan::shift_right;
/// assert_eq!(shift_right(&[0x00, 0x01], 1), (vec![0x00, 0x00], true));
/// assert_eq!(shift_right(&[0x01, 0x00], 1), (vec![0x00, 0x80], false));
/// assert_eq!(shift_right(&[0x12, 0x34], 0), (vec![0x12, 0x34], false));
/// ```
pub fn shift_right(data: &[u8], count: usize) -> (Vec<u8>, bool) {
    if count == 0 {
        return (data.to_vec(), false);
    }

    let bit_len = crate::bit_len(data);
    let carry = count <= bit_len && bit_at(data, bit_len - count + 1);
    let bytes = count / 8;
    let bits = (count % 8) as u32;

    let mut result = vec![0u8; data.len()];
    for (i, dst) in result.iter_mut().enumerate().skip(bytes) {
        let src = i - bytes;
        let mut byte = data[src] >> bits;
        if bits > 0 && src > 0 {
            byte |= data[src - 1] << (8 - bits);
        }

        *dst = byte;
    }

    (result, carry)
}
