use core::fmt;

/// The broad category of a [`ReadError`]
///
/// Every failure is a validation failure of the requested bit range, so there
/// are only two categories. Callers that just want to know whether a field is
/// malformed or truncated can match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The starting bit position is not a valid 1-indexed position
    InvalidRange,

    /// The requested bits extend past the end of the data
    OutOfBounds,
}

/// Errors returned when a bit range can't be read from a byte slice
///
/// ```rust
/// use bitspan::{BitAccess, ErrorKind, ReadError};
/// let data = [0xffu8, 0x00];
/// assert_eq!(data.sub_bits(0, 1), Err(ReadError::InvalidRange { start_bit_pos: 0 }));
///
/// let err = data.read_u32(1).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::OutOfBounds);
/// assert_eq!(err.to_string(), "input is less than 32 bits");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadError {
    /// Bit positions start at 1, so a start of 0 is rejected
    InvalidRange {
        /// The offending start position
        start_bit_pos: usize,
    },

    /// The range `start_bit_pos..start_bit_pos + num_of_bits` ends past the
    /// last bit of the data
    OutOfBounds {
        /// Requested 1-indexed start position
        start_bit_pos: usize,

        /// Requested number of bits (after the zero sentinel is resolved)
        num_of_bits: usize,

        /// Total number of bits in the data
        bit_len: usize,
    },

    /// A typed accessor needs more bits than remain from the start position
    InsufficientBits {
        /// Width the accessor needs
        required: usize,

        /// Bits left from the start position to the end of the data
        available: usize,
    },
}

impl ReadError {
    /// Returns the category of this error. Insufficient bits for an accessor
    /// is reported as [`ErrorKind::OutOfBounds`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReadError::InvalidRange { .. } => ErrorKind::InvalidRange,
            ReadError::OutOfBounds { .. } | ReadError::InsufficientBits { .. } => {
                ErrorKind::OutOfBounds
            }
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::InvalidRange { start_bit_pos } => {
                write!(f, "start bit position must be > 0, got {}", start_bit_pos)
            }
            ReadError::OutOfBounds {
                start_bit_pos,
                num_of_bits,
                bit_len,
            } => write!(
                f,
                "bit index out of bounds: {} bits from position {} exceeds {} bits",
                num_of_bits, start_bit_pos, bit_len
            ),
            ReadError::InsufficientBits { required: 1, .. } => {
                write!(f, "input is less than 1 bit")
            }
            ReadError::InsufficientBits { required, .. } => {
                write!(f, "input is less than {} bits", required)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}
