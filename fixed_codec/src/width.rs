//! Supported container widths.

use core::fmt;

use crate::error::{FixedPointError, Result};

/// Width of the integer container holding a fixed-point value.
///
/// Only byte-multiple power-of-two widths are supported; any other width is
/// rejected by [`validate_bits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BitWidth {
    W8,
    W16,
    W32,
    W64,
}

impl BitWidth {
    pub const ALL: [BitWidth; 4] = [BitWidth::W8, BitWidth::W16, BitWidth::W32, BitWidth::W64];

    /// Number of bits in the container.
    pub const fn bits(self) -> u32 {
        match self {
            BitWidth::W8 => 8,
            BitWidth::W16 => 16,
            BitWidth::W32 => 32,
            BitWidth::W64 => 64,
        }
    }

    /// Number of hex digits needed to show every bit of the container.
    pub const fn hex_digits(self) -> usize {
        (self.bits() / 4) as usize
    }

    /// All-ones pattern of the container, `2^bits - 1`.
    pub const fn mask(self) -> u128 {
        (1u128 << self.bits()) - 1
    }
}

impl TryFrom<i64> for BitWidth {
    type Error = FixedPointError;

    fn try_from(bits: i64) -> Result<Self> {
        match bits {
            8 => Ok(BitWidth::W8),
            16 => Ok(BitWidth::W16),
            32 => Ok(BitWidth::W32),
            64 => Ok(BitWidth::W64),
            other => Err(FixedPointError::InvalidBits(other)),
        }
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = FixedPointError;

    fn try_from(bits: u32) -> Result<Self> {
        BitWidth::try_from(i64::from(bits))
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Checks that `bits` names a supported container width.
///
/// Takes a signed value so that negative widths read from user input are
/// reported as `InvalidBits` rather than failing to parse.
///
/// # Examples
///
/// ```
/// use fixed_codec::{validate_bits, BitWidth, FixedPointError};
///
/// assert_eq!(validate_bits(16)?, BitWidth::W16);
/// assert_eq!(validate_bits(24), Err(FixedPointError::InvalidBits(24)));
/// assert_eq!(validate_bits(-8), Err(FixedPointError::InvalidBits(-8)));
/// # Ok::<(), fixed_codec::FixedPointError>(())
/// ```
pub fn validate_bits(bits: i64) -> Result<BitWidth> {
    BitWidth::try_from(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_widths() {
        for width in BitWidth::ALL {
            assert_eq!(validate_bits(i64::from(width.bits())), Ok(width));
            assert_eq!(BitWidth::try_from(width.bits()), Ok(width));
        }
    }

    #[test]
    fn rejects_other_widths() {
        for bits in [0, 1, 7, 9, 12, 24, 48, 63, 65, 128, -8, -64, 99_999_999_999, i64::MIN, i64::MAX] {
            assert_eq!(validate_bits(bits), Err(FixedPointError::InvalidBits(bits)));
        }
    }

    #[test]
    fn masks_and_digits() {
        assert_eq!(BitWidth::W8.mask(), 0xff);
        assert_eq!(BitWidth::W64.mask(), u64::MAX as u128);
        assert_eq!(BitWidth::W16.hex_digits(), 4);
        assert_eq!(BitWidth::W64.hex_digits(), 16);
    }
}
