//! Common fixed-point formats and `I.F` notation.
//!
//! The naming convention is `QI_F` where I is the number of integer bits
//! (including the sign bit) and F is the number of fractional bits, so
//! `I + F` is the container width. A `U` prefix marks an unsigned format.
//! The same notation is accepted by `FixedPointFormat::from_str`, written
//! with a dot: `"Q16.16"`, `"UQ8.8"`.

use core::str::FromStr;

use crate::error::FixedPointError;
use crate::format::FixedPointFormat;
use crate::width::{BitWidth, validate_bits};

/// 1.7 format, signed 8-bit audio style.
///
/// Range: [-1.0, 0.9921875]
pub const Q1_7: FixedPointFormat = FixedPointFormat::with_width(BitWidth::W8, 7, true);

/// 8.8 format (8 integer bits, 8 fractional bits).
///
/// Range: [-128.0, 127.99609375]
/// Precision: ~0.00390625
pub const Q8_8: FixedPointFormat = FixedPointFormat::with_width(BitWidth::W16, 8, true);

/// 4.12 format.
///
/// Range: [-8.0, 7.999755859]
/// Precision: ~0.000244141
pub const Q4_12: FixedPointFormat = FixedPointFormat::with_width(BitWidth::W16, 12, true);

/// 1.15 format.
///
/// Range: [-1.0, 0.999969482]
pub const Q1_15: FixedPointFormat = FixedPointFormat::with_width(BitWidth::W16, 15, true);

/// 16.16 format, the default of both command-line tools when signed.
///
/// Range: [-32768.0, 32767.999984741]
/// Precision: ~0.000015259
pub const Q16_16: FixedPointFormat = FixedPointFormat::with_width(BitWidth::W32, 16, true);

/// 24.8 format.
///
/// Range: [-8388608.0, 8388607.99609375]
/// Precision: ~0.00390625
pub const Q24_8: FixedPointFormat = FixedPointFormat::with_width(BitWidth::W32, 8, true);

pub const Q1_31: FixedPointFormat = FixedPointFormat::with_width(BitWidth::W32, 31, true);

pub const Q32_32: FixedPointFormat = FixedPointFormat::with_width(BitWidth::W64, 32, true);

/// Unsigned 8.8 format.
///
/// Range: [0.0, 255.99609375]
pub const UQ8_8: FixedPointFormat = FixedPointFormat::with_width(BitWidth::W16, 8, false);

/// Unsigned 16.16 format, the default of both command-line tools.
///
/// Range: [0.0, 65535.999984741]
pub const UQ16_16: FixedPointFormat = FixedPointFormat::with_width(BitWidth::W32, 16, false);

impl FromStr for FixedPointFormat {
    type Err = FixedPointError;

    /// Parses `Q<I>.<F>` (signed) or `UQ<I>.<F>` (unsigned), case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_codec::{presets, FixedPointFormat, FixedPointError};
    ///
    /// assert_eq!("Q16.16".parse::<FixedPointFormat>()?, presets::Q16_16);
    /// assert_eq!("uq8.8".parse::<FixedPointFormat>()?, presets::UQ8_8);
    /// assert_eq!("Q3.3".parse::<FixedPointFormat>(), Err(FixedPointError::InvalidBits(6)));
    /// # Ok::<(), fixed_codec::FixedPointError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FixedPointError::InvalidFormatSpec(s.to_string());

        let upper = s.trim().to_ascii_uppercase();
        let (signed, body) = if let Some(rest) = upper.strip_prefix("UQ") {
            (false, rest)
        } else if let Some(rest) = upper.strip_prefix('Q') {
            (true, rest)
        } else {
            return Err(invalid());
        };

        let (int_bits, frac) = body.split_once('.').ok_or_else(invalid)?;
        let parse = |digits: &str| {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            digits.parse::<u32>().map_err(|_| invalid())
        };
        let int_bits = parse(int_bits)?;
        let frac = parse(frac)?;

        let total = int_bits.checked_add(frac).ok_or_else(invalid)?;
        let width = validate_bits(i64::from(total))?;
        Ok(FixedPointFormat::with_width(width, frac, signed))
    }
}
