use tracing::{debug, trace};

use crate::error::{FixedPointError, Result};
use crate::format::FixedPointFormat;
use crate::width::BitWidth;

/// An integer container holding a fixed-point number.
///
/// The raw integer is kept in an `i128`, wide enough for every supported
/// width, and is always inside `[format.raw_min(), format.raw_max()]`.
/// Two's-complement patterns are produced by masking, see [`format_hex`].
///
/// # Examples
///
/// ```
/// use fixed_codec::{FixedPointFormat, FixedPointValue};
///
/// let format = FixedPointFormat::new(32, 16, false)?;
/// let x = FixedPointValue::encode(3.5, format)?;
/// assert_eq!(x.raw(), 229376);
/// assert_eq!(x.to_hex(), "0x00038000");
/// assert_eq!(x.to_f64(), 3.5);
/// # Ok::<(), fixed_codec::FixedPointError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedPointValue {
    raw: i128,
    format: FixedPointFormat,
}

impl FixedPointValue {
    /// Quantizes `value` into `format`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns `FixedPointError::Overflow` if the truncated scaled value does
    /// not fit the container, or if `value` is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_codec::{FixedPointError, FixedPointFormat, FixedPointValue};
    ///
    /// let format = FixedPointFormat::new(8, 4, true)?;
    /// // -1.03 * 16 = -16.48, truncated to -16 rather than floored to -17
    /// assert_eq!(FixedPointValue::encode(-1.03, format)?.raw(), -16);
    ///
    /// // 127 * 16 = 2032 does not fit in [-128, 127]
    /// assert!(matches!(
    ///     FixedPointValue::encode(127.0, format),
    ///     Err(FixedPointError::Overflow { .. })
    /// ));
    /// # Ok::<(), fixed_codec::FixedPointError>(())
    /// ```
    pub fn encode(value: f64, format: FixedPointFormat) -> Result<Self> {
        let scaled = format.to_scaled(value).trunc();

        // Both bounds are zero or a power of two, so they are exact in f64
        // even for 64-bit containers.
        let lower = format.raw_min() as f64;
        let upper = (format.raw_max() + 1) as f64;
        trace!(scaled, lower, upper, "checking container bounds");

        if !scaled.is_finite() || scaled < lower || scaled >= upper {
            return Err(FixedPointError::Overflow { value, format });
        }

        let raw = scaled as i128;
        debug!(value, raw = %raw, %format, "encoded fixed-point value");
        Ok(Self { raw, format })
    }

    /// Wraps a raw container integer, checking that it fits the format.
    ///
    /// # Errors
    ///
    /// Returns `FixedPointError::OutOfRange` if `raw` lies outside the
    /// container range.
    pub fn from_raw(raw: i128, format: FixedPointFormat) -> Result<Self> {
        if !format.contains_raw(raw) {
            return Err(FixedPointError::OutOfRange { raw, format });
        }
        Ok(Self { raw, format })
    }

    /// Returns the raw integer representation.
    pub fn raw(&self) -> i128 {
        self.raw
    }

    pub fn format(&self) -> FixedPointFormat {
        self.format
    }

    /// Unsigned reinterpretation of the container bits.
    pub fn to_bits(&self) -> u64 {
        ((self.raw as u128) & self.format.width().mask()) as u64
    }

    /// Converts back to a real number.
    pub fn to_f64(&self) -> f64 {
        decode(self.raw, &self.format)
    }

    /// Zero-padded two's-complement bit pattern, e.g. `0xfff0`.
    pub fn to_hex(&self) -> String {
        format_hex(self.raw, self.format.width())
    }
}

/// Converts a raw container integer to its real value, `raw / 2^frac`.
///
/// No range check is made; `raw` is taken at face value. Use
/// [`FixedPointValue::from_raw`] to reject integers that do not fit.
///
/// # Examples
///
/// ```
/// use fixed_codec::{decode, FixedPointFormat};
///
/// let format = FixedPointFormat::new(16, 8, false)?;
/// assert_eq!(decode(0xFF00, &format), 255.0);
/// # Ok::<(), fixed_codec::FixedPointError>(())
/// ```
pub fn decode(raw: i128, format: &FixedPointFormat) -> f64 {
    let value = format.from_scaled(raw as f64);
    debug!(raw = %raw, value, %format, "decoded fixed-point value");
    value
}

/// Renders the container bits of `raw` as `0x`-prefixed lower-case hex,
/// zero-padded to `bits / 4` digits.
///
/// Negative values show their two's-complement pattern, not a minus sign.
///
/// # Examples
///
/// ```
/// use fixed_codec::{format_hex, BitWidth};
///
/// assert_eq!(format_hex(-1, BitWidth::W16), "0xffff");
/// assert_eq!(format_hex(0x38000, BitWidth::W32), "0x00038000");
/// ```
pub fn format_hex(raw: i128, width: BitWidth) -> String {
    let pattern = (raw as u128) & width.mask();
    format!("{:#0w$x}", pattern, w = width.hex_digits() + 2)
}

/// Relative quantization error, `(quantized - original) / original`.
///
/// # Errors
///
/// Returns `FixedPointError::UndefinedRelativeError` when `original` is zero.
pub fn relative_error(original: f64, quantized: f64) -> Result<f64> {
    if original == 0.0 {
        return Err(FixedPointError::UndefinedRelativeError);
    }
    Ok((quantized - original) / original)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(bits: u32, frac: u32, signed: bool) -> FixedPointFormat {
        FixedPointFormat::new(bits, frac, signed).unwrap()
    }

    #[test]
    fn test_encode_basic() {
        let x = FixedPointValue::encode(3.5, fmt(32, 16, false)).unwrap();
        assert_eq!(x.raw(), 229376);
        assert_eq!(x.to_hex(), "0x00038000");
        assert_eq!(x.to_f64(), 3.5);
        assert_eq!(relative_error(3.5, x.to_f64()), Ok(0.0));
    }

    #[test]
    fn test_overflow_signed_8() {
        let result = FixedPointValue::encode(127.0, fmt(8, 4, true));
        assert!(matches!(
            result,
            Err(FixedPointError::Overflow { value, .. }) if value == 127.0
        ));
    }

    #[test]
    fn test_truncates_toward_zero() {
        let format = fmt(16, 4, true);
        assert_eq!(FixedPointValue::encode(1.99, format).unwrap().raw(), 31);
        assert_eq!(FixedPointValue::encode(-1.99, format).unwrap().raw(), -31);
    }

    #[test]
    fn test_negative_hex_is_twos_complement() {
        let x = FixedPointValue::encode(-1.0, fmt(8, 4, true)).unwrap();
        assert_eq!(x.raw(), -16);
        assert_eq!(x.to_hex(), "0xf0");
        assert_eq!(x.to_bits(), 0xf0);

        let y = FixedPointValue::encode(-0.5, fmt(64, 1, true)).unwrap();
        assert_eq!(y.to_hex(), "0xffffffffffffffff");
    }

    #[test]
    fn test_unsigned_rejects_negative() {
        let format = fmt(16, 8, false);
        assert!(FixedPointValue::encode(-1.0, format).is_err());
        // Truncates to zero, which fits.
        assert_eq!(FixedPointValue::encode(-0.001, format).unwrap().raw(), 0);
    }

    #[test]
    fn test_non_finite_is_overflow() {
        let format = fmt(32, 16, true);
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                FixedPointValue::encode(value, format),
                Err(FixedPointError::Overflow { .. })
            ));
        }
    }

    #[test]
    fn test_64_bit_bounds() {
        let unsigned = fmt(64, 0, false);
        // 2^64 - 1 is not representable in f64; the nearest double is 2^64.
        assert!(FixedPointValue::encode(18446744073709551615.0, unsigned).is_err());
        let below = FixedPointValue::encode(18446744073709549568.0, unsigned).unwrap();
        assert_eq!(below.to_hex(), "0xfffffffffffff800");

        let signed = fmt(64, 0, true);
        let min = FixedPointValue::encode(-9223372036854775808.0, signed).unwrap();
        assert_eq!(min.raw(), i64::MIN as i128);
        assert_eq!(min.to_hex(), "0x8000000000000000");
    }

    #[test]
    fn test_zero_encodes_past_f64_scale() {
        for frac in [1023, 1024, 1030, 5000, u32::MAX] {
            let format = fmt(8, frac, false);
            let x = FixedPointValue::encode(0.0, format).unwrap();
            assert_eq!(x.raw(), 0);
            assert_eq!(x.to_f64(), 0.0);
        }
    }

    #[test]
    fn test_subnormal_values_round_trip() {
        let format = fmt(8, 1030, false);
        let three_lsb = 3.0 * format.precision();
        let x = FixedPointValue::encode(three_lsb, format).unwrap();
        assert_eq!(x.raw(), 3);
        assert_eq!(x.to_f64(), three_lsb);
        // One LSB is 2^-1030; 2^-1022 needs 256 of them.
        assert!(FixedPointValue::encode(f64::MIN_POSITIVE, format).is_err());
    }

    #[test]
    fn test_decode_past_f64_scale() {
        let format = fmt(64, 1030, true);
        assert_eq!(decode(1 << 62, &format), 2f64.powi(-968));
        assert_eq!(decode(-1, &format), -format.precision());
    }

    #[test]
    fn test_from_raw_checks_range() {
        let format = fmt(8, 0, true);
        assert!(FixedPointValue::from_raw(127, format).is_ok());
        assert!(FixedPointValue::from_raw(-128, format).is_ok());
        assert_eq!(
            FixedPointValue::from_raw(128, format),
            Err(FixedPointError::OutOfRange { raw: 128, format })
        );
    }

    #[test]
    fn test_decode_passes_through() {
        let format = fmt(16, 8, false);
        assert_eq!(decode(0xFF00, &format), 255.0);
        // Not range checked.
        assert_eq!(decode(0x1_0000, &format), 256.0);
        assert_eq!(decode(-256, &format), -1.0);
    }

    #[test]
    fn test_relative_error_zero() {
        assert_eq!(
            relative_error(0.0, 0.0),
            Err(FixedPointError::UndefinedRelativeError)
        );
        assert_eq!(
            relative_error(-0.0, 1.0),
            Err(FixedPointError::UndefinedRelativeError)
        );
    }

    #[test]
    fn test_relative_error_sign() {
        // 0.1 in U8.4 truncates to 1/16
        let x = FixedPointValue::encode(0.1, fmt(8, 4, false)).unwrap();
        let err = relative_error(0.1, x.to_f64()).unwrap();
        assert!(err < 0.0);
        assert!((err - (0.0625 - 0.1) / 0.1).abs() < 1e-12);
    }
}
