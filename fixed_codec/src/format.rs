//! Fixed-point format description and the quantities derived from it.

use core::fmt;

use crate::error::Result;
use crate::width::{BitWidth, validate_bits};

/// Largest power of two applied in one multiplication. `2^960` and `2^-960`
/// are both normal f64 values, so every step but the last is exact.
const MAX_POW2_STEP: i64 = 960;

/// Computes `x * 2^exp` without forming `2^exp`, which leaves the f64 range
/// once `|exp|` passes 1023.
///
/// The result is rounded once, on the final step, unless it is already zero
/// or infinite before then.
pub(crate) fn mul_pow2(x: f64, exp: i64) -> f64 {
    let mut x = x;
    let mut exp = exp;
    while exp != 0 && x != 0.0 && x.is_finite() {
        let step = exp.clamp(-MAX_POW2_STEP, MAX_POW2_STEP);
        x *= 2f64.powi(step as i32);
        exp -= step;
    }
    x
}

/// Layout of a fixed-point number: container width, fractional bits and
/// signedness.
///
/// A value `x` is stored as the integer `trunc(x * 2^frac)`. No relation
/// between `frac` and the width is enforced; a `frac` at or above the width
/// yields a format whose whole range lies inside `(-1, 1)`.
///
/// # Examples
///
/// ```
/// use fixed_codec::FixedPointFormat;
///
/// let format = FixedPointFormat::new(16, 8, true)?;
/// assert_eq!(format.range(), (-128.0, 127.99609375));
/// assert_eq!(format.precision(), 0.00390625);
/// # Ok::<(), fixed_codec::FixedPointError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedPointFormat {
    width: BitWidth,
    frac: u32,
    signed: bool,
}

impl FixedPointFormat {
    /// Builds a format, validating the container width.
    ///
    /// # Errors
    ///
    /// Returns `FixedPointError::InvalidBits` unless `bits` is 8, 16, 32 or 64.
    pub fn new(bits: u32, frac: u32, signed: bool) -> Result<Self> {
        let width = validate_bits(i64::from(bits))?;
        Ok(Self::with_width(width, frac, signed))
    }

    /// Builds a format from an already validated width.
    pub const fn with_width(width: BitWidth, frac: u32, signed: bool) -> Self {
        Self {
            width,
            frac,
            signed,
        }
    }

    pub const fn width(&self) -> BitWidth {
        self.width
    }

    pub const fn bits(&self) -> u32 {
        self.width.bits()
    }

    pub const fn frac(&self) -> u32 {
        self.frac
    }

    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Smallest integer the container can hold.
    pub const fn raw_min(&self) -> i128 {
        if self.signed {
            -(1i128 << (self.bits() - 1))
        } else {
            0
        }
    }

    /// Largest integer the container can hold.
    pub const fn raw_max(&self) -> i128 {
        if self.signed {
            (1i128 << (self.bits() - 1)) - 1
        } else {
            (1i128 << self.bits()) - 1
        }
    }

    /// Whether `raw` fits in the container.
    pub const fn contains_raw(&self, raw: i128) -> bool {
        raw >= self.raw_min() && raw <= self.raw_max()
    }

    /// The implicit scale factor `2^frac`.
    ///
    /// Infinite once `frac` reaches 1024. Encoding and decoding do not go
    /// through this value, see [`FixedPointFormat::to_scaled`] and
    /// [`FixedPointFormat::from_scaled`].
    pub fn scale(&self) -> f64 {
        mul_pow2(1.0, i64::from(self.frac))
    }

    /// `value * 2^frac`, finite whenever the exact product is.
    pub fn to_scaled(&self, value: f64) -> f64 {
        mul_pow2(value, i64::from(self.frac))
    }

    /// `scaled / 2^frac`, correct down to subnormal results.
    pub fn from_scaled(&self, scaled: f64) -> f64 {
        mul_pow2(scaled, -i64::from(self.frac))
    }

    /// Representable real range, both ends inclusive.
    pub fn range(&self) -> (f64, f64) {
        (
            self.from_scaled(self.raw_min() as f64),
            self.from_scaled(self.raw_max() as f64),
        )
    }

    /// Value of one least-significant bit, `1 / 2^frac`.
    ///
    /// Since encoding truncates, this is also the largest possible
    /// quantization error.
    pub fn precision(&self) -> f64 {
        self.from_scaled(1.0)
    }
}

impl fmt::Display for FixedPointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.signed { 'S' } else { 'U' };
        write!(f, "{}{}.{}", sign, self.bits(), self.frac)
    }
}
