//! # fixed_codec
//!
//! Conversion between real numbers and fixed-point integer containers.
//!
//! ## Features
//!
//! - 8, 16, 32 and 64-bit containers, signed (two's complement) or unsigned
//! - Any number of fractional bits; scale factor `2^frac`
//! - Truncation toward zero when quantizing, overflow reported as an error
//! - Representable range, precision and relative quantization error
//! - Two's-complement bit patterns as zero-padded hex
//!
//! ## Examples
//!
//! ```
//! use fixed_codec::{FixedPointFormat, FixedPointValue, relative_error};
//!
//! // 32-bit unsigned container with 16 fractional bits
//! let format = FixedPointFormat::new(32, 16, false)?;
//!
//! let value = FixedPointValue::encode(3.14159, format)?;
//! println!("{} -> {}", value.to_hex(), value.to_f64());
//!
//! let err = relative_error(3.14159, value.to_f64())?;
//! assert!(err.abs() < format.precision());
//! # Ok::<(), fixed_codec::FixedPointError>(())
//! ```

pub mod error;
pub mod format;
pub mod presets;
pub mod value;
pub mod width;

pub use error::{FixedPointError, Result};
pub use format::FixedPointFormat;
pub use value::{FixedPointValue, decode, format_hex, relative_error};
pub use width::{BitWidth, validate_bits};

/// Quantizes `value` into `format` and returns the raw container integer.
///
/// Shorthand for [`FixedPointValue::encode`] followed by
/// [`FixedPointValue::raw`].
///
/// # Examples
///
/// ```
/// use fixed_codec::{encode, FixedPointFormat};
///
/// let format = FixedPointFormat::new(16, 8, true)?;
/// assert_eq!(encode(-2.25, &format)?, -576);
/// # Ok::<(), fixed_codec::FixedPointError>(())
/// ```
pub fn encode(value: f64, format: &FixedPointFormat) -> Result<i128> {
    FixedPointValue::encode(value, *format).map(|v| v.raw())
}
