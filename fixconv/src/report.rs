//! Output of the two tools, one `Display` impl per block of lines.

use core::fmt;

use fixed_codec::{BitWidth, FixedPointFormat, FixedPointValue, decode, format_hex, relative_error};

/// Hex for an integer that does not fit its container, written out in full
/// with a sign so it agrees with the decimal line.
fn unmasked_hex(raw: i128, width: BitWidth) -> String {
    let digits = width.hex_digits() + 2;
    if raw < 0 {
        format!("-{:#0w$x}", raw.unsigned_abs(), w = digits)
    } else {
        format!("{:#0w$x}", raw, w = digits)
    }
}

/// Result of decoding a raw container integer.
///
/// The hex line shows the container bits when `raw` fits the format, and the
/// full unmasked integer when it does not.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeReport {
    pub hex: String,
    pub raw: i128,
    pub value: f64,
}

impl DecodeReport {
    pub fn new(raw: i128, format: &FixedPointFormat) -> Self {
        let hex = if format.contains_raw(raw) {
            format_hex(raw, format.width())
        } else {
            unmasked_hex(raw, format.width())
        };
        Self {
            hex,
            raw,
            value: decode(raw, format),
        }
    }
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Given Val: {}", self.hex)?;
        writeln!(f, "Given Val(dec): {}", self.raw)?;
        writeln!(f, "Floating pt: {:.6}", self.value)
    }
}

/// Optional range and precision lines, shown before encoding is attempted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatSummary {
    pub range: Option<(f64, f64)>,
    pub precision: Option<f64>,
}

impl FormatSummary {
    pub fn new(format: &FixedPointFormat, show_range: bool, show_precision: bool) -> Self {
        Self {
            range: show_range.then(|| format.range()),
            precision: show_precision.then(|| format.precision()),
        }
    }
}

impl fmt::Display for FormatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((min, max)) = self.range {
            writeln!(f, "Representation range: [{min:.6}, {max:.6}]")?;
        }
        if let Some(precision) = self.precision {
            writeln!(f, "Precision: +/- {precision:.6}")?;
        }
        Ok(())
    }
}

/// Result of quantizing a real number.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeReport {
    pub given: f64,
    pub hex: String,
    pub actual: f64,
    /// `None` when the given value is zero.
    pub relative_error: Option<f64>,
}

impl EncodeReport {
    pub fn new(given: f64, value: &FixedPointValue) -> Self {
        let actual = value.to_f64();
        Self {
            given,
            hex: value.to_hex(),
            actual,
            relative_error: relative_error(given, actual).ok(),
        }
    }
}

impl fmt::Display for EncodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Given Val: {:.6}", self.given)?;
        writeln!(f, "Fixed point: {}", self.hex)?;
        writeln!(f, "Actual Val: {:.6}", self.actual)?;
        match self.relative_error {
            Some(err) => writeln!(f, "Representation Error: {:.6}%", err * 100.0),
            None => writeln!(f, "Cannot calculate error for value of 0"),
        }
    }
}
