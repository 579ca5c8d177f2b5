use std::io::Write;

use fixed_codec::FixedPointValue;
use tracing::{info, warn};

use crate::args::{Fixed2FloatArgs, Float2FixedArgs};
use crate::error::CliError;
use crate::report::{DecodeReport, EncodeReport, FormatSummary};

impl Fixed2FloatArgs {
    /// Decodes the literal and writes the report to `out`.
    ///
    /// A literal that does not fit the container is decoded anyway with a
    /// warning, unless `--strict` is set.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let format = self.format.resolve()?;
        info!(%format, number = %self.number, "fixed2float");

        if let Err(err) = FixedPointValue::from_raw(self.number, format) {
            if self.strict {
                return Err(err.into());
            }
            warn!("{err}; decoding anyway and showing the unmasked value");
        }

        write!(out, "{}", DecodeReport::new(self.number, &format))?;
        Ok(())
    }
}

impl Float2FixedArgs {
    /// Quantizes the number and writes the report to `out`.
    ///
    /// Range and precision lines are written before encoding, so they are
    /// still shown when the number overflows.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let format = self.format.resolve()?;
        info!(%format, number = self.number, "float2fixed");

        write!(
            out,
            "{}",
            FormatSummary::new(&format, self.show_range, self.show_precision)
        )?;

        let value = FixedPointValue::encode(self.number, format)?;
        write!(out, "{}", EncodeReport::new(self.number, &value))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn fixed2float(argv: &[&str]) -> (Result<(), CliError>, String) {
        let args = Fixed2FloatArgs::try_parse_from(std::iter::once("fixed2float").chain(argv.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let result = args.run(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn float2fixed(argv: &[&str]) -> (Result<(), CliError>, String) {
        let args = Float2FixedArgs::try_parse_from(std::iter::once("float2fixed").chain(argv.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let result = args.run(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_fixed2float_hex_literal() {
        let (result, out) = fixed2float(&["--bits", "16", "--frac", "8", "0xFF00"]);
        assert!(result.is_ok());
        assert_eq!(out, "Given Val: 0xff00\nGiven Val(dec): 65280\nFloating pt: 255.000000\n");
    }

    #[test]
    fn test_fixed2float_out_of_range_is_lenient() {
        let (result, out) = fixed2float(&["-b", "8", "-f", "0", "300"]);
        assert!(result.is_ok());
        assert!(out.starts_with("Given Val: 0x12c\n"));
        assert!(out.contains("Given Val(dec): 300\n"));
        assert!(out.contains("Floating pt: 300.000000\n"));
    }

    #[test]
    fn test_fixed2float_strict() {
        let (result, out) = fixed2float(&["-b", "8", "-f", "0", "--strict", "300"]);
        assert_eq!(result.unwrap_err().exit_code(), 3);
        assert!(out.is_empty());
    }

    #[test]
    fn test_fixed2float_invalid_bits() {
        let (result, out) = fixed2float(&["-b", "12", "1"]);
        assert_eq!(result.unwrap_err().exit_code(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_float2fixed_default() {
        let (result, out) = float2fixed(&["3.5"]);
        assert!(result.is_ok());
        assert_eq!(
            out,
            "Given Val: 3.500000\nFixed point: 0x00038000\nActual Val: 3.500000\nRepresentation Error: 0.000000%\n"
        );
    }

    #[test]
    fn test_float2fixed_overflow_after_summary() {
        let (result, out) = float2fixed(&["-b", "8", "-f", "4", "-s", "-r", "-p", "127.0"]);
        assert_eq!(result.unwrap_err().exit_code(), 2);
        assert_eq!(out, "Representation range: [-8.000000, 7.937500]\nPrecision: +/- 0.062500\n");
    }

    #[test]
    fn test_float2fixed_negative_signed() {
        let (result, out) = float2fixed(&["-b", "8", "-f", "4", "-s", "-1.5"]);
        assert!(result.is_ok());
        assert!(out.contains("Fixed point: 0xe8\n"));
        assert!(out.contains("Actual Val: -1.500000\n"));
    }

    #[test]
    fn test_float2fixed_zero() {
        let (result, out) = float2fixed(&["0"]);
        assert!(result.is_ok());
        assert!(out.ends_with("Cannot calculate error for value of 0\n"));
    }

    #[test]
    fn test_float2fixed_format_preset() {
        let (result, out) = float2fixed(&["--format", "UQ8.8", "1.25"]);
        assert!(result.is_ok());
        assert!(out.contains("Fixed point: 0x0140\n"));
    }
}
