use clap::{Args, Parser};

use fixed_codec::{FixedPointFormat, Result, validate_bits};

use crate::literal::parse_int_literal;

/// Fixed-point format options shared by both tools.
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// The number of bits of the fixed point number: 8, 16, 32 or 64
    #[arg(short, long, default_value_t = 32, env = "FIXCONV_BITS", allow_negative_numbers = true)]
    pub bits: i64,

    /// The number of bits representing the fractional part of the fixed point number
    #[arg(short, long, default_value_t = 16, env = "FIXCONV_FRAC")]
    pub frac: u32,

    /// Use signed (two's complement) integers. fixed2float reads its number as
    /// a value, not a bit pattern, so write negative inputs as negative
    /// literals (-0x10, not 0xf0)
    #[arg(short, long)]
    pub signed: bool,

    /// Format in I.F notation, e.g. Q16.16 or UQ8.8; overrides --bits, --frac and --signed
    #[arg(short = 'q', long = "format", value_name = "I.F")]
    pub format: Option<String>,
}

impl FormatArgs {
    /// Validates the options into a format.
    pub fn resolve(&self) -> Result<FixedPointFormat> {
        match &self.format {
            Some(spec) => spec.parse(),
            None => {
                let width = validate_bits(self.bits)?;
                Ok(FixedPointFormat::with_width(width, self.frac, self.signed))
            }
        }
    }
}

/// Convert fixed point numbers to floating point
#[derive(Debug, Parser)]
#[command(name = "fixed2float", version)]
pub struct Fixed2FloatArgs {
    #[command(flatten)]
    pub format: FormatArgs,

    /// Fail instead of warning when the number does not fit the container.
    /// With --signed, 0x80..0xff do not fit 8 bits; pass -0x80..-0x01 instead
    #[arg(long)]
    pub strict: bool,

    /// The number to convert, using standard base notation (e.g. 42, 0x2a, 0o52, 0b101010)
    #[arg(value_parser = parse_int_literal, allow_hyphen_values = true)]
    pub number: i128,
}

/// Convert floating point to fixed point numbers
#[derive(Debug, Parser)]
#[command(name = "float2fixed", version)]
pub struct Float2FixedArgs {
    #[command(flatten)]
    pub format: FormatArgs,

    /// Display the valid range of the fixed point number
    #[arg(short = 'r', long)]
    pub show_range: bool,

    /// Display the precision of the fixed point number
    #[arg(short = 'p', long)]
    pub show_precision: bool,

    /// The number to convert
    #[arg(allow_hyphen_values = true)]
    pub number: f64,
}
