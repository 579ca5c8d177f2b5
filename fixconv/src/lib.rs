//! # fixconv
//!
//! Command-line front end for [`fixed_codec`]: the `fixed2float` and
//! `float2fixed` tools.
//!
//! ```text
//! $ fixed2float --bits 16 --frac 8 0xFF00
//! Given Val: 0xff00
//! Given Val(dec): 65280
//! Floating pt: 255.000000
//!
//! $ float2fixed --signed --show-range 3.5
//! Representation range: [-32768.000000, 32767.999985]
//! Given Val: 3.500000
//! Fixed point: 0x00038000
//! Actual Val: 3.500000
//! Representation Error: 0.000000%
//! ```
//!
//! Both tools read their default `--bits` and `--frac` from `FIXCONV_BITS`
//! and `FIXCONV_FRAC`. Diagnostics go to stderr, filtered by `RUST_LOG`.
//!
//! Exit status: 0 on success, 1 for an invalid format, 2 when the number
//! overflows the format, 3 for an out-of-range literal with `--strict`.

pub mod args;
pub mod commands;
pub mod error;
pub mod literal;
pub mod logging;
pub mod report;

pub use args::{Fixed2FloatArgs, Float2FixedArgs, FormatArgs};
pub use error::{CliError, finish};
pub use literal::{LiteralError, parse_int_literal};
pub use logging::init_logging;
