use thiserror::Error;

use crate::format::FixedPointFormat;

/// Errors for fixed-point operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FixedPointError {
    /// Container width outside {8, 16, 32, 64}.
    #[error("Invalid bit length {0}: must be one of 8, 16, 32 or 64")]
    InvalidBits(i64),

    #[error("{value:.6} causes overflow with fixed-point format {format}")]
    Overflow {
        value: f64,
        format: FixedPointFormat,
    },

    /// A raw container value that cannot be stored in the format.
    #[error("Raw value {raw} out of range for fixed-point format {format}")]
    OutOfRange {
        raw: i128,
        format: FixedPointFormat,
    },

    #[error("Relative error is undefined for an original value of 0")]
    UndefinedRelativeError,

    #[error("Invalid fixed-point format '{0}': expected I.F or UI.F, e.g. Q16.16 or UQ8.8")]
    InvalidFormatSpec(String),
}

pub type Result<T> = std::result::Result<T, FixedPointError>;
