//! Integer literals in standard base notation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("empty integer literal")]
    Empty,

    #[error("invalid integer literal '{0}'")]
    InvalidDigits(String),

    #[error("leading zeros are not allowed in decimal literal '{0}'; use 0o for octal")]
    LeadingZero(String),

    #[error("integer literal '{0}' is too large")]
    TooLarge(String),
}

/// Parses an integer written in decimal, `0x` hex, `0o` octal or `0b` binary.
///
/// An optional sign and surrounding whitespace are accepted, as are single
/// underscores between digits (`1_000`, `0x_ff_00`). Non-zero decimal
/// literals may not start with `0`.
///
/// # Examples
///
/// ```
/// use fixconv::parse_int_literal;
///
/// assert_eq!(parse_int_literal("0xFF00"), Ok(65280));
/// assert_eq!(parse_int_literal("-0b1010"), Ok(-10));
/// assert!(parse_int_literal("010").is_err());
/// ```
pub fn parse_int_literal(text: &str) -> Result<i128, LiteralError> {
    let invalid = || LiteralError::InvalidDigits(text.to_string());

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LiteralError::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, body) = split_radix(unsigned);
    let digits = strip_underscores(body).ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(invalid());
    }
    if radix == 10 && digits.starts_with('0') && digits.bytes().any(|b| b != b'0') {
        return Err(LiteralError::LeadingZero(text.to_string()));
    }

    let magnitude = u128::from_str_radix(&digits, radix).map_err(|err| match err.kind() {
        std::num::IntErrorKind::PosOverflow => LiteralError::TooLarge(text.to_string()),
        _ => invalid(),
    })?;
    let value = i128::try_from(magnitude).map_err(|_| LiteralError::TooLarge(text.to_string()))?;

    Ok(if negative { -value } else { value })
}

/// Splits off a `0x`/`0o`/`0b` prefix, along with one underscore after it.
fn split_radix(text: &str) -> (u32, &str) {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        let radix = match bytes[1].to_ascii_lowercase() {
            b'x' => Some(16),
            b'o' => Some(8),
            b'b' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            let rest = &text[2..];
            return (radix, rest.strip_prefix('_').unwrap_or(rest));
        }
    }
    (10, text)
}

fn strip_underscores(body: &str) -> Option<String> {
    if body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return None;
    }
    Some(body.replace('_', ""))
}
