use primitive_types::U256;
use thiserror::Error;

// offset between a 64-bit steam id and the 32-bit account id used by opendota
const STEAM64_BASE: &str = "76561197960265728";

// ids are parsed into a U256, so magnitudes of 2^256 and above are refused
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("ParseError: {0:?} is not a base-10 integer.")]
    NotInteger(String),
    #[error("ParseError: {0:?} does not fit in 256 bits.")]
    TooLarge(String),
}

fn parse_signed(input: &str) -> Result<(bool, U256), ParseError> {
    let (negative, digits) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    // from_dec_str accepts an empty string as zero
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NotInteger(input.to_string()));
    }
    // only overflow is left once the digits are checked
    let value =
        U256::from_dec_str(digits).map_err(|_| ParseError::TooLarge(input.to_string()))?;
    Ok((negative && !value.is_zero(), value))
}

/// Converts a 64-bit steam id into the 32-bit account id, keeping the exact
/// decimal difference even when it falls outside of `u32`.
pub fn steam64_to_32(steam64: &str) -> Result<String, ParseError> {
    let (negative, value) = parse_signed(steam64)?;
    let base = U256::from_dec_str(STEAM64_BASE)
        .map_err(|_| ParseError::NotInteger(STEAM64_BASE.into()))?;

    let (negative, diff) = match (negative, value >= base) {
        (false, true) => (false, value - base),
        (false, false) => (true, base - value),
        // -value - base, the magnitude may overflow
        (true, _) => (
            true,
            value
                .checked_add(base)
                .ok_or_else(|| ParseError::TooLarge(steam64.to_string()))?,
        ),
    };

    if negative && !diff.is_zero() {
        Ok(format!("-{}", diff))
    } else {
        Ok(diff.to_string())
    }
}
