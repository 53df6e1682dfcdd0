//! Field validators - one token in, one typed value out
//!
//! These are plugged into clap as `value_parser = fn`, so clap attaches the
//! option name to any `ValueError` they return.

use std::borrow::Cow;

use crate::error::ValueError;

const TRUE_WORDS: [&str; 5] = ["yes", "true", "t", "y", "1"];
const FALSE_WORDS: [&str; 5] = ["no", "false", "f", "n", "0"];

/// Drop `_` digit-group separators, but only when every `_` sits between two
/// digits (`1_000`). Anything else is left for the number parser to reject.
fn without_digit_separators(value: &str) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    let separated = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });
    if separated && value.contains('_') {
        Cow::Owned(value.replace('_', ""))
    } else {
        Cow::Borrowed(value)
    }
}

/// Any integer
pub fn integer(value: &str) -> Result<i64, ValueError> {
    without_digit_separators(value.trim())
        .parse::<i64>()
        .map_err(|_| ValueError::NotAnInteger(value.to_string()))
}

/// Any float
pub fn float(value: &str) -> Result<f64, ValueError> {
    without_digit_separators(value.trim())
        .parse::<f64>()
        .map_err(|_| ValueError::NotAFloat(value.to_string()))
}

/// Integer strictly greater than zero
pub fn positive_int(value: &str) -> Result<usize, ValueError> {
    let ivalue = integer(value)?;
    if ivalue <= 0 {
        return Err(ValueError::NotPositive(value.to_string()));
    }
    usize::try_from(ivalue).map_err(|_| ValueError::NotAnInteger(value.to_string()))
}

/// Integer greater than or equal to zero
pub fn non_negative_int(value: &str) -> Result<usize, ValueError> {
    let ivalue = integer(value)?;
    if ivalue < 0 {
        return Err(ValueError::Negative(value.to_string()));
    }
    usize::try_from(ivalue).map_err(|_| ValueError::NotAnInteger(value.to_string()))
}

/// Float in the closed interval [0, 1]. NaN is rejected.
pub fn float_0_1(value: &str) -> Result<f64, ValueError> {
    let fvalue = float(value)?;
    if !(0.0..=1.0).contains(&fvalue) {
        return Err(ValueError::OutOfUnitInterval(value.to_string()));
    }
    Ok(fvalue)
}

/// Case-insensitive boolean word
pub fn str2bool(value: &str) -> Result<bool, ValueError> {
    let lower = value.to_lowercase();
    if TRUE_WORDS.contains(&lower.as_str()) {
        Ok(true)
    } else if FALSE_WORDS.contains(&lower.as_str()) {
        Ok(false)
    } else {
        Err(ValueError::NotABoolean(value.to_string()))
    }
}
