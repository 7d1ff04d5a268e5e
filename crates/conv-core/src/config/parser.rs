//! Typed parsing of raw setting values

use crate::{Error, Result};

/// Parse a boolean setting.
///
/// The value is trimmed and compared case-insensitively with `true` and
/// `false`. `None` yields `default`; anything else, including an empty
/// string, is rejected.
pub fn parse_boolean(key: &str, value: Option<&str>, default: bool) -> Result<bool> {
    let Some(value) = value.map(str::trim) else {
        return Ok(default);
    };

    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::InvalidBoolean {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Parse a string setting.
///
/// `None` stays absent. A present value is trimmed and must not be empty.
pub fn parse_string(key: &str, value: Option<&str>) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::BlankValue {
            key: key.to_string(),
        });
    }
    Ok(Some(trimmed.to_string()))
}
