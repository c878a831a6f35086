//! Numeric value tokens and unit suffixes

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::PX_PER_REM;

static NUMERIC_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:-?\d+|n\d+)").unwrap());
static NUMBER_WITH_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)(.*)$").unwrap());
static PLAIN_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").unwrap());

/// True for `20`, `20px`, `-5p` and the negative-marker form `n20px`.
pub fn is_numeric(token: &str) -> bool {
    NUMERIC_TOKEN.is_match(token)
}

/// Apply the unit table to a numeric token. Non-numeric tokens come back unchanged.
///
/// | suffix  | output      |
/// |---------|-------------|
/// | `px`    | `<n>px`     |
/// | `p`     | `<n>%`      |
/// | `pxrem` | `<n/16>rem` |
/// | `div10` | `<n/10>`    |
/// | `div100`| `<n/100>`   |
/// | other   | `<n><suffix>` |
pub fn convert_numeric(token: &str) -> String {
    if !is_numeric(token) {
        return token.to_string();
    }

    let (negative, body) = match token.strip_prefix('n').or_else(|| token.strip_prefix('-')) {
        Some(body) => (true, body),
        None => (false, token),
    };

    let Some(caps) = NUMBER_WITH_SUFFIX.captures(body) else {
        return token.to_string();
    };
    let digits = &caps[1];
    let suffix = &caps[2];
    let number = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    let value = number.parse::<f64>().unwrap_or_default();

    match suffix {
        "px" => format!("{}px", number),
        "p" => format!("{}%", number),
        "pxrem" => format!("{}rem", format_number(value / PX_PER_REM)),
        "div10" => format_number(value / 10.0),
        "div100" => format_number(value / 100.0),
        _ => format!("{}{}", number, suffix),
    }
}

/// Scale a bare integer (pixels) to rem; anything else is returned unchanged.
pub fn scale_integer_to_rem(value: &str) -> String {
    if !PLAIN_INTEGER.is_match(value) {
        return value.to_string();
    }
    match value.parse::<f64>() {
        Ok(px) => format!("{}rem", format_number(px / PX_PER_REM)),
        Err(_) => value.to_string(),
    }
}

/// Shortest decimal rendering, without a trailing `.0` and without negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_detection() {
        assert!(is_numeric("20"));
        assert!(is_numeric("20px"));
        assert!(is_numeric("-5p"));
        assert!(is_numeric("n20px"));
        assert!(!is_numeric("none"));
        assert!(!is_numeric("solid"));
        assert!(!is_numeric("px20"));
    }

    #[test]
    fn test_unit_table() {
        assert_eq!(convert_numeric("20px"), "20px");
        assert_eq!(convert_numeric("50p"), "50%");
        assert_eq!(convert_numeric("32pxrem"), "2rem");
        assert_eq!(convert_numeric("5div10"), "0.5");
        assert_eq!(convert_numeric("50div100"), "0.5");
        assert_eq!(convert_numeric("100dvh"), "100dvh");
        assert_eq!(convert_numeric("12"), "12");
    }

    #[test]
    fn test_negative_forms() {
        assert_eq!(convert_numeric("n20px"), "-20px");
        assert_eq!(convert_numeric("-50p"), "-50%");
        assert_eq!(convert_numeric("n8pxrem"), "-0.5rem");
        assert_eq!(convert_numeric("n3"), "-3");
        assert_eq!(convert_numeric("n0pxrem"), "0rem");
    }

    #[test]
    fn test_non_numeric_passthrough() {
        assert_eq!(convert_numeric("auto"), "auto");
    }

    #[test]
    fn test_scale_integer_to_rem() {
        assert_eq!(scale_integer_to_rem("10"), "0.625rem");
        assert_eq!(scale_integer_to_rem("-16"), "-1rem");
        assert_eq!(scale_integer_to_rem("10px"), "10px");
        assert_eq!(scale_integer_to_rem("50%"), "50%");
    }
}
