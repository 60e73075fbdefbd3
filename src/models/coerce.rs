//! Lenient numeric coercion
//!
//! Malformed numeric cells never fail a read or an update: marks fall back
//! to 0.0 and credits fall back to "no value".

/// Parse a marks value; blank, malformed or non-finite input becomes 0.0
pub fn parse_marks(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parse a credits value; blank or malformed input becomes `None`
pub fn parse_credits(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

/// Force an already-numeric marks value to be finite
pub fn finite_marks(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marks() {
        assert_eq!(parse_marks("97"), 97.0);
        assert_eq!(parse_marks(" 88.5 "), 88.5);
        assert_eq!(parse_marks(""), 0.0);
        assert_eq!(parse_marks("A+"), 0.0);
        assert_eq!(parse_marks("NaN"), 0.0);
        assert_eq!(parse_marks("inf"), 0.0);
    }

    #[test]
    fn test_parse_credits() {
        assert_eq!(parse_credits("3"), Some(3));
        assert_eq!(parse_credits(" 4 "), Some(4));
        assert_eq!(parse_credits("-1"), Some(-1));
        assert_eq!(parse_credits(""), None);
        assert_eq!(parse_credits("3.5"), None);
        assert_eq!(parse_credits("three"), None);
    }

    #[test]
    fn test_finite_marks() {
        assert_eq!(finite_marks(91.0), 91.0);
        assert_eq!(finite_marks(f64::NAN), 0.0);
        assert_eq!(finite_marks(f64::NEG_INFINITY), 0.0);
    }
}
