//! Parsing utilities for SGrid header tokens
//!
//! Pure helpers shared by the header parser. Each returns `None` for a
//! malformed record so that the caller can skip the line.

use crate::format::constants::{COMMENT_MARKER, QUOTE};
use crate::format::Vec3;

/// Strip surrounding quote characters from a token
///
/// All leading and trailing quotes are removed, so `""name""` becomes `name`.
pub fn strip_quotes(token: &str) -> &str {
    token.trim_matches(QUOTE)
}

/// Whether a trimmed header line carries no record
pub fn is_ignorable(line: &str) -> bool {
    line.is_empty() || line.starts_with(COMMENT_MARKER)
}

/// Parse the three float components following a keyword
///
/// `tokens` includes the keyword itself; at least four tokens are required.
pub fn parse_vec3(tokens: &[&str]) -> Option<Vec3> {
    if tokens.len() < 4 {
        return None;
    }
    let x = tokens[1].parse::<f64>().ok()?;
    let y = tokens[2].parse::<f64>().ok()?;
    let z = tokens[3].parse::<f64>().ok()?;
    Some(Vec3::new(x, y, z))
}

/// Parse the three cell counts following `AXIS_N`
///
/// Counts must be positive integers.
pub fn parse_counts(tokens: &[&str]) -> Option<[u32; 3]> {
    if tokens.len() < 4 {
        return None;
    }
    let mut counts = [0u32; 3];
    for (slot, token) in counts.iter_mut().zip(&tokens[1..4]) {
        let count = token.parse::<u32>().ok()?;
        if count == 0 {
            return None;
        }
        *slot = count;
    }
    Some(counts)
}

/// Join the tokens after the keyword with single spaces
pub fn rest_of_line(tokens: &[&str]) -> String {
    tokens.get(1..).unwrap_or_default().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"density\""), "density");
        assert_eq!(strip_quotes("density"), "density");
        assert_eq!(strip_quotes("\"\"x\"\""), "x");
        assert_eq!(strip_quotes("\"open"), "open");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn test_is_ignorable() {
        assert!(is_ignorable(""));
        assert!(is_ignorable("# comment"));
        assert!(!is_ignorable("AXIS_N 1 2 3"));
    }

    #[test]
    fn test_parse_vec3() {
        assert_eq!(
            parse_vec3(&["AXIS_O", "1.5", "-2", "3e2"]),
            Some(Vec3::new(1.5, -2.0, 300.0))
        );
        // Extra tokens are ignored
        assert_eq!(
            parse_vec3(&["AXIS_U", "1", "0", "0", "junk"]),
            Some(Vec3::new(1.0, 0.0, 0.0))
        );

        // Invalid cases
        assert_eq!(parse_vec3(&["AXIS_O", "1", "2"]), None);
        assert_eq!(parse_vec3(&["AXIS_O", "1", "two", "3"]), None);
    }

    #[test]
    fn test_parse_counts() {
        assert_eq!(parse_counts(&["AXIS_N", "10", "20", "5"]), Some([10, 20, 5]));

        // Invalid cases
        assert_eq!(parse_counts(&["AXIS_N", "10", "20"]), None);
        assert_eq!(parse_counts(&["AXIS_N", "10", "0", "5"]), None);
        assert_eq!(parse_counts(&["AXIS_N", "10", "-2", "5"]), None);
        assert_eq!(parse_counts(&["AXIS_N", "10.5", "2", "5"]), None);
    }

    #[test]
    fn test_rest_of_line() {
        assert_eq!(rest_of_line(&["GOCAD", "SGrid", "1"]), "SGrid 1");
        assert_eq!(rest_of_line(&["GOCAD"]), "");
    }
}
