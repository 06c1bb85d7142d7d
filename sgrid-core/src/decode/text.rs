//! Text property payload decoding

use crate::error::{DecodeError, Result};
use crate::format::constants::COMMENT_MARKER;

/// Parse every numeric token after the preamble, in row-major order
///
/// Lines may hold any number of whitespace-separated values; anything after
/// a comment marker is ignored. A single bad token fails the whole payload.
pub fn decode_text(text: &str, preamble_lines: usize) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (index, line) in text.lines().enumerate().skip(preamble_lines) {
        let data = line.split(COMMENT_MARKER).next().unwrap_or_default();
        for token in data.split_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|_| DecodeError::InvalidToken {
                    line: index + 1,
                    token: token.to_string(),
                })?;
            values.push(value);
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_preamble() {
        let text = "# header\nnot a number\n# values follow\n1.5\n-2\n3e3\n";
        assert_eq!(decode_text(text, 3), Ok(vec![1.5, -2.0, 3000.0]));
    }

    #[test]
    fn test_multiple_values_per_line() {
        let text = "a\nb\nc\n1 2 3\n\n4\t5   6\n";
        assert_eq!(decode_text(text, 3), Ok(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
    }

    #[test]
    fn test_trailing_comments_ignored() {
        let text = "a\nb\nc\n1 2 # two values\n# full comment\n3\n";
        assert_eq!(decode_text(text, 3), Ok(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_bad_token_fails_whole_file() {
        let text = "a\nb\nc\n1\n2\nx3\n4\n";
        assert_eq!(
            decode_text(text, 3),
            Err(DecodeError::InvalidToken {
                line: 6,
                token: "x3".into()
            })
        );
    }

    #[test]
    fn test_short_file() {
        assert_eq!(decode_text("only\ntwo lines", 3), Ok(vec![]));
        assert_eq!(decode_text("", 0), Ok(vec![]));
    }
}
