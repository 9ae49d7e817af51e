//! Diagnostic line formatting.

use crate::error::ParseError;
use colored::Colorize;

/// Format a rejected input line as `line N: <reason>`.
///
/// Only the `line N` label is coloured so the message stays greppable.
pub fn format_line_error(line_no: usize, err: &ParseError) -> String {
    let label = format!("line {line_no}");
    format!("{}: {err}", label.red())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_error() {
        colored::control::set_override(false);
        let err = ParseError::MalformedCidr("hello".to_string());
        assert_eq!(
            format_line_error(3, &err),
            "line 3: invalid CIDR \"hello\""
        );
    }
}
