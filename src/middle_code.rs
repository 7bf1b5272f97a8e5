use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

lazy_static! {
    static ref MIDDLE_CODE_RE: Regex = Regex::new(r"^\d{4}$").unwrap();
}

/// Manual middle-code entry error type
#[derive(Debug, PartialEq)]
pub enum InputError {
    Empty,
    NoValidCodes,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Input cannot be empty"),
            InputError::NoValidCodes => write!(
                f,
                "No valid middle codes detected (enter 4-digit numbers separated by commas)"
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// True iff the code is exactly four ASCII digits.
pub fn is_valid(code: &str) -> bool {
    MIDDLE_CODE_RE.is_match(code)
}

/// Parses one line of comma-separated middle codes. Tokens are trimmed,
/// invalid ones dropped, duplicates removed keeping first-seen order.
pub fn parse_manual(input: &str) -> Result<Vec<String>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }

    let mut seen = HashSet::new();
    let mut valid_codes = Vec::new();
    for raw in input.split(',') {
        let code = raw.trim();
        if is_valid(code) && seen.insert(code.to_string()) {
            valid_codes.push(code.to_string());
        }
    }

    if valid_codes.is_empty() {
        return Err(InputError::NoValidCodes);
    }
    Ok(valid_codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_four_digit_codes() {
        assert!(is_valid("0537"));
        assert!(is_valid("0000"));
        assert!(is_valid("9999"));
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(!is_valid("537"));
        assert!(!is_valid("05a7"));
        assert!(!is_valid("05377"));
        assert!(!is_valid(""));
        assert!(!is_valid(" 0537"));
    }

    #[test]
    fn parse_manual_trims_dedupes_and_keeps_order() {
        let codes = parse_manual("0537,0100,0537, 0210").unwrap();
        assert_eq!(codes, vec!["0537", "0100", "0210"]);
    }

    #[test]
    fn parse_manual_rejects_blank_input() {
        assert_eq!(parse_manual(""), Err(InputError::Empty));
        assert_eq!(parse_manual("   "), Err(InputError::Empty));
    }

    #[test]
    fn parse_manual_rejects_input_with_no_valid_codes() {
        assert_eq!(parse_manual("53,abcd,12345"), Err(InputError::NoValidCodes));
    }

    #[test]
    fn parse_manual_drops_invalid_tokens_but_keeps_valid_ones() {
        let codes = parse_manual("abcd,0537,53").unwrap();
        assert_eq!(codes, vec!["0537"]);
    }
}
