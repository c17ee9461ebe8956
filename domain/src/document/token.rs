//! Token value object and the lexical predicates behind its flags

use serde::{Deserialize, Serialize};

/// One token of the source document (Value Object)
///
/// Flags follow the conventions of common NLP tokenizers:
/// - `is_digit`: every character is numeric (`"2"`, `"30"`, not `"12,000"`)
/// - `is_punctuation`: every character is punctuation (`"."`, `"("`, `";"`)
/// - `is_title_case`: title-cased in the `str.istitle` sense (`"Services"`,
///   `"Governing"`, `"Pvt."`), so `"AGREEMENT"` and `"term"` are not
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub index: usize,
    pub text: String,
    pub is_digit: bool,
    pub is_punctuation: bool,
    pub is_title_case: bool,
    /// Byte offset of the first character in the source document
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl Token {
    /// Create a token with every flag cleared
    fn new(index: usize, text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self {
            index,
            text,
            is_digit: false,
            is_punctuation: false,
            is_title_case: false,
            start,
            end,
        }
    }

    /// Create a token and derive its flags from the text
    pub fn classify(index: usize, text: impl Into<String>, start: usize) -> Self {
        let mut token = Self::new(index, text, start);
        token.is_digit = is_digit(&token.text);
        token.is_punctuation = is_punctuation(&token.text);
        token.is_title_case = is_title_case(&token.text);
        token
    }

}

/// Non-empty and made only of numeric characters
pub fn is_digit(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_numeric)
}

/// Non-empty and made only of punctuation characters
pub fn is_punctuation(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_punctuation_char)
}

/// Title case: uppercase letters only start a cased run, lowercase letters
/// only continue one, and at least one cased letter is present.
pub fn is_title_case(text: &str) -> bool {
    let mut previous_cased = false;
    let mut seen_cased = false;

    for ch in text.chars() {
        if ch.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if ch.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }

    seen_cased
}

/// Unicode punctuation (general category `P*`), approximated by the ASCII
/// punctuation marks and the common Latin-1 / General Punctuation blocks.
/// Currency and math symbols (`$`, `₹`, `+`) are deliberately excluded.
fn is_punctuation_char(ch: char) -> bool {
    matches!(
        ch,
        '!' | '"'
            | '#'
            | '%'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | ','
            | '-'
            | '.'
            | '/'
            | ':'
            | ';'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '_'
            | '{'
            | '}'
            | '\u{a1}'
            | '\u{a7}'
            | '\u{ab}'
            | '\u{b6}'
            | '\u{b7}'
            | '\u{bb}'
            | '\u{bf}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{2043}'
            | '\u{2045}'..='\u{2051}'
            | '\u{2053}'..='\u{205e}'
            | '\u{3001}'..='\u{3003}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_digit() {
        assert!(is_digit("1"));
        assert!(is_digit("2025"));
        assert!(!is_digit(""));
        assert!(!is_digit("12,000"));
        assert!(!is_digit("1."));
        assert!(!is_digit("six"));
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation("."));
        assert!(is_punctuation("),"));
        assert!(is_punctuation("\u{201c}"));
        assert!(is_punctuation("\u{2014}"));
        assert!(!is_punctuation(""));
        assert!(!is_punctuation("$"));
        assert!(!is_punctuation("\u{20b9}"));
        assert!(!is_punctuation("1."));
    }

    #[test]
    fn test_is_title_case() {
        assert!(is_title_case("Services"));
        assert!(is_title_case("Term"));
        assert!(is_title_case("Pvt."));
        assert!(is_title_case("Uttar-Pradesh"));
        assert!(!is_title_case("AGREEMENT"));
        assert!(!is_title_case("term"));
        assert!(!is_title_case("McDonald"));
        assert!(!is_title_case("1"));
        assert!(!is_title_case("."));
    }

    #[test]
    fn test_classify_sets_flags() {
        let token = Token::classify(4, "Confidentiality", 120);
        assert!(token.is_title_case);
        assert!(!token.is_digit);
        assert!(!token.is_punctuation);
        assert_eq!(token.end, 120 + "Confidentiality".len());

        let token = Token::classify(0, "4", 0);
        assert!(token.is_digit && !token.is_title_case);
    }
}
