//! Regex tokenizer
//!
//! Splits text into words, digit runs and single punctuation / symbol
//! characters. A trailing period stays attached only to known abbreviations
//! (`Pvt.`, `Ltd.`, `Mr.`) and single-letter initials, so `"Services."`
//! yields `Services` + `.` while `"Pvt."` stays whole.

use crate::abbreviations::is_abbreviation;
use legal_domain::Token;
use regex::Regex;

const TOKEN_PATTERN: &str = r"\d+|[\p{L}\p{M}][\p{L}\p{M}\p{N}'’-]*\.?|\S";

pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(TOKEN_PATTERN)?,
        })
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for m in self.pattern.find_iter(text) {
            let piece = m.as_str();
            match piece.strip_suffix('.') {
                Some(word) if !word.is_empty() && !Self::keeps_period(word) => {
                    tokens.push(Token::classify(tokens.len(), word, m.start()));
                    tokens.push(Token::classify(tokens.len(), ".", m.start() + word.len()));
                }
                _ => tokens.push(Token::classify(tokens.len(), piece, m.start())),
            }
        }

        tokens
    }

    fn keeps_period(word: &str) -> bool {
        let single_initial = {
            let mut chars = word.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
        };
        single_initial || is_abbreviation(word)
    }
}
