//! Clause span detector
//!
//! Finds numbered clause headings with the token pattern
//!
//! ```text
//! DIGIT  PUNCT?  TITLE
//!  "1"    "."    "Services"
//! ```
//!
//! This is a structural proxy, not a clause classifier: prose such as
//! `"5 Reasons"` matches too, and repeated headings are all reported.

use crate::document::token::Token;
use serde::{Deserialize, Serialize};

/// A matched clause heading (Value Object)
///
/// `start_index..=end_index` are token indices into the scanned sequence.
/// `text` keeps the source adjacency of its tokens: `"1. Services"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseSpan {
    pub text: String,
    pub start_index: usize,
    pub end_index: usize,
}

/// Left-to-right, non-overlapping clause pattern matcher
pub struct ClauseDetector;

impl ClauseDetector {
    pub fn detect(tokens: &[Token]) -> Vec<ClauseSpan> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos < tokens.len() {
            match Self::match_at(tokens, pos) {
                Some(end) => {
                    spans.push(Self::span(tokens, pos, end));
                    pos = end + 1;
                }
                None => pos += 1,
            }
        }

        spans
    }

    /// Try the pattern at `start`, returning the position of the title token.
    fn match_at(tokens: &[Token], start: usize) -> Option<usize> {
        if !tokens[start].is_digit {
            return None;
        }

        let mut next = start + 1;
        if tokens.get(next).is_some_and(|t| t.is_punctuation) {
            next += 1;
        }

        tokens
            .get(next)
            .filter(|t| t.is_title_case)
            .map(|_| next)
    }

    fn span(tokens: &[Token], start: usize, end: usize) -> ClauseSpan {
        let mut text = String::new();
        let mut prev_end = None;
        for token in &tokens[start..=end] {
            // Tokens separated by whitespace in the source get one space
            if prev_end.is_some_and(|e| e != token.start) {
                text.push(' ');
            }
            text.push_str(&token.text);
            prev_end = Some(token.end);
        }

        ClauseSpan {
            text,
            start_index: tokens[start].index,
            end_index: tokens[end].index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Whitespace-split tokens, with `.`/`,`/`:` split off as separate tokens
    fn tokenize(text: &str) -> Vec<Token> {
        let mut out = Vec::new();
        for word in text.split_whitespace() {
            let start = word.as_ptr() as usize - text.as_ptr() as usize;
            let (body, tail) = match word.char_indices().last() {
                Some((i, c)) if matches!(c, '.' | ',' | ':') && word.len() > 1 => {
                    (&word[..i], Some((i, &word[i..])))
                }
                _ => (word, None),
            };
            out.push(Token::classify(out.len(), body, start));
            if let Some((i, tail)) = tail {
                out.push(Token::classify(out.len(), tail, start + i));
            }
        }
        out
    }

    fn texts(spans: &[ClauseSpan]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_detects_numbered_headings_in_order() {
        let tokens = tokenize("1. Services. Consultant shall perform. 2. Term. This Agreement");
        let spans = ClauseDetector::detect(&tokens);
        assert_eq!(texts(&spans), vec!["1. Services", "2. Term"]);
        assert_eq!(spans[0].start_index, 0);
        assert_eq!(spans[0].end_index, 2);
    }

    #[test]
    fn test_punctuation_is_optional() {
        let spans = ClauseDetector::detect(&tokenize("see 7 Notices below"));
        assert_eq!(texts(&spans), vec!["7 Notices"]);
        assert_eq!(spans[0].end_index - spans[0].start_index, 1);
    }

    #[test]
    fn test_only_one_punctuation_token_allowed() {
        let tokens = vec![
            Token::classify(0, "3", 0),
            Token::classify(1, ".", 0),
            Token::classify(2, ")", 0),
            Token::classify(3, "Compensation", 0),
        ];
        assert!(ClauseDetector::detect(&tokens).is_empty());
    }

    #[test]
    fn test_lowercase_follower_fails() {
        assert!(ClauseDetector::detect(&tokenize("within 30 days of receipt")).is_empty());
        assert!(ClauseDetector::detect(&tokenize("six ( 6 ) months")).is_empty());
    }

    #[test]
    fn test_trailing_digit_without_follower() {
        assert!(ClauseDetector::detect(&tokenize("Section 4")).is_empty());
        assert!(ClauseDetector::detect(&tokenize("Section 4 .")).is_empty());
        assert!(ClauseDetector::detect(&[]).is_empty());
    }

    #[test]
    fn test_failed_start_retries_next_token() {
        // "2" fails ("3" is not title case) but scanning resumes at "3"
        let spans = ClauseDetector::detect(&tokenize("2 3 Compensation"));
        assert_eq!(texts(&spans), vec!["3 Compensation"]);
        assert_eq!(spans[0].start_index, 1);
    }

    #[test]
    fn test_text_follows_source_spacing() {
        let spans = ClauseDetector::detect(&tokenize("1. Services 2 . Term 3: Fees"));
        assert_eq!(texts(&spans), vec!["1. Services", "2 . Term", "3: Fees"]);

        // Tokens without source offsets are separated by one space
        let tokens = vec![
            Token::classify(0, "4", 0),
            Token::classify(1, ".", 0),
            Token::classify(2, "Fees", 0),
        ];
        assert_eq!(texts(&ClauseDetector::detect(&tokens)), vec!["4 . Fees"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let spans = ClauseDetector::detect(&tokenize("3. Term. text 3. Term. more"));
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, spans[1].text);
        assert!(spans[0].start_index < spans[1].start_index);
    }

    #[test]
    fn test_prose_false_positive_is_accepted() {
        let spans = ClauseDetector::detect(&tokenize("There are 5 Reasons to sign"));
        assert_eq!(texts(&spans), vec!["5 Reasons"]);
    }

    #[test]
    fn test_every_span_has_clause_shape() {
        let tokens = tokenize(
            "1. Services. 2 Term. 3: Fees 4 , 5 . Law 6 6 Notices 7. 8. Misc . 9 x 10 Y",
        );
        let spans = ClauseDetector::detect(&tokens);
        assert!(!spans.is_empty());
        for span in &spans {
            let covered = &tokens[span.start_index..=span.end_index];
            assert!(covered.first().unwrap().is_digit);
            assert!(covered.last().unwrap().is_title_case);
            assert!(covered.len() <= 3);
            if covered.len() == 3 {
                assert!(covered[1].is_punctuation);
            }
        }
    }

    #[test]
    fn test_spans_do_not_overlap() {
        let tokens = tokenize("1 2 Three 4 . Five");
        let spans = ClauseDetector::detect(&tokens);
        for pair in spans.windows(2) {
            assert!(pair[0].end_index < pair[1].start_index);
        }
        assert_eq!(texts(&spans), vec!["2 Three", "4 . Five"]);
    }
}
