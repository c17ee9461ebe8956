//! Abbreviations whose trailing period does not end a sentence
//!
//! Shared by the tokenizer (keeps `Pvt.` as one token) and the extractive
//! summarizer's sentence splitter. Matching ignores ASCII case.

const ABBREVIATIONS: &[&str] = &[
    "co", "corp", "dr", "e.g", "etc", "i.e", "inc", "jr", "ltd", "mr", "mrs", "ms", "no", "prof",
    "pvt", "sr", "st", "viz", "vs",
];

/// `word` without its trailing period, e.g. `"Pvt"` or `"e.g"`
pub(crate) fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS
        .iter()
        .any(|abbr| abbr.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_any_case() {
        assert!(is_abbreviation("Pvt"));
        assert!(is_abbreviation("LTD"));
        assert!(is_abbreviation("e.g"));
        assert!(is_abbreviation("I.E"));
    }

    #[test]
    fn test_ordinary_words_are_not_abbreviations() {
        assert!(!is_abbreviation("Services"));
        assert!(!is_abbreviation("Pvt."));
        assert!(!is_abbreviation(""));
    }
}
