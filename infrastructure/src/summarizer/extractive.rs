//! Extractive summarizer
//!
//! Scores sentences by the document frequency of their content words and
//! keeps the best ones, in document order, until the summary reaches
//! `min_length` words without exceeding `max_length`.

use crate::abbreviations::is_abbreviation;
use async_trait::async_trait;
use legal_application::{SummarizationError, Summarizer};
use legal_domain::SummaryBounds;
use std::collections::HashMap;
use tracing::debug;

/// Sentences shorter than this (in words) are never selected
const MIN_SENTENCE_WORDS: usize = 3;

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "shall", "may", "might", "must", "can", "this",
    "that", "these", "those", "it", "its", "as", "if", "then", "than", "so", "such", "no", "not",
    "only", "same", "very", "also", "here", "there", "herein", "hereby", "when", "where", "all",
    "each", "any", "into", "upon", "within", "other", "they", "we", "you", "he", "she", "his",
    "her", "their", "our", "which", "who", "whom", "what", "per",
];

#[derive(Debug)]
struct Sentence {
    position: usize,
    text: String,
    word_count: usize,
    score: f64,
}

/// Frequency-based extractive summarizer; lengths are counted in words
#[derive(Debug, Clone, Default)]
pub struct ExtractiveSummarizer;

impl ExtractiveSummarizer {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous core of [`Summarizer::summarize`]
    pub fn summarize_text(
        &self,
        text: &str,
        bounds: SummaryBounds,
    ) -> Result<String, SummarizationError> {
        if text.trim().is_empty() {
            return Err(SummarizationError::EmptyInput);
        }

        let mut sentences = split_sentences(text);
        if sentences.is_empty() {
            debug!("No scorable sentences, falling back to leading words");
            return Ok(take_words(text, bounds.max_length));
        }

        score_sentences(&mut sentences);

        let mut ranked: Vec<&Sentence> = sentences.iter().collect();
        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.position.cmp(&b.position))
        });

        let mut chosen: Vec<&Sentence> = Vec::new();
        let mut words = 0;
        for sentence in ranked.iter().copied() {
            if words >= bounds.min_length {
                break;
            }
            if words + sentence.word_count > bounds.max_length {
                continue;
            }
            words += sentence.word_count;
            chosen.push(sentence);
        }

        if chosen.is_empty() {
            // Every sentence is longer than max_length; cut the best one
            return Ok(take_words(&ranked[0].text, bounds.max_length));
        }

        chosen.sort_by_key(|s| s.position);
        debug!(
            "Selected {} of {} sentences ({} words)",
            chosen.len(),
            sentences.len(),
            words
        );

        Ok(chosen
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    fn name(&self) -> &str {
        "extractive"
    }

    async fn summarize(
        &self,
        text: &str,
        bounds: SummaryBounds,
    ) -> Result<String, SummarizationError> {
        self.summarize_text(text, bounds)
    }
}

/// Paragraph-aware sentence splitter; headings and fragments are dropped
fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();

    for paragraph in text.split("\n\n") {
        let mut current: Vec<&str> = Vec::new();
        for word in paragraph.split_whitespace() {
            current.push(word);
            if ends_sentence(word) {
                push_sentence(&mut sentences, &current);
                current.clear();
            }
        }
        push_sentence(&mut sentences, &current);
    }

    sentences
}

fn push_sentence(out: &mut Vec<Sentence>, words: &[&str]) {
    if words.len() < MIN_SENTENCE_WORDS || is_heading(words) {
        return;
    }
    out.push(Sentence {
        position: out.len(),
        text: words.join(" "),
        word_count: words.len(),
        score: 0.0,
    });
}

fn ends_sentence(word: &str) -> bool {
    let trimmed = word.trim_end_matches(['"', '\'', ')', '”', '’']);
    let Some(stem) = trimmed.strip_suffix(['.', '!', '?']) else {
        return false;
    };
    if trimmed.ends_with(['!', '?']) {
        return true;
    }

    let stem = stem.trim_start_matches(['"', '(', '“']);
    let numbering = !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit());
    let initial = stem.chars().count() == 1 && stem.chars().all(char::is_uppercase);
    !(numbering || initial || is_abbreviation(stem))
}

/// All-caps lines such as `AGREEMENT FOR CONSULTING SERVICES`
fn is_heading(words: &[&str]) -> bool {
    let mut letters = words.iter().flat_map(|w| w.chars()).filter(|c| c.is_alphabetic());
    let mut any = false;
    let all_upper = letters.all(|c| {
        any = true;
        c.is_uppercase()
    });
    any && all_upper
}

fn content_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
}

/// Mean document frequency of each sentence's content words
fn score_sentences(sentences: &mut [Sentence]) {
    let mut frequency: HashMap<String, usize> = HashMap::new();
    for sentence in sentences.iter() {
        for word in content_words(&sentence.text) {
            *frequency.entry(word).or_insert(0) += 1;
        }
    }

    for sentence in sentences.iter_mut() {
        let (total, count) = content_words(&sentence.text).fold((0usize, 0usize), |acc, w| {
            (acc.0 + frequency.get(&w).copied().unwrap_or(0), acc.1 + 1)
        });
        sentence.score = if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        };
    }
}

fn take_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use legal_domain::SAMPLE_AGREEMENT;

    fn word_count(s: &str) -> usize {
        s.split_whitespace().count()
    }

    #[test]
    fn test_sentence_splitting_respects_abbreviations_and_numbering() {
        let sentences = split_sentences(
            "AGREEMENT FOR SERVICES\n\n1. Services. Rogue Company Pvt. Ltd. hires Prerna today. She starts on Monday!",
        );
        let texts: Vec<_> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Rogue Company Pvt. Ltd. hires Prerna today.",
                "She starts on Monday!"
            ]
        );

        let sentences =
            split_sentences("Fees cover travel, e.g. flights and hotels. Invoices are monthly.");
        let texts: Vec<_> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Fees cover travel, e.g. flights and hotels.", "Invoices are monthly."]
        );
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let result = ExtractiveSummarizer::new().summarize_text("  \n ", SummaryBounds::console());
        assert!(matches!(result, Err(SummarizationError::EmptyInput)));
    }

    #[test]
    fn test_summary_respects_max_length() {
        let bounds = SummaryBounds::new(10, 40).unwrap();
        let summary = ExtractiveSummarizer::new()
            .summarize_text(SAMPLE_AGREEMENT, bounds)
            .unwrap();
        assert!(!summary.is_empty());
        assert!(word_count(&summary) <= 40);
    }

    #[test]
    fn test_summary_reaches_min_length_when_possible() {
        let summary = ExtractiveSummarizer::new()
            .summarize_text(SAMPLE_AGREEMENT, SummaryBounds::console())
            .unwrap();
        let words = word_count(&summary);
        assert!((30..=100).contains(&words), "got {} words", words);
    }

    #[test]
    fn test_selected_sentences_keep_document_order() {
        let text = "Consultant shall deliver the report. The weather was pleasant today. \
                    Consultant shall deliver the report review to Company.";
        let bounds = SummaryBounds::new(1, 100).unwrap();
        let summary = ExtractiveSummarizer::new()
            .summarize_text(text, bounds)
            .unwrap();
        assert_eq!(summary, "Consultant shall deliver the report.");

        let bounds = SummaryBounds::new(12, 100).unwrap();
        let summary = ExtractiveSummarizer::new()
            .summarize_text(text, bounds)
            .unwrap();
        assert!(summary.starts_with("Consultant shall deliver the report."));
        assert!(summary.ends_with("review to Company."));
    }

    #[test]
    fn test_overlong_sentence_is_cut_to_max_length() {
        let text = "Consultant shall perform every service described in the attached schedule without delay.";
        let bounds = SummaryBounds::new(1, 5).unwrap();
        let summary = ExtractiveSummarizer::new()
            .summarize_text(text, bounds)
            .unwrap();
        assert_eq!(summary, "Consultant shall perform every service");
    }

    #[test]
    fn test_fragments_fall_back_to_leading_words() {
        let bounds = SummaryBounds::new(1, 3).unwrap();
        let summary = ExtractiveSummarizer::new()
            .summarize_text("Term. Fees.", bounds)
            .unwrap();
        assert_eq!(summary, "Term. Fees.");
    }

    #[tokio::test]
    async fn test_summarizer_trait() {
        let summarizer = ExtractiveSummarizer::new();
        assert_eq!(summarizer.name(), "extractive");
        let summary = summarizer
            .summarize(SAMPLE_AGREEMENT, SummaryBounds::interactive())
            .await
            .unwrap();
        assert!(word_count(&summary) <= 150);
    }
}
