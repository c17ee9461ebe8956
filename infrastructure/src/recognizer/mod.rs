//! Rule-based entity source
//!
//! A deterministic stand-in for a statistical NER pipeline: a regex
//! tokenizer plus pattern rules for dates, organizations (capitalized runs
//! ending in a corporate designator) and persons (honorifics, `Name, an
//! individual` appositives and signature lines).

mod entities;
mod tokenizer;

pub use entities::{DEFAULT_HONORIFICS, DEFAULT_ORGANIZATION_SUFFIXES};

use crate::config::FileRecognizerConfig;
use entities::EntityRules;
use legal_application::{EntitySource, RecognitionError};
use legal_domain::AnnotatedDocument;
use tokenizer::Tokenizer;
use tracing::debug;

/// Documents larger than this are refused (4 MiB)
const MAX_DOCUMENT_BYTES: usize = 4 * 1024 * 1024;

/// Regex tokenizer + pattern-based entity recognizer
pub struct RuleBasedRecognizer {
    tokenizer: Tokenizer,
    rules: EntityRules,
}

impl RuleBasedRecognizer {
    /// Build with the default suffix and honorific lists
    pub fn new() -> Result<Self, RecognitionError> {
        Self::from_config(&FileRecognizerConfig::default())
    }

    /// Build from configuration; extra suffixes / honorifics extend the defaults
    pub fn from_config(config: &FileRecognizerConfig) -> Result<Self, RecognitionError> {
        let suffixes = config.organization_suffixes();
        let honorifics = config.honorifics();

        let tokenizer = Tokenizer::new()
            .map_err(|e| RecognitionError::ModelUnavailable(format!("tokenizer: {}", e)))?;
        let rules = EntityRules::new(&suffixes, &honorifics)
            .map_err(|e| RecognitionError::ModelUnavailable(format!("entity rules: {}", e)))?;

        debug!(
            "Rule-based recognizer ready ({} suffixes, {} honorifics)",
            suffixes.len(),
            honorifics.len()
        );

        Ok(Self { tokenizer, rules })
    }
}

impl EntitySource for RuleBasedRecognizer {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn recognize(&self, text: &str) -> Result<AnnotatedDocument, RecognitionError> {
        if text.len() > MAX_DOCUMENT_BYTES {
            return Err(RecognitionError::Failed(format!(
                "document too large: {} bytes (max: {} bytes)",
                text.len(),
                MAX_DOCUMENT_BYTES
            )));
        }

        let tokens = self.tokenizer.tokenize(text);
        let entities = self.rules.extract(text);
        Ok(AnnotatedDocument::new(entities, tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legal_domain::{ClauseDetector, EntityLabel, PartyResolver, SAMPLE_AGREEMENT};

    fn recognizer() -> RuleBasedRecognizer {
        RuleBasedRecognizer::new().unwrap()
    }

    #[test]
    fn test_sample_agreement_entities() {
        let doc = recognizer().recognize(SAMPLE_AGREEMENT).unwrap();

        let orgs: Vec<_> = doc
            .entities
            .iter()
            .filter(|e| e.label == EntityLabel::Organization)
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(orgs.first(), Some(&"Rogue Company Pvt. Ltd."));

        let people: Vec<_> = doc
            .entities
            .iter()
            .filter(|e| e.label == EntityLabel::Person)
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(people, vec!["Prerna", "Prerna"]);

        assert!(
            doc.entities
                .iter()
                .any(|e| e.label == EntityLabel::Date && e.text == "Effective Date")
        );
    }

    #[test]
    fn test_entity_offsets_point_into_source() {
        let doc = recognizer().recognize(SAMPLE_AGREEMENT).unwrap();
        for entity in &doc.entities {
            assert_eq!(&SAMPLE_AGREEMENT[entity.start..entity.end], entity.text);
        }
        for token in &doc.tokens {
            assert_eq!(&SAMPLE_AGREEMENT[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_sample_agreement_end_to_end_extraction() {
        let doc = recognizer().recognize(SAMPLE_AGREEMENT).unwrap();

        let parties = PartyResolver::resolve(&doc.entities);
        assert_eq!(parties.company.as_deref(), Some("Rogue Company Pvt. Ltd."));
        assert_eq!(parties.consultant.as_deref(), Some("Prerna"));

        let clauses: Vec<_> = ClauseDetector::detect(&doc.tokens)
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(
            clauses,
            vec![
                "1. Services",
                "2. Term",
                "3. Compensation",
                "4. Confidentiality",
                "5. Termination",
                "6. Governing",
            ]
        );
    }

    #[test]
    fn test_extra_suffixes_from_config() {
        let config = FileRecognizerConfig {
            extra_organization_suffixes: vec!["S.A.".to_string()],
            ..Default::default()
        };
        let recognizer = RuleBasedRecognizer::from_config(&config).unwrap();
        let doc = recognizer
            .recognize("This contract binds Banco Nacional S.A. and its affiliates.")
            .unwrap();
        assert_eq!(doc.entities[0].text, "Banco Nacional S.A.");
        assert_eq!(doc.entities[0].label, EntityLabel::Organization);
    }

    #[test]
    fn test_rejects_oversized_document() {
        let huge = "a".repeat(MAX_DOCUMENT_BYTES + 1);
        assert!(matches!(
            recognizer().recognize(&huge),
            Err(RecognitionError::Failed(_))
        ));
    }
}
