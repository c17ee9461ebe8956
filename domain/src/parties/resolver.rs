//! Party resolver
//!
//! Maps the recognizer's entity stream onto the two contracting roles of a
//! consulting agreement: the engaging **Company** and the **Consultant**.

use crate::document::entity::Entity;
use serde::{Deserialize, Serialize};

/// Substring that disqualifies an organization entity (case-insensitive).
///
/// Recognizers routinely tag defined terms like `the Effective Date` as
/// organizations.
const DATE_MARKER: &str = "date";

/// Resolved contracting parties (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyMap {
    pub company: Option<String>,
    pub consultant: Option<String>,
}

impl PartyMap {
    pub fn is_empty(&self) -> bool {
        self.company.is_none() && self.consultant.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.company.is_some() && self.consultant.is_some()
    }
}

/// Single-pass, first-match-wins party resolution
pub struct PartyResolver;

impl PartyResolver {
    pub fn resolve(entities: &[Entity]) -> PartyMap {
        let mut parties = PartyMap::default();

        for entity in entities {
            if parties.company.is_none()
                && entity.label.is_organization()
                && !Self::looks_like_date(&entity.text)
            {
                parties.company = Some(entity.text.clone());
            }

            if parties.consultant.is_none() && entity.label.is_person() {
                parties.consultant = Some(entity.text.clone());
            }

            if parties.is_complete() {
                break;
            }
        }

        parties
    }

    fn looks_like_date(text: &str) -> bool {
        text.to_lowercase().contains(DATE_MARKER)
    }
}
