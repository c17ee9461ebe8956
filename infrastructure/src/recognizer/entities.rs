//! Pattern-based entity rules
//!
//! Each rule yields candidate entities; overlapping candidates are resolved
//! earliest-start first, then longest span.

use legal_domain::{Entity, EntityLabel};
use regex::{Regex, escape};

/// Corporate designators that end an organization name
pub const DEFAULT_ORGANIZATION_SUFFIXES: &[&str] = &[
    "Ltd",
    "Limited",
    "Inc",
    "Incorporated",
    "Corp",
    "Corporation",
    "LLC",
    "LLP",
    "PLC",
    "GmbH",
    "Co",
];

/// Titles that introduce a person's name
pub const DEFAULT_HONORIFICS: &[&str] = &["Mr", "Mrs", "Ms", "Dr", "Prof"];

/// Leading words stripped from organization matches
const LEADING_DETERMINERS: &[&str] = &["The", "This", "And", "Between"];

const MONTHS: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";

/// Capitalized name of one to three words
const NAME: &str = r"[A-Z][\p{Ll}'’-]+(?:[ \t]+[A-Z][\p{Ll}'’-]+){0,2}";

/// Compiled entity rules
pub struct EntityRules {
    calendar_date: Regex,
    duration: Regex,
    defined_term: Regex,
    organization: Option<Regex>,
    honorific_person: Option<Regex>,
    appositive_person: Regex,
    signature_person: Regex,
}

impl EntityRules {
    pub fn new(suffixes: &[String], honorifics: &[String]) -> Result<Self, regex::Error> {
        let suffixes = Self::alternation(suffixes);
        let honorifics = Self::alternation(honorifics);

        Ok(Self {
            calendar_date: Regex::new(&format!(r"\b(?:{MONTHS})\s+\d{{1,2}},?\s+\d{{4}}\b"))?,
            duration: Regex::new(
                r"\b(?:[a-z]+\s+)?\(\d+\)\s+(?:days?|weeks?|months?|years?)\b",
            )?,
            defined_term: Regex::new(r#"["“]([^"”\n]{1,60})["”]"#)?,
            organization: Self::optional(suffixes, |s| {
                format!(r"\b(?:[A-Z][\w&'’-]*\.?[ \t]+){{1,6}}(?:{s})\b\.?")
            })?,
            honorific_person: Self::optional(honorifics, |h| {
                format!(r"\b(?:{h})\.?[ \t]+({NAME})")
            })?,
            appositive_person: Regex::new(&format!(r"\b({NAME}),\s+an?\s+individual\b"))?,
            signature_person: Regex::new(&format!(
                r"(?m)^[ \t]*(?:Consultant|Contractor|Employee|Name|By)[ \t]*:[ \t]*({NAME})[ \t]*$"
            ))?,
        })
    }

    /// Every entity in `text`, in document order, without overlaps
    pub fn extract(&self, text: &str) -> Vec<Entity> {
        let mut candidates = Vec::new();

        Self::collect_whole(&self.calendar_date, text, EntityLabel::Date, &mut candidates);
        Self::collect_whole(&self.duration, text, EntityLabel::Date, &mut candidates);
        self.collect_defined_dates(text, &mut candidates);
        if let Some(rule) = &self.organization {
            Self::collect_organizations(rule, text, &mut candidates);
        }

        let person_rules = [
            self.honorific_person.as_ref(),
            Some(&self.appositive_person),
            Some(&self.signature_person),
        ];
        for rule in person_rules.into_iter().flatten() {
            Self::collect_group(rule, text, EntityLabel::Person, &mut candidates);
        }

        Self::resolve_overlaps(candidates)
    }

    fn collect_whole(rule: &Regex, text: &str, label: EntityLabel, out: &mut Vec<Entity>) {
        for m in rule.find_iter(text) {
            out.push(Entity::new(m.as_str(), label.clone(), m.start(), m.end()));
        }
    }

    fn collect_group(rule: &Regex, text: &str, label: EntityLabel, out: &mut Vec<Entity>) {
        for caps in rule.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                out.push(Entity::new(m.as_str(), label.clone(), m.start(), m.end()));
            }
        }
    }

    /// Quoted defined terms naming a date, e.g. `("Effective Date")`
    fn collect_defined_dates(&self, text: &str, out: &mut Vec<Entity>) {
        for caps in self.defined_term.captures_iter(text) {
            if let Some(m) = caps.get(1)
                && m.as_str().to_lowercase().contains("date")
            {
                out.push(Entity::new(m.as_str(), EntityLabel::Date, m.start(), m.end()));
            }
        }
    }

    fn collect_organizations(rule: &Regex, text: &str, out: &mut Vec<Entity>) {
        for m in rule.find_iter(text) {
            let mut start = m.start();
            let mut name = m.as_str();

            while let Some((first, rest)) = name.split_once(char::is_whitespace) {
                if !LEADING_DETERMINERS.contains(&first) {
                    break;
                }
                let rest_trimmed = rest.trim_start();
                start += name.len() - rest_trimmed.len();
                name = rest_trimmed;
            }

            out.push(Entity::new(name, EntityLabel::Organization, start, m.end()));
        }
    }

    fn resolve_overlaps(mut candidates: Vec<Entity>) -> Vec<Entity> {
        candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.len().cmp(&a.len())));

        let mut accepted: Vec<Entity> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if accepted.iter().all(|e| !e.overlaps(&candidate)) {
                accepted.push(candidate);
            }
        }
        accepted
    }

    /// Compile `build(alternation)` unless the word list is empty
    fn optional(
        alternation: String,
        build: impl FnOnce(&str) -> String,
    ) -> Result<Option<Regex>, regex::Error> {
        if alternation.is_empty() {
            return Ok(None);
        }
        Regex::new(&build(&alternation)).map(Some)
    }

    fn alternation(words: &[String]) -> String {
        words
            .iter()
            .map(|w| w.trim().trim_end_matches('.'))
            .filter(|w| !w.is_empty())
            .map(escape)
            .collect::<Vec<_>>()
            .join("|")
    }
}
