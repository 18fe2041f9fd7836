//! Glossary - the immutable topic tables behind the resolver
//!
//! A glossary is an ordered list of topics. Each topic carries its
//! explanation and the phrase variants that select it. Definition order is
//! significant: it decides which topic wins when several match one query.
//!
//! The data is built once at startup, either from the compiled-in tables in
//! [`builtin`] or from a JSON file, and is never mutated afterwards.

pub mod builtin;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{GlossaryError, GlossaryResult};
use crate::types::{GlossaryFile, TopicRecord};

/// A glossary topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    /// `None` when the data set forgot to explain this topic
    pub explanation: Option<String>,
    /// Lowercased phrase variants in priority order
    pub variants: Vec<String>,
}

/// Configuration problems that do not prevent serving queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlossaryIssue {
    /// Topic has synonyms but no explanation; it can never be answered
    MissingExplanation(String),
    /// Topic's variants omit its own name; an exact-name query must go through fuzzy matching
    MissingCanonicalVariant(String),
}

impl fmt::Display for GlossaryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlossaryIssue::MissingExplanation(topic) => {
                write!(f, "topic '{}' has no explanation", topic)
            }
            GlossaryIssue::MissingCanonicalVariant(topic) => {
                write!(f, "topic '{}' does not list its own name as a synonym", topic)
            }
        }
    }
}

/// Ordered, read-only topic tables
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    topics: Vec<Topic>,
    /// topic name → position in `topics`
    index: HashMap<String, usize>,
}

impl Glossary {
    /// The compiled-in construction glossary
    pub fn builtin() -> Self {
        Self::from_tables(builtin::EXPLANATIONS, builtin::SYNONYMS)
    }

    /// Build from an explanation table and a synonym table.
    ///
    /// Topics follow synonym-table order; topics that only have an
    /// explanation are appended afterwards so they remain fuzzy candidates.
    /// Names are lowercased and blank explanations count as missing.
    pub fn from_tables(explanations: &[(&str, &str)], synonyms: &[(&str, &[&str])]) -> Self {
        let explained: HashMap<String, &str> = explanations
            .iter()
            .filter(|(_, e)| !e.trim().is_empty())
            .map(|(name, e)| (name.to_lowercase(), *e))
            .collect();
        let mut glossary = Self::default();

        for (name, variants) in synonyms {
            let name = name.to_lowercase();
            if glossary.index.contains_key(&name) {
                continue;
            }
            glossary.push(Topic {
                explanation: explained.get(&name).map(|e| e.to_string()),
                name,
                variants: variants.iter().map(|v| v.to_lowercase()).collect(),
            });
        }

        for (name, _) in explanations {
            let name = name.to_lowercase();
            if glossary.index.contains_key(&name) {
                continue;
            }
            if let Some(explanation) = explained.get(&name) {
                glossary.push(Topic {
                    name,
                    explanation: Some(explanation.to_string()),
                    variants: Vec::new(),
                });
            }
        }

        glossary
    }

    /// Build from file records, rejecting structurally broken data.
    ///
    /// Topic names and variants are lowercased so they compare against the
    /// lowercased query.
    pub fn from_records(records: Vec<TopicRecord>) -> GlossaryResult<Self> {
        let mut glossary = Self::default();

        for (position, record) in records.into_iter().enumerate() {
            let name = record.name.to_lowercase();
            if name.trim().is_empty() {
                return Err(GlossaryError::EmptyTopic(position));
            }
            if glossary.index.contains_key(&name) {
                return Err(GlossaryError::DuplicateTopic(name));
            }
            if record.synonyms.iter().any(|s| s.is_empty()) {
                return Err(GlossaryError::EmptyVariant(name));
            }
            if matches!(&record.explanation, Some(e) if e.trim().is_empty()) {
                return Err(GlossaryError::EmptyExplanation(name));
            }

            glossary.push(Topic {
                name,
                explanation: record.explanation,
                variants: record.synonyms.iter().map(|s| s.to_lowercase()).collect(),
            });
        }

        Ok(glossary)
    }

    /// Parse a glossary JSON document
    pub fn from_json_str(json: &str) -> GlossaryResult<Self> {
        let file: GlossaryFile = serde_json::from_str(json)?;
        Self::from_records(file.topics)
    }

    /// Load a glossary JSON file
    pub fn from_file(path: impl AsRef<Path>) -> GlossaryResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| GlossaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    fn push(&mut self, topic: Topic) {
        self.index.insert(topic.name.clone(), self.topics.len());
        self.topics.push(topic);
    }

    /// Topics in definition order
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn get(&self, name: &str) -> Option<&Topic> {
        self.index.get(name).map(|&i| &self.topics[i])
    }

    /// Explanation for a topic, `None` if unknown or unexplained
    pub fn explanation(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|t| t.explanation.as_deref())
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Report topics that break the explanation/synonym pairing
    pub fn validate(&self) -> Vec<GlossaryIssue> {
        let mut issues = Vec::new();

        for topic in &self.topics {
            if topic.explanation.is_none() {
                issues.push(GlossaryIssue::MissingExplanation(topic.name.clone()));
            }
            let canonical = topic.name.to_lowercase();
            if !topic.variants.iter().any(|v| *v == canonical) {
                issues.push(GlossaryIssue::MissingCanonicalVariant(topic.name.clone()));
            }
        }

        issues
    }

    /// Distinct variant phrases across all topics
    pub fn variant_count(&self) -> usize {
        self.topics
            .iter()
            .flat_map(|t| t.variants.iter())
            .collect::<HashSet<_>>()
            .len()
    }
}
