//! Glossary file records

use serde::{Deserialize, Serialize};

/// One topic as it appears in a glossary file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRecord {
    pub name: String,
    /// Missing explanations are tolerated and reported by `Glossary::validate`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl TopicRecord {
    pub fn new(name: impl Into<String>, explanation: impl Into<String>, synonyms: &[&str]) -> Self {
        Self {
            name: name.into(),
            explanation: Some(explanation.into()),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Top-level shape of a glossary JSON file; array order is definition order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlossaryFile {
    #[serde(default)]
    pub topics: Vec<TopicRecord>,
}
