//! Topic Resolver - maps a free-text question onto one glossary answer
//!
//! Resolution runs in three phases:
//! 1. Synonym scan: the lowercased query is checked for every variant phrase,
//!    topics and variants in definition order; the first hit wins.
//! 2. Fuzzy suggestion: the whole lowercased query is compared with each
//!    topic name; the closest one at or above [`SUGGESTION_CUTOFF`] is
//!    offered as a "did you mean" answer.
//! 3. Fallback: a fixed apology.
//!
//! `resolve` is total and pure. The resolver owns an immutable
//! [`Glossary`] and can be shared across threads without locking.

pub mod fuzzy;

use crate::glossary::{Glossary, Topic};
use crate::types::Answer;

/// Minimum similarity ratio for a fuzzy suggestion
pub const SUGGESTION_CUTOFF: f64 = 0.5;

/// Resolves queries against a fixed glossary
#[derive(Debug, Clone)]
pub struct TopicResolver {
    glossary: Glossary,
}

impl TopicResolver {
    pub fn new(glossary: Glossary) -> Self {
        Self { glossary }
    }

    /// Resolver over the compiled-in glossary
    pub fn builtin() -> Self {
        Self::new(Glossary::builtin())
    }

    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    /// Produce exactly one answer for any query
    pub fn resolve(&self, query: &str) -> Answer {
        let normalized = query.to_lowercase();

        if let Some((topic, explanation)) = self.match_synonyms(&normalized) {
            return Answer::Direct {
                topic: topic.name.clone(),
                explanation: explanation.to_string(),
            };
        }

        if let Some((topic, explanation)) = self.suggest(&normalized) {
            return Answer::Suggestion {
                topic: topic.name.clone(),
                explanation: explanation.to_string(),
            };
        }

        Answer::Fallback
    }

    /// Convenience wrapper returning the caller-facing text
    pub fn answer(&self, query: &str) -> String {
        self.resolve(query).into_text()
    }

    /// First topic with an explanation whose variant occurs in the query
    fn match_synonyms(&self, normalized: &str) -> Option<(&Topic, &str)> {
        self.explained_topics().find(|(topic, _)| {
            topic
                .variants
                .iter()
                .any(|variant| normalized.contains(variant.as_str()))
        })
    }

    fn suggest(&self, normalized: &str) -> Option<(&Topic, &str)> {
        let (name, _score) = fuzzy::closest_match(
            normalized,
            self.explained_topics().map(|(topic, _)| topic.name.as_str()),
            SUGGESTION_CUTOFF,
        )?;
        self.explained_topics().find(|(topic, _)| topic.name == name)
    }

    /// Topics that can be answered, in definition order
    fn explained_topics(&self) -> impl Iterator<Item = (&Topic, &str)> + '_ {
        self.glossary
            .topics()
            .iter()
            .filter_map(|topic| topic.explanation.as_deref().map(|e| (topic, e)))
    }
}

impl Default for TopicResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FALLBACK_MESSAGE;

    fn small_resolver() -> TopicResolver {
        let synonyms: &[(&str, &[&str])] = &[
            ("beam", &["beam", "lintel"]),
            ("ghost", &["ghost", "beam"]),
            ("slab", &["slab"]),
        ];
        TopicResolver::new(Glossary::from_tables(
            &[("beam", "Beam text."), ("slab", "Slab text."), ("grout", "Grout text.")],
            synonyms,
        ))
    }

    #[test]
    fn test_direct_match_is_case_insensitive() {
        let resolver = small_resolver();
        assert_eq!(
            resolver.resolve("Where does a LINTEL go?"),
            Answer::Direct {
                topic: "beam".to_string(),
                explanation: "Beam text.".to_string(),
            }
        );
    }

    #[test]
    fn test_unexplained_topic_is_skipped() {
        let resolver = small_resolver();
        assert_eq!(resolver.answer("a ghost story"), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_explanation_only_topic_reachable_by_suggestion() {
        let resolver = small_resolver();
        let answer = resolver.resolve("grouts");
        assert_eq!(answer.kind(), "suggestion");
        assert_eq!(answer.topic(), Some("grout"));
    }

    #[test]
    fn test_empty_glossary_falls_back() {
        let resolver = TopicResolver::new(Glossary::default());
        assert_eq!(resolver.resolve("beam"), Answer::Fallback);
        assert_eq!(resolver.resolve(""), Answer::Fallback);
    }

    #[test]
    fn test_resolver_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TopicResolver>();
    }
}
