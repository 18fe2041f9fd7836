//! Resolver answers

use std::fmt;

/// Reply used when no topic matches
pub const FALLBACK_MESSAGE: &str = "I'm sorry, I don't have information on that topic yet. Please ask about construction materials, structural elements, or processes.";

/// Outcome of resolving a query against the glossary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A synonym phrase occurred in the query
    Direct { topic: String, explanation: String },
    /// The query was close enough to a topic name to suggest it
    Suggestion { topic: String, explanation: String },
    /// Nothing matched
    Fallback,
}

impl Answer {
    /// Topic that produced this answer, if any
    pub fn topic(&self) -> Option<&str> {
        match self {
            Answer::Direct { topic, .. } | Answer::Suggestion { topic, .. } => Some(topic),
            Answer::Fallback => None,
        }
    }

    /// Short label of the matching phase, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Answer::Direct { .. } => "direct",
            Answer::Suggestion { .. } => "suggestion",
            Answer::Fallback => "fallback",
        }
    }

    /// Text sent back to the caller
    pub fn into_text(self) -> String {
        match self {
            Answer::Direct { explanation, .. } => explanation,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Direct { explanation, .. } => f.write_str(explanation),
            Answer::Suggestion { topic, explanation } => write!(
                f,
                "I'm not sure, but did you mean **{}**? Here's what I know:\n\n{}",
                topic, explanation
            ),
            Answer::Fallback => f.write_str(FALLBACK_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_text() {
        let answer = Answer::Suggestion {
            topic: "beam".to_string(),
            explanation: "A beam is horizontal.".to_string(),
        };
        assert_eq!(
            answer.into_text(),
            "I'm not sure, but did you mean **beam**? Here's what I know:\n\nA beam is horizontal."
        );
    }

    #[test]
    fn test_direct_text_is_verbatim() {
        let answer = Answer::Direct {
            topic: "slab".to_string(),
            explanation: "A slab is flat.".to_string(),
        };
        assert_eq!(answer.topic(), Some("slab"));
        assert_eq!(answer.into_text(), "A slab is flat.");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(Answer::Fallback.topic(), None);
        assert_eq!(Answer::Fallback.kind(), "fallback");
        assert_eq!(Answer::Fallback.into_text(), FALLBACK_MESSAGE);
    }
}
