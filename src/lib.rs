//! Construction Chatbot Backend
//!
//! Answers free-text construction questions from a fixed, hand-curated
//! glossary using synonym matching with a fuzzy "did you mean" fallback.
//!
//! # Features
//!
//! - **22 Topics**: Materials, structural elements and site processes
//! - **Synonym Matching**: Phrase variants and common misspellings
//! - **Fuzzy Suggestions**: Closest topic name above a 0.5 similarity cutoff
//! - **Lock-Free**: Immutable data shared across requests
//!
//! # Modules
//!
//! - `types`: Answers, glossary records and HTTP bodies
//! - `glossary`: Ordered topic tables (built-in or loaded from JSON)
//! - `resolver`: The query → answer matching logic
//! - `api`: Axum router and handlers
//! - `config`: Environment-based server configuration
//! - `error`: Startup error types
//!
//! # Example
//!
//! ```
//! use construction_chatbot::TopicResolver;
//!
//! let resolver = TopicResolver::builtin();
//! let answer = resolver.answer("What is cement used for?");
//! assert!(answer.starts_with("Cement is a binding material"));
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod glossary;
pub mod resolver;
pub mod types;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use config::ServerConfig;
pub use error::{ConfigError, GlossaryError};
pub use glossary::{Glossary, GlossaryIssue, Topic};
pub use resolver::{TopicResolver, SUGGESTION_CUTOFF};
pub use types::{Answer, ChatRequest, ChatResponse, FALLBACK_MESSAGE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
