//! Data types for the construction chatbot
//!
//! This module contains the glossary records, resolver answers and the
//! request/response bodies exchanged over HTTP.

mod answer;
mod chat;
mod topic;

pub use answer::{Answer, FALLBACK_MESSAGE};
pub use chat::{ChatRequest, ChatResponse, StatusMessage};
pub use topic::{GlossaryFile, TopicRecord};
