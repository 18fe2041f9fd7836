//! Shared application state

use std::sync::Arc;

use crate::resolver::TopicResolver;

/// State handed to every request handler
pub struct AppState {
    /// Read-only resolver; no lock needed
    pub resolver: Arc<TopicResolver>,
}

impl AppState {
    pub fn new(resolver: Arc<TopicResolver>) -> Self {
        Self { resolver }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(TopicResolver::builtin()))
    }
}
