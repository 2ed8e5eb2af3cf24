//! Shared state for the API router.

use std::sync::Arc;

use crate::config::MAX_CHAT_MESSAGE_LEN;
use crate::matcher::Matcher;

/// Shared context for all API routes.
///
/// Holds the matcher (and through it the catalog snapshot). Cloning is an
/// `Arc` bump; handlers only read.
#[derive(Clone, Debug)]
pub struct ApiContext {
    pub matcher: Arc<Matcher>,
    pub max_message_len: usize,
}

impl ApiContext {
    pub fn new(matcher: Arc<Matcher>) -> Self {
        Self {
            matcher,
            max_message_len: MAX_CHAT_MESSAGE_LEN,
        }
    }

    pub fn with_max_message_len(mut self, max_message_len: usize) -> Self {
        self.max_message_len = max_message_len;
        self
    }
}
