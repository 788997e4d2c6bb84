//! TreeSource port
//!
//! Fetches the raw, not-yet-normalized menu and feature trees. Payload shape
//! is deliberately loose (`serde_json::Value`); the tree mapper owns the job
//! of making sense of it.

use serde_json::Value;

use crate::domain::value_objects::TreeDomain;

pub trait TreeSource: Send + Sync {
    fn fetch_menu_tree(&self) -> Result<Value, SourceError>;
    fn fetch_feature_tree(&self) -> Result<Value, SourceError>;

    /// Fetch by domain
    fn fetch_tree(&self, domain: TreeDomain) -> Result<Value, SourceError> {
        match domain {
            TreeDomain::Menu => self.fetch_menu_tree(),
            TreeDomain::Feature => self.fetch_feature_tree(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("{resource} unavailable: {message}")]
    Unavailable { resource: String, message: String },

    #[error("{resource} is malformed: {message}")]
    Malformed { resource: String, message: String },
}

impl SourceError {
    pub fn unavailable(resource: impl Into<String>, message: impl ToString) -> Self {
        Self::Unavailable {
            resource: resource.into(),
            message: message.to_string(),
        }
    }

    pub fn malformed(resource: impl Into<String>, message: impl ToString) -> Self {
        Self::Malformed {
            resource: resource.into(),
            message: message.to_string(),
        }
    }
}
