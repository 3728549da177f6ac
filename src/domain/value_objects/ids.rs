use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier embedded in every issued bearer token (`jti`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TokenId(pub Uuid);

impl TokenId {
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TokenId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Integer identifier assigned to a work item by the remote service.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkItemId(pub i32);

impl std::fmt::Display for WorkItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
