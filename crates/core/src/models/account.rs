use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Path to return to after a successful login.
    #[serde(default)]
    pub next: Option<String>,
}

/// Payload for the add-group workflow.
///
/// The name is kept as a raw JSON value: the original accepted any submitted
/// value here and silently created nothing when it was not a string, so the
/// loose typing is part of the observed contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    #[serde(default)]
    pub name: Value,
}

impl CreateGroupRequest {
    /// The group name, when the submitted value actually is a non-blank
    /// string. Anything else means no group gets created.
    pub fn group_name(&self) -> Option<String> {
        match &self.name {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResponse {
    pub id: Uuid,
    pub name: String,
    pub member_count: i64,
}
