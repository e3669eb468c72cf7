//! The user record handed to consumers.

use serde::Serialize;
use serde_json::{Map, Value};

/// A user extracted from one tweet, plus the context it was found in.
///
/// Serializes as the raw user object with `promoted_tweet` and (when known)
/// `full_text` added at the top level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub user: Map<String, Value>,
    /// Whether the tweet this user was found through is an ad
    pub promoted_tweet: bool,
    /// Text of the tweet this user was found through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

impl UserRecord {
    pub fn new(user: Map<String, Value>, promoted_tweet: bool, full_text: Option<String>) -> Self {
        UserRecord {
            user,
            promoted_tweet,
            full_text,
        }
    }

    pub fn rest_id(&self) -> Option<&str> {
        self.user.get("rest_id").and_then(Value::as_str)
    }

    /// The `@handle`. Older payloads keep it under `legacy`, newer ones under `core`.
    pub fn screen_name(&self) -> Option<&str> {
        self.profile_field("screen_name")
    }

    /// Display name.
    pub fn name(&self) -> Option<&str> {
        self.profile_field("name")
    }

    pub fn is_blue_verified(&self) -> bool {
        self.user
            .get("is_blue_verified")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    fn profile_field(&self, key: &str) -> Option<&str> {
        ["legacy", "core"]
            .iter()
            .find_map(|section| self.user.get(*section)?.get(key)?.as_str())
    }

    /// The flat JSON object form, same as serializing the record.
    pub fn into_value(self) -> Value {
        let mut user = self.user;
        user.insert(
            "promoted_tweet".to_string(),
            Value::Bool(self.promoted_tweet),
        );
        if let Some(text) = self.full_text {
            user.insert("full_text".to_string(), Value::String(text));
        }
        Value::Object(user)
    }
}
