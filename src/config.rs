//! Configuration for the ChatAI state core
//!
//! Display-facing tunables consumed by the session store and chat shell.
//! The host application deserializes these from whatever settings source it
//! uses; every field has a default so an empty object is a valid config.

use serde::{Deserialize, Serialize};

/// Tunables for session titling and preview formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Title assigned to a session at creation, before the first message
    #[serde(default = "default_session_title")]
    pub default_session_title: String,

    /// Maximum characters kept in a session preview before truncation
    #[serde(default = "default_preview_max_chars")]
    pub preview_max_chars: usize,

    /// Maximum characters kept in a title derived from the first message
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
}

fn default_session_title() -> String {
    "New Chat".to_string()
}

fn default_preview_max_chars() -> usize {
    80
}

fn default_title_max_chars() -> usize {
    40
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_session_title: default_session_title(),
            preview_max_chars: default_preview_max_chars(),
            title_max_chars: default_title_max_chars(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChatConfig::default();
        assert_eq!(config.default_session_title, "New Chat");
        assert_eq!(config.preview_max_chars, 80);
        assert_eq!(config.title_max_chars, 40);
    }

    #[test]
    fn test_empty_object_deserializes_to_defaults() {
        let config: ChatConfig = serde_json::from_str("{}").expect("empty config should parse");
        assert_eq!(config.default_session_title, "New Chat");
        assert_eq!(config.preview_max_chars, 80);
    }

    #[test]
    fn test_partial_override() {
        let config: ChatConfig =
            serde_json::from_str(r#"{"preview_max_chars": 120}"#).expect("config should parse");
        assert_eq!(config.preview_max_chars, 120);
        assert_eq!(config.default_session_title, "New Chat");
    }
}
