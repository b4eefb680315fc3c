//! Client configuration.

use serde::{Deserialize, Serialize};

/// Public JSONPlaceholder instance the board talks to by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of todos requested at startup.
pub const DEFAULT_TODO_LIMIT: u32 = 15;

/// Number of users requested at startup.
pub const DEFAULT_USER_LIMIT: u32 = 5;

/// Where the API lives and how much of it to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub todo_limit: u32,
    pub user_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            todo_limit: DEFAULT_TODO_LIMIT,
            user_limit: DEFAULT_USER_LIMIT,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
