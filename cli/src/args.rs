//! Clap argument types.

use clap::Parser;

use todo_core::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TODO_LIMIT, DEFAULT_USER_LIMIT};

/// Interactive todo board backed by a remote REST API.
#[derive(Parser, Debug)]
#[command(name = "todo-board", version)]
pub struct Cli {
    /// Base URL of the todo API.
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Number of todos loaded at startup.
    #[arg(long, default_value_t = DEFAULT_TODO_LIMIT)]
    pub todo_limit: u32,

    /// Number of users loaded at startup.
    #[arg(long, default_value_t = DEFAULT_USER_LIMIT)]
    pub user_limit: u32,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            todo_limit: self.todo_limit,
            user_limit: self.user_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_client_config() {
        let cli = Cli::parse_from(["todo-board"]);
        assert_eq!(cli.client_config().todo_limit, ClientConfig::default().todo_limit);
        assert_eq!(cli.client_config().user_limit, ClientConfig::default().user_limit);
    }

    #[test]
    fn flags_override_limits() {
        let cli = Cli::parse_from([
            "todo-board",
            "--api-url",
            "http://127.0.0.1:3000",
            "--todo-limit",
            "3",
        ]);
        let config = cli.client_config();
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.todo_limit, 3);
        assert_eq!(config.user_limit, DEFAULT_USER_LIMIT);
    }
}
