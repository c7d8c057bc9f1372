//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_ADMIN_TOKEN, DEFAULT_CORS_ALLOWED_ORIGIN, DEFAULT_DATABASE_MAX_CONNECTIONS,
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    admin_token: String,
    pub cors_allowed_origin: String,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("admin_token", &"[REDACTED]")
            .field("cors_allowed_origin", &self.cors_allowed_origin)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            admin_token: DEFAULT_ADMIN_TOKEN.to_string(),
            cors_allowed_origin: DEFAULT_CORS_ALLOWED_ORIGIN.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_token = env::var("ADMIN_TOKEN").unwrap_or_else(|_| {
            tracing::warn!("ADMIN_TOKEN not set, using the built-in shared token");
            DEFAULT_ADMIN_TOKEN.to_string()
        });

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS),
            admin_token,
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGIN.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Override the shared admin token.
    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = token.into();
        self
    }

    /// Shared token minted on login and compared on every protected request.
    pub fn admin_token(&self) -> &str {
        &self.admin_token
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::default().with_admin_token("super-secret");
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("postgres://"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_default_uses_shared_token_and_frontend_origin() {
        let config = Config::default();

        assert_eq!(config.admin_token(), "Rashid");
        assert_eq!(config.cors_allowed_origin, "http://localhost:3000");
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }
}
