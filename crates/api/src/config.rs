/// Default origins of the bundled web frontend in development.
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000,http://localhost";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://inventory.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                                         |
    /// |------------------------|-----------------------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                                       |
    /// | `PORT`                 | `8000`                                                          |
    /// | `DATABASE_URL`         | `sqlite://inventory.db`                                         |
    /// | `CORS_ORIGINS`         | `http://localhost:5173,http://localhost:3000,http://localhost`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                                            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://inventory.db".into());

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
        }
    }

    /// Base URL a person on this machine can open in a browser.
    ///
    /// A wildcard bind address is shown as `localhost`.
    pub fn app_url(&self) -> String {
        let display_host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            self.host.as_str()
        };
        format!("http://{display_host}:{}", self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_host(host: &str) -> ServerConfig {
        ServerConfig {
            host: host.to_string(),
            port: 8000,
            database_url: "sqlite::memory:".to_string(),
            cors_origins: Vec::new(),
            request_timeout_secs: 30,
        }
    }

    #[test]
    fn wildcard_host_is_displayed_as_localhost() {
        assert_eq!(config_with_host("0.0.0.0").app_url(), "http://localhost:8000");
        assert_eq!(config_with_host("127.0.0.1").app_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn default_origins_cover_the_dev_frontends() {
        let origins = parse_origins(DEFAULT_CORS_ORIGINS);
        assert_eq!(origins.len(), 3);
        assert!(origins.contains(&"http://localhost:5173".to_string()));
    }
}
