//! Main CLI parser and top-level argument handling.
//!
//! Every option has an environment fallback so the server can be configured
//! from a `.env` file in deployments.

use std::path::PathBuf;

use clap::Parser;
use extrack_axum::ServerConfig;
use extrack_axum::bootstrap::{DEFAULT_DATABASE_URL, DEFAULT_PORT};
use extrack_core::UpperBoundMode;

/// Command-line interface for the exercise tracker server.
#[derive(Debug, Parser)]
#[command(name = "extrack")]
#[command(about = "Exercise tracker HTTP service")]
#[command(version)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SQLite connection URL; the file is created if missing
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Directory of static assets; its index.html is served at `/`
    #[arg(long, env = "EXTRACK_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origin (repeatable). Any origin is allowed when omitted.
    #[arg(long = "allowed-origin", value_name = "ORIGIN")]
    pub allowed_origins: Vec<String>,

    /// Apply `to` in log queries even when `from` is absent
    #[arg(long, env = "EXTRACK_INDEPENDENT_UPPER_BOUND")]
    pub independent_upper_bound: bool,
}

impl Cli {
    /// Translate parsed arguments into the server configuration.
    pub fn server_config(&self) -> ServerConfig {
        let mut config = ServerConfig::with_defaults()
            .with_port(self.port)
            .with_database_url(self.database_url.clone());

        if let Some(dir) = &self.static_dir {
            config = config.with_static_dir(dir.clone());
        }
        if !self.allowed_origins.is_empty() {
            config = config.with_allowed_origins(self.allowed_origins.clone());
        }
        if self.independent_upper_bound {
            config = config.with_upper_bound_mode(UpperBoundMode::Independent);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use extrack_axum::CorsConfig;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_map_onto_server_config() {
        let static_dir = tempfile::tempdir().unwrap();
        let static_arg = static_dir.path().to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "extrack",
            "--port",
            "8080",
            "--database-url",
            "sqlite::memory:",
            "--static-dir",
            static_arg.as_str(),
            "--allowed-origin",
            "http://localhost:5173",
            "--allowed-origin",
            "https://tracker.example",
            "--independent-upper-bound",
        ]);
        let config = cli.server_config();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.static_dir.as_deref(), Some(static_dir.path()));
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(ref o) if o.len() == 2));
        assert_eq!(config.upper_bound_mode, UpperBoundMode::Independent);
    }

    #[test]
    fn test_no_origins_allows_all() {
        let cli = Cli::try_parse_from(["extrack", "--port", "4000"]).unwrap();
        let config = cli.server_config();

        assert_eq!(config.port, 4000);
        assert!(matches!(config.cors, CorsConfig::AllowAll));
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["extrack", "--port", "not-a-port"]).is_err());
    }
}
