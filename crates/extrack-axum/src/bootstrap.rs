//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use extrack_core::{TrackerService, UpperBoundMode};
use extrack_db::{CoreFactory, SqlitePool, setup_database};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default database location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://exercise-track.db";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` connection URL.
    pub database_url: String,
    /// Optional directory of static assets; `index.html` is served at `/`.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Whether `to` applies to log queries without `from`.
    pub upper_bound_mode: UpperBoundMode,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            static_dir: None,
            cors: CorsConfig::default(),
            upper_bound_mode: UpperBoundMode::default(),
        }
    }

    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the database connection URL.
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    /// Set the static directory.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Set how the `to` bound of log queries is applied.
    #[must_use]
    pub const fn with_upper_bound_mode(mut self, mode: UpperBoundMode) -> Self {
        self.upper_bound_mode = mode;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
///
/// Created once at startup and shared by every request.
pub struct AxumContext {
    /// The tracker service used by all handlers.
    pub tracker: Arc<TrackerService>,
    /// Connection pool behind the repositories, closed on shutdown.
    pub pool: SqlitePool,
}

impl AxumContext {
    /// Wire repositories on `pool` into a tracker service.
    pub fn new(pool: SqlitePool, upper_bound_mode: UpperBoundMode) -> Self {
        let repos = CoreFactory::build_repos(pool.clone());
        let tracker =
            Arc::new(TrackerService::new(repos).with_upper_bound_mode(upper_bound_mode));
        Self { tracker, pool }
    }
}

/// Bootstrap the Axum server with all services.
///
/// Opens (and if needed creates) the database, then builds the context.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "extrack.bootstrap",
        port = config.port,
        database_url = %config.database_url,
        static_dir = ?config.static_dir,
        upper_bound_mode = ?config.upper_bound_mode,
        "Axum bootstrap configuration"
    );

    let pool = setup_database(&config.database_url).await?;
    Ok(AxumContext::new(pool, config.upper_bound_mode))
}

/// Start the web server on the configured port.
///
/// If `config.static_dir` is set, serves static assets alongside the API.
/// Runs until Ctrl-C, then drains in-flight requests and closes the pool.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let pool = ctx.pool.clone();

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_static_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("extrack listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, closing database pool");
    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
