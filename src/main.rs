//! Arcadia Hotel Service entry point
//!
//! Reads configuration from a TOML file
//! (~/.config/arcadia-hotel/config.toml), connects to SQLite, runs
//! migrations and serves the REST API.

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use arcadia_hotel::application::booking::BookingCoordinator;
use arcadia_hotel::domain::guest::{Guest, GuestRepository, UserRole};
use arcadia_hotel::domain::RepositoryProvider;
use arcadia_hotel::infrastructure::crypto::jwt::JwtConfig;
use arcadia_hotel::infrastructure::crypto::password::hash_password;
use arcadia_hotel::infrastructure::database::migrator::Migrator;
use arcadia_hotel::{
    create_api_router, default_config_path, init_database, AppConfig, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("ARCADIA_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Arcadia Hotel Service...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Repositories, booking coordinator, JWT ─────────────────
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    create_default_admin(&repos, &app_cfg).await;

    let coordinator = Arc::new(BookingCoordinator::new(repos.reservations()));

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_hours: app_cfg.security.jwt_expiration_hours,
        issuer: "arcadia-hotel".to_string(),
    };
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── HTTP server ────────────────────────────────────────────
    let router = create_api_router(repos, coordinator, db, jwt_config);

    let address = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("REST API listening on http://{}", address);
    info!("Swagger UI available at http://{}/docs", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Seed the admin account on first start so the API is usable
/// immediately.
async fn create_default_admin(repos: &Arc<dyn RepositoryProvider>, cfg: &AppConfig) {
    let guests = repos.guests();
    let email = &cfg.security.default_admin_email;

    match guests.find_by_email(email).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            let password_hash = match hash_password(&cfg.security.default_admin_password) {
                Ok(hash) => hash,
                Err(e) => {
                    warn!("Failed to hash default admin password: {}", e);
                    return;
                }
            };
            let admin = Guest::new(
                email.clone(),
                "Admin",
                "Admin",
                "00000000000",
                "-",
                password_hash,
                UserRole::Admin,
            );
            match guests.insert(admin).await {
                Ok(()) => info!("Default admin account created: {}", email),
                Err(e) => warn!("Failed to create default admin: {}", e),
            }
        }
        Err(e) => warn!("Failed to look up default admin: {}", e),
    }
}

/// Resolve on SIGINT (ctrl-c) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl-c, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
