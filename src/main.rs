//! Lil Library - library catalog web application

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lil_library::{config::AppConfig, repository::Repository, services::Services, web, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("lil_library={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lil Library v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    let catalog = Router::new()
        // Home
        .route("/", get(web::home::index))
        // Books
        .route("/books", get(web::books::list))
        .route("/books/create", get(web::books::create_form))
        .route("/books/create", post(web::books::create))
        .route("/books/:id", get(web::books::detail))
        // Authors
        .route("/authors", get(web::authors::list))
        .route("/authors/create", get(web::authors::create_form))
        .route("/authors/create", post(web::authors::create))
        .route("/authors/:id", get(web::authors::detail))
        // Genres
        .route("/genres", get(web::genres::list))
        .route("/genres/create", get(web::genres::create_form))
        .route("/genres/create", post(web::genres::create))
        .route("/genres/:id", get(web::genres::detail))
        // Book instances
        .route("/bookinstances", get(web::book_instances::list))
        .route("/bookinstances/create", get(web::book_instances::create_form))
        .route("/bookinstances/create", post(web::book_instances::create))
        .route("/bookinstances/:id", get(web::book_instances::detail))
        .with_state(state);

    Router::new()
        .route("/", get(|| async { Redirect::permanent("/catalog") }))
        .route("/health", get(web::health::health_check))
        .route("/ready", get(web::health::readiness_check))
        .nest("/catalog", catalog)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
