//! Service assembly and the serve loop.

use std::sync::Arc;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::adapters::http::{app_router, OrderHandlers, ReviewWebSocketState};
use crate::adapters::{
    BinaryResponseGenerator, GradedResponseGenerator, LengthHeuristicAnalyzer,
    LexiconSentimentAnalyzer, PostgresOrderRepository, RemoteProductCatalog,
};
use crate::application::{
    GetOrderHandler, ListOrderProductsHandler, PrepareReviewHandler, ReviewConversationEngine,
    ReviewSettings, SyncProductCatalogHandler, UpdateOrderStatusHandler,
};
use crate::config::{
    AnalyzerKind, AppConfig, CatalogConfig, ConfigError, GeneratorKind, ReviewConfig,
    ServerConfig, ValidationError,
};
use crate::domain::foundation::DomainError;
use crate::ports::{OrderRepository, ResponseGenerator, SentimentAnalyzer};
use crate::shutdown::drain_sessions;

/// Errors that stop the service from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database unavailable: {0}")]
    Database(DomainError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

impl From<ValidationError> for ServerError {
    fn from(err: ValidationError) -> Self {
        ServerError::Config(ConfigError::ValidationFailed(err))
    }
}

/// Builds the review engine with the capabilities chosen in `config`.
pub fn build_engine(
    config: &ReviewConfig,
    repository: Arc<dyn OrderRepository>,
) -> ReviewConversationEngine {
    let analyzer: Arc<dyn SentimentAnalyzer> = match config.analyzer {
        AnalyzerKind::Length => Arc::new(LengthHeuristicAnalyzer::new()),
        AnalyzerKind::Lexicon => Arc::new(LexiconSentimentAnalyzer::new()),
    };
    let generator: Arc<dyn ResponseGenerator> = match config.generator {
        GeneratorKind::Binary => Arc::new(BinaryResponseGenerator::new()),
        GeneratorKind::Graded => Arc::new(GradedResponseGenerator::new()),
    };

    ReviewConversationEngine::new(
        repository,
        analyzer,
        generator,
        ReviewSettings {
            read_timeout: config.read_timeout(),
        },
    )
}

/// Builds the HTTP application over `repository`.
pub fn build_router(
    server: &ServerConfig,
    review: &ReviewConfig,
    repository: Arc<dyn OrderRepository>,
    shutdown: CancellationToken,
    sessions: TaskTracker,
) -> axum::Router {
    let orders = OrderHandlers::new(
        Arc::new(GetOrderHandler::new(repository.clone())),
        Arc::new(ListOrderProductsHandler::new(repository.clone())),
        Arc::new(UpdateOrderStatusHandler::new(repository.clone())),
    );
    let review_state = ReviewWebSocketState::new(
        Arc::new(PrepareReviewHandler::new(repository.clone())),
        build_engine(review, repository),
        shutdown,
        sessions,
    );

    app_router(orders, review_state, server)
}

/// Imports the upstream product feed. Failures are logged, not fatal.
pub async fn sync_catalog(config: &CatalogConfig, repository: Arc<dyn OrderRepository>) {
    let Some(url) = config.url.as_deref() else {
        return;
    };

    let catalog = match RemoteProductCatalog::new(url, config.timeout()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!(error = %e, "Product catalog client unavailable");
            return;
        }
    };

    let handler = SyncProductCatalogHandler::new(Arc::new(catalog), repository);
    if let Err(e) = handler.handle().await {
        tracing::warn!(url = %url, error = %e, "Product catalog sync failed");
    }
}

/// Connects to the database, prepares it and serves until `shutdown` fires.
pub async fn run(config: AppConfig, shutdown: CancellationToken) -> Result<(), ServerError> {
    let addr = config.server.socket_addr()?;

    let pool = crate::adapters::postgres::connect(&config.database)
        .await
        .map_err(ServerError::Database)?;
    if config.database.run_migrations {
        crate::adapters::postgres::run_migrations(&pool)
            .await
            .map_err(ServerError::Database)?;
    }
    let repository: Arc<dyn OrderRepository> = Arc::new(PostgresOrderRepository::new(pool.clone()));

    if config.catalog.sync_on_startup {
        sync_catalog(&config.catalog, repository.clone()).await;
    }

    let sessions = TaskTracker::new();
    let app = build_router(
        &config.server,
        &config.review,
        repository,
        shutdown.clone(),
        sessions.clone(),
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    tracing::info!(%addr, version = env!("CARGO_PKG_VERSION"), "Listening");

    let stop = shutdown.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { stop.cancelled().await })
        .await?;

    drain_sessions(&sessions, config.server.shutdown_grace()).await;
    pool.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}
