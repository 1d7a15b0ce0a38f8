//! LLM Chat API server.

use std::sync::Arc;

use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use llm_chat::adapters::http::cors_layer;
use llm_chat::adapters::{
    api_router, ChatAppState, InMemoryConversationStore, MockResponseGenerator,
};
use llm_chat::config::{AiConfig, AppConfig};
use llm_chat::ports::ResponseGenerator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!(environment = ?config.server.environment, "Starting LLM Chat API");

    let generator = build_generator(&config.ai);
    let info = generator.generator_info();
    tracing::info!(generator = %info.name, model = %info.model, "Response generator ready");

    let state = ChatAppState::new(
        Arc::new(InMemoryConversationStore::new()),
        Arc::new(generator),
    );

    let app = api_router(state).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(CompressionLayer::new())
            .layer(cors_layer(&config.server.cors_origins_list())),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("LLM Chat API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn build_generator(config: &AiConfig) -> MockResponseGenerator {
    let (min_delay, max_delay) = config.delay_range();
    let generator = MockResponseGenerator::new()
        .with_model(config.model.clone())
        .with_delay_range(min_delay, max_delay);

    match config.seed {
        Some(seed) => generator.with_seed(seed),
        None => generator,
    }
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C signal, starting graceful shutdown"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
