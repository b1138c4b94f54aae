use std::sync::Arc;

use tokio::net::TcpListener;

use chat_relay::application::services::ChatService;
use chat_relay::infrastructure::llm::create_llm_client;
use chat_relay::infrastructure::observability::{TracingConfig, init_tracing};
use chat_relay::infrastructure::persistence::InMemoryTranscriptStore;
use chat_relay::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::new(environment, &settings.logging));

    let llm_client = create_llm_client(&settings)?;
    let transcript = Arc::new(InMemoryTranscriptStore::new());
    let chat_service = Arc::new(ChatService::new(transcript, llm_client));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState {
        chat_service,
        settings,
    };
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
