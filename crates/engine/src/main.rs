//! Worldsmith Engine - main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worldsmith_engine::api;
use worldsmith_engine::app::App;
use worldsmith_engine::infrastructure::auth::GoTrueClient;
use worldsmith_engine::infrastructure::draft::{EdgeFunctionClient, OpenAiDraftClient};
use worldsmith_engine::infrastructure::ports::{AuthPort, DraftPort};
use worldsmith_engine::infrastructure::postgrest::PostgrestStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env from the working directory when one exists.
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worldsmith_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Worldsmith Engine");

    // Load configuration
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .unwrap_or(3000);

    // Row store and auth share the backend host and anon key.
    let store = Arc::new(PostgrestStore::from_env());
    let auth: Arc<dyn AuthPort> = Arc::new(GoTrueClient::from_env());

    // Draft generation: proxy a deployed function when one is configured,
    // otherwise build prompts in-process against a chat-completions API.
    let draft: Arc<dyn DraftPort> = match std::env::var("WORLDSMITH_DRAFT_FUNCTION_URL") {
        Ok(url) => {
            tracing::info!(function_url = %url, "draft generation via edge function");
            let key = std::env::var("WORLDSMITH_STORE_ANON_KEY").ok();
            Arc::new(EdgeFunctionClient::new(&url, key))
        }
        Err(_) => {
            tracing::info!("draft generation via chat-completions API");
            Arc::new(OpenAiDraftClient::from_env())
        }
    };

    let app = Arc::new(App::new(store, auth, draft));
    let router = api::router(app);

    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
