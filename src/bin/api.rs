use financial_advice_dispatcher::{
    api::start_server, backend::GeminiClient, config::AdvisorConfig, FinancialAdvisor,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AdvisorConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    if config.api_key.is_empty() {
        warn!("⚠️  GEMINI_API_KEY not set; every generation request will fail");
        warn!("📌 See .env.example for setup instructions");
    }

    info!("🚀 Financial Advice Dispatcher - API Server");
    info!("📍 Port: {}", config.port);

    // The single backend handle, shared read-only by every request
    let gemini = GeminiClient::from_config(&config)?;
    info!("🤖 Model: {}", gemini.model());

    let advisor = Arc::new(FinancialAdvisor::new(Box::new(gemini)));

    info!("✅ Advisor initialized");
    info!("📡 Starting API server...");

    start_server(advisor, config.port).await?;

    Ok(())
}
