//! Ticket Embedder - Main Entry Point
//!
//! Generates the resolved-tickets dataset with request embeddings.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticket_embedder::dataset;
use ticket_embedder::{EnrichmentPipeline, PipelineConfig, SeederConfig, VertexEmbeddingClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ticket_embedder=info,create_mock_db=info".into()),
        ))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    // Load configuration
    let config = SeederConfig::from_env();

    info!("Starting Ticket Embedder v{}", env!("CARGO_PKG_VERSION"));
    info!("Initializing embedding model and generating mock data...");

    let client = VertexEmbeddingClient::from_config(&config)?;
    let pipeline = EnrichmentPipeline::new(client, PipelineConfig::from(&config));

    let report = pipeline.run(dataset::resolved_tickets()).await?;
    info!(
        records = report.records_written,
        elapsed_secs = (report.completed_at - report.started_at).num_seconds(),
        "Done"
    );

    Ok(())
}
