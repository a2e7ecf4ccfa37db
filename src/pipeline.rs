//! Embedding enrichment pipeline for the ticket dataset.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::output::{write_dataset, EmbeddingService};
use crate::types::{truncate, EnrichedTicket, SeederConfig, TicketRecord};

/// Characters of the request text quoted in failure diagnostics.
const DIAGNOSTIC_TEXT_CHARS: usize = 30;

/// Configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Size of the zero vector substituted for a failed embedding
    pub fallback_dimension: usize,
    /// Pause after each embedding call
    pub request_delay: Duration,
    /// Dataset destination
    pub output_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from(&SeederConfig::default())
    }
}

impl From<&SeederConfig> for PipelineConfig {
    fn from(config: &SeederConfig) -> Self {
        Self {
            fallback_dimension: config.embedding_dimension,
            request_delay: config.request_delay(),
            output_path: config.output_path(),
        }
    }
}

/// Outcome of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub output_path: PathBuf,
    pub records_written: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// Enriches ticket records with request embeddings and writes the dataset.
pub struct EnrichmentPipeline<S> {
    service: S,
    config: PipelineConfig,
}

impl<S: EmbeddingService> EnrichmentPipeline<S> {
    /// Create a new pipeline.
    pub fn new(service: S, config: PipelineConfig) -> Self {
        Self { service, config }
    }

    /// The pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Embed `text`, or return the zero-vector sentinel if the call fails.
    ///
    /// Failures are logged and never propagated.
    pub async fn obtain_embedding(&self, text: &str) -> Vec<f32> {
        match self.service.embed(text).await {
            Ok(vector) => vector,
            Err(e) => {
                error!(
                    model = self.service.model(),
                    text = %truncate(text, DIAGNOSTIC_TEXT_CHARS),
                    error = %e,
                    "Could not get embedding"
                );
                vec![0.0; self.config.fallback_dimension]
            }
        }
    }

    /// Enrich every ticket in order, pausing after each call.
    pub async fn enrich(&self, tickets: Vec<TicketRecord>) -> Vec<EnrichedTicket> {
        let total = tickets.len();
        let mut enriched = Vec::with_capacity(total);

        for (i, ticket) in tickets.into_iter().enumerate() {
            info!(
                ticket_id = %ticket.ticket_id,
                "Generating embedding for ticket {} ({}/{})",
                ticket.ticket_id,
                i + 1,
                total
            );

            let embedding = self.obtain_embedding(&ticket.request).await;
            enriched.push(ticket.enrich(embedding));

            // Rate limit for the embedding service
            if !self.config.request_delay.is_zero() {
                tokio::time::sleep(self.config.request_delay).await;
            }
        }

        enriched
    }

    /// Enrich all tickets and write the dataset.
    ///
    /// Only writing the output can fail; embedding failures are absorbed.
    pub async fn run(&self, tickets: Vec<TicketRecord>) -> Result<PipelineReport> {
        let started_at = Utc::now();
        info!(
            total_tickets = tickets.len(),
            model = self.service.model(),
            "Generating ticket embeddings"
        );

        let enriched = self.enrich(tickets).await;
        let records_written = write_dataset(&self.config.output_path, &enriched)?;

        info!(
            "Mock database with embeddings created at '{}' with {} tickets",
            self.config.output_path.display(),
            records_written
        );

        Ok(PipelineReport {
            output_path: self.config.output_path.clone(),
            records_written,
            started_at,
            completed_at: Utc::now(),
        })
    }
}
