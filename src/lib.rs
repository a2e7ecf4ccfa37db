//! Ticket Embedder Library
//!
//! Enriches a static table of resolved support tickets with text embeddings
//! of their request field and writes the result as a CSV dataset for
//! similarity search.

pub mod dataset;
pub mod output;
pub mod pipeline;
pub mod types;

pub use output::{EmbeddingError, EmbeddingService, VertexEmbeddingClient};
pub use pipeline::{EnrichmentPipeline, PipelineConfig, PipelineReport};
pub use types::{EnrichedTicket, SeederConfig, TicketRecord};

/// Default embedding model
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-004";

/// Output dimension of the default model, and size of the fallback vector
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 768;

/// Default region of the embedding endpoint
pub const DEFAULT_LOCATION: &str = "us-central1";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Default dataset file name
pub const DEFAULT_OUTPUT_FILE: &str = "resolved_tickets.csv";

/// Default pause after each embedding call (1s)
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;

/// Default HTTP timeout per embedding call
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
