//! Output module: the embedding service client and the CSV dataset store.

mod csv_store;
mod embedding_client;

pub use csv_store::{encode_dataset, read_dataset, write_dataset};
pub use embedding_client::{predict_url, EmbeddingError, EmbeddingService, VertexEmbeddingClient};
