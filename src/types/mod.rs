//! Core types for the ticket embedder.

mod config;
mod ticket;

pub use config::SeederConfig;
pub use ticket::{
    format_embedding, parse_embedding, truncate, EnrichedTicket, TicketRecord, DATASET_HEADER,
};
