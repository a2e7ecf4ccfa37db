//! Ticket record type definitions.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Names of the dataset columns, in output order.
pub const DATASET_HEADER: [&str; 6] = [
    "ticket_id",
    "customer_id",
    "request",
    "category",
    "suggested_solution",
    "request_embedding",
];

/// A resolved support ticket.
///
/// Records are immutable once built; enrichment produces a new
/// [`EnrichedTicket`] rather than modifying the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Ticket identifier (e.g. "ADK-101")
    pub ticket_id: String,

    /// Identifier of the developer who raised the ticket
    pub customer_id: String,

    /// Verbatim request text, the field that gets embedded
    pub request: String,

    /// Category label
    pub category: String,

    /// Resolution that was suggested for the request
    pub suggested_solution: String,
}

impl TicketRecord {
    /// Create a new ticket record.
    pub fn new(
        ticket_id: &str,
        customer_id: &str,
        request: &str,
        category: &str,
        suggested_solution: &str,
    ) -> Self {
        Self {
            ticket_id: ticket_id.to_string(),
            customer_id: customer_id.to_string(),
            request: request.to_string(),
            category: category.to_string(),
            suggested_solution: suggested_solution.to_string(),
        }
    }

    /// Attach an embedding, producing the enriched record.
    pub fn enrich(self, request_embedding: Vec<f32>) -> EnrichedTicket {
        EnrichedTicket {
            ticket: self,
            request_embedding,
        }
    }
}

/// A ticket record with the embedding of its request text.
///
/// An all-zero embedding is the sentinel for "embedding unavailable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedTicket {
    #[serde(flatten)]
    pub ticket: TicketRecord,

    /// Embedding of `ticket.request`
    pub request_embedding: Vec<f32>,
}

impl EnrichedTicket {
    /// Dimension of the request embedding.
    pub fn dimension(&self) -> usize {
        self.request_embedding.len()
    }

    /// Whether this record carries the zero-vector sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.request_embedding.iter().all(|v| *v == 0.0)
    }

    /// The six dataset fields, in [`DATASET_HEADER`] order.
    pub fn to_row(&self) -> [String; 6] {
        [
            self.ticket.ticket_id.clone(),
            self.ticket.customer_id.clone(),
            self.ticket.request.clone(),
            self.ticket.category.clone(),
            self.ticket.suggested_solution.clone(),
            format_embedding(&self.request_embedding),
        ]
    }
}

/// Render an embedding as `[v1, v2, ..., vn]`.
///
/// Each value uses its shortest round-trip form and always carries a
/// decimal point, so `1` is written as `1.0`.
pub fn format_embedding(values: &[f32]) -> String {
    let body = values
        .iter()
        .map(|v| format!("{:?}", v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", body)
}

/// Parse the text form produced by [`format_embedding`].
pub fn parse_embedding(text: &str) -> Result<Vec<f32>> {
    serde_json::from_str(text.trim())
        .with_context(|| format!("Invalid embedding value: {}", truncate(text, 40)))
}

/// First `max_chars` characters of `text`, with `...` appended.
pub fn truncate(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TicketRecord {
        TicketRecord::new("ADK-1", "DEV-1", "Hello", "Core Concepts", "Say hi back.")
    }

    #[test]
    fn test_format_embedding() {
        assert_eq!(format_embedding(&[1.0, 2.0, 3.0]), "[1.0, 2.0, 3.0]");
        assert_eq!(format_embedding(&[-0.25, 0.5]), "[-0.25, 0.5]");
        assert_eq!(format_embedding(&[]), "[]");
    }

    #[test]
    fn test_parse_embedding() {
        assert_eq!(parse_embedding("[1.0, 2.0, 3.0]").unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(parse_embedding(" [] ").unwrap(), Vec::<f32>::new());
        assert!(parse_embedding("[1.0, oops]").is_err());
        assert!(parse_embedding("1.0, 2.0").is_err());
    }

    #[test]
    fn test_parse_reads_formatted_sentinel() {
        let text = format_embedding(&vec![0.0; 768]);
        let parsed = parse_embedding(&text).unwrap();
        assert_eq!(parsed.len(), 768);
        assert!(parsed.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_enrich_and_row() {
        let enriched = sample().enrich(vec![0.5, 1.5]);
        assert_eq!(enriched.dimension(), 2);
        assert!(!enriched.is_sentinel());

        let row = enriched.to_row();
        assert_eq!(row[0], "ADK-1");
        assert_eq!(row[2], "Hello");
        assert_eq!(row[5], "[0.5, 1.5]");
    }

    #[test]
    fn test_sentinel_detection() {
        assert!(sample().enrich(vec![0.0; 4]).is_sentinel());
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ab", 30), "ab...");
        assert_eq!(truncate("héllo wörld", 4), "héll...");
    }
}
