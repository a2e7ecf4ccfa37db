//! HTTP client for the text embedding service.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::types::SeederConfig;

/// Failure of a single embedding call.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("request to embedding service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("embedding service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed embedding response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("embedding response contained no predictions")]
    EmptyResponse,

    #[error("expected an embedding of dimension {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// A text-to-vector embedding service.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// Identifier of the model producing the vectors.
    fn model(&self) -> &str;

    /// Embed one text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Client for the Vertex AI text embedding `predict` endpoint.
pub struct VertexEmbeddingClient {
    client: Client,
    predict_url: String,
    model: String,
    dimension: usize,
    access_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: [PredictInstance<'a>; 1],
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance<'a> {
    content: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    output_dimensionality: usize,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    embeddings: PredictionEmbeddings,
}

#[derive(Debug, Deserialize)]
struct PredictionEmbeddings {
    values: Vec<f32>,
}

impl VertexEmbeddingClient {
    /// Create a client posting to `predict_url`.
    pub fn new(
        predict_url: &str,
        model: &str,
        dimension: usize,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            predict_url: predict_url.to_string(),
            model: model.to_string(),
            dimension,
            access_token,
        })
    }

    /// Create a client from the seeder configuration.
    ///
    /// Fails when no project is configured, or when no access token can
    /// be found for the public endpoint.
    pub fn from_config(config: &SeederConfig) -> Result<Self> {
        let project = config
            .project_id
            .as_deref()
            .context("GOOGLE_CLOUD_PROJECT is not set")?;

        let base = config
            .endpoint_override
            .clone()
            .unwrap_or_else(|| format!("https://{}-aiplatform.googleapis.com", config.location));
        let predict_url = predict_url(&base, project, &config.location, &config.embedding_model);

        let access_token = match (&config.access_token, &config.endpoint_override) {
            (Some(token), _) => Some(token.clone()),
            (None, Some(_)) => None,
            (None, None) => Some(gcloud_access_token()?),
        };

        info!(
            model = %config.embedding_model,
            location = %config.location,
            dimension = config.embedding_dimension,
            "Initialized embedding client"
        );

        Self::new(
            &predict_url,
            &config.embedding_model,
            config.embedding_dimension,
            access_token,
            config.request_timeout(),
        )
    }

    /// Dimension requested from the model.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn parse_response(&self, body: &str) -> Result<Vec<f32>, EmbeddingError> {
        let response: PredictResponse = serde_json::from_str(body)?;
        let values = response
            .predictions
            .into_iter()
            .next()
            .map(|p| p.embeddings.values)
            .ok_or(EmbeddingError::EmptyResponse)?;

        if values.len() != self.dimension {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimension,
                actual: values.len(),
            });
        }

        Ok(values)
    }
}

#[async_trait]
impl EmbeddingService for VertexEmbeddingClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request = PredictRequest {
            instances: [PredictInstance { content: text }],
            parameters: PredictParameters {
                output_dimensionality: self.dimension,
            },
        };

        debug!(url = %self.predict_url, chars = text.len(), "Requesting embedding");

        let mut builder = self.client.post(&self.predict_url).json(&request);
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(EmbeddingError::Status { status, body });
        }

        self.parse_response(&body)
    }
}

/// Build the `predict` URL for a publisher model.
pub fn predict_url(base: &str, project: &str, location: &str, model: &str) -> String {
    format!(
        "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:predict",
        base.trim_end_matches('/'),
        project,
        location,
        model
    )
}

/// Ask the gcloud CLI for an access token.
fn gcloud_access_token() -> Result<String> {
    let output = std::process::Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .context("GOOGLE_ACCESS_TOKEN is not set and gcloud could not be run")?;

    if !output.status.success() {
        anyhow::bail!(
            "gcloud auth print-access-token failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let token = String::from_utf8(output.stdout)
        .context("gcloud returned a non-UTF-8 token")?
        .trim()
        .to_string();
    if token.is_empty() {
        anyhow::bail!("gcloud returned an empty access token");
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer one HTTP request with `status` and `body`, returning the raw request.
    async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if buf.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&buf).into_owned()
        });

        (format!("http://{}", addr), handle)
    }

    fn client(base: &str, dimension: usize, token: Option<&str>) -> VertexEmbeddingClient {
        VertexEmbeddingClient::new(
            &predict_url(base, "agora-dev", "us-central1", "text-embedding-004"),
            "text-embedding-004",
            dimension,
            token.map(String::from),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_predict_url() {
        assert_eq!(
            predict_url("https://us-central1-aiplatform.googleapis.com/", "p", "us-central1", "m"),
            "https://us-central1-aiplatform.googleapis.com/v1/projects/p/locations/us-central1/publishers/google/models/m:predict"
        );
    }

    #[test]
    fn test_from_config_requires_project() {
        let config = SeederConfig::default();
        assert!(VertexEmbeddingClient::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_with_override() {
        let config = SeederConfig {
            project_id: Some("agora-dev".to_string()),
            endpoint_override: Some("http://127.0.0.1:9".to_string()),
            embedding_dimension: 16,
            ..Default::default()
        };
        let client = VertexEmbeddingClient::from_config(&config).unwrap();
        assert_eq!(client.model(), "text-embedding-004");
        assert_eq!(client.dimension(), 16);
        assert!(client.predict_url.starts_with("http://127.0.0.1:9/v1/projects/agora-dev/"));
        assert!(client.access_token.is_none());
    }

    #[test]
    fn test_parse_response() {
        let client = client("http://localhost", 3, None);

        let ok = r#"{"predictions":[{"embeddings":{"values":[0.1,0.2,0.3],"statistics":{"token_count":2}}}]}"#;
        assert_eq!(client.parse_response(ok).unwrap(), vec![0.1, 0.2, 0.3]);

        assert!(matches!(
            client.parse_response(r#"{"predictions":[]}"#),
            Err(EmbeddingError::EmptyResponse)
        ));
        assert!(matches!(
            client.parse_response(r#"{"predictions":[{"embeddings":{"values":[1.0]}}]}"#),
            Err(EmbeddingError::DimensionMismatch { expected: 3, actual: 1 })
        ));
        assert!(matches!(
            client.parse_response("not json"),
            Err(EmbeddingError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_embed_round_trip() {
        let body = r#"{"predictions":[{"embeddings":{"values":[1.0,2.0,3.0]}}]}"#.to_string();
        let (base, server) = serve_once("200 OK", body).await;

        let client = client(&base, 3, Some("secret-token"));
        let vector = client.embed("Hello").await.unwrap();
        assert_eq!(vector, vec![1.0, 2.0, 3.0]);

        let request = server.await.unwrap();
        assert!(request.starts_with(
            "POST /v1/projects/agora-dev/locations/us-central1/publishers/google/models/text-embedding-004:predict"
        ));
        assert!(request.to_lowercase().contains("authorization: bearer secret-token"));
        assert!(request.contains(r#""instances":[{"content":"Hello"}]"#));
        assert!(request.contains(r#""outputDimensionality":3"#));
    }

    #[tokio::test]
    async fn test_embed_error_status() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded"}}"#.to_string();
        let (base, server) = serve_once("429 Too Many Requests", body).await;

        let err = client(&base, 3, None).embed("Hello").await.unwrap_err();
        match err {
            EmbeddingError::Status { status, body } => {
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                assert!(body.contains("Quota exceeded"));
            }
            other => panic!("unexpected error: {other}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_embed_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = client(&base, 3, None).embed("Hello").await.unwrap_err();
        assert!(matches!(err, EmbeddingError::Request(_)));
    }
}
