//! Remote Classifier - DiseaseClassifier over HTTP.
//!
//! Talks to a prediction service exposing:
//!
//! - `GET  {base}/health`  -> `{"ok": bool, "model_loaded": bool}`
//! - `POST {base}/predict` with `{"symptoms": {"<id>": 0|1, ...}}`
//!   -> `{"disease": "...", "confidence": 0.0..1.0}`
//!
//! The request always carries every schema id. HTTP 503 means no model is
//! loaded, HTTP 400 means the service rejected the input.
//!
//! `confidence` is required. A service answering with `{"disease": ...}`
//! alone, as a bare FastAPI/scikit-learn service does, is rejected with
//! `InvalidResponse` until it also returns the predicted class probability.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RemoteClassifierConfig::new("http://localhost:5001")
//!     .with_timeout(Duration::from_secs(5));
//!
//! let classifier = RemoteClassifier::new(config, schema)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use crate::domain::diagnosis::{ClassificationResult, FeatureVector, SymptomSchema};
use crate::domain::symptoms::SymptomSet;
use crate::ports::{ClassifierError, ClassifierHealth, DiseaseClassifier};

/// Configuration for the remote classifier.
#[derive(Debug, Clone)]
pub struct RemoteClassifierConfig {
    /// Service base URL, without trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl RemoteClassifierConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the prediction service.
pub struct RemoteClassifier {
    config: RemoteClassifierConfig,
    client: Client,
    schema: SymptomSchema,
}

impl RemoteClassifier {
    /// Creates a client. The schema decides which ids are sent.
    pub fn new(config: RemoteClassifierConfig, schema: SymptomSchema) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClassifierError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config,
            client,
            schema,
        })
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.config.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url)
    }

    fn to_request(&self, symptoms: &SymptomSet) -> PredictRequest {
        PredictRequest {
            symptoms: FeatureVector::from_symptoms(&self.schema, symptoms).to_flags(&self.schema),
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> ClassifierError {
        if e.is_timeout() {
            ClassifierError::Transport(format!(
                "Request timed out after {}s",
                self.config.timeout.as_secs()
            ))
        } else if e.is_connect() {
            ClassifierError::Transport(format!("Connection failed: {e}"))
        } else {
            ClassifierError::Transport(e.to_string())
        }
    }

    /// Maps non-success statuses onto classifier errors.
    async fn handle_response_status(response: Response) -> Result<Response, ClassifierError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, body))
    }
}

fn status_error(status: StatusCode, body: String) -> ClassifierError {
    match status {
        StatusCode::SERVICE_UNAVAILABLE => ClassifierError::ModelUnavailable,
        StatusCode::BAD_REQUEST => ClassifierError::InvalidInput(body),
        _ => ClassifierError::Transport(format!("Unexpected status {status}: {body}")),
    }
}

fn parse_prediction(response: PredictResponse) -> Result<ClassificationResult, ClassifierError> {
    let confidence = response
        .confidence
        .ok_or_else(|| ClassifierError::InvalidResponse("missing confidence".to_string()))?;

    ClassificationResult::new(response.disease, confidence)
        .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl DiseaseClassifier for RemoteClassifier {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn predict(&self, symptoms: &SymptomSet) -> Result<ClassificationResult, ClassifierError> {
        let request = self.to_request(symptoms);
        debug!(url = %self.predict_url(), symptoms = symptoms.len(), "Requesting prediction");

        let response = self
            .client
            .post(self.predict_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let response = Self::handle_response_status(response).await?;

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        parse_prediction(body)
    }

    async fn health(&self) -> Result<ClassifierHealth, ClassifierError> {
        let response = self
            .client
            .get(self.health_url())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let response = Self::handle_response_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(format!("Failed to parse health: {e}")))
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct PredictRequest {
    symptoms: BTreeMap<String, u8>,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    disease: String,
    #[serde(default)]
    confidence: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::symptoms::SymptomId;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn id(raw: &str) -> SymptomId {
        SymptomId::new(raw).unwrap()
    }

    fn schema() -> SymptomSchema {
        SymptomSchema::new(vec![id("itching"), id("headache"), id("nausea")])
    }

    fn classifier(base_url: &str) -> RemoteClassifier {
        let config = RemoteClassifierConfig::new(base_url).with_timeout(Duration::from_secs(5));
        RemoteClassifier::new(config, schema()).unwrap()
    }

    /// Serves one canned HTTP response and returns the base URL plus a handle
    /// yielding the raw request.
    async fn serve_once(status: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (format!("http://{addr}"), handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
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
        String::from_utf8_lossy(&buf).into_owned()
    }

    mod config {
        use super::*;

        #[test]
        fn trailing_slash_is_trimmed() {
            let config = RemoteClassifierConfig::new("http://localhost:5001/");
            assert_eq!(config.base_url, "http://localhost:5001");
        }

        #[test]
        fn urls_are_built_from_base() {
            let classifier = classifier("http://classifier:5001");
            assert_eq!(classifier.predict_url(), "http://classifier:5001/predict");
            assert_eq!(classifier.health_url(), "http://classifier:5001/health");
        }
    }

    mod wire_format {
        use super::*;

        #[test]
        fn request_carries_every_schema_id() {
            let symptoms: SymptomSet = [id("headache"), id("unknown")].into_iter().collect();
            let request = classifier("http://x").to_request(&symptoms);
            let json = serde_json::to_value(&request).unwrap();

            assert_eq!(
                json,
                serde_json::json!({"symptoms": {"headache": 1, "itching": 0, "nausea": 0}})
            );
        }

        #[test]
        fn missing_confidence_is_invalid_response() {
            let response: PredictResponse = serde_json::from_str(r#"{"disease":"Migraine"}"#).unwrap();
            assert!(matches!(
                parse_prediction(response),
                Err(ClassifierError::InvalidResponse(_))
            ));
        }

        #[test]
        fn out_of_range_confidence_is_invalid_response() {
            let response: PredictResponse =
                serde_json::from_str(r#"{"disease":"Migraine","confidence":1.5}"#).unwrap();
            assert!(matches!(
                parse_prediction(response),
                Err(ClassifierError::InvalidResponse(_))
            ));
        }

        #[test]
        fn statuses_map_to_errors() {
            assert_eq!(
                status_error(StatusCode::SERVICE_UNAVAILABLE, String::new()),
                ClassifierError::ModelUnavailable
            );
            assert!(matches!(
                status_error(StatusCode::BAD_REQUEST, "bad".to_string()),
                ClassifierError::InvalidInput(body) if body == "bad"
            ));
            assert!(matches!(
                status_error(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
                ClassifierError::Transport(_)
            ));
        }
    }

    mod http {
        use super::*;

        #[tokio::test]
        async fn predict_posts_flags_and_parses_result() {
            let (url, server) =
                serve_once("200 OK", r#"{"disease":"Migraine","confidence":0.82}"#).await;
            let symptoms: SymptomSet = [id("headache")].into_iter().collect();

            let result = classifier(&url).predict(&symptoms).await.unwrap();
            let request = server.await.unwrap();

            assert_eq!(result.condition(), "Migraine");
            assert!((result.confidence() - 0.82).abs() < 1e-12);
            assert!(request.starts_with("POST /predict"));
            assert!(request.contains(r#""headache":1"#));
        }

        #[tokio::test]
        async fn disease_only_body_is_rejected() {
            let (url, server) = serve_once("200 OK", r#"{"disease":"Migraine"}"#).await;

            let result = classifier(&url).predict(&SymptomSet::new()).await;
            server.await.unwrap();

            assert!(matches!(result, Err(ClassifierError::InvalidResponse(msg)) if msg.contains("confidence")));
        }

        #[tokio::test]
        async fn service_unavailable_means_no_model() {
            let (url, server) =
                serve_once("503 Service Unavailable", r#"{"error":"model not loaded"}"#).await;

            let result = classifier(&url).predict(&SymptomSet::new()).await;
            server.await.unwrap();

            assert_eq!(result, Err(ClassifierError::ModelUnavailable));
        }

        #[tokio::test]
        async fn health_is_parsed() {
            let (url, server) = serve_once("200 OK", r#"{"ok":true,"model_loaded":false}"#).await;

            let health = classifier(&url).health().await.unwrap();
            let request = server.await.unwrap();

            assert!(request.starts_with("GET /health"));
            assert_eq!(
                health,
                ClassifierHealth {
                    ok: true,
                    model_loaded: false
                }
            );
        }

        #[tokio::test]
        async fn connection_failure_is_transport_error() {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let result = classifier(&format!("http://{addr}"))
                .predict(&SymptomSet::new())
                .await;

            assert!(matches!(result, Err(ClassifierError::Transport(_))));
        }
    }
}
