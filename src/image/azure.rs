//! Azure OpenAI DALL-E 3 client.
//!
//! Composes the deployment endpoint, performs the generation POST, and
//! classifies the response into a [`GenerationOutcome`]. The service answers
//! with one of two JSON shapes: `{created, data: [...]}` on success and
//! `{error: {code, message}}` on failure, branched strictly on the HTTP
//! status rather than body content.

use crate::config::AzureConfig;
use crate::error::Result;
use crate::image::types::{GeneratedImage, GenerationOutcome, ImageRequest};
use serde::Deserialize;

/// Azure OpenAI REST API version used for image generations.
pub const API_VERSION: &str = "2024-02-01";

/// Client for one Azure OpenAI DALL-E 3 deployment.
pub struct AzureDalleClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl AzureDalleClient {
    /// Creates a client for the deployment described by `config`.
    pub fn new(config: &AzureConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: generations_url(&config.resource_name, &config.deployment_name),
            api_key: config.api_key.clone(),
        }
    }

    /// Replaces the composed endpoint with an explicit URL.
    ///
    /// Used by tests to point the client at a local address.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Returns the endpoint this client will POST to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one generation request and classifies the response.
    ///
    /// Never returns an `Err` and never panics: transport failures are
    /// folded into [`GenerationOutcome::Failure`] so the caller always has
    /// something displayable.
    pub async fn generate(&self, request: &ImageRequest) -> GenerationOutcome {
        tracing::debug!(endpoint = %self.endpoint, size = %request.size, "sending image generation request");

        match self.send(request).await {
            Ok((success, body)) => interpret_response(success, &body),
            Err(err) => {
                tracing::warn!("image generation request failed: {err}");
                GenerationOutcome::Failure {
                    code: None,
                    message: err.to_string(),
                }
            }
        }
    }

    /// Performs the POST and reads the full body as text.
    ///
    /// The body is drained before any parsing is attempted so a truncated
    /// stream surfaces here rather than as a JSON error.
    async fn send(&self, request: &ImageRequest) -> Result<(bool, String)> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let success = response.status().is_success();
        let body = response.text().await?;
        Ok((success, body))
    }
}

/// Composes the deployment's image-generations URL.
fn generations_url(resource_name: &str, deployment_name: &str) -> String {
    format!(
        "https://{resource_name}.openai.azure.com/openai/deployments/{deployment_name}/images/generations?api-version={API_VERSION}"
    )
}

/// Classifies a fully-read response body into an outcome.
///
/// The branch is decided by the transport status alone. Each branch parses
/// its own shape in isolation and falls back to the raw body text when the
/// shape does not match.
fn interpret_response(success: bool, body: &str) -> GenerationOutcome {
    if success {
        match serde_json::from_str::<GenerationsBody>(body) {
            Ok(parsed) => GenerationOutcome::Success {
                created: parsed.created,
                images: parsed
                    .data
                    .into_iter()
                    .map(|entry| GeneratedImage {
                        url: entry.url,
                        revised_prompt: entry.revised_prompt,
                    })
                    .collect(),
            },
            Err(_) => GenerationOutcome::Failure {
                code: None,
                message: body.to_string(),
            },
        }
    } else {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error: Some(error) }) => GenerationOutcome::Failure {
                code: error.code,
                message: error.message,
            },
            _ => GenerationOutcome::Failure {
                code: None,
                message: body.to_string(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerationsBody {
    #[serde(default)]
    created: u64,
    #[serde(default)]
    data: Vec<ImageEntry>,
}

#[derive(Debug, Deserialize)]
struct ImageEntry {
    // Carries the Base64 payload too when b64_json was requested.
    #[serde(default)]
    url: String,
    #[serde(default)]
    revised_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AzureConfig {
        AzureConfig {
            resource_name: "my-resource".into(),
            deployment_name: "dalle3".into(),
            api_key: "secret".into(),
        }
    }

    #[test]
    fn test_endpoint_composition() {
        let client = AzureDalleClient::new(&test_config());
        assert_eq!(
            client.endpoint(),
            "https://my-resource.openai.azure.com/openai/deployments/dalle3/images/generations?api-version=2024-02-01"
        );
    }

    #[test]
    fn test_success_with_one_entry() {
        let body = r#"{"created": 1700000000, "data": [{"url": "https://example.com/img.png", "revised_prompt": "A red door in snow"}]}"#;
        let outcome = interpret_response(true, body);

        assert_eq!(
            outcome,
            GenerationOutcome::Success {
                created: 1_700_000_000,
                images: vec![GeneratedImage {
                    url: "https://example.com/img.png".into(),
                    revised_prompt: Some("A red door in snow".into()),
                }],
            }
        );
    }

    #[test]
    fn test_success_without_revised_prompt() {
        let body = r#"{"created": 1, "data": [{"url": "https://example.com/img.png"}]}"#;
        match interpret_response(true, body) {
            GenerationOutcome::Success { images, .. } => {
                assert_eq!(images[0].revised_prompt, None);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_empty_data_is_empty_success() {
        let body = r#"{"created": 1700000000, "data": []}"#;
        let outcome = interpret_response(true, body);

        assert_eq!(
            outcome,
            GenerationOutcome::Success {
                created: 1_700_000_000,
                images: vec![],
            }
        );
    }

    #[test]
    fn test_missing_data_is_empty_success() {
        let outcome = interpret_response(true, r#"{"created": 5}"#);
        match outcome {
            GenerationOutcome::Success { created, images } => {
                assert_eq!(created, 5);
                assert!(images.is_empty());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_success_body_is_failure() {
        let outcome = interpret_response(true, "oops");
        assert_eq!(
            outcome,
            GenerationOutcome::Failure {
                code: None,
                message: "oops".into(),
            }
        );
    }

    #[test]
    fn test_structured_error() {
        let body = r#"{"error": {"code": "E1", "message": "bad prompt"}}"#;
        let outcome = interpret_response(false, body);

        assert_eq!(
            outcome,
            GenerationOutcome::Failure {
                code: Some("E1".into()),
                message: "bad prompt".into(),
            }
        );
    }

    #[test]
    fn test_error_without_code() {
        let body = r#"{"error": {"message": "throttled"}}"#;
        let outcome = interpret_response(false, body);

        assert_eq!(
            outcome,
            GenerationOutcome::Failure {
                code: None,
                message: "throttled".into(),
            }
        );
    }

    #[test]
    fn test_unparseable_error_body_falls_back_to_raw_text() {
        let outcome = interpret_response(false, "oops");
        assert_eq!(
            outcome,
            GenerationOutcome::Failure {
                code: None,
                message: "oops".into(),
            }
        );
    }

    #[test]
    fn test_error_body_without_error_object_falls_back_to_raw_text() {
        let body = r#"{"created": 0}"#;
        let outcome = interpret_response(false, body);
        assert_eq!(
            outcome,
            GenerationOutcome::Failure {
                code: None,
                message: body.into(),
            }
        );
    }

    #[tokio::test]
    async fn test_connection_failure_is_failure_outcome() {
        // Port 9 (discard) is never listening locally, so the connection is
        // refused without touching DNS.
        let client =
            AzureDalleClient::new(&test_config()).with_endpoint("http://127.0.0.1:9/generations");
        let outcome = client.generate(&ImageRequest::new("a red door")).await;

        match outcome {
            GenerationOutcome::Failure { code, message } => {
                assert_eq!(code, None);
                assert!(!message.is_empty());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
