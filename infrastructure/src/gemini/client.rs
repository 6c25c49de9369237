//! HTTP client for the Generative Language REST API.

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{
    ApiErrorBody, GenerateContentRequest, GenerateContentResponse, PredictRequest,
    PredictResponse,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use storybook_domain::Model;
use storybook_domain::util::preview;
use tracing::debug;

/// Public endpoint of the Generative Language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Connection settings for [`GeminiClient`]
#[derive(Clone)]
pub struct GeminiClientConfig {
    pub base_url: String,
    pub api_key: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl GeminiClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for GeminiClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Thin JSON-over-HTTP client; one instance is shared by all sessions.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// `POST models/{model}:generateContent`
    pub async fn generate_content(
        &self,
        model: &Model,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.post(&self.endpoint(model, "generateContent"), request)
            .await
    }

    /// `POST models/{model}:predict`
    pub async fn predict(&self, model: &Model, request: &PredictRequest) -> Result<PredictResponse> {
        self.post(&self.endpoint(model, "predict"), request).await
    }

    fn endpoint(&self, model: &Model, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    async fn post<Req, Resp>(&self, url: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or_else(|_| text.clone());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Response {}: {}", status, preview(&text, 200));

        serde_json::from_str(&text).map_err(|e| GeminiError::ParseError {
            error: e.to_string(),
            raw: preview(&text, 500),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::protocol::Content;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> GeminiClient {
        GeminiClient::new(&GeminiClientConfig::new("test-key").with_base_url(server.uri())).unwrap()
    }

    fn request() -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user("hi")],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_generate_content_sends_key_and_model_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"role": "model", "parts": [{"text": "hello"}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .generate_content(&Model::Gemini25Flash, &request())
            .await
            .unwrap();

        assert_eq!(response.text().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_api_error_message_is_extracted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .generate_content(&Model::Gemini25Flash, &request())
            .await
            .unwrap_err();

        match err {
            GeminiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client(&server)
            .predict(
                &Model::Imagen4,
                &crate::gemini::protocol::PredictRequest {
                    instances: vec![],
                    parameters: crate::gemini::protocol::ImageParameters {
                        sample_count: 1,
                        aspect_ratio: "1:1".to_string(),
                        output_options: crate::gemini::protocol::OutputOptions {
                            mime_type: "image/jpeg".to_string(),
                        },
                    },
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, GeminiError::ParseError { .. }));
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = GeminiClientConfig::new("secret-key");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains(DEFAULT_BASE_URL));
    }
}
