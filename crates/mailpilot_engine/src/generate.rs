use mailpilot_logging::{mp_debug, mp_warn};

use crate::{FailureKind, GenerateError, GenerationRequest, GeneratorSettings};

#[async_trait::async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError>;
}

/// Posts requests to the configured endpoint. No timeout and no retry:
/// one attempt per call, settling whenever the server does.
#[derive(Debug, Clone)]
pub struct ReqwestReplyGenerator {
    settings: GeneratorSettings,
    client: reqwest::Client,
}

impl ReqwestReplyGenerator {
    pub fn new(settings: GeneratorSettings) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| GenerateError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl ReplyGenerator for ReqwestReplyGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        let endpoint = self.settings.endpoint.clone();
        mp_debug!(
            "POST {} content_len={} tone={:?}",
            endpoint,
            request.email_content.len(),
            request.tone
        );

        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            mp_warn!("Generation endpoint answered {}", status);
            return Err(GenerateError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|err| GenerateError::new(FailureKind::Decode, err.to_string()))?;
        Ok(coerce_reply_body(&body))
    }
}

/// Turns a response body into display text.
///
/// A JSON string yields its contents, any other JSON value its compact
/// serialization, and anything that is not JSON is returned verbatim.
pub fn coerce_reply_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(value) => value.to_string(),
        Err(_) => body.to_string(),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GenerateError {
    if err.is_builder() {
        return GenerateError::new(FailureKind::InvalidEndpoint, err.to_string());
    }
    GenerateError::new(FailureKind::Network, err.to_string())
}
