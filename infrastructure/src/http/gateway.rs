//! HTTP chat gateway implementation

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};
use wifichat_application::ports::chat_gateway::{ChatGateway, GatewayError};
use wifichat_domain::{AnswerResponse, ChatExchange, ChatRequest, ErrorResponse};

/// Default chat endpoint of the local backend
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/chat";

/// Errors raised while building the gateway
#[derive(Error, Debug)]
pub enum HttpGatewayError {
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Chat gateway that POSTs JSON to a fixed endpoint
///
/// No retries, no authentication. The client carries no timeout; the submit
/// use case applies the configured one.
pub struct HttpChatGateway {
    client: Client,
    endpoint: Url,
}

impl HttpChatGateway {
    /// Create a gateway for `endpoint`, which must be an absolute http(s) URL
    pub fn new(endpoint: &str) -> Result<Self, HttpGatewayError> {
        let endpoint = parse_endpoint(endpoint)?;
        let client = Client::builder()
            .user_agent(concat!("wifi-chat/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!("HttpChatGateway initialized for {}", endpoint);
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `/health` on the endpoint's origin
    pub fn health_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.set_path("/health");
        url.set_query(None);
        url
    }

    /// Probe the backend's health route
    pub async fn health(&self) -> Result<HealthStatus, GatewayError> {
        let url = self.health_url();
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Transport(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| GatewayError::MalformedBody(e.to_string()))
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn send(&self, request: &ChatRequest) -> Result<ChatExchange, GatewayError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        debug!("Response {} ({} bytes)", status.as_u16(), body.len());

        if status.is_success() {
            let answer = AnswerResponse::parse(&body)
                .map_err(|e| GatewayError::MalformedBody(e.to_string()))?;
            Ok(ChatExchange::Answered(answer))
        } else {
            Ok(ChatExchange::Rejected {
                status: status.as_u16(),
                body: ErrorResponse::parse_lenient(&body),
            })
        }
    }
}

/// Parse and check an endpoint URL
pub fn parse_endpoint(endpoint: &str) -> Result<Url, HttpGatewayError> {
    let invalid = |reason: String| HttpGatewayError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}
