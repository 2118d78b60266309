//! Ways of delivering a query to the quiz server.
//!
//! [`DirectTransport`] posts straight to the server's `/mcp` endpoint.
//! [`InspectorTransport`] goes through an MCP Inspector, which forwards the
//! query to the server and hands back its reply.

use crate::error::ClientError;
use async_trait::async_trait;
use quiz_core::protocol::{Context, McpRequest, McpResponse};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

const QUIZ_SERVICE: &str = "quiz server";
const INSPECTOR_SERVICE: &str = "MCP Inspector";

/// Sends one query and returns the reply.
#[async_trait]
pub trait QuizTransport: Send + Sync {
    async fn send(&self, request: &McpRequest) -> Result<McpResponse, ClientError>;
}

/// Talks to the quiz server directly.
#[derive(Clone)]
pub struct DirectTransport {
    client: Client,
    endpoint: String,
}

impl DirectTransport {
    /// `server_url` is the base URL, e.g. `http://localhost:8000`.
    pub fn new(server_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: mcp_endpoint(server_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QuizTransport for DirectTransport {
    async fn send(&self, request: &McpRequest) -> Result<McpResponse, ClientError> {
        post_json(&self.client, &self.endpoint, request, QUIZ_SERVICE).await
    }
}

/// Routes queries through an MCP Inspector's `/inspect` endpoint.
#[derive(Clone)]
pub struct InspectorTransport {
    client: Client,
    inspect_url: String,
    mcp_endpoint: String,
}

#[derive(Serialize)]
struct InspectRequest<'a> {
    mcp_endpoint: &'a str,
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a Context>,
}

impl InspectorTransport {
    pub fn new(inspector_url: &str, server_url: &str) -> Self {
        Self {
            client: Client::new(),
            inspect_url: format!("{}/inspect", inspector_url.trim_end_matches('/')),
            mcp_endpoint: mcp_endpoint(server_url),
        }
    }
}

#[async_trait]
impl QuizTransport for InspectorTransport {
    async fn send(&self, request: &McpRequest) -> Result<McpResponse, ClientError> {
        let body = InspectRequest {
            mcp_endpoint: &self.mcp_endpoint,
            query: &request.query,
            context: request.context.as_ref(),
        };
        post_json(&self.client, &self.inspect_url, &body, INSPECTOR_SERVICE).await
    }
}

fn mcp_endpoint(server_url: &str) -> String {
    format!("{}/mcp", server_url.trim_end_matches('/'))
}

/// POSTs `body` as JSON and decodes a JSON reply.
pub(crate) async fn post_json<B, R>(
    client: &Client,
    url: &str,
    body: &B,
    service: &'static str,
) -> Result<R, ClientError>
where
    B: Serialize + ?Sized + Sync,
    R: DeserializeOwned,
{
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|err| {
            tracing::warn!(url, error = %err, "Request to {} failed", service);
            ClientError::Transport {
                service,
                message: err.to_string(),
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| format!("Failed to read {service} error body"));
        return Err(ClientError::Status {
            service,
            status: status.as_u16(),
            message,
        });
    }

    response.json().await.map_err(|err| ClientError::Decode {
        service,
        message: err.to_string(),
    })
}
