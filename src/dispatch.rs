use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::config::consts::API_KEY_HEADER;
use crate::config::TransportConfig;
use crate::error::TransportError;
use crate::retry::{retry_with_classifier, RetryPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One logical call to the service. `params` travel as query parameters for
/// GET and as the JSON body otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: &'static str,
    pub params: Map<String, Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: &'static str, params: Map<String, Value>) -> Self {
        Self {
            method,
            path,
            params,
        }
    }

    /// Query string pairs; strings are sent verbatim, other values as JSON text.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(k, v)| {
                let v = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), v)
            })
            .collect()
    }
}

/// Performs the HTTP exchange and returns the parsed response envelope.
#[async_trait]
pub trait RequestDispatcher: Send + Sync {
    async fn dispatch(&self, api_key: &str, request: ApiRequest) -> Result<Value, TransportError>;
}

#[async_trait]
impl<D: RequestDispatcher + ?Sized> RequestDispatcher for Arc<D> {
    async fn dispatch(&self, api_key: &str, request: ApiRequest) -> Result<Value, TransportError> {
        (**self).dispatch(api_key, request).await
    }
}

/// `reqwest`-backed dispatcher.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpDispatcher {
    pub fn new(transport: &TransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(transport.timeout())
            .connect_timeout(transport.connect_timeout())
            .build()
            .map_err(|e| TransportError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: transport.base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::from(transport),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send_once(&self, api_key: &str, request: &ApiRequest) -> Result<Value, TransportError> {
        let url = self.url(request.path);
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&url).query(&request.query_pairs()),
            HttpMethod::Post => self.client.post(&url).json(&request.params),
            HttpMethod::Delete => self.client.delete(&url).json(&request.params),
        };

        let response = builder
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "http_send_error");
                TransportError::Request(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                body = %body,
                "{} {} was not successful",
                request.method.as_str(),
                request.path
            );
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(|e| {
            error!(status = %status, error = %e, "json_parse_error");
            TransportError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl RequestDispatcher for HttpDispatcher {
    async fn dispatch(&self, api_key: &str, request: ApiRequest) -> Result<Value, TransportError> {
        debug!(
            method = request.method.as_str(),
            path = request.path,
            "dispatching request"
        );
        retry_with_classifier(
            self.retry,
            request.path,
            || self.send_once(api_key, &request),
            TransportError::is_retryable,
        )
        .await
    }
}
