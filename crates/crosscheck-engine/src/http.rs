//! Blocking JSON-over-HTTP backend.

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crosscheck_core::errors::{config_error, Result};
use crosscheck_core::{Backend, InvocationFailure};

use crate::config::{BackendConfig, Credentials, TransportConfig};

/// One backend reached over HTTP.
///
/// The client is built once and reused for every scenario; calls are made
/// strictly one after another.
pub struct HttpBackend {
    config: BackendConfig,
    client: Client,
    credentials: Option<Credentials>,
}

impl HttpBackend {
    pub fn new(
        config: BackendConfig,
        transport: &TransportConfig,
        credentials: Option<Credentials>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(transport.timeout())
            .build()
            .map_err(|e| config_error(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self {
            config,
            client,
            credentials,
        })
    }

    fn failure(&self, err: reqwest::Error) -> InvocationFailure {
        let backend = self.config.label.clone();
        let message = err.to_string();
        if err.is_timeout() {
            InvocationFailure::Timeout { backend, message }
        } else if err.is_decode() {
            InvocationFailure::Malformed { backend, message }
        } else {
            InvocationFailure::Transport { backend, message }
        }
    }
}

impl Backend for HttpBackend {
    fn label(&self) -> &str {
        &self.config.label
    }

    fn send(
        &self,
        operation: &str,
        request: &serde_json::Value,
    ) -> std::result::Result<Option<serde_json::Value>, InvocationFailure> {
        let url = self.config.endpoint(operation);
        tracing::debug!(backend = %self.config.label, url = %url, "posting request");

        let mut builder = self.client.post(&url).json(request);
        if let Some(credentials) = &self.credentials {
            builder = builder.basic_auth(
                &credentials.username,
                Some(credentials.password.expose()),
            );
        }

        let response = builder.send().map_err(|e| self.failure(e))?;
        let status = response.status();
        let body = response.text().map_err(|e| self.failure(e))?;
        decode_body(&self.config.label, status, &body)
    }
}

/// Map a status and raw body onto the backend result contract
pub fn decode_body(
    backend: &str,
    status: StatusCode,
    body: &str,
) -> std::result::Result<Option<serde_json::Value>, InvocationFailure> {
    if !status.is_success() {
        return Err(InvocationFailure::HttpStatus {
            backend: backend.to_string(),
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string(),
        });
    }
    if body.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Null) => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(e) => Err(InvocationFailure::Malformed {
            backend: backend.to_string(),
            message: e.to_string(),
        }),
    }
}
