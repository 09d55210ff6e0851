//! Dashboard backend access
//!
//! The interpreter only needs "GET a path, get JSON back". [`HttpBackend`]
//! does that over HTTP; [`MemoryBackend`] serves canned responses.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use serde_json::Value;
use tabdeck_core::prelude::*;

use crate::config::BackendSettings;

/// Read-only JSON backend
///
/// Both the TUI runner and tests drive the engine through this trait.
#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    /// GET `path` (e.g. `/tabs`) and return the decoded JSON body
    async fn get_json(&self, path: &str) -> Result<Value>;
}

/// Backend reached over HTTP with `reqwest`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Backend for HttpBackend {
    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url_for(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::http(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), path));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::http(format!("GET {}: invalid body: {}", url, e)))
    }
}

/// Backend answering from a fixed path → JSON table
///
/// Unknown paths fail with a 404 status. Every request is recorded.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, path: impl Into<String>, body: Value) -> Self {
        self.responses.insert(path.into(), body);
        self
    }

    /// Paths requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Backend for MemoryBackend {
    async fn get_json(&self, path: &str) -> Result<Value> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(path.to_string());
        }

        self.responses
            .get(path)
            .cloned()
            .ok_or_else(|| Error::http_status(404, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_backend_joins_base_url() {
        let backend = HttpBackend::new(&BackendSettings {
            base_url: "http://localhost:3000/".to_string(),
            request_timeout_ms: 500,
        })
        .unwrap();

        assert_eq!(backend.url_for("/tab/1"), "http://localhost:3000/tab/1");
    }

    #[tokio::test]
    async fn test_memory_backend_serves_and_records() {
        let backend = MemoryBackend::new().with_response("/tabs", json!([{"id": 1, "name": "A"}]));

        let body = Backend::get_json(&backend, "/tabs").await.unwrap();
        assert_eq!(body, json!([{"id": 1, "name": "A"}]));

        let missing = Backend::get_json(&backend, "/tab/9").await;
        assert!(matches!(missing, Err(Error::HttpStatus { status: 404, .. })));

        assert_eq!(backend.requests(), vec!["/tabs", "/tab/9"]);
    }
}
