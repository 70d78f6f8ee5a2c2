use super::{DocumentPath, DocumentSource};
use crate::error::FetchError;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Fetches documents from a static file server at `{base_url}/static/`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    http: HttpClient,
}

impl HttpSource {
    /// Creates a source for the server at `base_url` (e.g. "http://localhost:3000").
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { base_url, http })
    }

    fn url(&self, relative: &str) -> String {
        format!("{}/static/{}", self.base_url, relative)
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self, path: DocumentPath) -> Result<Value, FetchError> {
        let relative = path.relative_path()?;
        let response = self.http.get(self.url(&relative)).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(relative));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                path: relative,
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| FetchError::Decode {
            path: relative,
            message: e.to_string(),
        })
    }
}
