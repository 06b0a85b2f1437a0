use std::time::{Duration, Instant};

use async_trait::async_trait;
use contracts::shared::api_error::ApiErrorBody;
use serde_json::Value;

use super::error::ApiError;
use super::transport::{HttpMethod, Transport, UploadFile};
use crate::shared::config::ApiConfig;

/// HTTP-клиент для REST API бэкенда
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, ApiError> {
        let start = Instant::now();
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("{} {} failed after {}ms: {}", method, path, start.elapsed().as_millis(), e);
                ApiError::from(e)
            })?;

        let status = response.status();
        let text = response.text().await?;
        tracing::info!(
            "{} {} -> {} ({}ms, {} bytes)",
            method,
            path,
            status.as_u16(),
            start.elapsed().as_millis(),
            text.len()
        );

        if !status.is_success() {
            let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| ApiError::Decode(format!("{} {}: {}", method, path, e)))
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.client.get(self.url(path));
        self.execute(HttpMethod::Get, path, request).await
    }

    async fn send_json(
        &self,
        method: HttpMethod,
        path: &str,
        body: Value,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        let request = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url).json(&body),
            HttpMethod::Patch => self.client.patch(url).json(&body),
        };
        self.execute(method, path, request).await
    }

    async fn upload(&self, path: &str, file: UploadFile) -> Result<Value, ApiError> {
        let size = file.bytes.len();
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name.clone())
            .mime_str(&file.mime)?;
        let form = reqwest::multipart::Form::new().part(file.field, part);
        tracing::debug!("Uploading {} ({} bytes) to {}", file.file_name, size, path);

        let request = self.client.post(self.url(path)).multipart(form);
        self.execute(HttpMethod::Post, path, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_url_join() {
        let c = client("http://localhost:5000/api/");
        assert_eq!(c.url("/guest"), "http://localhost:5000/api/guest");
        assert_eq!(c.url("incident/1/resolve"), "http://localhost:5000/api/incident/1/resolve");
    }
}
