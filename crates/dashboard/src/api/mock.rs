use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::error::ApiError;
use super::transport::{HttpMethod, Transport, UploadFile};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: HttpMethod,
    pub path: String,
    pub body: Value,
}

/// In-memory transport: canned responses per path, every call recorded.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, Result<Value, ApiError>>>,
    calls: Mutex<Vec<Call>>,
    uploads: Mutex<Vec<(String, UploadFile)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, response: Result<Value, ApiError>) -> &Self {
        self.responses.lock().unwrap().insert(path.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<(String, UploadFile)> {
        self.uploads.lock().unwrap().clone()
    }

    fn answer(&self, method: HttpMethod, path: &str, body: Value) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Ok(json!({"success": true})))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.answer(HttpMethod::Get, path, Value::Null)
    }

    async fn send_json(
        &self,
        method: HttpMethod,
        path: &str,
        body: Value,
    ) -> Result<Value, ApiError> {
        self.answer(method, path, body)
    }

    async fn upload(&self, path: &str, file: UploadFile) -> Result<Value, ApiError> {
        self.uploads.lock().unwrap().push((path.to_string(), file));
        self.answer(HttpMethod::Post, path, Value::Null)
    }
}
