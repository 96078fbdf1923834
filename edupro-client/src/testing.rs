//! Recording `HttpClient` double for unit tests

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::{ApiRequest, HttpClient};
use crate::ClientResult;

/// Records every request and answers with canned JSON, `{}` once exhausted
#[derive(Default)]
pub(crate) struct Recorder {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Value>>,
}

impl Recorder {
    pub(crate) fn with_responses(responses: Vec<Value>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpClient for Recorder {
    async fn request<T: DeserializeOwned + Send>(&self, request: ApiRequest) -> ClientResult<T> {
        self.requests.lock().push(request);
        let value = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Value::Object(Default::default()));
        Ok(serde_json::from_value(value)?)
    }
}
