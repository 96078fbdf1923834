//! HTTP seam: request description and the `HttpClient` contract
//!
//! Services only talk to [`HttpClient::request`]; the concrete
//! [`ApiClient`](crate::ApiClient) adds bearer auth and the refresh protocol.

use std::path::Path;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{ClientError, ClientResult};

/// A file attached to a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read a file from disk, naming the part after the file and guessing
    /// its content type from the extension
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        Ok(Self::new(file_name, bytes).with_mime(mime.essence_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormValue {
    Text(String),
    File(FilePart),
}

/// Multipart body kept as plain data so it can be re-sent after a refresh
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<(String, FormValue)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.parts
            .push((name.into(), FormValue::Text(value.to_string())));
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FilePart) -> Self {
        self.parts.push((name.into(), FormValue::File(file)));
        self
    }

    /// Names of the parts, in insertion order
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(name, _)| name.as_str())
    }

    /// Text value of a part, if it is a text part
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(n, v)| match v {
            FormValue::Text(t) if n == name => Some(t.as_str()),
            _ => None,
        })
    }

    /// File of a part, if it is a file part
    pub fn file_value(&self, name: &str) -> Option<&FilePart> {
        self.parts.iter().find_map(|(n, v)| match v {
            FormValue::File(f) if n == name => Some(f),
            _ => None,
        })
    }

    /// Build a fresh reqwest form (forms are consumed on send)
    pub fn to_form(&self) -> ClientResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in &self.parts {
            form = match value {
                FormValue::Text(text) => form.text(name.clone(), text.clone()),
                FormValue::File(file) => {
                    let mut part = reqwest::multipart::Part::bytes(file.bytes.clone())
                        .file_name(file.file_name.clone());
                    if let Some(mime) = &file.mime {
                        part = part.mime_str(mime)?;
                    }
                    form.part(name.clone(), part)
                }
            };
        }
        Ok(form)
    }
}

/// Request body
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Serialized as `application/json`
    Json(Value),
    /// Passed through untouched as `multipart/form-data`
    Multipart(MultipartForm),
}

/// Description of one backend call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, e.g. `/academic/students/`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    /// Sent without bearer token and never retried through a refresh
    pub anonymous: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: normalize_path(path.into()),
            query: Vec::new(),
            body: RequestBody::Empty,
            anonymous: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ClientResult<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a multipart body
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }
}

fn normalize_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

/// Decode a success body; an empty body decodes as `{}`
pub fn decode_body<T: DeserializeOwned>(text: &str) -> ClientResult<T> {
    if text.trim().is_empty() {
        return serde_json::from_value(Value::Object(Map::new()))
            .map_err(|e| ClientError::InvalidResponse(format!("empty body: {e}")));
    }
    serde_json::from_str(text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send one request and decode the JSON answer
    async fn request<T: DeserializeOwned + Send>(&self, request: ApiRequest) -> ClientResult<T>;

    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.request(ApiRequest::get(path)).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = ApiRequest::post(path).json(body)?;
        self.request(request).await
    }

    async fn post_multipart<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> ClientResult<T> {
        self.request(ApiRequest::post(path).multipart(form)).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = ApiRequest::put(path).json(body)?;
        self.request(request).await
    }

    async fn patch<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = ApiRequest::patch(path).json(body)?;
        self.request(request).await
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.request(ApiRequest::delete(path)).await
    }
}
