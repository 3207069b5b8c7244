//! Request descriptors for Linkhaven API calls.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Method name in wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
        }
    }

    /// Whether a body is attached for this method. GET requests never carry
    /// one, even if the descriptor holds a body value.
    pub fn has_body(&self) -> bool {
        !matches!(self, RequestMethod::Get)
    }
}

/// Describes one outbound API call: method, endpoint path, optional body,
/// header overrides, and query parameters.
///
/// Descriptors are built per call and never mutated after enqueue.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: RequestMethod,
    pub(crate) endpoint: String,
    pub(crate) body: Option<Value>,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Create a new request descriptor.
    ///
    /// The endpoint is relative to the API prefix; a leading slash is
    /// tolerated and stripped when the URL is built.
    pub fn new(method: RequestMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            headers: HashMap::new(),
            query: Vec::new(),
        }
    }

    /// Create a GET request descriptor.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(RequestMethod::Get, endpoint)
    }

    /// Create a POST request descriptor.
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(RequestMethod::Post, endpoint)
    }

    /// Create a PATCH request descriptor.
    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(RequestMethod::Patch, endpoint)
    }

    /// Create a PUT request descriptor.
    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(RequestMethod::Put, endpoint)
    }

    /// Create a DELETE request descriptor.
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(RequestMethod::Delete, endpoint)
    }

    /// Set a JSON body from any serializable value.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Set a raw JSON body.
    pub fn json_value(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header override. Overrides win over the transport's defaults
    /// on key collision.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Add a query parameter when a value is present; `None` is dropped.
    pub fn query_opt(self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Add one query key repeated for every value.
    pub fn query_each<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let name = name.into();
        for value in values {
            self.query.push((name.clone(), value.to_string()));
        }
        self
    }

    /// Get the request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// Get the endpoint path.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
