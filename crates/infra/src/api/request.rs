//! Request description and URL construction

use fauxapi_domain::constants::ACTION_PARAM;
use reqwest::{Method, StatusCode};
use url::form_urlencoded;

/// One remote call: action, query arguments, optional JSON body
#[derive(Debug, Clone)]
pub struct ApiRequest {
    action: String,
    method: Method,
    args: Vec<(String, Option<String>)>,
    body: Option<serde_json::Value>,
    expected_status: StatusCode,
}

impl ApiRequest {
    /// A `GET` of `action` expecting `200 OK`
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            method: Method::GET,
            args: Vec::new(),
            body: None,
            expected_status: StatusCode::OK,
        }
    }

    /// HTTP method (default `GET`)
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Append a query argument
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), Some(value.into())));
        self
    }

    /// Append a query argument that is omitted from the URL when `None`
    pub fn opt_arg<V: Into<String>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.args.push((name.into(), value.map(Into::into)));
        self
    }

    /// Append a boolean argument, rendered `True` / `False`
    pub fn flag(self, name: impl Into<String>, value: bool) -> Self {
        self.arg(name, if value { "True" } else { "False" })
    }

    /// Attach a JSON body; sent with any method
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Status that counts as success (default `200 OK`)
    pub fn expected_status(mut self, status: StatusCode) -> Self {
        self.expected_status = status;
        self
    }

    /// Remote action name
    pub fn action(&self) -> &str {
        &self.action
    }

    /// HTTP method
    pub fn http_method(&self) -> &Method {
        &self.method
    }

    /// Query arguments in insertion order
    pub fn args(&self) -> &[(String, Option<String>)] {
        &self.args
    }

    /// JSON body, if any
    pub fn json_body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Status that counts as success
    pub fn expected(&self) -> StatusCode {
        self.expected_status
    }

    /// Full request URL below `base_url`
    pub fn url(&self, base_url: &str) -> String {
        build_url(base_url, &self.action, &self.args)
    }
}

/// `base_url?action=<action>&k=v...`, form-url-encoded
///
/// Arguments with an empty name or a `None` value are skipped; empty string
/// values are kept as `k=`.
pub fn build_url(base_url: &str, action: &str, args: &[(String, Option<String>)]) -> String {
    let mut url = format!("{base_url}?{ACTION_PARAM}={}", encode(action));

    for (name, value) in args {
        let Some(value) = value else { continue };
        if name.is_empty() {
            continue;
        }
        url.push('&');
        url.push_str(&encode(name));
        url.push('=');
        url.push_str(&encode(value));
    }

    url
}

fn encode(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes()).collect()
}
