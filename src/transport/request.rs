// ABOUTME: Transport-neutral request descriptor built by endpoint bindings.
// ABOUTME: Carries method, path, flat parameters, and the timeout policy.

use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

/// HTTP verbs used by the deployment API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in the query string rather than a JSON body.
    pub fn uses_query(&self) -> bool {
        matches!(self, Method::Get | Method::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for hyper::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => hyper::Method::GET,
            Method::Post => hyper::Method::POST,
            Method::Put => hyper::Method::PUT,
            Method::Delete => hyper::Method::DELETE,
        }
    }
}

/// Per-endpoint timeout policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeout {
    /// Inherit the transport's default timeout.
    #[default]
    Default,
    /// Never abort on the client side.
    Disabled,
}

impl Timeout {
    /// The effective limit for this request, `None` meaning unbounded.
    pub fn resolve(self, default: Duration) -> Option<Duration> {
        match self {
            Timeout::Default => Some(default),
            Timeout::Disabled => None,
        }
    }
}

/// One endpoint call, fully described and ready for a [`Transport`](super::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub params: Map<String, Value>,
    pub timeout: Timeout,
}

impl ApiRequest {
    pub fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            params: Map::new(),
            timeout: Timeout::Default,
        }
    }

    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }

    pub fn with_timeout(mut self, timeout: Timeout) -> Self {
        self.timeout = timeout;
        self
    }

    /// Percent-encoded query string (without the leading `?`).
    ///
    /// Arrays become repeated keys; nulls are skipped.
    pub fn query_string(&self) -> String {
        let mut pairs = Vec::new();
        for (key, value) in &self.params {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(v) = scalar_text(item) {
                            pairs.push(encode_pair(key, &v));
                        }
                    }
                }
                other => {
                    if let Some(v) = scalar_text(other) {
                        pairs.push(encode_pair(key, &v));
                    }
                }
            }
        }
        pairs.join("&")
    }

    /// Path plus query string for query-style methods.
    pub fn target(&self, prefix: &str) -> String {
        let mut target = format!("{}{}", prefix, self.path);
        if self.method.uses_query() {
            let query = self.query_string();
            if !query.is_empty() {
                target.push('?');
                target.push_str(&query);
            }
        }
        target
    }

    /// JSON body for body-style methods.
    pub fn body(&self) -> Option<Value> {
        if self.method.uses_query() {
            None
        } else {
            Some(Value::Object(self.params.clone()))
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Nested structures have no query representation; send them as JSON text.
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        Value::Null => None,
    }
}

fn encode_pair(key: &str, value: &str) -> String {
    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn disabled_timeout_resolves_to_none() {
        assert_eq!(Timeout::Disabled.resolve(Duration::from_secs(30)), None);
        assert_eq!(
            Timeout::Default.resolve(Duration::from_secs(30)),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn query_string_encodes_values() {
        let req = ApiRequest::new(Method::Get, "/deploy/getPreview").with_params(params(json!({
            "branch": "feature/x",
            "commitDate": "2024-01-01 10:00:00",
            "page": 2,
        })));
        assert_eq!(
            req.query_string(),
            "branch=feature%2Fx&commitDate=2024-01-01%2010%3A00%3A00&page=2"
        );
    }

    #[test]
    fn query_string_repeats_array_keys_and_skips_nulls() {
        let req = ApiRequest::new(Method::Get, "/x").with_params(params(json!({
            "ids": [1, 2],
            "missing": null,
        })));
        assert_eq!(req.query_string(), "ids=1&ids=2");
    }

    #[test]
    fn target_omits_empty_query() {
        let req = ApiRequest::new(Method::Get, "/deploy/getList");
        assert_eq!(req.target("/api"), "/api/deploy/getList");
    }

    #[test]
    fn body_methods_keep_path_bare() {
        let req = ApiRequest::new(Method::Post, "/deploy/publish")
            .with_params(params(json!({ "projectId": 1 })));
        assert_eq!(req.target(""), "/deploy/publish");
        assert_eq!(req.body(), Some(json!({ "projectId": 1 })));
    }
}
