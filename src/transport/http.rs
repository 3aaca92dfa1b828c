// ABOUTME: HTTP/1.1 transport built on hyper over a tokio TcpStream.
// ABOUTME: Applies base URL prefix, auth headers, and per-request timeout policy.

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header::{ACCEPT, CONTENT_TYPE, COOKIE, HOST};
use hyper_util::rt::TokioIo;
use std::time::Duration;
use tokio::net::TcpStream;

use super::error::{Result, TransportError};
use super::request::ApiRequest;
use super::Transport;
use crate::types::NamespaceId;

pub const API_KEY_HEADER: &str = "X-API-KEY";
pub const NAMESPACE_HEADER: &str = "G-N-ID";
pub const TOKEN_COOKIE: &str = "goploy_token";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Parsed `http://host[:port][/prefix]` server address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    host: String,
    port: u16,
    prefix: String,
}

impl BaseUrl {
    pub fn parse(url: &str) -> Result<Self> {
        let invalid = |reason: &str| TransportError::InvalidBaseUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        let uri: hyper::Uri = url
            .trim()
            .parse()
            .map_err(|e: hyper::http::uri::InvalidUri| invalid(&e.to_string()))?;

        match uri.scheme_str() {
            Some("http") => {}
            Some(other) => return Err(TransportError::UnsupportedScheme(other.to_string())),
            None => return Err(invalid("missing scheme")),
        }

        let host = uri
            .host()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| invalid("missing host"))?;

        if uri.query().is_some() {
            return Err(invalid("query strings are not allowed"));
        }

        Ok(Self {
            host: host.to_string(),
            port: uri.port_u16().unwrap_or(80),
            prefix: uri.path().trim_end_matches('/').to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Path prefix prepended to every endpoint path, without trailing slash.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn authority(&self) -> String {
        if self.port == 80 {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Settings for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    pub base_url: BaseUrl,
    pub default_timeout: Duration,
    pub api_key: Option<String>,
    pub namespace_id: Option<NamespaceId>,
    pub token: Option<String>,
}

impl HttpTransportConfig {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            default_timeout: DEFAULT_TIMEOUT,
            api_key: None,
            namespace_id: None,
            token: None,
        }
    }

    pub fn default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn namespace_id(mut self, id: NamespaceId) -> Self {
        self.namespace_id = Some(id);
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Sends each request over a fresh HTTP/1.1 connection.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: HttpTransportConfig,
}

impl HttpTransport {
    pub fn new(config: HttpTransportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    fn build_request(&self, request: &ApiRequest) -> Result<hyper::Request<Full<Bytes>>> {
        let base = &self.config.base_url;
        let mut builder = hyper::Request::builder()
            .method(hyper::Method::from(request.method))
            .uri(request.target(base.prefix()))
            .header(HOST, base.authority())
            .header(ACCEPT, "application/json");

        if let Some(ref key) = self.config.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        if let Some(namespace) = self.config.namespace_id {
            builder = builder.header(NAMESPACE_HEADER, namespace.to_string());
        }
        if let Some(ref token) = self.config.token {
            builder = builder.header(COOKIE, format!("{}={}", TOKEN_COOKIE, token));
        }

        let body = match request.body() {
            Some(json) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Bytes::from(serde_json::to_vec(&json)?)
            }
            None => Bytes::new(),
        };

        Ok(builder.body(Full::new(body))?)
    }

    async fn exchange(&self, request: &ApiRequest) -> Result<Bytes> {
        let base = &self.config.base_url;
        let address = format!("{}:{}", base.host(), base.port());

        let stream = TcpStream::connect((base.host(), base.port()))
            .await
            .map_err(|source| TransportError::Connect {
                address: address.clone(),
                source,
            })?;

        let io = TokioIo::new(stream);
        let (mut sender, conn) = hyper::client::conn::http1::handshake(io).await?;

        // Spawn connection handler
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::warn!("connection to {} failed: {}", address, e);
            }
        });

        let req = self.build_request(request)?;
        let resp = sender.send_request(req).await?;
        let status = resp.status();
        let body = resp.into_body().collect().await?.to_bytes();

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Bytes> {
        tracing::debug!(method = %request.method, path = request.path, "sending request");

        match request.timeout.resolve(self.config.default_timeout) {
            Some(limit) => tokio::time::timeout(limit, self.exchange(request))
                .await
                .map_err(|_| TransportError::Timeout(limit))?,
            None => self.exchange(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Method;

    #[test]
    fn parse_base_url_with_port_and_prefix() {
        let url = BaseUrl::parse("http://goploy.example.com:3000/api/").unwrap();
        assert_eq!(url.host(), "goploy.example.com");
        assert_eq!(url.port(), 3000);
        assert_eq!(url.prefix(), "/api");
    }

    #[test]
    fn parse_base_url_defaults_port() {
        let url = BaseUrl::parse("http://goploy.local").unwrap();
        assert_eq!(url.port(), 80);
        assert_eq!(url.prefix(), "");
        assert_eq!(url.authority(), "goploy.local");
    }

    #[test]
    fn https_is_rejected() {
        let err = BaseUrl::parse("https://goploy.example.com").unwrap_err();
        assert!(matches!(err, TransportError::UnsupportedScheme(s) if s == "https"));
    }

    #[test]
    fn missing_scheme_is_rejected() {
        assert!(BaseUrl::parse("goploy.example.com").is_err());
    }

    #[test]
    fn build_request_sets_auth_headers() {
        let config = HttpTransportConfig::new(BaseUrl::parse("http://h:8080").unwrap())
            .api_key("secret")
            .namespace_id(NamespaceId::new(3))
            .token("abc");
        let transport = HttpTransport::new(config);
        let req = transport
            .build_request(&ApiRequest::new(Method::Get, "/deploy/getList"))
            .unwrap();

        assert_eq!(req.headers()[API_KEY_HEADER], "secret");
        assert_eq!(req.headers()[NAMESPACE_HEADER], "3");
        assert_eq!(req.headers()[COOKIE], "goploy_token=abc");
        assert_eq!(req.headers()[HOST], "h:8080");
        assert!(req.headers().get(CONTENT_TYPE).is_none());
    }
}
