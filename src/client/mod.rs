//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod aliases;
#[cfg(test)]
mod testing;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{ApiKey, ValidationError};
use crate::transport::TransportError;

const DEFAULT_BASE_URL: &str = "https://api.forwardemail.net";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    auth: Auth,
    form: Option<Vec<(String, String)>>,
}

impl HttpRequest {
    fn with_form(mut self, params: Vec<(String, String)>) -> Self {
        self.form = Some(params);
        self
    }
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
                HttpMethod::Delete => reqwest::Method::DELETE,
            };
            let mut builder = self.client.request(method, request.url);
            builder = match &request.auth {
                Auth::ApiKey(api_key) => builder.basic_auth(api_key.as_str(), None::<&str>),
            };
            if let Some(params) = request.form.as_ref() {
                builder = builder.form(params);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Clone)]
/// Authentication credentials for Forward Email API calls.
///
/// The API key is sent as the HTTP basic-auth username with an empty password.
pub enum Auth {
    /// Authenticate via a Forward Email API key.
    ApiKey(ApiKey),
}

impl Auth {
    /// Create [`Auth::ApiKey`] and validate that the value is non-empty after trimming.
    pub fn api_key(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::ApiKey(ApiKey::new(value)?))
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.debug_tuple("ApiKey").field(&"<redacted>").finish(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ForwardEmailClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (non-2xx with a Forward Email error document),
/// - validation/parse failures.
pub enum ForwardEmailError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code with a body that is not an API error document.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Forward Email rejected the request.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        error: Option<String>,
        message: String,
    },

    /// Response body could not be parsed as the expected format.
    ///
    /// `body` holds the raw payload.
    #[error("parse error: {source}")]
    Parse {
        #[source]
        source: TransportError,
        body: String,
    },

    /// The configured base URL is unusable.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`ForwardEmailClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct ForwardEmailClientBuilder {
    auth: Auth,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ForwardEmailClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (`https://api.forwardemail.net`).
    ///
    /// `/v1/...` paths are appended to whatever path the base already has.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`ForwardEmailClient`].
    pub fn build(self) -> Result<ForwardEmailClient, ForwardEmailError> {
        parse_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ForwardEmailError::Transport(Box::new(err)))?;

        Ok(ForwardEmailClient {
            auth: self.auth,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn parse_base_url(value: &str) -> Result<Url, ForwardEmailError> {
    let url = Url::parse(value)
        .map_err(|err| ForwardEmailError::InvalidBaseUrl(format!("{value}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(ForwardEmailError::InvalidBaseUrl(format!(
            "{value}: cannot carry path segments"
        )));
    }
    Ok(url)
}

#[derive(Clone)]
/// High-level Forward Email client.
///
/// This type builds requests, form-encodes parameters, and parses responses.
/// By default it talks to `https://api.forwardemail.net`.
pub struct ForwardEmailClient {
    auth: Auth,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for ForwardEmailClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardEmailClient")
            .field("auth", &self.auth)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ForwardEmailClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`ForwardEmailClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> ForwardEmailClientBuilder {
        ForwardEmailClientBuilder::new(auth)
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an unsent request for `segments` appended to the base URL.
    ///
    /// Each segment is percent-encoded on its own, so a `/` inside a domain or
    /// alias name cannot change the route.
    fn new_request(
        &self,
        method: HttpMethod,
        segments: &[&str],
    ) -> Result<HttpRequest, ForwardEmailError> {
        let mut url = parse_base_url(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| {
                ForwardEmailError::InvalidBaseUrl(format!(
                    "{}: cannot carry path segments",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(HttpRequest {
            method,
            url,
            auth: self.auth.clone(),
            form: None,
        })
    }

    /// Send `request` and return the raw body of a 2xx response.
    async fn do_request(&self, request: HttpRequest) -> Result<String, ForwardEmailError> {
        let method = request.method;
        let url = request.url.clone();
        tracing::debug!(%method, %url, "sending Forward Email request");

        let response = self
            .http
            .send(request)
            .await
            .map_err(ForwardEmailError::Transport)?;

        tracing::debug!(
            %method,
            %url,
            status = response.status,
            body_len = response.body.len(),
            "received Forward Email response"
        );

        if !(200..=299).contains(&response.status) {
            tracing::warn!(%method, %url, status = response.status, "Forward Email request failed");
            if let Some(api_error) = crate::transport::decode_api_error_json_response(&response.body)
            {
                return Err(ForwardEmailError::Api {
                    status: response.status,
                    error: api_error.error,
                    message: api_error.message,
                });
            }
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(ForwardEmailError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}

fn parse_body<T>(
    body: String,
    decode: impl FnOnce(&str) -> Result<T, TransportError>,
) -> Result<T, ForwardEmailError> {
    match decode(&body) {
        Ok(parsed) => Ok(parsed),
        Err(source) => Err(ForwardEmailError::Parse { source, body }),
    }
}
