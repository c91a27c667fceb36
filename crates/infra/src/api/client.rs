//! FauxAPI dispatcher
//!
//! [`ApiClient`] signs every request, sends it once and classifies the
//! outcome:
//!
//! 1. HTTP 404 becomes [`ApiError::MissingAction`]
//! 2. any other unexpected status becomes [`ApiError::Http`]
//! 3. a body that is not a valid envelope becomes [`ApiError::Decode`]
//! 4. an envelope whose message is not `ok` becomes
//!    [`ApiError::ProtocolMessage`]
//!
//! The remote capability version is detected once while connecting and
//! cached for the client's lifetime.

use std::sync::Arc;
use std::time::Duration;

use fauxapi_common::auth::TokenSigner;
use fauxapi_common::validation::ValidationError;
use fauxapi_domain::constants::{ACTION_API_VERSION, AUTH_HEADER, JSON_CONTENT_TYPE};
use fauxapi_domain::{ApiVersionResponse, ClientConfig, FauxApiError};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::envelope::{self, Envelope};
use super::errors::ApiError;
use super::request::ApiRequest;
use super::version::ApiVersion;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Client bound to one FauxAPI endpoint
///
/// Cheap to clone; clones share the HTTP connection pool and signer. Calls
/// hold no shared mutable state and may run concurrently.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    signer: Arc<TokenSigner>,
    verify_cert: bool,
    version: ApiVersion,
}

impl ApiClient {
    /// Connect to `base_url` and detect the remote API version
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank or malformed URL and
    /// propagates any failure of version detection other than a missing
    /// `api_version` action.
    pub async fn connect(
        base_url: impl Into<String>,
        signer: TokenSigner,
        verify_cert: bool,
    ) -> Result<Self, ApiError> {
        Self::builder().base_url(base_url).signer(signer).verify_cert(verify_cert).connect().await
    }

    /// Build the signer and client described by `config`
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad credentials, otherwise as
    /// [`ApiClient::connect`].
    pub async fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let signer = TokenSigner::new(config.key.clone(), config.secret.clone())?;

        let mut builder = Self::builder()
            .base_url(config.base_url.clone())
            .signer(signer)
            .verify_cert(config.verify_cert);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        if config.no_proxy {
            builder = builder.no_proxy(true);
        }

        builder.connect().await
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Path to the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Signer used for every request
    pub fn signer(&self) -> &TokenSigner {
        &self.signer
    }

    /// Whether the device certificate is verified
    pub fn verify_cert(&self) -> bool {
        self.verify_cert
    }

    /// Version detected while connecting; [`ApiVersion::ZERO`] when the
    /// device predates `api_version`
    pub fn api_version(&self) -> ApiVersion {
        self.version
    }

    /// Whether the remote API is at least `minimum`
    pub fn supports(&self, minimum: ApiVersion) -> bool {
        self.version >= minimum
    }

    /// Perform `request` and unwrap the envelope's `data` as `T`
    ///
    /// An empty or whitespace-only body yields `T::default()`.
    ///
    /// # Errors
    ///
    /// See the module documentation for the classification order.
    #[instrument(
        skip(self, request),
        fields(action = %request.action(), method = %request.http_method())
    )]
    pub async fn invoke<T>(&self, request: ApiRequest) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let body = self.execute(&request).await?;
        if body.trim().is_empty() {
            debug!("empty response body, returning default value");
            return Ok(T::default());
        }

        let envelope: Envelope<T> = envelope::decode(&body)?;
        if let Err(err) = envelope.ensure_ok() {
            debug!(message = %envelope.message, "device rejected call");
            return Err(err);
        }

        debug!(callid = %envelope.callid, "call succeeded");
        envelope.into_data()
    }

    /// Perform `request` where the device returns no data
    ///
    /// # Errors
    ///
    /// As [`ApiClient::invoke`]; an empty body counts as success.
    #[instrument(
        skip(self, request),
        fields(action = %request.action(), method = %request.http_method())
    )]
    pub async fn invoke_void(&self, request: ApiRequest) -> Result<(), ApiError> {
        let body = self.execute(&request).await?;
        if body.trim().is_empty() {
            debug!("empty response body");
            return Ok(());
        }

        let envelope: Envelope<IgnoredAny> = envelope::decode(&body)?;
        if let Err(err) = envelope.ensure_ok() {
            debug!(message = %envelope.message, "device rejected call");
            return Err(err);
        }

        debug!(callid = %envelope.callid, "call succeeded");
        Ok(())
    }

    /// Send one signed request and return the raw body after status checks
    async fn execute(&self, request: &ApiRequest) -> Result<String, ApiError> {
        let url = request.url(&self.base_url);
        let token = self.signer.generate_token();

        let mut builder = self
            .http
            .request(request.http_method().clone(), url.as_str())
            .header(AUTH_HEADER, token.to_string())
            .header(ACCEPT, JSON_CONTENT_TYPE);
        if let Some(body) = request.json_body() {
            builder = builder.json(body);
        }

        let response = self.http.send(builder).await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("action not found on device");
            return Err(ApiError::MissingAction { action: request.action().to_string() });
        }

        let body = response.text().await.map_err(Self::map_transport_error)?;
        if status != request.expected() {
            debug!(%status, expected = %request.expected(), "unexpected HTTP status");
            return Err(ApiError::Http { status: status.as_u16(), body });
        }

        Ok(body)
    }

    async fn detect_version(&self) -> Result<ApiVersion, ApiError> {
        match self.invoke::<ApiVersionResponse>(ApiRequest::new(ACTION_API_VERSION)).await {
            Ok(response) => ApiVersion::parse(&response.version),
            Err(ApiError::MissingAction { .. }) => {
                warn!(
                    base_url = %self.base_url,
                    "device has no api_version action, assuming 0.0.0.0"
                );
                Ok(ApiVersion::ZERO)
            }
            Err(err) => Err(err),
        }
    }

    fn map_transport_error(err: reqwest::Error) -> ApiError {
        ApiError::from(FauxApiError::from(InfraError::from(err)))
    }
}

/// Builder for [`ApiClient`]
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    signer: Option<TokenSigner>,
    verify_cert: Option<bool>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    no_proxy: bool,
}

impl ApiClientBuilder {
    /// Path to the API (e.g. `https://my.device/fauxapi/v1/`)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Signer for the `fauxapi-auth` header (required)
    pub fn signer(mut self, signer: TokenSigner) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Verify the device certificate (default `true`)
    pub fn verify_cert(mut self, verify: bool) -> Self {
        self.verify_cert = Some(verify);
        self
    }

    /// Transport timeout per request; unset means unbounded
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// User-Agent header value
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Ignore `HTTP(S)_PROXY` and system proxy settings (default `false`)
    pub fn no_proxy(mut self, enabled: bool) -> Self {
        self.no_proxy = enabled;
        self
    }

    /// Build the client and detect the remote API version
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing, the URL is invalid or
    /// version detection fails for any reason other than a 404.
    pub async fn connect(self) -> Result<ApiClient, ApiError> {
        let base_url = self.base_url.unwrap_or_default();
        if base_url.trim().is_empty() {
            return Err(ValidationError::field("base_url", "cannot be blank").into());
        }
        if let Err(err) = Url::parse(&base_url) {
            return Err(
                ValidationError::field("base_url", format!("is not a valid URL: {err}")).into()
            );
        }

        let signer =
            self.signer.ok_or_else(|| ApiError::Config("Token signer not set".to_string()))?;
        let verify_cert = self.verify_cert.unwrap_or(true);

        let mut http =
            HttpClient::builder().accept_invalid_certs(!verify_cert).no_proxy(self.no_proxy);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        if let Some(agent) = self.user_agent {
            http = http.user_agent(agent);
        }

        let mut client = ApiClient {
            http: http.build()?,
            base_url,
            signer: Arc::new(signer),
            verify_cert,
            version: ApiVersion::ZERO,
        };
        client.version = client.detect_version().await?;

        info!(base_url = %client.base_url, version = %client.version, "connected to FauxAPI");
        Ok(client)
    }
}
