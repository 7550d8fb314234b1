use crate::config::FrontendConfig;
use crate::containers::sign_up_validation::map_server_errors;
use crate::error::{SignUpError, TransportError};
use crate::language::Language;
use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shared::config::USERS_PATH;
use shared::models::{SignUpRequest, ValidationErrorResponse};

thread_local! {
    static SHARED_CLIENT: OnceCell<SignUpClient> = OnceCell::new();
}

/// Sends registration requests on behalf of the form.
#[async_trait(?Send)]
pub trait SignUpTransport {
    /// Registers a user, sending `language` as `Accept-Language`.
    async fn register(&self, request: &SignUpRequest, language: Language)
    -> Result<(), SignUpError>;
}

/// HTTP client for the user registration API.
#[derive(Clone, Debug)]
pub struct SignUpClient {
    base_url: String,
    client: Client,
    timeout_ms: u32,
}

impl SignUpClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            timeout_ms: crate::config::DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }

    /// Create a client from the build-time configuration.
    pub fn from_config(config: &FrontendConfig) -> Self {
        log::debug!(
            "registration API for {} at {}",
            config.environment.as_ref(),
            config.api_root()
        );
        Self::new(config.api_root()).with_timeout(config.request_timeout_ms)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::from_config(&FrontendConfig::new()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL of the registration endpoint.
    pub fn users_url(&self) -> String {
        self.api_url(USERS_PATH)
    }
}

#[async_trait(?Send)]
impl SignUpTransport for SignUpClient {
    async fn register(
        &self,
        request: &SignUpRequest,
        language: Language,
    ) -> Result<(), SignUpError> {
        let builder = self
            .client
            .post(self.users_url())
            .header(ACCEPT_LANGUAGE, language.code())
            .json(request);
        let response = send_with_timeout(builder, self.timeout_ms).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status != StatusCode::BAD_REQUEST {
            return Err(TransportError::Status(status.as_u16()).into());
        }
        let body = response.text().await.map_err(TransportError::from)?;
        interpret_response(status, &body)
    }
}

/// Classifies a response by status and body.
///
/// Any 2xx succeeds regardless of body. A `400` counts as
/// [`SignUpError::Validation`] only when its payload names at least one form
/// field; a `400` the form cannot show next to an input is a transport failure.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<(), SignUpError> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::BAD_REQUEST {
        let payload: ValidationErrorResponse =
            serde_json::from_str(body).map_err(TransportError::from)?;
        if map_server_errors(&payload).is_empty() {
            return Err(TransportError::MalformedBody(format!(
                "400 without field errors: {payload}"
            ))
            .into());
        }
        return Err(payload.into());
    }
    Err(TransportError::Status(status.as_u16()).into())
}

#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    builder: RequestBuilder,
    timeout_ms: u32,
) -> Result<Response, TransportError> {
    use futures::future::{Either, select};
    use gloo_timers::future::TimeoutFuture;
    use std::pin::pin;

    let send = pin!(builder.send());
    let timer = pin!(TimeoutFuture::new(timeout_ms));
    match select(send, timer).await {
        Either::Left((result, _)) => result.map_err(TransportError::from),
        Either::Right(((), _)) => Err(TransportError::Timeout(timeout_ms)),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn send_with_timeout(
    builder: RequestBuilder,
    timeout_ms: u32,
) -> Result<Response, TransportError> {
    builder
        .timeout(std::time::Duration::from_millis(u64::from(timeout_ms)))
        .send()
        .await
        .map_err(|err| {
            if err.is_timeout() {
                TransportError::Timeout(timeout_ms)
            } else {
                TransportError::from(err)
            }
        })
}
