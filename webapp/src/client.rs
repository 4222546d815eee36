use async_trait::async_trait;

use crate::config::LikeConfig;
use crate::cookie::get_cookie;
use crate::error::LikeError;
use crate::like::{LikeAction, LikeResponse};

/// A fully built like/unlike request. Always a `POST` without a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl LikeRequest {
    pub const METHOD: &'static str = "POST";

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Sends a [`LikeRequest`] and resolves to the raw response body.
///
/// Resolving at all means the network round trip finished; the body is
/// decoded by the caller.
#[async_trait(?Send)]
pub trait Transport {
    async fn post(&self, request: &LikeRequest) -> Result<String, LikeError>;
}

/// Holds the CSRF token read at start-up and reuses it for every request.
#[derive(Debug)]
pub struct LikeClient<T> {
    transport: T,
    csrf_token: Option<String>,
    csrf_header: String,
    namespace: String,
}

impl<T: Transport> LikeClient<T> {
    pub fn new(transport: T, config: &LikeConfig, csrf_token: Option<String>) -> Self {
        Self {
            transport,
            csrf_token,
            csrf_header: config.csrf_header.clone(),
            namespace: config.namespace.clone(),
        }
    }

    pub fn from_cookie_header(transport: T, config: &LikeConfig, cookie_header: &str) -> Self {
        let csrf_token = get_cookie(cookie_header, &config.cookie_name);
        if csrf_token.is_none() {
            log::warn!(
                "no {} cookie found; like requests will be sent without {}",
                config.cookie_name,
                config.csrf_header
            );
        }
        Self::new(transport, config, csrf_token)
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn request_for(&self, pk: &str, action: LikeAction) -> LikeRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = &self.csrf_token {
            headers.push((self.csrf_header.clone(), token.clone()));
        }

        LikeRequest {
            url: action.endpoint(&self.namespace, pk),
            headers,
        }
    }

    pub async fn send(&self, pk: &str, action: LikeAction) -> Result<LikeResponse, LikeError> {
        let request = self.request_for(pk, action);
        log::debug!("{} {}", LikeRequest::METHOD, request.url);

        let body = self.transport.post(&request).await?;
        let response: LikeResponse = serde_json::from_str(&body)?;

        log::debug!("{action} {pk}: liked_by_count={}", response.liked_by_count);
        Ok(response)
    }
}
