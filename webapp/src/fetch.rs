use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response, Window};

use crate::client::{LikeRequest, Transport};
use crate::error::LikeError;

#[derive(Debug, Clone)]
pub struct FetchTransport {
    window: Window,
}

impl FetchTransport {
    pub fn new() -> Result<Self, LikeError> {
        let window = web_sys::window().ok_or_else(|| LikeError::Dom("window not found".to_string()))?;
        Ok(Self { window })
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post(&self, request: &LikeRequest) -> Result<String, LikeError> {
        let headers = Headers::new().map_err(LikeError::transport)?;
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(LikeError::transport)?;
        }

        let init = RequestInit::new();
        init.set_method(LikeRequest::METHOD);
        init.set_headers(&headers);

        let fetch_request =
            Request::new_with_str_and_init(&request.url, &init).map_err(LikeError::transport)?;

        let response: Response = JsFuture::from(self.window.fetch_with_request(&fetch_request))
            .await
            .map_err(LikeError::transport)?
            .dyn_into()
            .map_err(LikeError::transport)?;

        // A non-2xx status is only logged; its body still goes to the decoder.
        if !response.ok() {
            log::warn!("{} {} answered {}", LikeRequest::METHOD, request.url, response.status());
        }

        let text = JsFuture::from(response.text().map_err(LikeError::transport)?)
            .await
            .map_err(LikeError::transport)?;

        text.as_string()
            .ok_or_else(|| LikeError::Transport("response body is not text".to_string()))
    }
}
