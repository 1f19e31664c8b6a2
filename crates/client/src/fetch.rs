use async_trait::async_trait;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Request, RequestInit, RequestMode, Response,
    js_sys::Uint8Array,
    wasm_bindgen::{JsCast, JsValue},
};

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Body, Transport};

/// Transport backed by the browser's `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(RequestMode::Cors);

        match &request.body {
            Body::Empty => {}
            Body::Json(body) | Body::Form(body) => opts.set_body(&JsValue::from_str(body)),
        }

        let js_request = Request::new_with_str_and_init(&request.url, &opts).map_err(js_error)?;
        for (name, value) in &request.headers {
            js_request.headers().set(name, value).map_err(js_error)?;
        }

        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("no window available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        let buffer = JsFuture::from(resp.array_buffer().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(ApiResponse {
            status: resp.status(),
            body: Uint8Array::new(&buffer).to_vec(),
        })
    }
}
