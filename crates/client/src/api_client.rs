use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::form_urlencoded;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Body, Method, Transport};

/// Thin JSON client for the duty planning backend.
///
/// Every request carries `Authorization: Bearer <token>` when a token was
/// supplied. Query parameters given as `None` are left out.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|token| !token.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, Option<String>)],
    ) -> Result<R, ApiError> {
        let response = self
            .execute(Method::Get, self.url(path, query), Body::Empty)
            .await?;
        decode(&response)
    }

    /// Fetches a binary body (CSV/PDF). The body is handed back untouched.
    pub async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, Option<String>)],
    ) -> Result<Vec<u8>, ApiError> {
        let response = self
            .execute(Method::Get, self.url(path, query), Body::Empty)
            .await?;
        Ok(response.body)
    }

    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self
            .execute(Method::Post, self.url(path, &[]), json_body(body)?)
            .await?;
        decode(&response)
    }

    pub async fn post_form<R: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let response = self
            .execute(Method::Post, self.url(path, &[]), Body::Form(encoded))
            .await?;
        decode(&response)
    }

    /// POST with a JSON body whose reply carries nothing of interest.
    pub async fn post_json_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.execute(Method::Post, self.url(path, &[]), json_body(body)?)
            .await
            .map(|_| ())
    }

    /// POST without a body; whatever the server answers is ignored.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Post, self.url(path, &[]), Body::Empty)
            .await
            .map(|_| ())
    }

    pub async fn put_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self
            .execute(Method::Put, self.url(path, &[]), json_body(body)?)
            .await?;
        decode(&response)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, self.url(path, &[]), Body::Empty)
            .await
            .map(|_| ())
    }

    fn url(&self, path: &str, query: &[(&str, Option<String>)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut has_query = false;
        for (key, value) in query {
            if let Some(value) = value {
                serializer.append_pair(key, value);
                has_query = true;
            }
        }
        if has_query {
            url.push('?');
            url.push_str(&serializer.finish());
        }
        url
    }

    async fn execute(&self, method: Method, url: String, body: Body) -> Result<ApiResponse, ApiError> {
        let mut headers = Vec::new();
        if let Some(content_type) = body.content_type() {
            headers.push(("Content-Type".to_string(), content_type.to_string()));
        }
        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        debug!("API request: {} {}", method.as_str(), url);

        let request = ApiRequest {
            method,
            url: url.clone(),
            headers,
            body,
        };

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("API no response: {} {}: {}", method.as_str(), url, e);
                return Err(e);
            }
        };

        if response.is_success() {
            debug!("API success: {} {}", response.status, url);
            Ok(response)
        } else {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            error!("API error response: {} {}: {}", response.status, url, body);
            Err(ApiError::Http {
                status: response.status,
                body,
            })
        }
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<Body, ApiError> {
    serde_json::to_string(body)
        .map(Body::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
