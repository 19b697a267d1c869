//! Thin request helpers over gloo-net.
//!
//! Every endpoint path is relative to [`API_BASE_URL`]. Non-2xx responses
//! become [`ApiError::Http`] carrying the body text the backend put in its
//! error detail.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::config::API_BASE_URL;
use crate::types::{ApiError, ApiResult};

fn endpoint(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}

fn network(err: impl std::fmt::Debug) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

async fn check(response: Response) -> ApiResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Http { status, message })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let response = Request::get(&endpoint(path))
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let response = Request::post(&endpoint(path))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let response = Request::put(&endpoint(path))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

/// Bodyless PUT, for actions like setting a cover photo.
pub async fn put(path: &str) -> ApiResult<()> {
    let response = Request::put(&endpoint(path))
        .send()
        .await
        .map_err(network)?;
    check(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> ApiResult<()> {
    let response = Request::delete(&endpoint(path))
        .send()
        .await
        .map_err(network)?;
    check(response).await.map(|_| ())
}

/// Multipart POST. The caller builds the `FormData` (a `file` field, plus an
/// optional `caption` for trip images).
pub async fn post_multipart<T: DeserializeOwned>(path: &str, form: FormData) -> ApiResult<T> {
    let response = Request::post(&endpoint(path))
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}
