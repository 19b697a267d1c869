//! API client for the film-stock inventory.

use crate::services::http;
use crate::types::{ApiResult, FilmStock, FilmStockPayload};

pub async fn list() -> ApiResult<Vec<FilmStock>> {
    http::get_json("/film-stocks").await
}

pub async fn get(id: i64) -> ApiResult<FilmStock> {
    http::get_json(&format!("/film-stocks/{id}")).await
}

pub async fn create(payload: &FilmStockPayload) -> ApiResult<FilmStock> {
    http::post_json("/film-stocks", payload).await
}

pub async fn update(id: i64, payload: &FilmStockPayload) -> ApiResult<FilmStock> {
    http::put_json(&format!("/film-stocks/{id}"), payload).await
}

pub async fn remove(id: i64) -> ApiResult<()> {
    http::delete(&format!("/film-stocks/{id}")).await
}
