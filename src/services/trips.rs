//! API client for trips, their inspiration images and the weather lookup.

use web_sys::{File, FormData};

use crate::services::http;
use crate::types::{ApiError, ApiResult, Trip, TripImage, TripPayload, WeatherReport};

pub async fn list() -> ApiResult<Vec<Trip>> {
    http::get_json("/trips").await
}

pub async fn get(id: i64) -> ApiResult<Trip> {
    http::get_json(&format!("/trips/{id}")).await
}

pub async fn create(payload: &TripPayload) -> ApiResult<Trip> {
    http::post_json("/trips", payload).await
}

pub async fn update(id: i64, payload: &TripPayload) -> ApiResult<Trip> {
    http::put_json(&format!("/trips/{id}"), payload).await
}

pub async fn remove(id: i64) -> ApiResult<()> {
    http::delete(&format!("/trips/{id}")).await
}

/// Upload an inspiration image as `multipart/form-data` with a `file` field
/// and an optional `caption`.
pub async fn upload_image(trip_id: i64, file: &File, caption: Option<&str>) -> ApiResult<TripImage> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    if let Some(caption) = caption {
        form.append_with_str("caption", caption)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }
    http::post_multipart(&format!("/trips/{trip_id}/images"), form).await
}

pub async fn remove_image(trip_id: i64, image_id: i64) -> ApiResult<()> {
    http::delete(&format!("/trips/{trip_id}/images/{image_id}")).await
}

/// Weather + sun-times bundle for the trip's destination. The backend falls
/// back to the trip's start date when no `date` is given.
pub async fn weather(trip_id: i64, date: Option<&str>) -> ApiResult<WeatherReport> {
    let path = match date {
        Some(date) => format!("/trips/{trip_id}/weather?date={date}"),
        None => format!("/trips/{trip_id}/weather"),
    };
    http::get_json(&path).await
}
