//! API client for galleries and their photos.

use web_sys::{File, FormData};

use crate::services::http;
use crate::types::{ApiError, ApiResult, Gallery, GalleryPayload, Photo};

pub async fn list() -> ApiResult<Vec<Gallery>> {
    http::get_json("/galleries").await
}

pub async fn get(id: i64) -> ApiResult<Gallery> {
    http::get_json(&format!("/galleries/{id}")).await
}

pub async fn create(payload: &GalleryPayload) -> ApiResult<Gallery> {
    http::post_json("/galleries", payload).await
}

pub async fn update(id: i64, payload: &GalleryPayload) -> ApiResult<Gallery> {
    http::put_json(&format!("/galleries/{id}"), payload).await
}

pub async fn remove(id: i64) -> ApiResult<()> {
    http::delete(&format!("/galleries/{id}")).await
}

pub async fn list_photos(gallery_id: i64) -> ApiResult<Vec<Photo>> {
    http::get_json(&format!("/galleries/{gallery_id}/photos")).await
}

/// Upload a single photo as `multipart/form-data` with a `file` field.
pub async fn upload_photo(gallery_id: i64, file: &File) -> ApiResult<Photo> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    http::post_multipart(&format!("/galleries/{gallery_id}/photos"), form).await
}

pub async fn remove_photo(gallery_id: i64, photo_id: i64) -> ApiResult<()> {
    http::delete(&format!("/galleries/{gallery_id}/photos/{photo_id}")).await
}

/// Persist a photo as the gallery cover.
pub async fn set_cover(gallery_id: i64, photo_id: i64) -> ApiResult<()> {
    http::put(&format!("/galleries/{gallery_id}/cover/{photo_id}")).await
}
