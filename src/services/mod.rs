//! Backend communication.
//!
//! One module per REST resource, a shared request layer, and the batched
//! uploader that the detail pages drive:
//!
//! - [`http`] - request helpers over gloo-net
//! - [`galleries`] - galleries, photos, cover assignment
//! - [`film_stocks`] - film-stock inventory
//! - [`trips`] - trips, inspiration images, weather lookup
//! - [`uploader`] - sequential batch upload with progress

pub mod film_stocks;
pub mod galleries;
pub mod http;
pub mod trips;
pub mod uploader;

pub use uploader::{upload_batch, BatchReport, UploadProgress};
