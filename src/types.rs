//! Common types used across the frontend application.
//!
//! The entity structs mirror the backend's JSON schemas field for field
//! (snake_case keys, integer ids, ISO date strings). The client only ever
//! holds transient copies: every page fetches on mount and re-fetches after
//! mutations instead of patching in memory.
//!
//! # Categories
//!
//! - **Entities** - Gallery, Photo, FilmStock, Trip, TripImage
//! - **Payloads** - create/update request bodies
//! - **Weather** - read-only weather + sun-times bundle for a trip
//! - **Errors** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Entities
// =============================================================================

/// A photo gallery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// URL of the cover photo, if one is set.
    pub cover_image_url: Option<String>,
    pub photo_count: u32,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating or updating a gallery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryPayload {
    pub name: String,
    pub description: Option<String>,
}

/// A photo inside a gallery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub gallery_id: i64,
    pub original_url: String,
    pub thumbnail_url: Option<String>,
    pub file_size: Option<u64>,
    pub display_order: u32,
    pub uploaded_at: String,
}

impl Photo {
    /// URL used for grid display and cover comparison: the thumbnail when the
    /// backend produced one, otherwise the original, scheme-normalized.
    pub fn display_url(&self) -> String {
        normalize_image_url(self.thumbnail_url.as_deref().unwrap_or(&self.original_url))
    }

    /// Whether this photo is the gallery's current cover.
    ///
    /// The backend stores the cover as a plain URL string, so the check is a
    /// string equality between normalized URLs.
    pub fn is_cover(&self, gallery: &Gallery) -> bool {
        gallery
            .cover_image_url
            .as_deref()
            .map(normalize_image_url)
            .as_deref()
            == Some(self.display_url().as_str())
    }
}

/// A roll (or box) of film in the inventory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilmStock {
    pub id: i64,
    pub model: String,
    pub format: Option<String>,
    pub quantity: u32,
    pub expiry_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating or updating a film stock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilmStockPayload {
    pub model: String,
    pub format: Option<String>,
    pub quantity: u32,
    pub expiry_date: Option<String>,
}

/// A planned or past trip, with its inspiration images inlined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub name: String,
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<TripImage>,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating or updating a trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripPayload {
    pub name: String,
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

/// An inspiration image attached to a trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripImage {
    pub id: i64,
    pub trip_id: i64,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub display_order: u32,
    pub uploaded_at: String,
}

impl TripImage {
    /// Thumbnail falling back to the full image, scheme-normalized.
    pub fn preview_url(&self) -> String {
        normalize_image_url(self.thumbnail_url.as_deref().unwrap_or(&self.image_url))
    }

    /// Full image falling back to the thumbnail, scheme-normalized.
    pub fn full_url(&self) -> String {
        normalize_image_url(if self.image_url.is_empty() {
            self.thumbnail_url.as_deref().unwrap_or_default()
        } else {
            &self.image_url
        })
    }
}

// =============================================================================
// Weather bundle
// =============================================================================

/// Weather + sun-times bundle for a trip's destination.
///
/// Fetched from `GET /trips/{id}/weather` and never persisted client-side
/// beyond the current view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: Location,
    pub weather: Option<Forecast>,
    pub sun_times: Option<SunTimes>,
}

/// Geocoded destination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Daily forecast for the destination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub date: String,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub description: String,
    pub precipitation_probability: f64,
}

/// Sunrise/sunset plus the photography windows derived from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    pub day_length: i64,
    pub timezone: Option<String>,
    pub golden_hour_morning: TimeWindow,
    pub golden_hour_evening: TimeWindow,
    pub blue_hour_morning: TimeWindow,
    pub blue_hour_evening: TimeWindow,
}

/// A start/end pair of local `HH:MM` times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

// =============================================================================
// Helpers
// =============================================================================

/// Rewrite a leading `http://` to `https://`.
///
/// The backend historically handed out plain-http image URLs; display and
/// cover-match comparisons go through this shim. Other URL forms (relative
/// paths, protocol-relative) pass through untouched.
pub fn normalize_image_url(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}

/// Parse a quantity input field into a non-negative integer.
///
/// Negative and non-numeric input both floor to zero.
pub fn parse_quantity(input: &str) -> u32 {
    input
        .trim()
        .parse::<i64>()
        .map_or(0, |n| n.clamp(0, u32::MAX as i64) as u32)
}

/// Turn an empty form field into `None` so optional backend columns stay null.
pub fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Frontend API errors.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// Request never reached the backend, or building it failed.
    Network(String),
    /// Backend answered with a non-2xx status.
    Http { status: u16, message: String },
    /// Response body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Http { status, message } => {
                write!(f, "Server error ({status}): {message}")
            }
            ApiError::Decode(msg) => write!(f, "Failed to parse response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery_with_cover(cover: Option<&str>) -> Gallery {
        Gallery {
            id: 1,
            name: "Street".to_string(),
            description: None,
            cover_image_url: cover.map(str::to_string),
            photo_count: 2,
            created_at: "2024-05-01T10:00:00".to_string(),
            updated_at: "2024-05-01T10:00:00".to_string(),
        }
    }

    fn photo(id: i64, original: &str, thumbnail: Option<&str>) -> Photo {
        Photo {
            id,
            gallery_id: 1,
            original_url: original.to_string(),
            thumbnail_url: thumbnail.map(str::to_string),
            file_size: None,
            display_order: 0,
            uploaded_at: "2024-05-01T10:00:00".to_string(),
        }
    }

    #[test]
    fn normalize_rewrites_plain_http() {
        assert_eq!(normalize_image_url("http://a/1.jpg"), "https://a/1.jpg");
    }

    #[test]
    fn normalize_leaves_other_forms_alone() {
        assert_eq!(normalize_image_url("https://a/2.jpg"), "https://a/2.jpg");
        assert_eq!(normalize_image_url("/uploads/3.jpg"), "/uploads/3.jpg");
        assert_eq!(normalize_image_url("//cdn/a/4.jpg"), "//cdn/a/4.jpg");
    }

    #[test]
    fn cover_match_uses_normalized_urls() {
        // Setting the http photo as cover stores its URL server-side; the
        // client compares both sides through the https shim.
        let p1 = photo(1, "http://a/1.jpg", None);
        let p2 = photo(2, "https://a/2.jpg", None);

        assert_eq!(p1.display_url(), "https://a/1.jpg");

        let gallery = gallery_with_cover(Some("http://a/1.jpg"));
        assert!(p1.is_cover(&gallery));
        assert!(!p2.is_cover(&gallery));
    }

    #[test]
    fn cover_match_prefers_thumbnail_url() {
        let p = photo(1, "https://a/orig.jpg", Some("http://a/thumb.jpg"));
        let gallery = gallery_with_cover(Some("https://a/thumb.jpg"));
        assert!(p.is_cover(&gallery));
    }

    #[test]
    fn no_cover_matches_nothing() {
        let p = photo(1, "https://a/1.jpg", None);
        assert!(!p.is_cover(&gallery_with_cover(None)));
    }

    #[test]
    fn quantity_floors_at_zero() {
        assert_eq!(parse_quantity("-5"), 0);
        assert_eq!(parse_quantity("three"), 0);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("0"), 0);
    }

    #[test]
    fn non_empty_drops_blank_fields() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty("120".to_string()), Some("120".to_string()));
    }

    #[test]
    fn trip_deserializes_with_images() {
        let json = r#"{
            "id": 7,
            "name": "Autumn in Kyoto",
            "destination": "Kyoto",
            "start_date": "2024-11-10",
            "end_date": "2024-11-18",
            "description": null,
            "images": [
                {
                    "id": 1,
                    "trip_id": 7,
                    "image_url": "http://img/full.jpg",
                    "thumbnail_url": "http://img/thumb.jpg",
                    "caption": "Torii at dawn",
                    "display_order": 0,
                    "uploaded_at": "2024-05-01T10:00:00"
                }
            ],
            "created_at": "2024-05-01T10:00:00",
            "updated_at": "2024-05-01T10:00:00"
        }"#;

        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.destination.as_deref(), Some("Kyoto"));
        assert_eq!(trip.images.len(), 1);
        assert_eq!(trip.images[0].preview_url(), "https://img/thumb.jpg");
        assert_eq!(trip.images[0].full_url(), "https://img/full.jpg");
    }

    #[test]
    fn weather_report_deserializes() {
        let json = r#"{
            "location": {
                "name": "Kyoto",
                "country": "Japan",
                "latitude": 35.01,
                "longitude": 135.77
            },
            "weather": {
                "date": "2024-11-10",
                "temperature_max": 18.2,
                "temperature_min": 9.4,
                "description": "Partly cloudy",
                "precipitation_probability": 20
            },
            "sun_times": {
                "sunrise": "06:25",
                "sunset": "16:48",
                "solar_noon": "11:36",
                "day_length": 37380,
                "timezone": "Asia/Tokyo",
                "golden_hour_morning": {"start": "06:25", "end": "07:25"},
                "golden_hour_evening": {"start": "15:48", "end": "16:48"},
                "blue_hour_morning": {"start": "05:55", "end": "06:25"},
                "blue_hour_evening": {"start": "16:48", "end": "17:18"}
            }
        }"#;

        let report: WeatherReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.location.name, "Kyoto");
        let sun = report.sun_times.unwrap();
        assert_eq!(sun.golden_hour_evening.start, "15:48");
        assert_eq!(sun.timezone.as_deref(), Some("Asia/Tokyo"));
    }

    #[test]
    fn payload_serializes_nulls_for_missing_optionals() {
        let payload = FilmStockPayload {
            model: "Kodak Portra 400".to_string(),
            format: None,
            quantity: 3,
            expiry_date: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["quantity"], 3);
        assert!(json["expiry_date"].is_null());
    }
}
