//! Application configuration.
//!
//! Centralized configuration for the Filmlog frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// REST backend base path.
///
/// All resource endpoints hang off this prefix.
pub const API_BASE_URL: &str = "http://localhost:8000/api";

/// Application name, shown in the header and document title.
pub const APP_NAME: &str = "Film Photography";
