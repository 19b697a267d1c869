//! UI components shared across pages.
//!
//! # Layout
//! - [`Layout`] - header navigation and footer around the routed page
//!
//! # Feature components
//! - [`Modal`] - overlay dialog for create/edit forms
//! - [`ImageViewer`] - full-screen lightbox
//! - [`UploadZone`] - drag & drop / picker surface with batch progress
//! - [`WeatherPanel`] - collapsible weather + golden-hour lookup

mod dropzone;
mod image_viewer;
mod layout;
mod modal;
mod weather;

pub use dropzone::*;
pub use image_viewer::*;
pub use layout::*;
pub use modal::*;
pub use weather::*;
