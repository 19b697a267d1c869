//! Filmlog - catalog application for film photographers.
//!
//! A WebAssembly frontend (Leptos, client-side rendered) for managing photo
//! galleries, film-stock inventory and trips, against an external REST
//! backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Layout (header navigation)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routed page                                                 │
//! │  ├── /galleries, /galleries/:id                             │
//! │  ├── /film-stocks                                           │
//! │  └── /trips, /trips/:id (weather panel)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - entities mirroring the backend schemas, URL/quantity helpers
//! - [`services`] - REST client and the sequential batch uploader
//! - [`components`] - shared UI (modal, lightbox, upload zone, weather)
//! - [`pages`] - one component per route

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub mod components;
pub mod config;
pub mod pages;
pub mod services;
pub mod types;

pub use config::*;
pub use types::{
    normalize_image_url, parse_quantity, ApiError, ApiResult, FilmStock, Gallery, Photo, Trip,
    TripImage, WeatherReport,
};

use components::Layout;
use pages::{FilmStocksPage, GalleriesPage, GalleryDetailPage, TripDetailPage, TripsPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/galleries"/> }/>
                    <Route path="/galleries" view=GalleriesPage/>
                    <Route path="/galleries/:id" view=GalleryDetailPage/>
                    <Route path="/film-stocks" view=FilmStocksPage/>
                    <Route path="/trips" view=TripsPage/>
                    <Route path="/trips/:id" view=TripDetailPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
