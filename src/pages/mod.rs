//! One module per routed page.
//!
//! Every page follows the same loop: fetch on mount, render, mutate through
//! the services layer, then re-fetch the authoritative state. List-fetch
//! failures are logged and render an empty state; mutation failures surface
//! a blocking alert; deletes are gated on an interactive confirmation.

mod film_stocks;
mod galleries;
mod gallery_detail;
mod trip_detail;
mod trips;

pub use film_stocks::*;
pub use galleries::*;
pub use gallery_detail::*;
pub use trip_detail::*;
pub use trips::*;

/// Interactive confirmation gate for deletes. Answering anything but OK
/// leaves backend and local state untouched.
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking alert for failed mutations.
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
