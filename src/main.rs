//! Entry point for the WASM application

use filmlog::App;
use leptos::*;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting Filmlog");

    mount_to_body(|| view! { <App/> })
}
