//! Full-screen lightbox for a single image.

use leptos::ev;
use leptos::*;

#[component]
pub fn ImageViewer(
    image: ReadSignal<Option<String>>,
    set_image: WriteSignal<Option<String>>,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_image.set(None);
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <Show when=move || image.get().is_some()>
            <div class="viewer-overlay" on:click=move |_| set_image.set(None)>
                <button class="viewer-close" on:click=move |_| set_image.set(None)>
                    "×"
                </button>
                <img
                    class="viewer-image"
                    src=move || image.get().unwrap_or_default()
                    on:click=|ev| ev.stop_propagation()
                />
                <div class="viewer-hint">"Click outside or press ESC to close"</div>
            </div>
        </Show>
    }
}
