//! Drag-and-drop / file-picker upload zone.
//!
//! Purely the platform side of uploading: it collects the selected `File`s
//! and hands them to the owning page, which runs the sequential batch via
//! [`crate::services::upload_batch`]. While a batch is in flight the zone is
//! disabled and renders the `current / total` counter with a fill bar.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::services::UploadProgress;

fn collect_files(list: Option<web_sys::FileList>) -> Vec<File> {
    let mut files = Vec::new();
    if let Some(list) = list {
        for index in 0..list.length() {
            if let Some(file) = list.get(index) {
                files.push(file);
            }
        }
    }
    files
}

#[component]
pub fn UploadZone(
    uploading: ReadSignal<bool>,
    progress: ReadSignal<UploadProgress>,
    /// Receives the selected files in input order.
    on_files: Callback<Vec<File>>,
    /// Id of the hidden input element; must be unique per page.
    #[prop(default = "upload-input")] input_id: &'static str,
    #[prop(default = "Drag photos here or click to select")] prompt: &'static str,
) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);

    let on_change = move |ev: Event| {
        if uploading.get_untracked() {
            return;
        }
        let input: HtmlInputElement = event_target(&ev);
        let files = collect_files(input.files());
        // Clear the input so picking the same files again re-triggers change.
        input.set_value("");
        if !files.is_empty() {
            on_files.call(files);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        if uploading.get_untracked() {
            return;
        }
        let files = collect_files(ev.data_transfer().and_then(|t| t.files()));
        if !files.is_empty() {
            on_files.call(files);
        }
    };

    let open_picker = move |_| {
        if uploading.get_untracked() {
            return;
        }
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(element) = document.get_element_by_id(input_id) {
                if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                    input.click();
                }
            }
        }
    };

    view! {
        <div
            class="upload-zone"
            class=("drag-active", move || drag_active.get())
            class=("uploading", move || uploading.get())
            on:click=open_picker
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                set_drag_active.set(true);
            }
            on:dragleave=move |_| set_drag_active.set(false)
            on:drop=on_drop
        >
            <Show
                when=move || uploading.get()
                fallback=move || {
                    view! {
                        <p class="upload-prompt">
                            {move || if drag_active.get() { "Drop photos here" } else { prompt }}
                        </p>
                    }
                }
            >
                <p class="upload-prompt">
                    "Uploading " {move || progress.get().current} " / "
                    {move || progress.get().total}
                </p>
                <div class="upload-bar">
                    <div
                        class="upload-bar-fill"
                        style:width=move || format!("{:.0}%", progress.get().percent())
                    ></div>
                </div>
            </Show>
            <input
                type="file"
                id=input_id
                accept="image/*"
                multiple=true
                style="display:none"
                disabled=move || uploading.get()
                on:change=on_change
            />
        </div>
    }
}
