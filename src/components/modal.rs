//! Overlay dialog used by every create/edit form.

use leptos::*;

#[component]
pub fn Modal(
    /// Whether the dialog is shown.
    open: ReadSignal<bool>,
    /// Invoked on backdrop click or the close button. The owner decides
    /// whether to actually close (the trip upload dialog refuses mid-batch).
    on_close: Callback<()>,
    #[prop(into)] title: TextProp,
    children: ChildrenFn,
) -> impl IntoView {
    let title = store_value(title);
    let children = store_value(children);

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal-backdrop" on:click=move |_| on_close.call(())></div>
                <div class="modal-panel">
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.with_value(|t| t.get())}</h2>
                        <button
                            class="modal-close"
                            on:click=move |_| on_close.call(())
                        >
                            "×"
                        </button>
                    </div>
                    {move || children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
