//! Gallery list page with a create dialog.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;

use crate::components::Modal;
use crate::pages::alert;
use crate::services::galleries;
use crate::types::{non_empty, Gallery, GalleryPayload};

#[component]
pub fn GalleriesPage() -> impl IntoView {
    let (galleries, set_galleries) = create_signal(Vec::<Gallery>::new());
    let (loading, set_loading) = create_signal(true);
    let (show_modal, set_show_modal) = create_signal(false);
    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let navigate = store_value(use_navigate());

    let fetch_galleries = move || {
        spawn_local(async move {
            match galleries::list().await {
                Ok(items) => set_galleries.set(items),
                Err(err) => log::error!("Failed to fetch galleries: {}", err),
            }
            set_loading.set(false);
        });
    };
    fetch_galleries();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = GalleryPayload {
            name: name.get_untracked(),
            description: non_empty(description.get_untracked()),
        };
        spawn_local(async move {
            match galleries::create(&payload).await {
                Ok(gallery) => {
                    set_show_modal.set(false);
                    set_name.set(String::new());
                    set_description.set(String::new());
                    navigate.with_value(|nav| {
                        nav(&format!("/galleries/{}", gallery.id), Default::default())
                    });
                }
                Err(err) => {
                    log::error!("Failed to create gallery: {}", err);
                    alert("Failed to create gallery");
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h2 class="page-title">"Galleries"</h2>
                    <p class="page-subtitle">"Curate your best frames"</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| set_show_modal.set(true)>
                    "New Gallery"
                </button>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && galleries.with(Vec::is_empty)>
                <div class="empty-state">"No galleries yet. Create one to start your archive."</div>
            </Show>

            <div class="card-grid">
                <For
                    each=move || galleries.get()
                    key=|gallery| gallery.id
                    children=move |gallery| {
                        let gallery_id = gallery.id;
                        let open = move |_| {
                            navigate.with_value(|nav| {
                                nav(&format!("/galleries/{gallery_id}"), Default::default())
                            });
                        };
                        view! {
                            <div class="gallery-card" on:click=open>
                                <div class="gallery-card-cover">
                                    {match gallery.cover_image_url.clone() {
                                        Some(url) => view! {
                                            <img src=url alt=gallery.name.clone()/>
                                        }
                                        .into_view(),
                                        None => view! {
                                            <div class="gallery-card-empty">"No Photos"</div>
                                        }
                                        .into_view(),
                                    }}
                                </div>
                                <div class="gallery-card-body">
                                    <h3>{gallery.name.clone()}</h3>
                                    <p class="gallery-card-count">
                                        {gallery.photo_count} " photos"
                                    </p>
                                    {gallery
                                        .description
                                        .clone()
                                        .map(|text| view! { <p class="gallery-card-desc">{text}</p> })}
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Modal
                open=show_modal
                on_close=Callback::new(move |_| set_show_modal.set(false))
                title="New Gallery"
            >
                <form class="form" on:submit=on_submit>
                    <div class="form-field">
                        <label>"Name *"</label>
                        <input
                            type="text"
                            required
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Description"</label>
                        <textarea
                            rows=4
                            prop:value=description
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| set_show_modal.set(false)
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Create"</button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
