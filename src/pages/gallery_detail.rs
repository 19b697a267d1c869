//! Single gallery: photo grid, batched upload, cover assignment.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, use_params_map};
use web_sys::File;

use crate::components::{ImageViewer, Modal, UploadZone};
use crate::pages::{alert, confirm};
use crate::services::{galleries, upload_batch, UploadProgress};
use crate::types::{non_empty, normalize_image_url, Gallery, GalleryPayload, Photo};

#[component]
pub fn GalleryDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = params
        .with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()))
        .unwrap_or_default();
    let navigate = store_value(use_navigate());

    let (gallery, set_gallery) = create_signal(None::<Gallery>);
    let (photos, set_photos) = create_signal(Vec::<Photo>::new());
    let (loading, set_loading) = create_signal(true);
    let (uploading, set_uploading) = create_signal(false);
    let (progress, set_progress) = create_signal(UploadProgress::default());
    let (viewing, set_viewing) = create_signal(None::<String>);
    let (show_edit, set_show_edit) = create_signal(false);
    let (edit_name, set_edit_name) = create_signal(String::new());
    let (edit_description, set_edit_description) = create_signal(String::new());

    let fetch_gallery = move || {
        spawn_local(async move {
            match galleries::get(id).await {
                Ok(data) => set_gallery.set(Some(data)),
                Err(err) => log::error!("Failed to fetch gallery: {}", err),
            }
            set_loading.set(false);
        });
    };
    let fetch_photos = move || {
        spawn_local(async move {
            match galleries::list_photos(id).await {
                Ok(data) => set_photos.set(data),
                Err(err) => log::error!("Failed to fetch photos: {}", err),
            }
        });
    };
    fetch_gallery();
    fetch_photos();

    // One file at a time, in input order; failures are logged and the batch
    // keeps going. When everything has been attempted the parent state is
    // re-fetched and the zone returns to idle.
    let on_files = Callback::new(move |files: Vec<File>| {
        set_uploading.set(true);
        spawn_local(async move {
            let report = upload_batch(
                files,
                move |file| async move { galleries::upload_photo(id, &file).await.map(|_| ()) },
                move |p| set_progress.set(p),
            )
            .await;
            if report.failed > 0 {
                log::warn!(
                    "{} of {} photos failed to upload",
                    report.failed,
                    report.attempted
                );
            }
            fetch_gallery();
            fetch_photos();
            set_uploading.set(false);
            set_progress.set(UploadProgress::default());
        });
    });

    let delete_gallery = move |_| {
        if !confirm("Delete this gallery and all photos?") {
            return;
        }
        spawn_local(async move {
            match galleries::remove(id).await {
                Ok(()) => navigate.with_value(|nav| nav("/galleries", Default::default())),
                Err(err) => {
                    log::error!("Failed to delete gallery: {}", err);
                    alert("Failed to delete gallery");
                }
            }
        });
    };

    let delete_photo = move |photo_id: i64| {
        if !confirm("Delete this photo?") {
            return;
        }
        spawn_local(async move {
            match galleries::remove_photo(id, photo_id).await {
                Ok(()) => {
                    fetch_gallery();
                    fetch_photos();
                }
                Err(err) => {
                    log::error!("Failed to delete photo: {}", err);
                    alert("Failed to delete photo");
                }
            }
        });
    };

    // Persist the assignment, patch the local gallery optimistically with the
    // photo's normalized URL, then pull authoritative state.
    let assign_cover = move |photo_id: i64, display_url: String| {
        spawn_local(async move {
            match galleries::set_cover(id, photo_id).await {
                Ok(()) => {
                    set_gallery.update(|gallery| {
                        if let Some(gallery) = gallery {
                            gallery.cover_image_url = Some(display_url);
                        }
                    });
                    fetch_gallery();
                }
                Err(err) => {
                    log::error!("Failed to set cover photo: {}", err);
                    alert("Failed to set cover photo");
                }
            }
        });
    };

    let open_edit = move |_| {
        if let Some(gallery) = gallery.get_untracked() {
            set_edit_name.set(gallery.name);
            set_edit_description.set(gallery.description.unwrap_or_default());
            set_show_edit.set(true);
        }
    };

    let on_update = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = GalleryPayload {
            name: edit_name.get_untracked(),
            description: non_empty(edit_description.get_untracked()),
        };
        spawn_local(async move {
            match galleries::update(id, &payload).await {
                Ok(_) => {
                    set_show_edit.set(false);
                    fetch_gallery();
                }
                Err(err) => {
                    log::error!("Failed to update gallery: {}", err);
                    alert("Failed to update gallery");
                }
            }
        });
    };

    view! {
        <div class="page">
            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Loading..."</div> }.into_view();
                }
                match gallery.get() {
                    None => view! { <div class="empty-state">"Gallery not found"</div> }
                        .into_view(),
                    Some(gallery) => view! {
                        <div class="detail-header">
                            <button
                                class="link-button"
                                on:click=move |_| {
                                    navigate
                                        .with_value(|nav| nav("/galleries", Default::default()))
                                }
                            >
                                "← Back to galleries"
                            </button>
                            <div class="detail-header-row">
                                <div>
                                    <h2 class="page-title">{gallery.name.clone()}</h2>
                                    {gallery
                                        .description
                                        .clone()
                                        .map(|text| view! { <p class="detail-desc">{text}</p> })}
                                    <p class="detail-meta">{gallery.photo_count} " photos"</p>
                                </div>
                                <div class="detail-actions">
                                    <button class="btn btn-secondary" on:click=open_edit>
                                        "Edit"
                                    </button>
                                    <button class="btn btn-danger" on:click=delete_gallery>
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                    .into_view(),
                }
            }}

            <Show when=move || !loading.get() && gallery.with(Option::is_some)>
                <UploadZone
                    uploading=uploading
                    progress=progress
                    on_files=on_files
                    input_id="gallery-photo-input"
                />

                <Show when=move || photos.with(Vec::is_empty)>
                    <div class="empty-state">
                        "No photos yet. Upload some photos to get started."
                    </div>
                </Show>

                <div class="photo-grid">
                    <For
                        each=move || photos.get()
                        key=|photo| photo.id
                        children=move |photo| {
                            let photo_id = photo.id;
                            let display = photo.display_url();
                            let full = normalize_image_url(&photo.original_url);
                            let cover_url = display.clone();
                            let is_cover = move || {
                                gallery.with(|g| {
                                    g.as_ref()
                                        .and_then(|g| g.cover_image_url.as_deref())
                                        .map(normalize_image_url)
                                        .as_deref()
                                        == Some(cover_url.as_str())
                                })
                            };
                            let not_cover = {
                                let is_cover = is_cover.clone();
                                move || !is_cover()
                            };
                            let on_view = {
                                let full = full.clone();
                                move |_| set_viewing.set(Some(full.clone()))
                            };
                            let on_set_cover = {
                                let display = display.clone();
                                move |_| assign_cover(photo_id, display.clone())
                            };
                            view! {
                                <div class="photo-card" class=("is-cover", is_cover.clone())>
                                    <img src=display.clone() on:click=on_view.clone()/>
                                    <Show when=is_cover.clone()>
                                        <div class="cover-badge">"Cover"</div>
                                    </Show>
                                    <div class="photo-actions">
                                        <button class="btn-overlay" on:click=on_view.clone()>
                                            "View"
                                        </button>
                                        <button
                                            class="btn-overlay btn-overlay-danger"
                                            on:click=move |_| delete_photo(photo_id)
                                        >
                                            "Delete"
                                        </button>
                                        <Show when=not_cover.clone()>
                                            <button
                                                class="btn-overlay"
                                                on:click=on_set_cover.clone()
                                            >
                                                "Set as Cover"
                                            </button>
                                        </Show>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            <ImageViewer image=viewing set_image=set_viewing/>

            <Modal
                open=show_edit
                on_close=Callback::new(move |_| set_show_edit.set(false))
                title="Edit Gallery"
            >
                <form class="form" on:submit=on_update>
                    <div class="form-field">
                        <label>"Name *"</label>
                        <input
                            type="text"
                            required
                            prop:value=edit_name
                            on:input=move |ev| set_edit_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Description"</label>
                        <textarea
                            rows=4
                            prop:value=edit_description
                            on:input=move |ev| set_edit_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| set_show_edit.set(false)
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Update"</button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
