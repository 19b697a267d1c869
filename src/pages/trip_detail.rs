//! Single trip: details, weather panel, inspiration images, batched upload.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, use_params_map};
use web_sys::File;

use crate::components::{ImageViewer, Modal, UploadZone, WeatherPanel};
use crate::pages::{alert, confirm};
use crate::services::{trips, upload_batch, UploadProgress};
use crate::types::{non_empty, Trip, TripPayload};

#[component]
pub fn TripDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = params
        .with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()))
        .unwrap_or_default();
    let navigate = store_value(use_navigate());

    let (trip, set_trip) = create_signal(None::<Trip>);
    let (loading, set_loading) = create_signal(true);
    let (uploading, set_uploading) = create_signal(false);
    let (progress, set_progress) = create_signal(UploadProgress::default());
    let (show_edit, set_show_edit) = create_signal(false);
    let (show_upload, set_show_upload) = create_signal(false);
    let (viewing, set_viewing) = create_signal(None::<String>);
    let (name, set_name) = create_signal(String::new());
    let (destination, set_destination) = create_signal(String::new());
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());

    let fetch_trip = move || {
        spawn_local(async move {
            match trips::get(id).await {
                Ok(data) => {
                    set_name.set(data.name.clone());
                    set_destination.set(data.destination.clone().unwrap_or_default());
                    set_start_date.set(data.start_date.clone().unwrap_or_default());
                    set_end_date.set(data.end_date.clone().unwrap_or_default());
                    set_description.set(data.description.clone().unwrap_or_default());
                    set_trip.set(Some(data));
                }
                Err(err) => log::error!("Failed to fetch trip: {}", err),
            }
            set_loading.set(false);
        });
    };
    fetch_trip();

    let on_files = Callback::new(move |files: Vec<File>| {
        set_uploading.set(true);
        spawn_local(async move {
            let report = upload_batch(
                files,
                move |file| async move {
                    trips::upload_image(id, &file, None).await.map(|_| ())
                },
                move |p| set_progress.set(p),
            )
            .await;
            if report.failed > 0 {
                log::warn!(
                    "{} of {} images failed to upload",
                    report.failed,
                    report.attempted
                );
            }
            fetch_trip();
            set_uploading.set(false);
            set_progress.set(UploadProgress::default());
            set_show_upload.set(false);
        });
    });

    // The upload dialog stays up until the batch finishes.
    let close_upload = Callback::new(move |_| {
        if !uploading.get_untracked() {
            set_show_upload.set(false);
        }
    });

    let delete_trip = move |_| {
        if !confirm("Delete this trip and all images?") {
            return;
        }
        spawn_local(async move {
            match trips::remove(id).await {
                Ok(()) => navigate.with_value(|nav| nav("/trips", Default::default())),
                Err(err) => {
                    log::error!("Failed to delete trip: {}", err);
                    alert("Failed to delete trip");
                }
            }
        });
    };

    let delete_image = move |image_id: i64| {
        if !confirm("Delete this image?") {
            return;
        }
        spawn_local(async move {
            match trips::remove_image(id, image_id).await {
                Ok(()) => fetch_trip(),
                Err(err) => {
                    log::error!("Failed to delete image: {}", err);
                    alert("Failed to delete image");
                }
            }
        });
    };

    let on_update = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = TripPayload {
            name: name.get_untracked(),
            destination: non_empty(destination.get_untracked()),
            start_date: non_empty(start_date.get_untracked()),
            end_date: non_empty(end_date.get_untracked()),
            description: non_empty(description.get_untracked()),
        };
        spawn_local(async move {
            match trips::update(id, &payload).await {
                Ok(_) => {
                    set_show_edit.set(false);
                    fetch_trip();
                }
                Err(err) => {
                    log::error!("Failed to update trip: {}", err);
                    alert("Failed to update trip");
                }
            }
        });
    };

    let weather_destination =
        Signal::derive(move || trip.with(|t| t.as_ref().and_then(|t| t.destination.clone())));
    let weather_date =
        Signal::derive(move || trip.with(|t| t.as_ref().and_then(|t| t.start_date.clone())));

    view! {
        <div class="page">
            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Loading..."</div> }.into_view();
                }
                match trip.get() {
                    None => view! { <div class="empty-state">"Trip not found"</div> }.into_view(),
                    Some(trip) => {
                        let dates = trip.start_date.clone().map(|start| {
                            match trip.end_date.clone() {
                                Some(end) => format!("{start} to {end}"),
                                None => start,
                            }
                        });
                        view! {
                            <div class="detail-header">
                                <button
                                    class="link-button"
                                    on:click=move |_| {
                                        navigate.with_value(|nav| nav("/trips", Default::default()))
                                    }
                                >
                                    "← Back to trips"
                                </button>
                                <div class="detail-header-row">
                                    <div>
                                        <h2 class="page-title">{trip.name.clone()}</h2>
                                        {trip.destination.clone().map(|destination| view! {
                                            <div class="detail-field">
                                                <span class="detail-label">"Destination"</span>
                                                <div>{destination}</div>
                                            </div>
                                        })}
                                        {dates.map(|dates| view! {
                                            <div class="detail-field">
                                                <span class="detail-label">"Dates"</span>
                                                <div>{dates}</div>
                                            </div>
                                        })}
                                        {trip.description.clone().map(|notes| view! {
                                            <div class="detail-field">
                                                <span class="detail-label">"Notes"</span>
                                                <p class="detail-desc">{notes}</p>
                                            </div>
                                        })}
                                    </div>
                                    <div class="detail-actions">
                                        <button
                                            class="btn btn-primary"
                                            on:click=move |_| set_show_upload.set(true)
                                        >
                                            "Add Inspiration"
                                        </button>
                                        <button
                                            class="btn btn-secondary"
                                            on:click=move |_| set_show_edit.set(true)
                                        >
                                            "Edit"
                                        </button>
                                        <button class="btn btn-danger" on:click=delete_trip>
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                        .into_view()
                    }
                }
            }}

            <Show when=move || !loading.get() && trip.with(Option::is_some)>
                <WeatherPanel
                    trip_id=id
                    destination=weather_destination
                    date=weather_date
                />

                <div class="section-header">
                    <h3>"Inspiration Images"</h3>
                    <p class="page-subtitle">"Curate visual ideas for the journey"</p>
                </div>

                <Show when=move || trip.with(|t| t.as_ref().is_some_and(|t| t.images.is_empty()))>
                    <div class="empty-state">
                        "No inspiration images yet. Upload to begin the moodboard."
                    </div>
                </Show>

                <div class="photo-grid">
                    <For
                        each=move || trip.get().map(|t| t.images).unwrap_or_default()
                        key=|image| image.id
                        children=move |image| {
                            let image_id = image.id;
                            let preview = image.preview_url();
                            let full = image.full_url();
                            let on_view = {
                                let full = full.clone();
                                move |_| set_viewing.set(Some(full.clone()))
                            };
                            view! {
                                <div class="photo-card">
                                    <img src=preview on:click=on_view.clone()/>
                                    {image.caption.clone().map(|caption| view! {
                                        <div class="image-caption">{caption}</div>
                                    })}
                                    <div class="photo-actions">
                                        <button class="btn-overlay" on:click=on_view.clone()>
                                            "View"
                                        </button>
                                        <button
                                            class="btn-overlay btn-overlay-danger"
                                            on:click=move |_| delete_image(image_id)
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            <ImageViewer image=viewing set_image=set_viewing/>

            <Modal open=show_upload on_close=close_upload title="Add Inspiration">
                <div class="upload-dialog">
                    <p class="upload-dialog-hint">
                        "Drag inspiration frames here or use the picker"
                    </p>
                    <UploadZone
                        uploading=uploading
                        progress=progress
                        on_files=on_files
                        input_id="trip-image-input"
                        prompt="Drop frames here or click to select"
                    />
                    <Show when=move || uploading.get()>
                        <p class="upload-dialog-wait">
                            "Please wait until the current batch finishes."
                        </p>
                    </Show>
                </div>
            </Modal>

            <Modal
                open=show_edit
                on_close=Callback::new(move |_| set_show_edit.set(false))
                title="Edit Trip"
            >
                <form class="form" on:submit=on_update>
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
                        <label>"Destination"</label>
                        <input
                            type="text"
                            prop:value=destination
                            on:input=move |ev| set_destination.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-field">
                            <label>"Start Date"</label>
                            <input
                                type="date"
                                prop:value=start_date
                                on:input=move |ev| set_start_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label>"End Date"</label>
                            <input
                                type="date"
                                prop:value=end_date
                                on:input=move |ev| set_end_date.set(event_target_value(&ev))
                            />
                        </div>
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
