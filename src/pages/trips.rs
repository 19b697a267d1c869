//! Trip list page with a create dialog.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;

use crate::components::Modal;
use crate::pages::alert;
use crate::services::trips;
use crate::types::{non_empty, Trip, TripPayload};

#[component]
pub fn TripsPage() -> impl IntoView {
    let (trips, set_trips) = create_signal(Vec::<Trip>::new());
    let (loading, set_loading) = create_signal(true);
    let (show_modal, set_show_modal) = create_signal(false);
    let (name, set_name) = create_signal(String::new());
    let (destination, set_destination) = create_signal(String::new());
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let navigate = store_value(use_navigate());

    let fetch_trips = move || {
        spawn_local(async move {
            match trips::list().await {
                Ok(items) => set_trips.set(items),
                Err(err) => log::error!("Failed to fetch trips: {}", err),
            }
            set_loading.set(false);
        });
    };
    fetch_trips();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = TripPayload {
            name: name.get_untracked(),
            destination: non_empty(destination.get_untracked()),
            start_date: non_empty(start_date.get_untracked()),
            end_date: non_empty(end_date.get_untracked()),
            description: non_empty(description.get_untracked()),
        };
        spawn_local(async move {
            match trips::create(&payload).await {
                Ok(trip) => {
                    set_show_modal.set(false);
                    set_name.set(String::new());
                    set_destination.set(String::new());
                    set_start_date.set(String::new());
                    set_end_date.set(String::new());
                    set_description.set(String::new());
                    navigate
                        .with_value(|nav| nav(&format!("/trips/{}", trip.id), Default::default()));
                }
                Err(err) => {
                    log::error!("Failed to create trip: {}", err);
                    alert("Failed to create trip");
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h2 class="page-title">"Trips"</h2>
                    <p class="page-subtitle">"Map the journeys ahead"</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| set_show_modal.set(true)>
                    "New Trip"
                </button>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && trips.with(Vec::is_empty)>
                <div class="empty-state">"No trips yet. Plan your first adventure."</div>
            </Show>

            <div class="trip-list">
                <For
                    each=move || trips.get()
                    key=|trip| trip.id
                    children=move |trip| {
                        let trip_id = trip.id;
                        let open = move |_| {
                            navigate.with_value(|nav| {
                                nav(&format!("/trips/{trip_id}"), Default::default())
                            });
                        };
                        let dates = trip.start_date.clone().map(|start| {
                            match trip.end_date.clone() {
                                Some(end) => format!("{start} to {end}"),
                                None => start,
                            }
                        });
                        view! {
                            <div class="trip-row" on:click=open>
                                <h3>{trip.name.clone()}</h3>
                                <div class="trip-fields">
                                    {trip.destination.clone().map(|destination| view! {
                                        <div>
                                            <span class="trip-label">"Destination"</span>
                                            <div>{destination}</div>
                                        </div>
                                    })}
                                    {dates.map(|dates| view! {
                                        <div>
                                            <span class="trip-label">"Dates"</span>
                                            <div>{dates}</div>
                                        </div>
                                    })}
                                    <div>
                                        <span class="trip-label">"Inspiration"</span>
                                        <div>{trip.images.len()} " images"</div>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Modal
                open=show_modal
                on_close=Callback::new(move |_| set_show_modal.set(false))
                title="New Trip"
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
