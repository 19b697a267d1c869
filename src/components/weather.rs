//! Weather and photography-times panel for a trip destination.
//!
//! Purely presentational: collapsible, manually refreshable, and the one
//! place in the app where a fetch failure gets an inline retry affordance
//! instead of a logged-and-empty list or a blocking alert.

use leptos::*;

use crate::services::trips;
use crate::types::{SunTimes, TimeWindow, WeatherReport};

#[component]
pub fn WeatherPanel(
    trip_id: i64,
    #[prop(into)] destination: Signal<Option<String>>,
    /// Date forwarded to the lookup; the backend falls back to the trip's
    /// start date when absent.
    #[prop(into)] date: Signal<Option<String>>,
) -> impl IntoView {
    let (report, set_report) = create_signal(None::<WeatherReport>);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (show_details, set_show_details) = create_signal(true);

    let fetch = move || {
        let date = date.get_untracked();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match trips::weather(trip_id, date.as_deref()).await {
                Ok(data) => set_report.set(Some(data)),
                Err(err) => {
                    log::error!("Weather fetch error: {}", err);
                    set_error.set(Some(err.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    // Fetch once a destination is known; re-fetch only if it changes.
    create_effect(move |prev: Option<Option<String>>| {
        let dest = destination.get();
        if dest.is_some() && prev.as_ref() != Some(&dest) {
            fetch();
        }
        dest
    });

    view! {
        <div class="weather-panel">
            {move || {
                if destination.get().is_none() {
                    return view! {
                        <p class="weather-hint">
                            "Add a destination to see weather and photography times"
                        </p>
                    }
                    .into_view();
                }
                if loading.get() {
                    return view! {
                        <p class="weather-hint">"Loading weather data..."</p>
                    }
                    .into_view();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <div class="weather-error">
                            <p>{message}</p>
                            <button class="link-button" on:click=move |_| fetch()>
                                "Try again"
                            </button>
                        </div>
                    }
                    .into_view();
                }
                match report.get() {
                    None => ().into_view(),
                    Some(data) => {
                        view! {
                            <button
                                class="weather-toggle"
                                on:click=move |_| set_show_details.update(|open| *open = !*open)
                            >
                                <div>
                                    <h3>"Weather & Photography Times"</h3>
                                    <p class="weather-location">
                                        {format!("{}, {}", data.location.name, data.location.country)}
                                    </p>
                                </div>
                                <span class="weather-chevron">
                                    {move || if show_details.get() { "▲" } else { "▼" }}
                                </span>
                            </button>
                            <Show when=move || show_details.get()>
                                {
                                    let forecast = data.weather.clone();
                                    let sun = data.sun_times.clone();
                                    view! {
                                        <div class="weather-details">
                                            {forecast
                                                .map(|w| {
                                                    view! {
                                                        <div class="weather-section">
                                                            <h4>"Weather Forecast"</h4>
                                                            <dl class="weather-grid">
                                                                <dt>"Condition"</dt>
                                                                <dd>{w.description}</dd>
                                                                <dt>"Temperature"</dt>
                                                                <dd>
                                                                    {format!(
                                                                        "{:.0}°C - {:.0}°C",
                                                                        w.temperature_min,
                                                                        w.temperature_max,
                                                                    )}
                                                                </dd>
                                                                <dt>"Rain Probability"</dt>
                                                                <dd>{format!("{:.0}%", w.precipitation_probability)}</dd>
                                                                <dt>"Date"</dt>
                                                                <dd>{w.date}</dd>
                                                            </dl>
                                                        </div>
                                                    }
                                                })}
                                            {sun.map(sun_times_view)}
                                            <div class="weather-refresh">
                                                <button class="link-button" on:click=move |_| fetch()>
                                                    "Refresh data"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }
                            </Show>
                        }
                        .into_view()
                    }
                }
            }}
        </div>
    }
}

fn window_view(label: &'static str, window: TimeWindow) -> impl IntoView {
    view! {
        <div class="hour-window">
            <div class="hour-window-label">{label}</div>
            <div>{format!("{} - {}", window.start, window.end)}</div>
        </div>
    }
}

fn sun_times_view(sun: SunTimes) -> impl IntoView {
    view! {
        <div class="weather-section">
            <h4>"Sun Times"</h4>
            <dl class="weather-grid">
                <dt>"Sunrise"</dt>
                <dd>{sun.sunrise}</dd>
                <dt>"Sunset"</dt>
                <dd>{sun.sunset}</dd>
                <dt>"Solar Noon"</dt>
                <dd>{sun.solar_noon}</dd>
                <dt>"Timezone"</dt>
                <dd>{sun.timezone.unwrap_or_else(|| "Local".to_string())}</dd>
            </dl>
        </div>
        <div class="weather-section">
            <h4>"Golden Hour"</h4>
            {window_view("Morning", sun.golden_hour_morning)}
            {window_view("Evening", sun.golden_hour_evening)}
        </div>
        <div class="weather-section weather-section-blue">
            <h4>"Blue Hour"</h4>
            {window_view("Morning", sun.blue_hour_morning)}
            {window_view("Evening", sun.blue_hour_evening)}
        </div>
    }
}
