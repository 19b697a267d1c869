//! Film-stock inventory page with a shared create/edit dialog.

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::components::Modal;
use crate::pages::{alert, confirm};
use crate::services::film_stocks;
use crate::types::{non_empty, parse_quantity, FilmStock, FilmStockPayload};

#[component]
pub fn FilmStocksPage() -> impl IntoView {
    let (stocks, set_stocks) = create_signal(Vec::<FilmStock>::new());
    let (loading, set_loading) = create_signal(true);
    let (show_modal, set_show_modal) = create_signal(false);
    let (editing_id, set_editing_id) = create_signal(None::<i64>);
    let (model, set_model) = create_signal(String::new());
    let (format, set_format) = create_signal(String::new());
    let (quantity, set_quantity) = create_signal(String::from("0"));
    let (expiry, set_expiry) = create_signal(String::new());

    let fetch_stocks = move || {
        spawn_local(async move {
            match film_stocks::list().await {
                Ok(items) => set_stocks.set(items),
                Err(err) => log::error!("Failed to fetch film stocks: {}", err),
            }
            set_loading.set(false);
        });
    };
    fetch_stocks();

    let reset_form = move || {
        set_editing_id.set(None);
        set_model.set(String::new());
        set_format.set(String::new());
        set_quantity.set(String::from("0"));
        set_expiry.set(String::new());
    };

    let open_new = move |_| {
        reset_form();
        set_show_modal.set(true);
    };

    let open_edit = move |stock: FilmStock| {
        set_editing_id.set(Some(stock.id));
        set_model.set(stock.model);
        set_format.set(stock.format.unwrap_or_default());
        set_quantity.set(stock.quantity.to_string());
        set_expiry.set(stock.expiry_date.unwrap_or_default());
        set_show_modal.set(true);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = FilmStockPayload {
            model: model.get_untracked(),
            format: non_empty(format.get_untracked()),
            quantity: parse_quantity(&quantity.get_untracked()),
            expiry_date: non_empty(expiry.get_untracked()),
        };
        let editing = editing_id.get_untracked();
        spawn_local(async move {
            let result = match editing {
                Some(id) => film_stocks::update(id, &payload).await,
                None => film_stocks::create(&payload).await,
            };
            match result {
                Ok(_) => {
                    set_show_modal.set(false);
                    reset_form();
                    fetch_stocks();
                }
                Err(err) => {
                    log::error!("Failed to save film stock: {}", err);
                    alert("Failed to save film stock");
                }
            }
        });
    };

    let delete_stock = move |id: i64| {
        if !confirm("Delete this film stock?") {
            return;
        }
        spawn_local(async move {
            match film_stocks::remove(id).await {
                Ok(()) => fetch_stocks(),
                Err(err) => {
                    log::error!("Failed to delete film stock: {}", err);
                    alert("Failed to delete film stock");
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h2 class="page-title">"Film Stock"</h2>
                    <p class="page-subtitle">"Catalogue every roll"</p>
                </div>
                <button class="btn btn-primary" on:click=open_new>"New Film Stock"</button>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || !loading.get() && stocks.with(Vec::is_empty)>
                <div class="empty-state">"No film stocks yet. Add your first roll."</div>
            </Show>

            <div class="stock-list">
                <For
                    each=move || stocks.get()
                    key=|stock| stock.id
                    children=move |stock| {
                        let stock_id = stock.id;
                        let on_edit = {
                            let stock = stock.clone();
                            move |_| open_edit(stock.clone())
                        };
                        view! {
                            <div class="stock-row">
                                <div class="stock-info">
                                    <h3>{stock.model.clone()}</h3>
                                    <div class="stock-fields">
                                        <div>
                                            <span class="stock-label">"Format"</span>
                                            <div>
                                                {stock
                                                    .format
                                                    .clone()
                                                    .unwrap_or_else(|| "N/A".to_string())}
                                            </div>
                                        </div>
                                        <div>
                                            <span class="stock-label">"Quantity"</span>
                                            <div>{stock.quantity}</div>
                                        </div>
                                        <div>
                                            <span class="stock-label">"Expiry"</span>
                                            <div>
                                                {stock
                                                    .expiry_date
                                                    .clone()
                                                    .unwrap_or_else(|| "N/A".to_string())}
                                            </div>
                                        </div>
                                    </div>
                                </div>
                                <div class="stock-actions">
                                    <button class="btn btn-secondary" on:click=on_edit.clone()>
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn-danger"
                                        on:click=move |_| delete_stock(stock_id)
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Modal
                open=show_modal
                on_close=Callback::new(move |_| set_show_modal.set(false))
                title=move || {
                    if editing_id.get().is_some() {
                        "Edit Film Stock".to_string()
                    } else {
                        "New Film Stock".to_string()
                    }
                }
            >
                <form class="form" on:submit=on_submit>
                    <div class="form-field">
                        <label>"Model *"</label>
                        <input
                            type="text"
                            required
                            placeholder="e.g. Kodak Portra 400"
                            prop:value=model
                            on:input=move |ev| set_model.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Format"</label>
                        <input
                            type="text"
                            placeholder="e.g. 35mm, 120"
                            prop:value=format
                            on:input=move |ev| set_format.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Quantity *"</label>
                        <input
                            type="number"
                            required
                            min="0"
                            prop:value=quantity
                            on:input=move |ev| set_quantity.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Expiry Date"</label>
                        <input
                            type="date"
                            prop:value=expiry
                            on:input=move |ev| set_expiry.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| set_show_modal.set(false)
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {move || if editing_id.get().is_some() { "Update" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
