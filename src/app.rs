//! Bevásárló Lista App
//!
//! Root component. Owns the application state, loads the persisted list on
//! mount and writes it back after every mutation of the item collection.

use leptos::prelude::*;

use crate::components::{AddItemForm, CategoryFilter, ShoppingList};
use crate::models::Category;
use crate::state::ListState;
use crate::storage;

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(ListState::new());

    // Load persisted items on mount
    Effect::new(move |_| {
        let items = storage::load_items();
        web_sys::console::log_1(&format!("[APP] Loaded {} items", items.len()).into());
        state.update(|s| s.replace_items(items));
    });

    // Storage must see the post-mutation collection, so every handler that
    // touches items writes back synchronously instead of relying on a
    // reactive trigger.
    let persist = move || state.with_untracked(|s| storage::save_items(s.items()));

    let on_add = Callback::new(move |(name, quantity, category): (String, u32, Category)| {
        state.update(|s| s.add_item(name, quantity, category));
        persist();
    });

    let on_toggle = Callback::new(move |id: u64| {
        state.update(|s| s.toggle_purchased(id));
        persist();
    });

    let on_delete = Callback::new(move |id: u64| {
        state.update(|s| s.delete_item(id));
        persist();
    });

    let on_save = Callback::new(move |(id, name, quantity, category): (u64, String, u32, Category)| {
        state.update(|s| s.edit_item(id, name, quantity, category));
        persist();
    });

    let on_filter = Callback::new(move |category: Category| {
        state.update(|s| s.set_filter(category));
    });

    let on_reset = Callback::new(move |()| {
        state.update(|s| s.reset_filter());
    });

    let on_edit_target = Callback::new(move |id: Option<u64>| {
        state.update(|s| s.set_edit_target(id));
    });

    let visible_items = Memo::new(move |_| state.with(|s| s.visible_items()));
    let edit_target = Memo::new(move |_| state.with(|s| s.edit_target_id()));

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Bevásárló Lista"</h1>
            </header>
            <main class="app-content">
                <div class="list-container">
                    <CategoryFilter on_filter=on_filter on_reset=on_reset />
                    <ShoppingList
                        items=visible_items
                        edit_target=edit_target
                        on_toggle=on_toggle
                        on_delete=on_delete
                        on_save=on_save
                        on_edit_target=on_edit_target
                    />
                </div>
                <div class="form-container">
                    <AddItemForm on_add=on_add />
                </div>
            </main>
        </div>
    }
}
