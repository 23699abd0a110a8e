//! Item Row Component
//!
//! One list entry with its purchased checkbox and edit/delete triggers.

use leptos::prelude::*;

use crate::models::Item;

/// A single item row. Emits toggle, edit-request and delete intents.
#[component]
pub fn ItemRow(
    item: Item,
    #[prop(into)] on_toggle: Callback<u64>,
    #[prop(into)] on_edit: Callback<u64>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let id = item.id;
    let purchased = item.purchased;

    view! {
        <div class=move || if purchased { "list-item purchased" } else { "list-item" }>
            <div class="item-details">
                <span class="item-name">{item.name.clone()}</span>
                <span class="item-quantity">{format!("{} db", item.quantity)}</span>
                <span class="item-category">{item.category.label()}</span>
                <input
                    type="checkbox"
                    class="item-checkbox"
                    checked=purchased
                    on:change=move |_| on_toggle.run(id)
                />
                <button class="item-edit" on:click=move |_| on_edit.run(id)>
                    "✎"
                </button>
                <button class="item-delete" on:click=move |_| on_delete.run(id)>
                    "×"
                </button>
            </div>
        </div>
    }
}
