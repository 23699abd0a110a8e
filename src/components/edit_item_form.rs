//! Edit Item Form Component
//!
//! Inline editor for a single list entry. Holds draft copies of the
//! editable fields; nothing is written anywhere until the save callback
//! fires.

use leptos::prelude::*;

use crate::components::CategorySelect;
use crate::models::{coerce_quantity, Category, Item};

/// Inline item editor seeded from the item under edit.
#[component]
pub fn EditItemForm(
    item: Item,
    #[prop(into)] on_save: Callback<(u64, String, u32, Category)>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let id = item.id;
    let (name, set_name) = signal(item.name.clone());
    let (quantity, set_quantity) = signal(item.quantity.to_string());
    let (category, set_category) = signal(item.category);

    let handle_save = move |_| {
        let amount = coerce_quantity(&quantity.get());
        on_save.run((id, name.get(), amount, category.get()));
    };

    view! {
        <div class="edit-item-form">
            <input
                type="text"
                class="edit-name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="number"
                class="edit-quantity"
                min="1"
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <CategorySelect
                selected=category
                on_change=Callback::new(move |c| set_category.set(c))
            />
            <button class="button" on:click=handle_save>
                "Mentés"
            </button>
            <button class="button" on:click=move |_| on_cancel.run(())>
                "Mégse"
            </button>
        </div>
    }
}
