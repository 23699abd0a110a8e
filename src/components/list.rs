//! Shopping List Component
//!
//! Renders the derived view: each visible item as a plain row, or as the
//! inline editor when it is the current edit target.

use leptos::prelude::*;

use crate::components::{EditItemForm, ItemRow, ListHeader};
use crate::models::{Category, Item};

/// Header plus one row per visible item.
#[component]
pub fn ShoppingList(
    items: Memo<Vec<Item>>,
    edit_target: Memo<Option<u64>>,
    on_toggle: Callback<u64>,
    on_delete: Callback<u64>,
    on_save: Callback<(u64, String, u32, Category)>,
    on_edit_target: Callback<Option<u64>>,
) -> impl IntoView {
    view! {
        <div class="list">
            <ListHeader />
            <For
                each=move || items.get()
                key=|item| {
                    // Key on every mutable field so edits re-render the row
                    (
                        item.id,
                        item.name.clone(),
                        item.quantity,
                        item.category,
                        item.purchased,
                    )
                }
                children=move |item| {
                    let id = item.id;
                    let row_item = item.clone();
                    let edit_item = item;
                    view! {
                        {move || {
                            if edit_target.get() == Some(id) {
                                view! {
                                    <EditItemForm
                                        item=edit_item.clone()
                                        on_save=on_save
                                        on_cancel=Callback::new(move |()| {
                                            on_edit_target.run(None)
                                        })
                                    />
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ItemRow
                                        item=row_item.clone()
                                        on_toggle=on_toggle
                                        on_edit=Callback::new(move |id| {
                                            on_edit_target.run(Some(id))
                                        })
                                        on_delete=on_delete
                                    />
                                }
                                    .into_any()
                            }
                        }}
                    }
                }
            />
        </div>
    }
}
