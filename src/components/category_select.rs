//! Category Select Component
//!
//! Single-choice dropdown over the fixed category set. Shared by the
//! add-item form and the inline item editor.

use leptos::prelude::*;

use crate::models::Category;

/// Dropdown over `Category::ALL`; reports the chosen category upward.
#[component]
pub fn CategorySelect(
    #[prop(into)] selected: Signal<Category>,
    #[prop(into)] on_change: Callback<Category>,
) -> impl IntoView {
    view! {
        <select
            class="category-dropdown"
            prop:value=move || selected.get().label()
            on:change=move |ev| on_change.run(Category::from_label(&event_target_value(&ev)))
        >
            {Category::ALL
                .iter()
                .map(|category| {
                    let category = *category;
                    let label = category.label();
                    view! {
                        <option value=label selected=move || selected.get() == category>
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
