//! Category Filter Component
//!
//! Restricts the visible list to one category, or shows everything again.

use leptos::prelude::*;

use crate::models::Category;

/// Filter bar with its own pending selection. Submitting without a
/// selection changes nothing; the reset button always clears the filter.
#[component]
pub fn CategoryFilter(
    #[prop(into)] on_filter: Callback<Category>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let (selected, set_selected) = signal::<Option<Category>>(None);

    let handle_filter = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(category) = selected.get() {
            on_filter.run(category);
        }
    };

    view! {
        <div class="filter-by-category">
            <form class="filter-by-category" on:submit=handle_filter>
                <select
                    class="category-dropdown"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if value.is_empty() {
                            set_selected.set(None);
                        } else {
                            set_selected.set(Some(Category::from_label(&value)));
                        }
                    }
                >
                    <option value="" selected=move || selected.get().is_none()>
                        ""
                    </option>
                    {Category::ALL
                        .iter()
                        .map(|category| {
                            let category = *category;
                            let label = category.label();
                            view! {
                                <option value=label selected=move || selected.get() == Some(category)>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button type="submit" class="filter-button">
                    "Szűrés"
                </button>
            </form>
            <button class="filter-button" on:click=move |_| on_reset.run(())>
                "Összes"
            </button>
        </div>
    }
}
