//! Add Item Form Component
//!
//! Form for putting a new product on the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::CategorySelect;
use crate::models::{coerce_quantity, Category};

/// Validate the raw drafts. A blank name rejects the whole submission;
/// the name is otherwise kept as entered.
fn parse_drafts(name: &str, quantity: &str) -> Option<(String, u32)> {
    if name.trim().is_empty() {
        return None;
    }
    Some((name.to_string(), coerce_quantity(quantity)))
}

/// Form for creating new items. A blank name silently blocks the
/// submission; a successful one resets the fields to their defaults.
#[component]
pub fn AddItemForm(#[prop(into)] on_add: Callback<(String, u32, Category)>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::from("1"));
    let (category, set_category) = signal(Category::default());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some((entered, amount)) = parse_drafts(&name.get(), &quantity.get()) else {
            return;
        };
        on_add.run((entered, amount, category.get()));

        set_name.set(String::new());
        set_quantity.set(String::from("1"));
        set_category.set(Category::default());
    };

    view! {
        <form class="add-item-form" on:submit=handle_submit>
            <label class="form-name">"Új elem hozzáadása"</label>
            <input
                type="text"
                class="form-input"
                placeholder="Termék neve"
                required=true
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <input
                type="number"
                class="form-input"
                placeholder="Mennyiség"
                min="1"
                required=true
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <CategorySelect
                selected=category
                on_change=Callback::new(move |c| set_category.set(c))
            />
            <button type="submit" class="form-button">
                "Hozzáadás"
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_blocks_submission() {
        assert_eq!(parse_drafts("", "2"), None);
        assert_eq!(parse_drafts("   ", "2"), None);
        assert_eq!(parse_drafts("\t\n", "2"), None);
    }

    #[test]
    fn test_valid_drafts_keep_name_as_entered() {
        assert_eq!(parse_drafts(" Tej ", "2"), Some((" Tej ".to_string(), 2)));
    }

    #[test]
    fn test_bad_quantity_falls_back_to_one() {
        assert_eq!(parse_drafts("Tej", "nem szám"), Some(("Tej".to_string(), 1)));
        assert_eq!(parse_drafts("Tej", "0"), Some(("Tej".to_string(), 1)));
    }
}
