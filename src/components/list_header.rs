//! List Header Component

use leptos::prelude::*;

/// Column labels above the item rows.
#[component]
pub fn ListHeader() -> impl IntoView {
    view! {
        <div class="list-header">
            <span class="list-header-name">"Név"</span>
            <span class="list-header-quantity">"Mennyiség"</span>
            <span class="list-header-category">"Kategória"</span>
            <span class="list-header-operation">"Műveletek"</span>
        </div>
    }
}
