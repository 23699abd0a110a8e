//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod category_filter;
mod category_select;
mod edit_item_form;
mod item_row;
mod list;
mod list_header;

pub use add_item_form::AddItemForm;
pub use category_filter::CategoryFilter;
pub use category_select::CategorySelect;
pub use edit_item_form::EditItemForm;
pub use item_row::ItemRow;
pub use list::ShoppingList;
pub use list_header::ListHeader;
