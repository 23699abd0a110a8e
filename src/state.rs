//! Application State
//!
//! The authoritative item collection plus the active filter and edit target.
//! All mutations go through the named operations here; rendering derives its
//! view from `visible_items`. Pure and synchronous, no storage access.

use crate::models::{Category, Item};

/// Owned application state. The App component holds exactly one of these
/// inside a signal and routes every mutation through it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    items: Vec<Item>,
    filter_category: Option<Category>,
    edit_target_id: Option<u64>,
    /// Next id to mint. Ids are a monotonic counter rather than a timestamp,
    /// so two additions in the same clock tick cannot collide.
    next_id: u64,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Install a loaded collection and reseed the id counter above every
    /// persisted id.
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.next_id = items.iter().map(|item| item.id + 1).max().unwrap_or(1);
        self.items = items;
    }

    /// The full, unfiltered collection (insertion order, newest first).
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn filter_category(&self) -> Option<Category> {
        self.filter_category
    }

    pub fn edit_target_id(&self) -> Option<u64> {
        self.edit_target_id
    }

    /// Prepend a new, unpurchased item. The caller has already rejected
    /// blank names at the form boundary.
    pub fn add_item(&mut self, name: String, quantity: u32, category: Category) {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(0, Item::new(id, name, quantity, category));
    }

    /// Flip the purchased flag of the matching item in place. Unknown ids
    /// are a no-op.
    pub fn toggle_purchased(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.purchased = !item.purchased;
        }
    }

    /// Remove the matching item. Unknown ids are a no-op.
    pub fn delete_item(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    /// Update name, quantity and category of the matching item, keeping its
    /// id, purchased flag and position. Always leaves edit mode, whether or
    /// not the id matched.
    pub fn edit_item(&mut self, id: u64, name: String, quantity: u32, category: Category) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.name = name;
            item.quantity = quantity;
            item.category = category;
        }
        self.edit_target_id = None;
    }

    pub fn set_filter(&mut self, category: Category) {
        self.filter_category = Some(category);
    }

    pub fn reset_filter(&mut self) {
        self.filter_category = None;
    }

    /// Mark which single item is open for inline editing. Setting a new
    /// target implicitly ends editing of any previous one.
    pub fn set_edit_target(&mut self, id: Option<u64>) {
        self.edit_target_id = id;
    }

    /// The displayed sequence: all items, or only those matching the active
    /// filter, relative order preserved.
    pub fn visible_items(&self) -> Vec<Item> {
        match self.filter_category {
            Some(category) => self
                .items
                .iter()
                .filter(|item| item.category == category)
                .cloned()
                .collect(),
            None => self.items.clone(),
        }
    }
}
