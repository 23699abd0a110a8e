//! Local Persistence
//!
//! Mirrors the item collection into browser localStorage under a single key.
//! Loading never fails: a missing key, unreachable storage or malformed
//! value all degrade to an empty list.

use crate::models::Item;

/// localStorage key holding the serialized item array.
pub const STORAGE_KEY: &str = "LOAD_ITEMS";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Read the persisted collection. Absent or unreadable data yields an
/// empty list.
pub fn load_items() -> Vec<Item> {
    let Some(storage) = local_storage() else {
        return Vec::new();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => decode_items(&raw),
        _ => Vec::new(),
    }
}

/// Write the post-mutation collection. Failures are contained: the app
/// keeps running on its in-memory state and the error goes to the console.
pub fn save_items(items: &[Item]) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(items) {
        Ok(encoded) => {
            if storage.set_item(STORAGE_KEY, &encoded).is_err() {
                web_sys::console::warn_1(&"[STORAGE] Failed to write item list".into());
            }
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("[STORAGE] Failed to serialize items: {err}").into());
        }
    }
}

/// Parse a stored value, treating anything malformed as an empty list.
fn decode_items(raw: &str) -> Vec<Item> {
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_round_trip() {
        let items = vec![
            Item::new(2, "Szappan".to_string(), 1, Category::Tisztitoszer),
            Item {
                id: 1,
                name: "Tej".to_string(),
                quantity: 2,
                category: Category::Elelmiszer,
                purchased: true,
            },
        ];

        let encoded = serde_json::to_string(&items).unwrap();
        assert_eq!(decode_items(&encoded), items);
    }

    #[test]
    fn test_decodes_timestamp_id_payload() {
        let stored = r#"[{"id":1734567890123,"name":"Tej","quantity":2,"category":"Élelmiszer","purchased":false}]"#;
        let items = decode_items(stored);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1734567890123);
        assert_eq!(items[0].name, "Tej");
        assert_eq!(items[0].category, Category::Elelmiszer);
    }

    #[test]
    fn test_unknown_category_decodes_to_first() {
        let stored = r#"[{"id":1,"name":"Valami","quantity":1,"category":"Vegyes","purchased":false}]"#;
        let items = decode_items(stored);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, Category::Elelmiszer);
    }

    #[test]
    fn test_malformed_data_degrades_to_empty() {
        assert!(decode_items("").is_empty());
        assert!(decode_items("null").is_empty());
        assert!(decode_items("not json at all").is_empty());
        assert!(decode_items(r#"{"id":1}"#).is_empty());
        assert!(decode_items(r#"[{"id":"nope"}]"#).is_empty());
    }
}
