//! Mapping list items to selectable options.
//!
//! The display name is resolved by an ordered list of extraction
//! strategies, each total and side-effect-free:
//!
//! 1. the configured name field on the item itself,
//! 2. the nested `user.name` field (reservation-style rows),
//! 3. a synthesized `Item {id}` label.
//!
//! Items without a usable id are skipped entirely.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of a selectable option. The API serves numeric ids, but the
/// mapper accepts string ids so the control works against foreign
/// endpoints too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionId {
    Int(i64),
    Str(String),
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionId::Int(id) => write!(f, "{id}"),
            OptionId::Str(id) => write!(f, "{id}"),
        }
    }
}

/// One selectable search result: a display/selection pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub id: OptionId,
    pub name: String,
}

/// Extract the option id from the configured key.
///
/// Accepts integers and strings; anything else (missing key, null, float,
/// object) yields `None`.
fn extract_id(item: &Value, id_key: &str) -> Option<OptionId> {
    match item.get(id_key)? {
        Value::Number(n) => n.as_i64().map(OptionId::Int),
        Value::String(s) => Some(OptionId::Str(s.clone())),
        _ => None,
    }
}

/// Strategy 1: the configured name field on the item itself.
fn direct_name(item: &Value, name_key: &str) -> Option<String> {
    item.get(name_key)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Strategy 2: the nested `user.name` field.
fn nested_user_name(item: &Value) -> Option<String> {
    item.get("user")
        .and_then(|user| user.get("name"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Strategy 3: a synthesized label from the id.
fn synthesized_name(id: &OptionId) -> String {
    format!("Item {id}")
}

/// Map one list item to an option, or `None` if it has no usable id.
pub fn map_item(item: &Value, id_key: &str, name_key: &str) -> Option<SelectOption> {
    let id = extract_id(item, id_key)?;
    let name = direct_name(item, name_key)
        .or_else(|| nested_user_name(item))
        .unwrap_or_else(|| synthesized_name(&id));
    Some(SelectOption { id, name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn direct_name_wins_over_fallbacks() {
        let item = json!({"id": 3, "name": "Camry", "user": {"name": "Sara"}});
        let option = map_item(&item, "id", "name").unwrap();
        assert_eq!(option.id, OptionId::Int(3));
        assert_eq!(option.name, "Camry");
    }

    #[test]
    fn nested_user_name_used_when_direct_name_absent() {
        let item = json!({"id": 5, "user": {"name": "Sara"}});
        let option = map_item(&item, "id", "name").unwrap();
        assert_eq!(option.name, "Sara");
    }

    #[test]
    fn synthesized_label_when_no_name_anywhere() {
        let item = json!({"id": 7});
        let option = map_item(&item, "id", "name").unwrap();
        assert_eq!(option.name, "Item 7");
    }

    #[test]
    fn configured_keys_are_respected() {
        let item = json!({"car_id": "CX-9", "title": "Mazda CX-9"});
        let option = map_item(&item, "car_id", "title").unwrap();
        assert_eq!(option.id, OptionId::Str("CX-9".into()));
        assert_eq!(option.name, "Mazda CX-9");
    }

    #[test]
    fn item_without_usable_id_is_skipped() {
        assert!(map_item(&json!({"name": "orphan"}), "id", "name").is_none());
        assert!(map_item(&json!({"id": null, "name": "n"}), "id", "name").is_none());
        assert!(map_item(&json!({"id": {"nested": 1}}), "id", "name").is_none());
    }

    #[test]
    fn non_string_name_falls_through_to_next_strategy() {
        // A numeric "name" field is not a display name; fall back.
        let item = json!({"id": 9, "name": 42});
        let option = map_item(&item, "id", "name").unwrap();
        assert_eq!(option.name, "Item 9");
    }
}
