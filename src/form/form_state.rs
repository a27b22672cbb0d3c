//! Form-level state: visible fields, hidden id slots, and the change queue

use std::collections::VecDeque;

use serde_json::{Map, Value, json};

use crate::lookup::SuggestionId;

use super::field::Field;

/// Companion value store for a picker field. Holds the id of the confirmed
/// suggestion; editing the visible text clears it again.
#[derive(Debug)]
pub struct HiddenSlot {
    pub name: String,
    value: Option<SuggestionId>,
}

impl HiddenSlot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn value(&self) -> Option<&SuggestionId> {
        self.value.as_ref()
    }

    pub fn set(&mut self, id: SuggestionId) {
        self.value = Some(id);
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// One observed mutation, drained by the host after each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    pub target: String,
    pub value: String,
}

pub struct FormState {
    pub fields: Vec<Field>,
    pub hidden: Vec<HiddenSlot>,
    changes: VecDeque<ChangeEvent>,
}

impl FormState {
    pub fn new(fields: Vec<Field>, hidden: Vec<HiddenSlot>) -> Self {
        Self {
            fields,
            hidden,
            changes: VecDeque::new(),
        }
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    pub fn hidden_index(&self, name: &str) -> Option<usize> {
        self.hidden.iter().position(|slot| slot.name == name)
    }

    /// Queue a change notification for `target`
    pub fn notify_change(&mut self, target: &str, value: &str) {
        self.changes.push_back(ChangeEvent {
            target: target.to_string(),
            value: value.to_string(),
        });
    }

    pub fn drain_changes(&mut self) -> Vec<ChangeEvent> {
        self.changes.drain(..).collect()
    }

    /// Serialize every visible field plus every confirmed id. Slots without
    /// a confirmed suggestion are left out of `selected` entirely.
    pub fn submit_payload(&self) -> Value {
        let mut fields = Map::new();
        for field in &self.fields {
            fields.insert(field.name.clone(), Value::from(field.text()));
        }

        let mut selected = Map::new();
        for slot in &self.hidden {
            if let Some(id) = slot.value() {
                selected.insert(slot.name.clone(), Value::from(id));
            }
        }

        json!({
            "fields": fields,
            "selected": selected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormState {
        FormState::new(
            vec![Field::new("item", "Item"), Field::new("notes", "Notes")],
            vec![HiddenSlot::new("item_id")],
        )
    }

    // ========== Lookup by Name ==========

    #[test]
    fn test_field_index_finds_fields_by_name() {
        let form = form();
        assert_eq!(form.field_index("item"), Some(0));
        assert_eq!(form.field_index("notes"), Some(1));
        assert_eq!(form.field_index("missing"), None);
    }

    #[test]
    fn test_hidden_index_finds_slots_by_name() {
        let form = form();
        assert_eq!(form.hidden_index("item_id"), Some(0));
        assert_eq!(form.hidden_index("missing"), None);
    }

    // ========== Hidden Slots ==========

    #[test]
    fn test_hidden_slot_starts_empty() {
        let slot = HiddenSlot::new("item_id");
        assert!(slot.is_empty());
        assert_eq!(slot.value(), None);
    }

    #[test]
    fn test_hidden_slot_holds_and_clears_an_id() {
        let mut slot = HiddenSlot::new("item_id");

        slot.set(SuggestionId::from(7));
        assert!(!slot.is_empty());
        assert_eq!(slot.value(), Some(&SuggestionId::from(7)));

        slot.clear();
        assert!(slot.is_empty());
    }

    // ========== Change Queue ==========

    #[test]
    fn test_changes_drain_in_arrival_order() {
        let mut form = form();

        form.notify_change("item", "Blue Thread");
        form.notify_change("item_id", "2");

        let changes = form.drain_changes();
        assert_eq!(
            changes,
            vec![
                ChangeEvent {
                    target: "item".to_string(),
                    value: "Blue Thread".to_string(),
                },
                ChangeEvent {
                    target: "item_id".to_string(),
                    value: "2".to_string(),
                },
            ]
        );

        assert!(form.drain_changes().is_empty());
    }

    // ========== Submit Payload ==========

    #[test]
    fn test_payload_lists_every_field_text() {
        let mut form = form();
        form.fields[0].set_text("Blue Thread");

        let payload = form.submit_payload();

        assert_eq!(payload["fields"]["item"], "Blue Thread");
        assert_eq!(payload["fields"]["notes"], "");
    }

    #[test]
    fn test_payload_skips_unconfirmed_slots() {
        let form = form();

        let payload = form.submit_payload();

        assert_eq!(payload["selected"].as_object().unwrap().len(), 0);
    }

    #[test]
    fn test_payload_keeps_id_typing() {
        let mut form = form();
        form.hidden[0].set(SuggestionId::from(2));

        let numeric = form.submit_payload();
        assert_eq!(numeric["selected"]["item_id"], 2);

        form.hidden[0].set(SuggestionId::from("ab-102"));
        let textual = form.submit_payload();
        assert_eq!(textual["selected"]["item_id"], "ab-102");
    }
}
