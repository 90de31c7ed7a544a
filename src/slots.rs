use std::collections::HashMap;

use crate::bind;
use crate::page::PageIdentity;

/// One addressable location in the rendered page. Text, attributes,
/// classes, and child elements cover everything the binder writes.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub text: String,
    pub attrs: HashMap<String, String>,
    pub classes: Vec<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn with_text(text: &str) -> Element {
        Element {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

/// The set of slots a page exposes. Every write targets a slot id and is a
/// silent no-op when the slot was never registered — missing markup must
/// never crash a render.
#[derive(Debug, Default)]
pub struct SlotDoc {
    slots: HashMap<String, Element>,
}

impl SlotDoc {
    pub fn new() -> SlotDoc {
        SlotDoc::default()
    }

    /// Build the slot set for a page identity: shared chrome plus the
    /// page's own slots, taken from the binding tables.
    pub fn for_page(identity: PageIdentity) -> SlotDoc {
        let mut doc = SlotDoc::new();
        for id in bind::slot_ids(identity) {
            doc.register(id);
        }
        doc
    }

    pub fn register(&mut self, id: &str) {
        self.slots.entry(id.to_string()).or_default();
    }

    pub fn has_slot(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.slots.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.slots.get_mut(id)
    }

    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(el) = self.slots.get_mut(id) {
            el.text = text.to_string();
        }
    }

    pub fn set_attr(&mut self, id: &str, key: &str, value: &str) {
        if let Some(el) = self.slots.get_mut(id) {
            el.attrs.insert(key.to_string(), value.to_string());
        }
    }

    pub fn clear_children(&mut self, id: &str) {
        if let Some(el) = self.slots.get_mut(id) {
            el.children.clear();
        }
    }

    pub fn append_child(&mut self, id: &str, child: Element) {
        if let Some(el) = self.slots.get_mut(id) {
            el.children.push(child);
        }
    }

    pub fn toggle_class(&mut self, id: &str, class: &str) {
        if let Some(el) = self.slots.get_mut(id) {
            if el.has_class(class) {
                el.remove_class(class);
            } else {
                el.add_class(class);
            }
        }
    }

    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.slots.get(id).map(|el| el.text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Element)> {
        self.slots.iter()
    }

    pub fn attr_of(&self, id: &str, key: &str) -> Option<&str> {
        self.slots
            .get(id)
            .and_then(|el| el.attrs.get(key))
            .map(|s| s.as_str())
    }
}
