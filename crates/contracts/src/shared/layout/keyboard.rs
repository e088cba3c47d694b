//! Keyboard chords and scoped listener bookkeeping

use std::collections::HashMap;

/// A key press with its modifier state, decoupled from DOM events
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyChord {
    /// `KeyboardEvent.key` value, e.g. `"z"`, `"ArrowDown"`, `"+"`
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Cmd on macOS, Ctrl elsewhere
    pub fn primary(&self) -> bool {
        self.ctrl || self.meta
    }

    pub fn has_modifier(&self) -> bool {
        self.ctrl || self.meta || self.shift || self.alt
    }

    /// Key lowercased for letter comparisons (`"Z"` with shift is `"z"`)
    pub fn key_lower(&self) -> String {
        self.key.to_lowercase()
    }

    /// Digit 1-9 pressed together with the primary modifier
    pub fn primary_digit(&self) -> Option<usize> {
        if !self.primary() || self.alt {
            return None;
        }
        match self.key.parse::<usize>() {
            Ok(n @ 1..=9) => Some(n),
            _ => None,
        }
    }
}

/// Tracks the active listener handle per component instance.
///
/// Acquiring with an id that already holds a handle returns the previous
/// handle so the caller can release it; a component never ends up with two
/// live listeners.
#[derive(Debug)]
pub struct ListenerRegistry<H> {
    handles: HashMap<String, H>,
}

impl<H> Default for ListenerRegistry<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> ListenerRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` for `instance_id`, returning the replaced handle
    pub fn acquire(&mut self, instance_id: &str, handle: H) -> Option<H> {
        self.handles.insert(instance_id.to_string(), handle)
    }

    /// Remove and return the handle for `instance_id`
    pub fn release(&mut self, instance_id: &str) -> Option<H> {
        self.handles.remove(instance_id)
    }

    pub fn is_active(&self, instance_id: &str) -> bool {
        self.handles.contains_key(instance_id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Unique id for one mounted component instance
pub fn instance_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_digit_requires_modifier() {
        assert_eq!(KeyChord::new("3").ctrl().primary_digit(), Some(3));
        assert_eq!(KeyChord::new("3").meta().primary_digit(), Some(3));
        assert_eq!(KeyChord::new("3").primary_digit(), None);
        assert_eq!(KeyChord::new("0").ctrl().primary_digit(), None);
        assert_eq!(KeyChord::new("3").ctrl().alt().primary_digit(), None);
    }

    #[test]
    fn acquire_twice_hands_back_previous() {
        let mut registry = ListenerRegistry::new();
        assert_eq!(registry.acquire("canvas-1", 10), None);
        assert_eq!(registry.acquire("canvas-1", 11), Some(10));
        assert_eq!(registry.len(), 1);
        assert!(registry.is_active("canvas-1"));
    }

    #[test]
    fn release_is_per_instance() {
        let mut registry = ListenerRegistry::new();
        registry.acquire("detail-a", "a");
        registry.acquire("detail-b", "b");
        assert_eq!(registry.release("detail-a"), Some("a"));
        assert_eq!(registry.release("detail-a"), None);
        assert!(registry.is_active("detail-b"));
    }

    #[test]
    fn instance_ids_are_unique() {
        assert_ne!(instance_id("split"), instance_id("split"));
        assert!(instance_id("split").starts_with("split-"));
    }
}
