//! To-do List State
//!
//! The ordered collection behind the to-do page and its three operations.

use crate::models::{TodoId, TodoItem};

/// Ordered to-do collection; insertion order is display order
#[derive(Debug, Clone, PartialEq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    /// Next id to hand out. Never decreases, so ids are not reused after removal.
    next_id: TodoId,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    #[cfg(test)]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append a new item. Blank text (after trimming) is ignored.
    ///
    /// Returns the id of the created item, `None` when nothing was added.
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(TodoItem::new(id, text.to_string()));
        Some(id)
    }

    /// Flip `completed` of the matching item. Returns false on an unknown id.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching item, keeping the order of the rest.
    /// Returns false on an unknown id.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &TodoList) -> Vec<&str> {
        list.items().iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_untrimmed_text() {
        let mut list = TodoList::new();
        list.add("first");
        let id = list.add("  padded  ").expect("added");

        assert_eq!(list.len(), 2);
        let last = list.items().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "  padded  ");
        assert!(!last.completed);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = TodoList::new();
        list.add("keep");
        let before = list.clone();

        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add("\t\n"), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let mut list = TodoList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        assert_ne!(a, b);

        list.remove(b);
        let c = list.add("c").unwrap();
        assert_ne!(c, b, "ids are not reused after removal");
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = TodoList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        list.toggle(b);

        assert!(list.toggle(a));
        assert!(list.get(a).unwrap().completed);
        assert!(list.toggle(a));
        assert!(!list.get(a).unwrap().completed);
        assert!(list.get(b).unwrap().completed);
        assert_eq!(texts(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        let i = list.add("i").unwrap();
        list.add("c");

        assert!(list.remove(i));
        assert_eq!(texts(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut list = TodoList::new();
        list.add("a");
        let before = list.clone();

        assert!(!list.toggle(999));
        assert!(!list.remove(999));
        assert_eq!(list, before);
    }

    #[test]
    fn test_milk_and_dog_scenario() {
        let mut list = TodoList::new();
        let milk = list.add("Buy milk").unwrap();
        let dog = list.add("Walk dog").unwrap();
        list.toggle(milk);
        list.remove(dog);

        assert_eq!(list.len(), 1);
        let only = &list.items()[0];
        assert_eq!(only.text, "Buy milk");
        assert!(only.completed);
        assert_eq!(list.completed_count(), 1);
    }
}
