//! Insertion-ordered collection of keyed items.
//!
//! The collection underpinning a form definition: order is semantically
//! meaningful (it dictates rendering order), items are addressable by a
//! string key, and repositioning goes through [`Position`] markers. No
//! removal operation is exposed; once declared, an item persists for the
//! collection's lifetime.
//!
//! Keys are unique by caller contract only. The collection does not
//! enforce uniqueness; lookups return the first match in order.

use serde::{Deserialize, Serialize};

use adminkit_core::{AdminError, AdminResult};

/// An item addressable by a stable string key.
pub trait Keyed {
    /// Returns the item's key.
    fn key(&self) -> &str;
}

/// Where to place an item within the collection.
///
/// `At` is the target index after the insert/move, clamped to the
/// collection length. `Before`/`After` are symbolic anchors resolved
/// against another item's key at move time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "position", content = "target", rename_all = "lowercase")]
pub enum Position {
    /// Place at this index.
    At(usize),
    /// Place immediately before the item with this key.
    Before(String),
    /// Place immediately after the item with this key.
    After(String),
}

impl Position {
    /// Position at a numeric index.
    pub const fn at(index: usize) -> Self {
        Self::At(index)
    }

    /// Position immediately before another item.
    pub fn before(key: impl Into<String>) -> Self {
        Self::Before(key.into())
    }

    /// Position immediately after another item.
    pub fn after(key: impl Into<String>) -> Self {
        Self::After(key.into())
    }
}

impl From<usize> for Position {
    fn from(index: usize) -> Self {
        Self::At(index)
    }
}

/// An insertion-ordered sequence of keyed items.
///
/// Indices are stable only until the next mutation; callers reposition
/// items through keys and [`Position`] markers rather than holding on to
/// indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> OrderedCollection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item at the end.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Inserts an item at `index`, clamped to the current length.
    pub fn insert(&mut self, item: T, index: usize) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Returns the index of the first item with the given key.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    /// Returns the first item with the given key.
    pub fn find(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Returns the first item with the given key, mutably.
    ///
    /// The reference aliases the stored entry directly; mutating it
    /// mutates the collection's copy.
    pub fn find_mut(&mut self, key: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    /// Moves the item with the given key to `position`.
    ///
    /// For [`Position::At`], the index is the target index after the move.
    /// Anchor positions resolve against the anchor's index once the moved
    /// item has been taken out. A missing item or anchor is
    /// [`AdminError::NotFound`].
    pub fn move_to(&mut self, key: &str, position: &Position) -> AdminResult<()> {
        let from = self
            .index_of(key)
            .ok_or_else(|| AdminError::NotFound(key.to_string()))?;
        let item = self.items.remove(from);

        let to = match position {
            Position::At(index) => (*index).min(self.items.len()),
            Position::Before(anchor) => match self.index_of(anchor) {
                Some(index) => index,
                None => {
                    self.items.insert(from, item);
                    return Err(AdminError::NotFound(anchor.clone()));
                }
            },
            Position::After(anchor) => match self.index_of(anchor) {
                Some(index) => index + 1,
                None => {
                    self.items.insert(from, item);
                    return Err(AdminError::NotFound(anchor.clone()));
                }
            },
        };

        self.items.insert(to, item);
        Ok(())
    }

    /// Returns the items matching a predicate, in order.
    pub fn filter<P>(&self, predicate: P) -> Vec<&T>
    where
        P: FnMut(&&T) -> bool,
    {
        self.items.iter().filter(predicate).collect()
    }

    /// Iterates the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T: Keyed> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Named(&'static str);

    impl Keyed for Named {
        fn key(&self) -> &str {
            self.0
        }
    }

    fn keys(collection: &OrderedCollection<Named>) -> Vec<&str> {
        collection.iter().map(Keyed::key).collect()
    }

    fn abc() -> OrderedCollection<Named> {
        let mut collection = OrderedCollection::new();
        collection.push(Named("a"));
        collection.push(Named("b"));
        collection.push(Named("c"));
        collection
    }

    #[test]
    fn test_push_preserves_order() {
        let collection = abc();
        assert_eq!(keys(&collection), ["a", "b", "c"]);
        assert_eq!(collection.len(), 3);
        assert!(!collection.is_empty());
    }

    #[test]
    fn test_insert_at_index() {
        let mut collection = abc();
        collection.insert(Named("x"), 1);
        assert_eq!(keys(&collection), ["a", "x", "b", "c"]);
    }

    #[test]
    fn test_insert_clamps_out_of_range() {
        let mut collection = abc();
        collection.insert(Named("x"), usize::MAX);
        assert_eq!(keys(&collection), ["a", "b", "c", "x"]);
    }

    #[test]
    fn test_find_first_match() {
        let mut collection = abc();
        collection.push(Named("b"));
        assert_eq!(collection.index_of("b"), Some(1));
        assert!(collection.find("b").is_some());
        assert!(collection.find("z").is_none());
    }

    #[test]
    fn test_move_to_index() {
        let mut collection = abc();
        collection.move_to("c", &Position::at(0)).unwrap();
        assert_eq!(keys(&collection), ["c", "a", "b"]);
    }

    #[test]
    fn test_move_to_index_clamped() {
        let mut collection = abc();
        collection.move_to("a", &Position::at(99)).unwrap();
        assert_eq!(keys(&collection), ["b", "c", "a"]);
    }

    #[test]
    fn test_move_before_anchor() {
        let mut collection = abc();
        collection.move_to("c", &Position::before("b")).unwrap();
        assert_eq!(keys(&collection), ["a", "c", "b"]);
    }

    #[test]
    fn test_move_after_anchor() {
        let mut collection = abc();
        collection.move_to("a", &Position::after("b")).unwrap();
        assert_eq!(keys(&collection), ["b", "a", "c"]);
    }

    #[test]
    fn test_move_missing_item() {
        let mut collection = abc();
        assert_eq!(
            collection.move_to("z", &Position::at(0)),
            Err(AdminError::NotFound("z".to_string()))
        );
    }

    #[test]
    fn test_move_missing_anchor_restores_order() {
        let mut collection = abc();
        assert_eq!(
            collection.move_to("a", &Position::before("z")),
            Err(AdminError::NotFound("z".to_string()))
        );
        // Failed move leaves the sequence untouched.
        assert_eq!(keys(&collection), ["a", "b", "c"]);
    }

    #[test]
    fn test_filter() {
        let collection = abc();
        let hits = collection.filter(|item| item.key() != "b");
        assert_eq!(hits.len(), 2);
    }
}
