use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Insertion-ordered storage for bodies.
///
/// Handles are issued in increasing order and removal keeps the relative order of
/// the remaining items, so the backing vector stays sorted by handle and lookups
/// can binary search.
#[derive(Debug, Clone)]
pub struct BodyStorage<T> {
    items: Vec<(BodyHandle, T)>,
    next_id: u32,
}

impl<T> BodyStorage<T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1, // Start at 1, so 0 can represent invalid handle
        }
    }

    /// Adds an item and returns its handle
    pub fn add(&mut self, item: T) -> BodyHandle {
        let handle = BodyHandle(self.next_id);
        self.next_id += 1;
        self.items.push((handle, item));
        handle
    }

    fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.items.binary_search_by_key(&handle, |(h, _)| *h).ok()
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&T> {
        self.index_of(handle).map(|index| &self.items[index].1)
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        self.index_of(handle).map(move |index| &mut self.items[index].1)
    }

    /// Removes an item, keeping the order of the others
    pub fn remove(&mut self, handle: BodyHandle) -> Option<T> {
        self.index_of(handle).map(|index| self.items.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all items. Handles already issued are never reused.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> + '_ {
        self.items.iter().map(|(h, item)| (*h, item))
    }

    /// Iterates mutably in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut T)> + '_ {
        self.items.iter_mut().map(|(h, item)| (*h, item))
    }

    /// Gets an item by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to an item by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Removes an item by its handle, returning an error if not found
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<T> {
        self.remove(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }
}

impl<T> Default for BodyStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_keeps_order_and_lookup() {
        let mut storage = BodyStorage::new();
        let a = storage.add("a");
        let b = storage.add("b");
        let c = storage.add("c");

        assert_eq!(storage.remove(b), Some("b"));
        assert_eq!(storage.remove(b), None);

        let order: Vec<_> = storage.iter().map(|(_, item)| *item).collect();
        assert_eq!(order, vec!["a", "c"]);
        assert_eq!(storage.get(a), Some(&"a"));
        assert_eq!(storage.get(c), Some(&"c"));
        assert!(matches!(storage.get_body(b), Err(PhysicsError::ResourceNotFound(_))));
    }

    #[test]
    fn handles_are_not_reused_after_clear() {
        let mut storage = BodyStorage::new();
        let first = storage.add(1);
        storage.clear();
        let second = storage.add(2);
        assert_ne!(first, second);
        assert!(storage.get(first).is_none());
    }
}
