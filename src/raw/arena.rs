use alloc::vec::Vec;

use super::handle::Handle;

/// Append-only slot storage for tree nodes.
///
/// Nodes are never removed one at a time, so there is no free list: a handle
/// stays valid until the arena is cleared.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        // The new slot's index must still fit in a `Handle`.
        assert!(
            self.slots.len() <= Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX + 1
        );
        self.slots.push(element);
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots.get(handle.to_index()).expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots.get_mut(handle.to_index()).expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Drops every slot and releases the allocation.
    pub(crate) fn clear(&mut self) {
        self.slots = Vec::new();
    }
}
