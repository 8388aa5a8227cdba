use crate::error::{fatal, ArenagradError};
use std::ops::{Index, IndexMut};

/// Bump allocator handing out slots in one contiguous, growable buffer.
///
/// Items are never freed one by one. [`Arena::reset`] logically frees every
/// slot handed out since the previous reset while keeping the backing storage
/// for reuse; [`Arena::release`] drops the storage for good. Each reset bumps
/// a generation counter so that handles minted before the reset can be told
/// apart from fresh ones.
#[derive(Debug)]
pub struct Arena<T> {
    items: Vec<T>,
    generation: u32,
    released: bool,
}

impl<T> Arena<T> {
    /// Initial capacity used by [`Arena::new`].
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Creates an arena with [`Arena::DEFAULT_CAPACITY`] slots pre-allocated.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an arena with room for `capacity` items before the first growth.
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            items: Vec::with_capacity(capacity),
            generation: 0,
            released: false,
        }
    }

    /// Moves `item` into the next free slot and returns the slot number.
    ///
    /// When the buffer is full its capacity is doubled. Allocating from a
    /// released arena is a fatal precondition violation.
    pub fn alloc(&mut self, item: T) -> usize {
        if self.released {
            fatal(ArenagradError::ArenaReleased);
        }
        if self.items.len() == self.items.capacity() {
            let additional = self.items.capacity().max(Self::DEFAULT_CAPACITY);
            self.items.reserve_exact(additional);
            log::debug!(
                "Arena: grew to {} slots (generation {})",
                self.items.capacity(),
                self.generation
            );
        }
        let slot = self.items.len();
        self.items.push(item);
        slot
    }

    pub fn get(&self, slot: usize) -> Option<&T> {
        self.items.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.items.get_mut(slot)
    }

    /// Iterates over live items in allocation order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items the backing storage can hold without growing.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Number of resets (and releases) this arena has gone through.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Frees every item logically. Capacity is retained.
    pub fn reset(&mut self) {
        if self.released {
            fatal(ArenagradError::ArenaReleased);
        }
        self.items.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Frees the backing storage. The arena cannot be used afterwards.
    pub fn release(&mut self) {
        self.items = Vec::new();
        self.generation = self.generation.wrapping_add(1);
        self.released = true;
    }
}

impl<T> Index<usize> for Arena<T> {
    type Output = T;

    fn index(&self, slot: usize) -> &T {
        &self.items[slot]
    }
}

impl<T> IndexMut<usize> for Arena<T> {
    fn index_mut(&mut self, slot: usize) -> &mut T {
        &mut self.items[slot]
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "arena_test.rs"]
mod tests;
