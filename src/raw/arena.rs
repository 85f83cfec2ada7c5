use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use super::handle::Handle;

/// Dense slot pool addressed by [`Handle`]s.
///
/// Freed slots are recycled, so a handle stays valid exactly as long as the value it was issued
/// for. Touching a freed handle is a corruption bug and panics.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    vacant: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    pub(crate) fn insert(&mut self, value: T) -> Handle {
        if let Some(handle) = self.vacant.pop() {
            self.slots[handle.slot()] = Some(value);
            return handle;
        }

        let Some(handle) = Handle::try_new(self.slots.len()) else {
            panic!("`Arena::insert()` - arena is full ({} slots)", Handle::MAX + 1);
        };
        self.slots.push(Some(value));
        handle
    }

    /// Vacates `handle`'s slot and returns what it held.
    pub(crate) fn remove(&mut self, handle: Handle) -> T {
        let value = self.slots[handle.slot()].take().expect("`Arena::remove()` - `handle` is vacant!");
        self.vacant.push(handle);
        value
    }

    /// Borrows two distinct slots mutably at once.
    pub(crate) fn pair_mut(&mut self, a: Handle, b: Handle) -> (&mut T, &mut T) {
        assert_ne!(a, b, "`Arena::pair_mut()` - handles must differ!");
        let (low, high, swapped) = if a.slot() < b.slot() { (a, b, false) } else { (b, a, true) };
        let (head, tail) = self.slots.split_at_mut(high.slot());
        let low = head[low.slot()].as_mut().expect("`Arena::pair_mut()` - `handle` is vacant!");
        let high = tail[0].as_mut().expect("`Arena::pair_mut()` - `handle` is vacant!");
        if swapped { (high, low) } else { (low, high) }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, handle: Handle) -> &T {
        self.slots[handle.slot()].as_ref().expect("`Arena::index()` - `handle` is vacant!")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.slot()].as_mut().expect("`Arena::index_mut()` - `handle` is vacant!")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn recycles_vacated_slots() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        assert_eq!(arena.remove(a), 'a');
        let c = arena.insert('c');
        assert_eq!(c, a);
        assert_eq!(arena[b], 'b');
        assert_eq!(arena[c], 'c');
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn pair_mut_preserves_argument_order() {
        let mut arena = Arena::with_capacity(4);
        assert!(arena.capacity() >= 4);
        let a = arena.insert(1);
        let b = arena.insert(2);
        let (x, y) = arena.pair_mut(b, a);
        assert_eq!((*x, *y), (2, 1));
        core::mem::swap(x, y);
        assert_eq!((arena[a], arena[b]), (2, 1));
    }

    #[test]
    #[should_panic(expected = "`Arena::insert()` - arena is full")]
    fn insert_past_last_slot_panics() {
        let mut arena = Arena::with_capacity(Handle::MAX + 1);
        for _ in 0..=Handle::MAX {
            arena.insert(());
        }
        assert_eq!(arena.len(), Handle::MAX + 1);
        arena.insert(());
    }

    #[test]
    #[should_panic(expected = "`Arena::index()` - `handle` is vacant!")]
    fn vacant_handle_panics() {
        let mut arena = Arena::new();
        let a = arena.insert(0u8);
        arena.remove(a);
        let _ = arena[a];
    }

    proptest! {
        #[test]
        fn arena_tracks_model(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena: Arena<u32> = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Insert(value) => model.push((arena.insert(value), value)),
                    Operation::Overwrite(which, value) if !model.is_empty() => {
                        let index = which % model.len();
                        arena[model[index].0] = value;
                        model[index].1 = value;
                    }
                    Operation::Remove(which) if !model.is_empty() => {
                        let (handle, expected) = model.swap_remove(which % model.len());
                        prop_assert_eq!(arena.remove(handle), expected);
                    }
                    Operation::Clear => {
                        arena.clear();
                        model.clear();
                    }
                    _ => {}
                }

                prop_assert_eq!(arena.len(), model.len());
                for &(handle, value) in &model {
                    prop_assert_eq!(arena[handle], value);
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Insert(u32),
        Overwrite(usize, u32),
        Remove(usize),
        Clear,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Insert),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::Overwrite(which, value)),
            8 => any::<usize>().prop_map(Operation::Remove),
            1 => Just(Operation::Clear),
        ]
    }
}
