// crates/engine_collections/src/list.rs
use std::fmt;
use std::marker::PhantomData;

/// Decides whether an `OrderedList` may hold equal items more than once.
pub trait DuplicatePolicy {
    const ALLOW_DUPLICATES: bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllowDuplicates;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectDuplicates;

impl DuplicatePolicy for AllowDuplicates {
    const ALLOW_DUPLICATES: bool = true;
}

impl DuplicatePolicy for RejectDuplicates {
    const ALLOW_DUPLICATES: bool = false;
}

/// Insertion-ordered storage. Items are kept in a tightly packed `Vec`.
pub struct OrderedList<T, P = AllowDuplicates> {
    items: Vec<T>,
    _policy: PhantomData<P>,
}

/// Keeps every pushed item, duplicates included.
pub type List<T> = OrderedList<T, AllowDuplicates>;

/// Set semantics with insertion order preserved; pushing an equal item is a no-op.
pub type UniqueList<T> = OrderedList<T, RejectDuplicates>;

impl<T, P> OrderedList<T, P> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _policy: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }
}

impl<T> OrderedList<T, AllowDuplicates> {
    /// Appends unconditionally and returns the new item's index.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }
}

impl<T: PartialEq> OrderedList<T, RejectDuplicates> {
    /// Appends `item` unless an equal item is already present.
    /// Returns `true` if the list changed.
    pub fn push(&mut self, item: T) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }
}

impl<T: PartialEq, P: DuplicatePolicy> OrderedList<T, P> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }

    /// Removes the first item equal to `item`, keeping the order of the rest.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.position(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn allows_duplicates(&self) -> bool {
        P::ALLOW_DUPLICATES
    }
}

impl<T, P> Default for OrderedList<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P> Clone for OrderedList<T, P> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            _policy: PhantomData,
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for OrderedList<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq, P> PartialEq for OrderedList<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a, T, P> IntoIterator for &'a OrderedList<T, P> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            _policy: PhantomData,
        }
    }
}

impl<T: PartialEq> FromIterator<T> for UniqueList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}
