use crate::error::Result;
use crate::{NodeList, Vec};

/// Common trait for indexable, searchable, appendable sequences with
/// read-only and fixed-size modes.
///
/// Mutations forbidden by a mode are dropped silently; only bad indices fail.
pub trait OrderedSequence<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn is_read_only(&self) -> bool;
    fn is_fixed_size(&self) -> bool;

    fn first(&self) -> Option<&T>;
    fn last(&self) -> Option<&T>;
    fn get(&self, index: usize) -> Result<&T>;
    fn set(&mut self, index: usize, value: T) -> Result<()>;

    fn add(&mut self, value: T);
    fn insert(&mut self, index: usize, value: T) -> Result<()>;
    fn remove_at(&mut self, index: usize) -> Result<()>;
    fn clear(&mut self);

    // Search
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }
    fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq;

    // Enumeration and bulk copies
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
    fn for_each<F>(&self, callback: F)
    where
        F: FnMut(&T);
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
    fn copy_to(&self, target: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone;
}

impl<T> OrderedSequence<T> for NodeList<T> {
    fn len(&self) -> usize {
        NodeList::len(self)
    }

    fn is_read_only(&self) -> bool {
        NodeList::is_read_only(self)
    }

    fn is_fixed_size(&self) -> bool {
        NodeList::is_fixed_size(self)
    }

    fn first(&self) -> Option<&T> {
        NodeList::first(self)
    }

    fn last(&self) -> Option<&T> {
        NodeList::last(self)
    }

    fn get(&self, index: usize) -> Result<&T> {
        NodeList::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        NodeList::set(self, index, value)
    }

    fn add(&mut self, value: T) {
        NodeList::add(self, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        NodeList::insert(self, index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<()> {
        NodeList::remove_at(self, index)
    }

    fn clear(&mut self) {
        NodeList::clear(self)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        NodeList::index_of(self, value)
    }

    fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        NodeList::remove(self, value)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        NodeList::iter(self)
    }

    fn for_each<F>(&self, callback: F)
    where
        F: FnMut(&T),
    {
        NodeList::for_each(self, callback)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        NodeList::to_vec(self)
    }

    fn copy_to(&self, target: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        NodeList::copy_to(self, target, offset)
    }
}
