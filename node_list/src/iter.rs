//! Iterators over a [`NodeList`].
//!
//! [`Iter`] walks the live chain from the head each time it is created; it
//! takes no snapshot. The shared borrow it holds keeps the chain from being
//! restructured while it runs.

use core::iter::FusedIterator;

use crate::NodeList;
use crate::node::Node;

/// Borrowing iterator, created by [`NodeList::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(first: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            next: first,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // The list outlives 'a, so its successor does too.
            self.next = unsafe { crate::node::borrow(node.next) };
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// Shares `&T` only, like `core::slice::Iter`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator, created by `NodeList::into_iter`.
pub struct IntoIter<T> {
    list: NodeList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: NodeList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
