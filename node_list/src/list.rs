use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use crate::error::Result;
use crate::node::{self, Link, Node};
use crate::{IntoIter, Iter, ListError, ListMode, Vec};

/// An ordered sequence backed by a singly-linked chain of nodes.
///
/// `NodeList<T>` keeps an owning pointer to the first node and a non-owning
/// pointer to the last one, so appends and [`last`](Self::last) are O(1)
/// while indexed access walks the chain from the head.
///
/// # Modes
///
/// - **Fixed-size** lists (built with [`with_size`](Self::with_size)) ignore
///   [`add`](Self::add), [`insert`](Self::insert), [`remove_at`](Self::remove_at)
///   and [`remove`](Self::remove), but still accept [`set`](Self::set).
/// - **Read-only** lists ignore every mutation, including `set`.
///
/// Ignored mutations return normally and change nothing. [`clear`](Self::clear)
/// always succeeds and leaves an empty, fully mutable list.
///
/// # Examples
///
/// ## Building and editing
///
/// ```
/// use node_list::NodeList;
///
/// let mut list = NodeList::new();
/// list.add("b");
/// list.add("c");
/// list.insert(0, "a").unwrap();
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.first(), Some(&"a"));
/// assert_eq!(list.last(), Some(&"c"));
/// assert_eq!(list.index_of(&"b"), Some(1));
/// ```
///
/// ## Preallocated slots
///
/// ```
/// use node_list::NodeList;
///
/// let mut slots = NodeList::<i32>::with_size(3, false);
/// assert_eq!(slots.len(), 3);
/// assert!(slots.is_fixed_size());
///
/// slots.set(2, 42).unwrap();
/// slots.add(5);
/// assert_eq!(slots.to_vec(), vec![0, 0, 42]);
/// ```
pub struct NodeList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    mode: ListMode,
    _owns: PhantomData<Box<Node<T>>>,
}

// The list owns its nodes exclusively, like a `Box` chain.
unsafe impl<T: Send> Send for NodeList<T> {}
unsafe impl<T: Sync> Sync for NodeList<T> {}

impl<T> NodeList<T> {
    /// Creates an empty, mutable list.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_list::NodeList;
    ///
    /// let list = NodeList::<u8>::new();
    /// assert!(list.is_empty());
    /// assert!(!list.is_read_only());
    /// ```
    pub const fn new() -> Self {
        Self::with_mode(ListMode::MUTABLE)
    }

    /// Creates an empty list, read-only if requested.
    ///
    /// A read-only empty list stays empty until [`clear`](Self::clear) is called.
    pub const fn with_read_only(read_only: bool) -> Self {
        Self::with_mode(ListMode::new(read_only, false))
    }

    const fn with_mode(mode: ListMode) -> Self {
        NodeList {
            head: None,
            tail: None,
            len: 0,
            mode,
            _owns: PhantomData,
        }
    }

    /// Creates a fixed-size list of `size` slots, each holding `T::default()`.
    ///
    /// The list is fixed-size even when `size == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_list::NodeList;
    ///
    /// let list = NodeList::<u64>::with_size(4, true);
    /// assert_eq!(list.len(), 4);
    /// assert!(list.is_fixed_size());
    /// assert!(list.is_read_only());
    /// assert_eq!(list.first_or_default(), 0);
    /// ```
    pub fn with_size(size: usize, read_only: bool) -> Self
    where
        T: Default,
    {
        let mut list = Self::with_read_only(read_only);
        for _ in 0..size {
            list.push_back(T::default());
        }
        list.mode.set_fixed_size(true);
        trace_event!(trace, size, read_only, "preallocated fixed-size list");
        list
    }

    /// Creates a list holding every element of `values` in order.
    ///
    /// Elements go through the same path as [`add`](Self::add); the read-only
    /// flag is applied afterwards. The result is never fixed-size.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_list::NodeList;
    ///
    /// let list = NodeList::from_sequence(vec![1, 2, 3], true);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// assert!(list.is_read_only());
    /// assert!(!list.is_fixed_size());
    /// ```
    pub fn from_sequence<I>(values: I, read_only: bool) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        for value in values {
            list.add(value);
        }
        list.mode.set_read_only(read_only);
        list
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.mode.is_read_only()
    }

    #[inline]
    pub fn is_fixed_size(&self) -> bool {
        self.mode.is_fixed_size()
    }

    #[inline]
    pub fn mode(&self) -> ListMode {
        self.mode
    }

    /// Returns the first element, or `None` if the list is empty. O(1).
    #[inline]
    pub fn first(&self) -> Option<&T> {
        unsafe { node::borrow(self.head) }.map(|node| &node.value)
    }

    /// Returns the last element, or `None` if the list is empty. O(1).
    #[inline]
    pub fn last(&self) -> Option<&T> {
        unsafe { node::borrow(self.tail) }.map(|node| &node.value)
    }

    /// Returns a copy of the first element, or `T::default()` if empty.
    pub fn first_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.first().cloned().unwrap_or_default()
    }

    /// Returns a copy of the last element, or `T::default()` if empty.
    pub fn last_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.last().cloned().unwrap_or_default()
    }

    /// Returns a reference to the element at `index`. O(index).
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfRange` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_list::{ListError, NodeList};
    ///
    /// let list = NodeList::from_sequence([10, 20], false);
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(2), Err(ListError::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let node = self.node_at(index)?;
        Ok(unsafe { &(*node.as_ptr()).value })
    }

    /// Overwrites the element at `index`.
    ///
    /// Ignored on read-only lists. Allowed on fixed-size lists.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfRange` if `index >= len()` on a writable list.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        if self.mode.blocks_values() {
            trace_event!(debug, index, mode = ?self.mode, "set ignored by list mode");
            return Ok(());
        }

        let node = self.node_at(index)?;
        unsafe { (*node.as_ptr()).value = value };
        Ok(())
    }

    /// Appends `value` after the last element. O(1).
    ///
    /// Ignored on fixed-size and read-only lists.
    pub fn add(&mut self, value: T) {
        if self.mode.blocks_structure() {
            trace_event!(debug, mode = ?self.mode, "add ignored by list mode");
            return;
        }

        self.push_back(value);
        trace_event!(trace, len = self.len, "appended element");
    }

    /// Inserts `value` before the element at `index`.
    ///
    /// `index == len()` appends. Ignored on fixed-size and read-only lists;
    /// the mode is checked before the index.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfRange` if `index > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_list::NodeList;
    ///
    /// let mut list = NodeList::from_sequence([1, 3], false);
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 4).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    /// assert_eq!(list.last(), Some(&4));
    /// assert!(list.insert(9, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if self.mode.blocks_structure() {
            trace_event!(debug, index, mode = ?self.mode, "insert ignored by list mode");
            return Ok(());
        }

        if index > self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }

        if index == self.len {
            self.push_back(value);
        } else if index == 0 {
            self.head = Some(Node::alloc(value, self.head));
            self.len += 1;
        } else {
            let prev = self.node_at(index - 1)?.as_ptr();
            unsafe {
                let node = Node::alloc(value, (*prev).next);
                (*prev).next = Some(node);
            }
            self.len += 1;
        }

        trace_event!(trace, index, len = self.len, "inserted element");
        Ok(())
    }

    /// Removes the element at `index`.
    ///
    /// Ignored on fixed-size and read-only lists; the mode is checked before
    /// the index.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfRange` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        if self.mode.blocks_structure() {
            trace_event!(debug, index, mode = ?self.mode, "remove_at ignored by list mode");
            return Ok(());
        }

        self.unlink(index)?;
        trace_event!(trace, index, len = self.len, "removed element");
        Ok(())
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` if no element matched or the list's mode forbids removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_list::NodeList;
    ///
    /// let mut list = NodeList::from_sequence([1, 2, 1], false);
    /// assert!(list.remove(&1));
    /// assert_eq!(list.to_vec(), vec![2, 1]);
    /// assert!(!list.remove(&42));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        if self.mode.blocks_structure() {
            trace_event!(debug, mode = ?self.mode, "remove ignored by list mode");
            return false;
        }

        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Returns the position of the first element equal to `value`. O(n).
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Drops every element and resets the list to mutable, not fixed-size.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_list::NodeList;
    ///
    /// let mut list = NodeList::<u8>::with_size(2, true);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert!(!list.is_fixed_size());
    /// assert!(!list.is_read_only());
    ///
    /// list.add(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn clear(&mut self) {
        let head = self.head.take();
        self.tail = None;
        self.len = 0;
        self.mode = ListMode::MUTABLE;
        unsafe { node::free_chain(head) };
        trace_event!(trace, "cleared list");
    }

    /// Copies every element into a new `Vec`, in order. O(n).
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Calls `callback` on each element in order.
    pub fn for_each<F>(&self, callback: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(callback);
    }

    /// Clones every element into `target[offset..offset + len()]`.
    ///
    /// Nothing is written when the range does not fit.
    ///
    /// # Errors
    ///
    /// Returns `ListError::CopyOutOfRange` if `offset + len()` exceeds
    /// `target.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use node_list::NodeList;
    ///
    /// let list = NodeList::from_sequence([7, 8], false);
    /// let mut buf = [0; 4];
    /// list.copy_to(&mut buf, 1).unwrap();
    /// assert_eq!(buf, [0, 7, 8, 0]);
    /// assert!(list.copy_to(&mut buf, 3).is_err());
    /// ```
    pub fn copy_to(&self, target: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        let end = offset
            .checked_add(self.len)
            .filter(|&end| end <= target.len())
            .ok_or(ListError::CopyOutOfRange {
                offset,
                len: self.len,
                capacity: target.len(),
            })?;

        for (slot, value) in target[offset..end].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }

    /// Returns an iterator over the elements, starting from the current head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(unsafe { node::borrow(self.head) }, self.len)
    }

    /// Appends without consulting the mode.
    fn push_back(&mut self, value: T) {
        let node = Node::alloc(value, None);
        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Detaches the head without consulting the mode.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = unsafe { Node::free(head) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Detaches the node at `index` without consulting the mode.
    fn unlink(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            return self.pop_front().ok_or(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }

        let prev = self.node_at(index - 1)?;
        let target = unsafe { (*prev.as_ptr()).next }.ok_or(ListError::OutOfRange {
            index,
            len: self.len,
        })?;

        let node = unsafe { Node::free(target) };
        unsafe { (*prev.as_ptr()).next = node.next };
        if node.next.is_none() {
            self.tail = Some(prev);
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Locates the node at `index`, checking bounds first.
    fn node_at(&self, index: usize) -> Result<NonNull<Node<T>>> {
        if index >= self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }

        let found = if index == self.len - 1 {
            self.tail
        } else {
            unsafe { node::walk(self.head, index) }
        };
        found.ok_or(ListError::OutOfRange {
            index,
            len: self.len,
        })
    }
}

impl<T> Drop for NodeList<T> {
    fn drop(&mut self) {
        unsafe { node::free_chain(self.head.take()) };
    }
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for NodeList<T> {
    /// Deep-copies the chain and keeps both mode flags.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for value in self.iter() {
            copy.push_back(value.clone());
        }
        copy.mode = self.mode;
        copy
    }
}

impl<T: PartialEq> PartialEq for NodeList<T> {
    /// Lists are equal when they hold equal elements in the same order.
    /// Modes are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for NodeList<T> {}

impl<T> core::ops::Index<usize> for NodeList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: fmt::Display> fmt::Display for NodeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter, false)
    }
}

impl<T> From<Vec<T>> for NodeList<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_sequence(values, false)
    }
}

impl<T, const N: usize> From<[T; N]> for NodeList<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_sequence(values, false)
    }
}

/// Every element goes through [`NodeList::add`], so extending a fixed-size or
/// read-only list does nothing.
impl<T> Extend<T> for NodeList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for NodeList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for NodeList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
