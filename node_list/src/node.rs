use core::ptr::NonNull;

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

/// A link in the chain. `Some` owns the pointee unless stated otherwise.
pub type Link<T> = Option<NonNull<Node<T>>>;

/// A single heap node of the chain.
///
/// - `value` holds one element
/// - `next` owns the successor, if any
#[derive(Debug)]
pub struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    /// Allocate a node and hand ownership to the returned pointer.
    pub fn alloc(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }

    /// Take back ownership of a node produced by [`Node::alloc`].
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`Node::alloc`], must not be reachable from any
    /// chain anymore, and must not be used after this call.
    pub unsafe fn free(ptr: NonNull<Node<T>>) -> Node<T> {
        unsafe { *Box::from_raw(ptr.as_ptr()) }
    }
}

/// Borrow the node behind `link`.
///
/// # Safety
///
/// The node must stay alive and unmodified for `'a`.
#[inline]
pub unsafe fn borrow<'a, T>(link: Link<T>) -> Option<&'a Node<T>> {
    link.map(|ptr| unsafe { &*ptr.as_ptr() })
}

/// Follow `steps` links starting at `start`.
///
/// Returns `None` if the chain ends first.
///
/// # Safety
///
/// Every node reachable from `start` must be alive.
pub unsafe fn walk<T>(start: Link<T>, steps: usize) -> Link<T> {
    let mut cursor = start?;
    for _ in 0..steps {
        cursor = unsafe { (*cursor.as_ptr()).next }?;
    }
    Some(cursor)
}

/// Free every node reachable from `head`, one at a time.
///
/// # Safety
///
/// `head` must own its chain and nothing else may reference those nodes.
pub unsafe fn free_chain<T>(head: Link<T>) {
    let mut cursor = head;
    while let Some(ptr) = cursor {
        let node = unsafe { Node::free(ptr) };
        cursor = node.next;
    }
}
