//! # node_list
//!
//! An ordered sequence stored as a singly-linked chain of nodes, with two
//! capacity modes: fixed-size (shape frozen at construction) and read-only
//! (no mutation at all).
//!
//! ```rust
//! use node_list::NodeList;
//!
//! let mut list = NodeList::new();
//! list.add(1);
//! list.add(2);
//! list.add(3);
//! list.insert(1, 99).unwrap();
//! assert_eq!(list.to_string(), "[1, 99, 2, 3]");
//!
//! list.remove_at(0).unwrap();
//! assert!(list.remove(&2));
//! assert_eq!(list.to_string(), "[99, 3]");
//! ```
//!
//! ## Capacity modes
//!
//! Mutations blocked by a mode are silent no-ops, not errors.
//!
//! ```rust
//! use node_list::NodeList;
//!
//! let mut slots = NodeList::<u32>::with_size(3, false);
//! slots.add(7); // ignored, the list is fixed-size
//! slots.set(1, 7).unwrap(); // value writes are still allowed
//! assert_eq!(slots.to_vec(), vec![0, 7, 0]);
//!
//! let mut frozen = NodeList::from_sequence([1, 2, 3], true);
//! frozen.set(0, 9).unwrap(); // ignored, the list is read-only
//! assert_eq!(frozen[0], 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
pub use alloc::{string::String, vec::Vec};

#[macro_use]
mod trace;

pub mod error;
pub mod iter;
pub mod list;
pub mod mode;
#[doc(hidden)]
pub mod node;
pub mod sequence;

pub use error::ListError;
pub use iter::{IntoIter, Iter};
pub use list::NodeList;
pub use mode::ListMode;
pub use sequence::OrderedSequence;
