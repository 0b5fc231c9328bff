//! `ix-queue` — linked containers backing the intersection engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | `node`          | Slab-backed doubly-linked storage (crate-private)       |
//! | [`sorted_list`] | `SortedList<T: SortKey>`, `SortKey`                     |
//! | [`fifo`]        | `FifoQueue<T>`                                          |
//!
//! Both public containers are thin wrappers over the same node slab.  Links
//! between nodes are slab keys, never references, and no index is ever
//! handed to callers, so a removed element cannot be reached through a stale
//! link.

mod node;

pub mod fifo;
pub mod sorted_list;


pub use fifo::FifoQueue;
pub use node::Iter;
pub use sorted_list::{SortKey, SortedList};
