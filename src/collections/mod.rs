//! Utilities for std collections.
//!
//! - [`mapping`]: conditional insertion into key/value maps ([`MappingExt`])
//! - [`sequence`]: bulk append, indexed iteration, first/last lookup and
//!   snapshots ([`SequenceExt`], [`SliceExt`])
//! - [`queue`]: conditional enqueue ([`QueueExt`])
//! - [`emptiness`]: a uniform emptiness check ([`IsEmpty`])
//!
//! # Examples
//!
//! ```rust
//! use extkit::collections::{MappingExt, QueueExt, SequenceExt, SliceExt};
//! use std::collections::{BTreeMap, VecDeque};
//!
//! let mut prices = BTreeMap::new();
//! prices.add_if_not_contains(10, "dollars");
//! assert!(!prices.add_if_not_contains(10, "money"));
//!
//! let mut pending = VecDeque::from([2, 3, 10]);
//! pending.enqueue_if_not_contains(10);
//! assert_eq!(pending.len(), 3);
//!
//! let mut integers = vec![1, 2, 3, 5, 8];
//! integers.for_indexed(|list, index, value| list[index] = value + index as i32);
//! assert_eq!(integers, vec![1, 3, 5, 8, 12]);
//! assert_eq!(*integers.last_where(|value| value % 2 == 1).unwrap(), 5);
//! ```

pub mod emptiness;
pub mod mapping;
pub mod queue;
pub mod sequence;

pub use emptiness::{IsEmpty, is_empty};
pub use mapping::{Mapping, MappingExt, add_if_not_contains};
pub use queue::{QueueExt, enqueue_if_not_contains, enqueue_if_not_contains_by};
pub use sequence::{
    Sequence, SequenceExt, SliceExt, add_range, add_range_cloned, first, first_where,
    for_each_indexed, for_indexed, last, last_where, to_array,
};
