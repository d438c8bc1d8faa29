//! # extkit
//!
//! Extension traits and free functions that add the small, frequently
//! rewritten operations the standard library leaves out.
//!
//! ## Overview
//!
//! - **Collections**: conditional insertion into maps and queues, bulk
//!   append, indexed iteration, first/last lookup with predicates, snapshots
//!   and emptiness checks
//! - **Ordering**: order-independent range membership (`between`)
//! - **Text**: removing trailing characters and removing many substrings
//! - **Variants**: enumerating and parsing fieldless enums by name
//! - **Membership**: testing a value against a list of candidates
//! - **Format**: format-aware string conversion with a `Display` fallback
//!
//! Every operation exists as a free function taking the receiver first and as
//! a method on an extension trait implemented for the std types. Operations
//! that can fail return [`Result`] with a crate-wide [`Error`], and always
//! validate before they mutate.
//!
//! ## Feature Flags
//!
//! - `collections`: Map, sequence, queue and emptiness utilities
//! - `ordering`: The `between` range test
//! - `text`: `remove_last`, `truncate_last` and `remove_many`
//! - `variants`: The `NamedVariants` trait, `enum_values` and `to_enum`
//! - `membership`: `is_in` and the `is_in!` macro
//! - `format`: `to_formatted_string` and the numeric formatters
//! - `derive`: `#[derive(NamedVariants)]`
//! - `serde`: Serialise `NamedVariants` values by name
//! - `chrono`: Format-aware rendering for chrono date and time types
//! - `tracing`: Trace events on mutating operations
//! - `full`: Enable all features
//!
//! ## Example

#![cfg_attr(
    all(feature = "collections", feature = "ordering", feature = "text"),
    doc = r#"
```rust
use extkit::prelude::*;
use std::collections::HashMap;

let mut stock = HashMap::new();
assert!(stock.add_if_not_contains("apples", 3));
assert!(!stock.add_if_not_contains("apples", 10));
assert_eq!(stock["apples"], 3);

assert!(51_i32.between(&1000, &10, Bounds::Inclusive));

let cleaned = "we want to know".remove_many(["w"]).unwrap();
assert_eq!(cleaned, "e ant to kno");
```
"#
)]

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets the derive's `::extkit::...` paths resolve inside this crate's own tests.
extern crate self as extkit;

/// Prelude module for convenient imports.
///
/// Re-exports the extension traits together with the option enums they take.
///
/// # Usage
///
/// ```rust
/// use extkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, ErrorKind, Result};

    #[cfg(feature = "collections")]
    pub use crate::collections::{IsEmpty, MappingExt, QueueExt, SequenceExt, SliceExt};

    #[cfg(feature = "ordering")]
    pub use crate::ordering::{Between, Bounds};

    #[cfg(feature = "text")]
    pub use crate::text::{StrExt, StringExt};

    #[cfg(feature = "variants")]
    pub use crate::variants::{Case, NamedVariants, ToEnum};

    #[cfg(feature = "membership")]
    pub use crate::membership::In;

    #[cfg(feature = "format")]
    pub use crate::format::{FormatContext, Formattable, Render};
}

mod error;

pub use error::{Error, ErrorKind, Result};

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "ordering")]
pub mod ordering;

#[cfg(feature = "text")]
pub mod text;

#[cfg(feature = "variants")]
pub mod variants;

#[cfg(feature = "membership")]
pub mod membership;

#[cfg(feature = "format")]
pub mod format;

#[cfg(feature = "derive")]
pub use extkit_derive::NamedVariants;

/// Emits a trace-level event when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ::tracing::trace!($($argument)*)
    };
}

/// Expands to nothing without the `tracing` feature.
#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($argument:tt)*) => {};
}

#[allow(unused_imports)]
pub(crate) use trace_event;
