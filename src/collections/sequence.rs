//! Ordered, index-addressable sequences.
//!
//! [`Sequence`] is the contract for growable sequences ([`Vec`] and
//! [`VecDeque`]); [`SequenceExt`] adds bulk append and indexed iteration to
//! them. [`SliceExt`] adds the read-only operations (first/last lookup,
//! indexed visiting, snapshots) to every slice, and therefore to `Vec`
//! through deref.
//!
//! # Examples
//!
//! ```rust
//! use extkit::collections::{SequenceExt, SliceExt};
//!
//! let mut words = vec!["Buzz".to_string(), "Light".to_string()];
//! words.add_range(["Year".to_string()]);
//!
//! assert_eq!(words.try_first().unwrap(), "Buzz");
//! assert_eq!(words.try_last().unwrap(), "Year");
//! assert_eq!(words.first_where(|word| word.starts_with('L')).unwrap(), "Light");
//! ```

use std::collections::VecDeque;

use crate::error::{Error, Result};

/// A growable, ordered, index-addressable container.
pub trait Sequence<T>: Extend<T> {
    /// Number of elements currently stored.
    fn length(&self) -> usize;

    /// The element at `index`, or `None` past the end.
    fn element_at(&self, index: usize) -> Option<&T>;
}

impl<T> Sequence<T> for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Sequence<T> for VecDeque<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

// =============================================================================
// Bulk append
// =============================================================================

/// Appends every item to the back of `sequence`, preserving their order.
///
/// An empty `items` is a no-op.
///
/// # Examples
///
/// ```rust
/// use extkit::collections::add_range;
///
/// let mut amounts = vec![1, 10, 90];
/// add_range(&mut amounts, [2, 20, 80, 40]);
/// assert_eq!(amounts, vec![1, 10, 90, 2, 20, 80, 40]);
/// ```
pub fn add_range<S, T, I>(sequence: &mut S, items: I)
where
    S: Sequence<T> + ?Sized,
    I: IntoIterator<Item = T>,
{
    sequence.extend(items);
    crate::trace_event!(length = sequence.length(), "add_range");
}

/// Appends a clone of every element of `source` to the back of `sequence`.
///
/// # Examples
///
/// ```rust
/// use extkit::collections::add_range_cloned;
///
/// let mut collection = vec!["original".to_string(), "string".to_string()];
/// let extra = vec!["added".to_string()];
/// add_range_cloned(&mut collection, &extra);
/// assert_eq!(collection.last(), extra.first());
/// ```
pub fn add_range_cloned<S, T>(sequence: &mut S, source: &[T])
where
    S: Sequence<T> + ?Sized,
    T: Clone,
{
    if source.is_empty() {
        return;
    }
    sequence.extend(source.iter().cloned());
    crate::trace_event!(appended = source.len(), "add_range_cloned");
}

// =============================================================================
// Indexed iteration
// =============================================================================

/// Calls `action(sequence, index, element)` for every index in ascending
/// order.
///
/// The action receives the sequence itself and may modify it. The element is
/// read again at each index right before the call, and the length is checked
/// on every step, so later iterations observe earlier modifications.
///
/// # Examples
///
/// ```rust
/// use extkit::collections::for_indexed;
///
/// let mut integers = vec![1, 2, 3, 5, 8];
/// for_indexed(&mut integers, |list, index, value| list[index] = value + index as i32);
/// assert_eq!(integers, vec![1, 3, 5, 8, 12]);
/// ```
pub fn for_indexed<S, T, F>(sequence: &mut S, mut action: F)
where
    S: Sequence<T> + ?Sized,
    T: Clone,
    F: FnMut(&mut S, usize, T),
{
    let mut index = 0;
    while let Some(element) = sequence.element_at(index).cloned() {
        action(sequence, index, element);
        index += 1;
    }
}

/// Calls `action(index, &element)` for every element of `items` in order.
///
/// # Examples
///
/// ```rust
/// use extkit::collections::for_each_indexed;
///
/// let mut visited = Vec::new();
/// for_each_indexed(&["a", "b"], |index, letter| visited.push(format!("{index}{letter}")));
/// assert_eq!(visited, vec!["0a", "1b"]);
/// ```
pub fn for_each_indexed<T, F>(items: &[T], mut action: F)
where
    F: FnMut(usize, &T),
{
    for (index, element) in items.iter().enumerate() {
        action(index, element);
    }
}

// =============================================================================
// First / Last
// =============================================================================

/// Returns the first element of `items`.
///
/// # Errors
///
/// Returns [`Error::EmptyCollection`] if `items` is empty.
pub fn first<T>(items: &[T]) -> Result<&T> {
    items.first().ok_or(Error::EmptyCollection)
}

/// Returns the last element of `items`.
///
/// # Errors
///
/// Returns [`Error::EmptyCollection`] if `items` is empty.
pub fn last<T>(items: &[T]) -> Result<&T> {
    items.last().ok_or(Error::EmptyCollection)
}

/// Returns the first element, scanning from the front, that satisfies
/// `predicate`.
///
/// # Errors
///
/// Returns [`Error::EmptyCollection`] if `items` is empty and
/// [`Error::NoMatch`] if no element satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use extkit::collections::first_where;
///
/// let words = ["Buzz", "Light", "Year", "Is", "Yearning"];
/// assert_eq!(*first_where(&words, |word| word.starts_with('Y')).unwrap(), "Year");
/// ```
pub fn first_where<T, P>(items: &[T], mut predicate: P) -> Result<&T>
where
    P: FnMut(&T) -> bool,
{
    if items.is_empty() {
        return Err(Error::EmptyCollection);
    }
    items
        .iter()
        .find(|&element| predicate(element))
        .ok_or(Error::NoMatch)
}

/// Returns the first element, scanning from the back, that satisfies
/// `predicate`.
///
/// # Errors
///
/// Returns [`Error::EmptyCollection`] if `items` is empty and
/// [`Error::NoMatch`] if no element satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use extkit::collections::last_where;
///
/// let words = ["Buzz", "Yearning", "Light", "Year", "Is"];
/// assert_eq!(*last_where(&words, |word| word.starts_with('Y')).unwrap(), "Year");
/// ```
pub fn last_where<T, P>(items: &[T], mut predicate: P) -> Result<&T>
where
    P: FnMut(&T) -> bool,
{
    if items.is_empty() {
        return Err(Error::EmptyCollection);
    }
    items
        .iter()
        .rev()
        .find(|&element| predicate(element))
        .ok_or(Error::NoMatch)
}

// =============================================================================
// Snapshot
// =============================================================================

/// Returns a fixed-size copy of `items` in their current order.
///
/// Later changes to the source do not affect the returned array.
pub fn to_array<T: Clone>(items: &[T]) -> Box<[T]> {
    Box::from(items)
}

// =============================================================================
// Extension traits
// =============================================================================

/// Method forms of the mutating sequence operations.
pub trait SequenceExt<T>: Sequence<T> {
    /// Appends every item in order. See [`add_range`].
    fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        add_range(self, items);
    }

    /// Appends clones of `source`. See [`add_range_cloned`].
    fn add_range_cloned(&mut self, source: &[T])
    where
        T: Clone,
    {
        add_range_cloned(self, source);
    }

    /// Visits every index, letting `action` modify the sequence. See
    /// [`for_indexed`].
    fn for_indexed<F>(&mut self, action: F)
    where
        T: Clone,
        F: FnMut(&mut Self, usize, T),
    {
        for_indexed(self, action);
    }
}

impl<S, T> SequenceExt<T> for S where S: Sequence<T> + ?Sized {}

/// Method forms of the read-only operations, for every slice.
pub trait SliceExt<T> {
    /// The first element. See [`first`].
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] when the slice is empty.
    fn try_first(&self) -> Result<&T>;

    /// The last element. See [`last`].
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] when the slice is empty.
    fn try_last(&self) -> Result<&T>;

    /// The first element from the front satisfying `predicate`. See
    /// [`first_where`].
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] or [`Error::NoMatch`].
    fn first_where<P>(&self, predicate: P) -> Result<&T>
    where
        P: FnMut(&T) -> bool;

    /// The first element from the back satisfying `predicate`. See
    /// [`last_where`].
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] or [`Error::NoMatch`].
    fn last_where<P>(&self, predicate: P) -> Result<&T>
    where
        P: FnMut(&T) -> bool;

    /// Calls `action(index, &element)` in order. See [`for_each_indexed`].
    fn for_each_indexed<F>(&self, action: F)
    where
        F: FnMut(usize, &T);

    /// A snapshot copy. See [`to_array`].
    fn to_array(&self) -> Box<[T]>
    where
        T: Clone;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn try_first(&self) -> Result<&T> {
        first(self)
    }

    #[inline]
    fn try_last(&self) -> Result<&T> {
        last(self)
    }

    #[inline]
    fn first_where<P>(&self, predicate: P) -> Result<&T>
    where
        P: FnMut(&T) -> bool,
    {
        first_where(self, predicate)
    }

    #[inline]
    fn last_where<P>(&self, predicate: P) -> Result<&T>
    where
        P: FnMut(&T) -> bool,
    {
        last_where(self, predicate)
    }

    #[inline]
    fn for_each_indexed<F>(&self, action: F)
    where
        F: FnMut(usize, &T),
    {
        for_each_indexed(self, action);
    }

    #[inline]
    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        to_array(self)
    }
}
