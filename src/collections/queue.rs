//! Conditional enqueue for FIFO queues.
//!
//! Queues are neither indexed nor hashed, so membership is a linear scan from
//! the front on every call.

use std::collections::VecDeque;

/// Pushes `item` to the back of `queue` unless an equal item is already
/// queued.
///
/// Returns `true` if `item` was enqueued.
///
/// # Examples
///
/// ```rust
/// use extkit::collections::enqueue_if_not_contains;
/// use std::collections::VecDeque;
///
/// let mut queue = VecDeque::from(["simple", "super", "test"]);
/// assert!(!enqueue_if_not_contains(&mut queue, "super"));
/// assert!(enqueue_if_not_contains(&mut queue, "now"));
/// assert_eq!(queue.back(), Some(&"now"));
/// ```
pub fn enqueue_if_not_contains<T: PartialEq>(queue: &mut VecDeque<T>, item: T) -> bool {
    enqueue_if_not_contains_by(queue, item, |queued, candidate| queued == candidate)
}

/// Like [`enqueue_if_not_contains`], comparing with `equals` instead of
/// [`PartialEq`].
///
/// `equals` receives the queued element first and the candidate second.
///
/// # Examples
///
/// ```rust
/// use extkit::collections::enqueue_if_not_contains_by;
/// use std::collections::VecDeque;
///
/// let mut queue = VecDeque::from(["Alpha".to_string()]);
/// let added = enqueue_if_not_contains_by(&mut queue, "ALPHA".to_string(), |left, right| {
///     left.eq_ignore_ascii_case(right)
/// });
/// assert!(!added);
/// ```
pub fn enqueue_if_not_contains_by<T, F>(queue: &mut VecDeque<T>, item: T, mut equals: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let contains = queue.iter().any(|queued| equals(queued, &item));
    if !contains {
        queue.push_back(item);
    }
    crate::trace_event!(enqueued = !contains, length = queue.len(), "enqueue_if_not_contains");
    !contains
}

/// Method forms of the queue operations.
pub trait QueueExt<T> {
    /// See [`enqueue_if_not_contains`].
    fn enqueue_if_not_contains(&mut self, item: T) -> bool
    where
        T: PartialEq;

    /// See [`enqueue_if_not_contains_by`].
    fn enqueue_if_not_contains_by<F>(&mut self, item: T, equals: F) -> bool
    where
        F: FnMut(&T, &T) -> bool;
}

impl<T> QueueExt<T> for VecDeque<T> {
    #[inline]
    fn enqueue_if_not_contains(&mut self, item: T) -> bool
    where
        T: PartialEq,
    {
        enqueue_if_not_contains(self, item)
    }

    #[inline]
    fn enqueue_if_not_contains_by<F>(&mut self, item: T, equals: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        enqueue_if_not_contains_by(self, item, equals)
    }
}
