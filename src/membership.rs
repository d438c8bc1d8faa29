//! Testing a value against a list of candidates.
//!
//! [`is_in`] answers "is this value one of these?" without building a set.
//! Candidates are scanned in order and the scan stops at the first match, so
//! an empty candidate list is always `false`.
//!
//! The [`is_in!`](crate::is_in!) macro is the variadic form, for candidates
//! written inline at the call site.
//!
//! # Examples
//!
//! ```rust
//! use extkit::is_in;
//! use extkit::membership::In;
//!
//! assert!(4_u8.is_in([1, 2, 4, 8]));
//! assert!(!"ciao".is_in(["", "hi"]));
//! assert!(is_in!('b', 'a', 'b', 'c'));
//! assert!(!is_in!(7));
//! ```

use std::borrow::Borrow;

/// Returns `true` if `item` equals at least one of `candidates`.
///
/// Candidates may be owned values or references to them.
///
/// # Examples
///
/// ```rust
/// use extkit::membership::is_in;
///
/// assert!(is_in(&12_128_321_u32, [1, 2, 3, 12_128_321]));
/// assert!(is_in("hi", ["ciao", "hi"]));
/// assert!(is_in(&Some("hi"), [Some("ciao"), None, Some("hi")]));
/// assert!(!is_in(&0, Vec::<i32>::new()));
/// ```
pub fn is_in<T, C, I>(item: &T, candidates: I) -> bool
where
    T: PartialEq + ?Sized,
    C: Borrow<T>,
    I: IntoIterator<Item = C>,
{
    is_in_by(item, candidates, |left, right| left == right)
}

/// Like [`is_in`], comparing with `equals` instead of [`PartialEq`].
///
/// `equals` receives the item first and a candidate second.
///
/// # Examples
///
/// ```rust
/// use extkit::membership::is_in_by;
///
/// let same_length = |left: &str, right: &str| left.len() == right.len();
/// assert!(is_in_by("four", ["one", "three", "five"], same_length));
/// ```
pub fn is_in_by<T, C, I, F>(item: &T, candidates: I, mut equals: F) -> bool
where
    T: ?Sized,
    C: Borrow<T>,
    I: IntoIterator<Item = C>,
    F: FnMut(&T, &T) -> bool,
{
    candidates
        .into_iter()
        .any(|candidate| equals(item, candidate.borrow()))
}

/// Method form of [`is_in`] for every [`PartialEq`] type.
pub trait In: PartialEq {
    /// See [`is_in`].
    #[inline]
    fn is_in<C, I>(&self, candidates: I) -> bool
    where
        C: Borrow<Self>,
        I: IntoIterator<Item = C>,
    {
        is_in(self, candidates)
    }
}

impl<T: PartialEq + ?Sized> In for T {}

/// Returns `true` if the first expression equals any of the rest.
///
/// Candidates are compared left to right with [`PartialEq`] and evaluation
/// stops at the first match; later candidate expressions are not evaluated.
/// The item expression is evaluated exactly once.
///
/// # Examples
///
/// ```rust
/// use extkit::is_in;
///
/// let status = 404;
/// assert!(is_in!(status, 400, 404, 410));
/// assert!(!is_in!(status, 200, 204));
/// assert!(!is_in!(status));
/// ```
#[macro_export]
macro_rules! is_in {
    ($item:expr $(,)?) => {{
        let _ = &$item;
        false
    }};
    ($item:expr, $($candidate:expr),+ $(,)?) => {{
        let item = &$item;
        false $(|| ::core::cmp::PartialEq::eq(item, &$candidate))+
    }};
}
