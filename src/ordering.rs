//! Order-independent range tests.
//!
//! [`between`] checks whether a value lies between two bounds without caring
//! which bound is the lower one: the bounds are compared first and swapped if
//! needed, so `between(x, a, b, ..) == between(x, b, a, ..)` always holds.
//!
//! # Examples
//!
//! ```rust
//! use extkit::ordering::{Between, Bounds};
//!
//! assert!(51_i32.between(&10, &1000, Bounds::Inclusive));
//! assert!(51_i32.between(&1000, &1, Bounds::Inclusive));
//! assert!(!(-7.0_f64).between(&1.0, &2.0, Bounds::Inclusive));
//! assert!(!10_i32.between(&10, &20, Bounds::Exclusive));
//! ```

use std::cmp::Ordering;

/// Whether equality with a bound counts as inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bounds {
    /// Both bounds belong to the range.
    #[default]
    Inclusive,
    /// Neither bound belongs to the range.
    Exclusive,
}

/// Returns `true` if `value` lies between `from` and `to`.
///
/// The smaller of `from` and `to` is used as the lower bound. With
/// [`Bounds::Inclusive`] a value equal to either bound is inside; with
/// [`Bounds::Exclusive`] it is outside. Values that do not compare with the
/// bounds (such as `f64::NAN`) are never between them.
///
/// # Examples
///
/// ```rust
/// use extkit::ordering::{Bounds, between};
///
/// assert!(between(&"m", &"z", &"a", Bounds::Inclusive));
/// assert!(!between(&f64::NAN, &0.0, &1.0, Bounds::Inclusive));
/// ```
pub fn between<T>(value: &T, from: &T, to: &T, bounds: Bounds) -> bool
where
    T: PartialOrd + ?Sized,
{
    between_by(value, from, to, bounds, |left, right| left.partial_cmp(right))
}

/// Like [`between`], ordering with `compare` instead of [`PartialOrd`].
///
/// `compare` returns `None` for values that are not comparable.
///
/// # Examples
///
/// ```rust
/// use extkit::ordering::{Bounds, between_by};
///
/// // Compare strings by length
/// let by_length = |left: &&str, right: &&str| Some(left.len().cmp(&right.len()));
/// assert!(between_by(&"four", &"xx", &"sixsix", Bounds::Inclusive, by_length));
/// ```
pub fn between_by<T, F>(value: &T, from: &T, to: &T, bounds: Bounds, mut compare: F) -> bool
where
    T: ?Sized,
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    let (lower, upper) = if compare(from, to) == Some(Ordering::Less) {
        (from, to)
    } else {
        (to, from)
    };

    let (Some(against_lower), Some(against_upper)) = (compare(value, lower), compare(value, upper))
    else {
        return false;
    };

    match bounds {
        Bounds::Inclusive => against_lower.is_ge() && against_upper.is_le(),
        Bounds::Exclusive => against_lower.is_gt() && against_upper.is_lt(),
    }
}

/// Method form of [`between`] for every [`PartialOrd`] type.
pub trait Between: PartialOrd {
    /// See [`between`].
    #[inline]
    fn between(&self, from: &Self, to: &Self, bounds: Bounds) -> bool {
        between(self, from, to, bounds)
    }

    /// Shorthand for `between(from, to, Bounds::Inclusive)`.
    #[inline]
    fn is_between(&self, from: &Self, to: &Self) -> bool {
        between(self, from, to, Bounds::Inclusive)
    }
}

impl<T: PartialOrd + ?Sized> Between for T {}
