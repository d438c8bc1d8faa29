//! A uniform emptiness check.
//!
//! Most std containers have an inherent `is_empty`, but there is no trait to
//! be generic over. [`IsEmpty`] is that trait; it is implemented for arrays,
//! slices, the std collections, and text buffers. Method calls on concrete
//! types still resolve to the inherent method, which has the same meaning.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// Containers that can report whether they hold no elements.
pub trait IsEmpty {
    /// Number of elements. Text reports its byte length.
    fn element_count(&self) -> usize;

    /// `true` iff [`element_count`](Self::element_count) is exactly zero.
    #[inline]
    fn is_empty(&self) -> bool {
        self.element_count() == 0
    }
}

/// Returns `true` iff `container` holds no elements.
///
/// # Examples
///
/// ```rust
/// use extkit::collections::is_empty;
/// use std::collections::HashSet;
///
/// assert!(is_empty(&[0_i32; 0]));
/// assert!(is_empty(&String::new()));
/// assert!(!is_empty(&HashSet::from([1])));
/// ```
#[inline]
pub fn is_empty<C: IsEmpty + ?Sized>(container: &C) -> bool {
    container.is_empty()
}

macro_rules! impl_is_empty {
    ($([$($generics:tt)*] $container:ty),* $(,)?) => {
        $(
            impl<$($generics)*> IsEmpty for $container {
                #[inline]
                fn element_count(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_is_empty! {
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [K, V, S] HashMap<K, V, S>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
    [] str,
    [] String,
}

impl<C: IsEmpty + ?Sized> IsEmpty for &C {
    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }
}

static_assertions::assert_impl_all!(Vec<u8>: IsEmpty);
static_assertions::assert_impl_all!(String: IsEmpty);
static_assertions::assert_impl_all!(HashMap<String, u8>: IsEmpty);
static_assertions::assert_impl_all!([u8; 4]: IsEmpty);
