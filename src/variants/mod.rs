//! Enumerating and parsing fieldless enums by variant name.
//!
//! [`NamedVariants`] is an explicit table of `(name, variant)` pairs in
//! declaration order. It is normally generated with
//! `#[derive(NamedVariants)]` (feature `derive`), which only accepts
//! non-generic enums whose variants carry no data.
//!
//! - [`enum_values`]: every variant, in declaration order
//! - [`to_enum`]: the variant named by a string, optionally ignoring case
//! - [`NamedVariants::variant_name`]: the name of a variant
//!
//! # Examples
//!
//! With the `derive` feature:

#![cfg_attr(
    feature = "derive",
    doc = r#"
```rust
use extkit::variants::{Case, NamedVariants, enum_values, to_enum};

#[derive(Clone, Copy, Debug, PartialEq, NamedVariants)]
enum Light {
    Red,
    Amber,
    Green,
}

assert_eq!(enum_values::<Light>().unwrap(), vec![Light::Red, Light::Amber, Light::Green]);
assert_eq!(to_enum::<Light>("Amber", Case::Sensitive).unwrap(), Light::Amber);
assert_eq!(to_enum::<Light>("GREEN", Case::Insensitive).unwrap(), Light::Green);
assert!(to_enum::<Light>("Blue", Case::Sensitive).is_err());
assert_eq!(Light::Red.variant_name(), "Red");
```
"#
)]

mod identifier;
#[cfg(feature = "serde")]
pub mod serde_name;

pub use identifier::is_valid_identifier;

#[cfg(feature = "derive")]
pub use extkit_derive::NamedVariants;

use crate::error::{Error, Result};

/// Whether variant names are matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Case {
    /// Names must match exactly.
    #[default]
    Sensitive,
    /// Names match after Unicode lowercase folding.
    Insensitive,
}

/// A closed set of named variants.
///
/// # Implementing by hand
///
/// The derive covers fieldless enums. A manual implementation must list every
/// value exactly once in [`VARIANTS`](Self::VARIANTS), and
/// [`variant_name`](Self::variant_name) must agree with that table. An empty
/// table marks the type as "not an enum": [`enum_values`] and [`to_enum`]
/// reject it with [`Error::NotAnEnum`].
///
/// ```rust
/// use extkit::variants::{Case, NamedVariants, to_enum};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Toggle(bool);
///
/// impl NamedVariants for Toggle {
///     const VARIANTS: &'static [(&'static str, Self)] = &[("Off", Toggle(false)), ("On", Toggle(true))];
///
///     fn variant_name(&self) -> &'static str {
///         if self.0 { "On" } else { "Off" }
///     }
/// }
///
/// assert_eq!(to_enum::<Toggle>("on", Case::Insensitive).unwrap(), Toggle(true));
/// ```
pub trait NamedVariants: Sized + Copy + 'static {
    /// Every variant with its name, in declaration order.
    const VARIANTS: &'static [(&'static str, Self)];

    /// The name of this variant.
    fn variant_name(&self) -> &'static str;

    /// Every variant, in declaration order. See [`enum_values`].
    ///
    /// # Errors
    ///
    /// [`Error::NotAnEnum`] if the variant table is empty.
    fn variants() -> Result<Vec<Self>> {
        enum_values::<Self>()
    }

    /// The variant named `name`. See [`to_enum`].
    ///
    /// # Errors
    ///
    /// Same as [`to_enum`].
    fn from_variant_name(name: &str, case: Case) -> Result<Self> {
        to_enum::<Self>(name, case)
    }
}

/// Returns every variant of `T` in declaration order.
///
/// # Errors
///
/// Returns [`Error::NotAnEnum`] if `T` has no variants, which can only happen
/// with a hand-written [`NamedVariants`] implementation.
pub fn enum_values<T: NamedVariants>() -> Result<Vec<T>> {
    ensure_enum::<T>()?;
    Ok(T::VARIANTS.iter().map(|(_, variant)| *variant).collect())
}

/// Parses `text` as the name of a variant of `T`.
///
/// With [`Case::Insensitive`], names are compared after Unicode lowercase
/// folding and the first matching variant in declaration order wins.
///
/// # Errors
///
/// Checked in this order:
///
/// - [`Error::InvalidIdentifier`] if `text` is not a valid identifier
/// - [`Error::NotAnEnum`] if `T` has no variants
/// - [`Error::UnknownVariant`] if no variant of `T` is named `text`
pub fn to_enum<T: NamedVariants>(text: &str, case: Case) -> Result<T> {
    if !is_valid_identifier(text) {
        return Err(Error::InvalidIdentifier {
            value: text.to_owned(),
        });
    }
    ensure_enum::<T>()?;

    T::VARIANTS
        .iter()
        .find(|(name, _)| names_match(name, text, case))
        .map(|(_, variant)| *variant)
        .ok_or_else(|| Error::UnknownVariant {
            value: text.to_owned(),
            type_name: std::any::type_name::<T>(),
        })
}

fn ensure_enum<T: NamedVariants>() -> Result<()> {
    if T::VARIANTS.is_empty() {
        return Err(Error::NotAnEnum {
            type_name: std::any::type_name::<T>(),
        });
    }
    Ok(())
}

fn names_match(name: &str, text: &str, case: Case) -> bool {
    match case {
        Case::Sensitive => name == text,
        Case::Insensitive => name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(text.chars().flat_map(char::to_lowercase)),
    }
}

/// Method form of [`to_enum`] for string slices.
pub trait ToEnum {
    /// Parses `self` as a variant name of `T`. See [`to_enum`].
    ///
    /// # Errors
    ///
    /// Same as [`to_enum`].
    fn to_enum<T: NamedVariants>(&self, case: Case) -> Result<T>;
}

impl ToEnum for str {
    #[inline]
    fn to_enum<T: NamedVariants>(&self, case: Case) -> Result<T> {
        to_enum(self, case)
    }
}
