//! Derive macros for extkit.
//!
//! This crate provides the procedural macro that builds the name/variant
//! table behind extkit's enum utilities.
//!
//! # Available Derive Macros
//!
//! - [`NamedVariants`]: Generates a `NamedVariants` implementation for a
//!   fieldless enum
//!
//! # Example
//!
//! ```rust,ignore
//! use extkit::variants::{Case, NamedVariants, to_enum};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, NamedVariants)]
//! enum NormalizationForm {
//!     FormC,
//!     FormD,
//!     FormKC,
//!     FormKD,
//! }
//!
//! let form: NormalizationForm = to_enum("fORmkC", Case::Insensitive).unwrap();
//! assert_eq!(form, NormalizationForm::FormKC);
//! assert_eq!(form.variant_name(), "FormKC");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod variants;

use proc_macro::TokenStream;

/// Derive macro for generating a `NamedVariants` implementation.
///
/// The generated implementation lists every variant together with its
/// identifier, in declaration order, and maps each variant back to its name.
///
/// # Requirements
///
/// - The type must be an enum whose variants carry no fields
/// - The enum must not be generic
/// - The enum must implement `Copy` (the trait requires it)
///
/// Anything else is rejected with a compile error pointing at the offending
/// item.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::extkit::variants::NamedVariants for EnumName {
///     const VARIANTS: &'static [(&'static str, Self)] = &[("First", Self::First), ...];
///
///     fn variant_name(&self) -> &'static str {
///         match self {
///             Self::First => "First",
///             ...
///         }
///     }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use extkit::variants::{NamedVariants, enum_values};
///
/// #[derive(Clone, Copy, Debug, PartialEq, NamedVariants)]
/// enum Light {
///     Red,
///     Amber,
///     Green,
/// }
///
/// assert_eq!(
///     enum_values::<Light>().unwrap(),
///     vec![Light::Red, Light::Amber, Light::Green]
/// );
/// ```
#[proc_macro_derive(NamedVariants)]
pub fn derive_named_variants(input: TokenStream) -> TokenStream {
    variants::derive_named_variants_impl(input)
}
