//! Serialize [`NamedVariants`] values as their variant name.
//!
//! Use with `#[serde(with = "extkit::variants::serde_name")]` on a field, or
//! `extkit::variants::serde_name::insensitive` to accept names in any case
//! when deserializing.
//!
//! ```rust
//! use extkit::variants::NamedVariants;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Level {
//!     Low,
//!     High,
//! }
//!
//! impl NamedVariants for Level {
//!     const VARIANTS: &'static [(&'static str, Self)] = &[("Low", Level::Low), ("High", Level::High)];
//!
//!     fn variant_name(&self) -> &'static str {
//!         match self {
//!             Level::Low => "Low",
//!             Level::High => "High",
//!         }
//!     }
//! }
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Setting {
//!     #[serde(with = "extkit::variants::serde_name")]
//!     level: Level,
//! }
//!
//! let json = serde_json::to_string(&Setting { level: Level::High }).unwrap();
//! assert_eq!(json, r#"{"level":"High"}"#);
//! assert_eq!(serde_json::from_str::<Setting>(&json).unwrap(), Setting { level: Level::High });
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::{Case, NamedVariants, to_enum};

/// Serializes `value` as its variant name.
///
/// # Errors
///
/// Whatever the serializer reports for strings.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: NamedVariants,
    S: serde::Serializer,
{
    serializer.serialize_str(value.variant_name())
}

/// Deserializes a value from its exact variant name.
///
/// # Errors
///
/// Fails if the input is not a string or names no variant of `T`.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: NamedVariants,
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_str(VariantNameVisitor::new(Case::Sensitive))
}

/// The same encoding, accepting variant names in any case on input.
pub mod insensitive {
    use super::{Case, NamedVariants, VariantNameVisitor};

    pub use super::serialize;

    /// Deserializes a value from its variant name, ignoring case.
    ///
    /// # Errors
    ///
    /// Fails if the input is not a string or names no variant of `T`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: NamedVariants,
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(VariantNameVisitor::new(Case::Insensitive))
    }
}

struct VariantNameVisitor<T> {
    case: Case,
    marker: PhantomData<T>,
}

impl<T> VariantNameVisitor<T> {
    const fn new(case: Case) -> Self {
        Self {
            case,
            marker: PhantomData,
        }
    }
}

impl<T: NamedVariants> serde::de::Visitor<'_> for VariantNameVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a variant name of ")?;
        formatter.write_str(std::any::type_name::<T>())
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        to_enum::<T>(value, self.case).map_err(E::custom)
    }
}
