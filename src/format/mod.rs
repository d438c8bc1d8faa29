//! Format-aware string conversion.
//!
//! [`to_formatted_string`] renders a value with a format string when the
//! value's type understands one, and falls back to [`Display`] otherwise:
//!
//! - A type opts in by implementing [`Formattable`] and returning itself from
//!   [`Render::as_formattable`].
//! - Every other [`Render`] type is rendered with `Display` and the format is
//!   ignored.
//!
//! The integer and floating-point types accept the numeric specifiers below.
//! With the `chrono` feature the chrono date and time types accept strftime
//! patterns.
//!
//! # Numeric specifiers
//!
//! | Specifier | Meaning | Default precision |
//! |---|---|---|
//! | `""`, `G` | general | |
//! | `D[n]` | zero-padded decimal (integers only) | 0 |
//! | `X[n]`, `x[n]` | hexadecimal (integers only) | 0 |
//! | `F[n]` | fixed-point | 2 |
//! | `N[n]` | grouped fixed-point | 2 |
//! | `E[n]`, `e[n]` | scientific | 6 |
//!
//! # Examples
//!
//! ```rust
//! use extkit::format::{FormatContext, to_formatted_string};
//!
//! assert_eq!(to_formatted_string(&1_234_567, "N0", None).unwrap(), "1,234,567");
//! assert_eq!(to_formatted_string(&255_u8, "X4", None).unwrap(), "00FF");
//! assert_eq!(to_formatted_string("plain text", "N0", None).unwrap(), "plain text");
//!
//! let german = FormatContext::new("de-DE")
//!     .with_decimal_separator(",")
//!     .with_group_separator(".");
//! assert_eq!(to_formatted_string(&1234.5, "N1", Some(&german)).unwrap(), "1.234,5");
//! ```

#[cfg(feature = "chrono")]
mod datetime;
mod numeric;

use std::borrow::Cow;
use std::fmt::Display;

use crate::error::Result;
use numeric::IntegerParts;

/// Culture-like settings for numeric formatting.
///
/// [`FormatContext::invariant`] (also the [`Default`]) uses `.` as decimal
/// separator, `,` as group separator and `-` as negative sign, and has an
/// empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatContext {
    name: Cow<'static, str>,
    decimal_separator: Cow<'static, str>,
    group_separator: Cow<'static, str>,
    negative_sign: Cow<'static, str>,
}

impl FormatContext {
    /// The culture-independent context.
    #[must_use]
    pub const fn invariant() -> Self {
        Self {
            name: Cow::Borrowed(""),
            decimal_separator: Cow::Borrowed("."),
            group_separator: Cow::Borrowed(","),
            negative_sign: Cow::Borrowed("-"),
        }
    }

    /// A context named `name` with the invariant separators.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::invariant()
        }
    }

    /// Replaces the decimal separator.
    #[must_use]
    pub fn with_decimal_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Replaces the group separator.
    #[must_use]
    pub fn with_group_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.group_separator = separator.into();
        self
    }

    /// Replaces the negative sign.
    #[must_use]
    pub fn with_negative_sign(mut self, sign: impl Into<Cow<'static, str>>) -> Self {
        self.negative_sign = sign.into();
        self
    }

    /// The context's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Separator between integral and fractional digits.
    #[must_use]
    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    /// Separator between groups of three integral digits.
    #[must_use]
    pub fn group_separator(&self) -> &str {
        &self.group_separator
    }

    /// Prefix of negative numbers.
    #[must_use]
    pub fn negative_sign(&self) -> &str {
        &self.negative_sign
    }
}

impl Default for FormatContext {
    fn default() -> Self {
        Self::invariant()
    }
}

/// Types that render themselves according to a format string.
///
/// # Examples
///
/// ```rust
/// use extkit::format::{FormatContext, Formattable, Render, to_formatted_string};
/// use std::fmt;
///
/// struct Invoice {
///     number: u32,
///     total: f64,
/// }
///
/// impl fmt::Display for Invoice {
///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(formatter, "#{} {}", self.number, self.total)
///     }
/// }
///
/// impl Formattable for Invoice {
///     fn format_with(&self, format: &str, context: &FormatContext) -> extkit::Result<String> {
///         Ok(format!("#{} {}", self.number, self.total.format_with(format, context)?))
///     }
/// }
///
/// impl Render for Invoice {
///     fn as_formattable(&self) -> Option<&dyn Formattable> {
///         Some(self)
///     }
/// }
///
/// let invoice = Invoice { number: 7, total: 1999.5 };
/// assert_eq!(to_formatted_string(&invoice, "N2", None).unwrap(), "#7 1,999.50");
/// ```
pub trait Formattable {
    /// Renders `self` with `format` under `context`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`](crate::Error::InvalidFormat) if `format` does
    /// not apply to this type.
    fn format_with(&self, format: &str, context: &FormatContext) -> Result<String>;
}

/// Values that [`to_formatted_string`] can render.
///
/// The default [`as_formattable`](Self::as_formattable) returns `None`, which
/// selects the `Display` fallback. Implement it to return `Some(self)` for
/// types that are [`Formattable`].
pub trait Render: Display {
    /// This value as a [`Formattable`], if its type is one.
    fn as_formattable(&self) -> Option<&dyn Formattable> {
        None
    }

    /// Method form of [`to_formatted_string`].
    ///
    /// # Errors
    ///
    /// Same as [`to_formatted_string`].
    fn to_formatted_string(&self, format: &str, context: Option<&FormatContext>) -> Result<String> {
        to_formatted_string(self, format, context)
    }
}

/// Renders `value` with `format`, or with `Display` if its type takes no
/// format.
///
/// `context` defaults to [`FormatContext::invariant`].
///
/// # Errors
///
/// [`Error::InvalidFormat`](crate::Error::InvalidFormat) if the value is
/// [`Formattable`] and rejects `format`. The `Display` fallback never fails.
///
/// # Examples
///
/// ```rust
/// use extkit::format::to_formatted_string;
///
/// assert_eq!(to_formatted_string(&0, "", None).unwrap(), "0");
/// assert_eq!(to_formatted_string(&-42_i64, "D5", None).unwrap(), "-00042");
/// assert_eq!(to_formatted_string(&true, "ignored", None).unwrap(), "true");
/// assert!(to_formatted_string(&1.5_f64, "X", None).is_err());
/// ```
pub fn to_formatted_string<T: Render + ?Sized>(
    value: &T,
    format: &str,
    context: Option<&FormatContext>,
) -> Result<String> {
    match value.as_formattable() {
        Some(formattable) => {
            let invariant = FormatContext::invariant();
            formattable.format_with(format, context.unwrap_or(&invariant))
        }
        None => Ok(value.to_string()),
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn as_formattable(&self) -> Option<&dyn Formattable> {
        (**self).as_formattable()
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn as_formattable(&self) -> Option<&dyn Formattable> {
        (**self).as_formattable()
    }
}

macro_rules! impl_render_for_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {}
        )*
    };
}

impl_render_for_display!(
    bool,
    char,
    str,
    String,
    Cow<'_, str>,
    crate::Error,
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr,
);

macro_rules! impl_formattable_for_signed {
    ($(($signed:ty, $unsigned:ty)),* $(,)?) => {
        $(
            impl Formattable for $signed {
                #[allow(clippy::cast_lossless, clippy::cast_sign_loss, clippy::unnecessary_cast)]
                fn format_with(&self, format: &str, context: &FormatContext) -> Result<String> {
                    let parts = IntegerParts {
                        negative: *self < 0,
                        magnitude: self.unsigned_abs() as u128,
                        bits: *self as $unsigned as u128,
                    };
                    numeric::format_integer(parts, format, context)
                }
            }

            impl Render for $signed {
                fn as_formattable(&self) -> Option<&dyn Formattable> {
                    Some(self)
                }
            }
        )*
    };
}

macro_rules! impl_formattable_for_unsigned {
    ($($unsigned:ty),* $(,)?) => {
        $(
            impl Formattable for $unsigned {
                #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
                fn format_with(&self, format: &str, context: &FormatContext) -> Result<String> {
                    let parts = IntegerParts {
                        negative: false,
                        magnitude: *self as u128,
                        bits: *self as u128,
                    };
                    numeric::format_integer(parts, format, context)
                }
            }

            impl Render for $unsigned {
                fn as_formattable(&self) -> Option<&dyn Formattable> {
                    Some(self)
                }
            }
        )*
    };
}

macro_rules! impl_formattable_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Formattable for $float {
                fn format_with(&self, format: &str, context: &FormatContext) -> Result<String> {
                    numeric::format_float(f64::from(*self), &self.to_string(), format, context)
                }
            }

            impl Render for $float {
                fn as_formattable(&self) -> Option<&dyn Formattable> {
                    Some(self)
                }
            }
        )*
    };
}

impl_formattable_for_signed!(
    (i8, u8),
    (i16, u16),
    (i32, u32),
    (i64, u64),
    (i128, u128),
    (isize, usize),
);

impl_formattable_for_unsigned!(u8, u16, u32, u64, u128, usize);

impl_formattable_for_float!(f32, f64);
