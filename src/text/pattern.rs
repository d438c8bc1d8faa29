//! Pattern arguments that may be absent.

/// A removal pattern that may be missing.
///
/// Pattern lists accept plain strings as well as `Option`s of them, so an
/// absent entry can be represented and rejected instead of being silently
/// skipped.
///
/// # Examples
///
/// ```rust
/// use extkit::text::MaybeText;
///
/// assert_eq!("word".as_text(), Some("word"));
/// assert_eq!(Some(String::from("word")).as_text(), Some("word"));
/// assert_eq!(None::<&str>.as_text(), None);
/// ```
pub trait MaybeText {
    /// The pattern text, or `None` if it is absent.
    fn as_text(&self) -> Option<&str>;
}

impl MaybeText for str {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl MaybeText for String {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: MaybeText + ?Sized> MaybeText for &T {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: MaybeText> MaybeText for Option<T> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(MaybeText::as_text)
    }
}
