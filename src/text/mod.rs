//! Text utilities: trimming characters from the end and removing substrings.
//!
//! - [`remove_last`] / [`StrExt::remove_last`]: the text without its last `n`
//!   characters, leaving the input untouched
//! - [`truncate_last`] / [`StringExt::truncate_last`]: the same, in place on a
//!   `String`
//! - [`remove_many`] / [`StrExt::remove_many`]: the text with every
//!   occurrence of several patterns removed, one pattern after the other
//!
//! Character counts are in Unicode scalar values (`char`s), never bytes, so a
//! multi-byte character is removed whole.
//!
//! # Pattern order
//!
//! [`remove_many`] applies its patterns sequentially: each pattern runs on the
//! output of the previous one. Removing one pattern can therefore create or
//! destroy occurrences of the next, and reordering the patterns can change
//! the result:
//!
//! ```rust
//! use extkit::text::StrExt;
//!
//! assert_eq!("abbc".remove_many(["b", "ac"]).unwrap(), "");
//! assert_eq!("abbc".remove_many(["ac", "b"]).unwrap(), "ac");
//! ```

mod pattern;

pub use pattern::MaybeText;

use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Returns `text` without its final `count` characters.
///
/// # Errors
///
/// - [`Error::InvalidCount`] if `count` is zero
/// - [`Error::InsufficientLength`] if `text` has fewer than `count`
///   characters
///
/// # Examples
///
/// ```rust
/// use extkit::text::remove_last;
///
/// assert_eq!(remove_last("Unimaginable!", 1).unwrap(), "Unimaginable");
/// assert_eq!(remove_last("naïve", 3).unwrap(), "na");
/// assert!(remove_last("", 1).is_err());
/// ```
pub fn remove_last(text: &str, count: usize) -> Result<&str> {
    if count == 0 {
        return Err(Error::InvalidCount { count });
    }

    match text.char_indices().rev().nth(count - 1) {
        Some((boundary, _)) => Ok(&text[..boundary]),
        None => Err(Error::InsufficientLength {
            length: text.chars().count(),
            requested: count,
        }),
    }
}

/// Removes the final `count` characters of `buffer` in place.
///
/// On error the buffer is left unchanged.
///
/// # Errors
///
/// Same as [`remove_last`].
///
/// # Examples
///
/// ```rust
/// use extkit::text::truncate_last;
///
/// let mut buffer = String::from("Building with multiple characters");
/// truncate_last(&mut buffer, " multiple characters".len()).unwrap();
/// assert_eq!(buffer, "Building with");
/// ```
pub fn truncate_last(buffer: &mut String, count: usize) -> Result<()> {
    let kept = remove_last(buffer, count)?.len();
    buffer.truncate(kept);
    crate::trace_event!(removed = count, length = buffer.len(), "truncate_last");
    Ok(())
}

/// Returns `text` with every occurrence of each pattern removed.
///
/// Patterns are applied in the given order; each one removes all of its
/// non-overlapping occurrences, scanning left to right, from the result of
/// the previous pattern. All patterns are validated before any removal. An
/// empty pattern list returns a copy of `text`.
///
/// # Errors
///
/// - [`Error::MissingArgument`] if a pattern is absent (`None`)
/// - [`Error::EmptyPattern`] if a pattern is the empty string
///
/// # Examples
///
/// ```rust
/// use extkit::text::remove_many;
///
/// let text = "we want to know everything and misinterpret nothing";
/// assert_eq!(
///     remove_many(text, ["thing", "w"]).unwrap(),
///     "e ant to kno every and misinterpret no"
/// );
/// assert!(remove_many(text, [Some("perfect"), None]).is_err());
/// ```
pub fn remove_many<I>(text: &str, patterns: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: MaybeText,
{
    let patterns: SmallVec<[I::Item; 8]> = patterns.into_iter().collect();

    let mut validated: SmallVec<[&str; 8]> = SmallVec::with_capacity(patterns.len());
    for (index, pattern) in patterns.iter().enumerate() {
        match pattern.as_text() {
            None => return Err(Error::MissingArgument { parameter: "patterns" }),
            Some("") => return Err(Error::EmptyPattern { index }),
            Some(valid) => validated.push(valid),
        }
    }

    let mut output = text.to_owned();
    for pattern in validated {
        if output.contains(pattern) {
            output = output.replace(pattern, "");
        }
    }
    Ok(output)
}

/// Method forms of the text operations for `str` (and `String` through
/// deref).
pub trait StrExt {
    /// The text without its last `count` characters. See [`remove_last`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCount`] or [`Error::InsufficientLength`].
    fn remove_last(&self, count: usize) -> Result<&str>;

    /// The text with all occurrences of each pattern removed, in order. See
    /// [`remove_many`].
    ///
    /// # Errors
    ///
    /// [`Error::MissingArgument`] or [`Error::EmptyPattern`].
    fn remove_many<I>(&self, patterns: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: MaybeText;
}

impl StrExt for str {
    #[inline]
    fn remove_last(&self, count: usize) -> Result<&str> {
        remove_last(self, count)
    }

    #[inline]
    fn remove_many<I>(&self, patterns: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: MaybeText,
    {
        remove_many(self, patterns)
    }
}

/// In-place text operations for `String`.
pub trait StringExt {
    /// Removes the last `count` characters in place. See [`truncate_last`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCount`] or [`Error::InsufficientLength`].
    fn truncate_last(&mut self, count: usize) -> Result<()>;
}

impl StringExt for String {
    #[inline]
    fn truncate_last(&mut self, count: usize) -> Result<()> {
        truncate_last(self, count)
    }
}
