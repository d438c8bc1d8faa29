/// Returns `true` if `text` is shaped like a variant name.
///
/// A valid name follows Rust's identifier grammar: it starts with an
/// `XID_Start` character or `_` and continues with `XID_Continue`
/// characters. Whitespace, punctuation and comma-separated flag lists are
/// rejected.
///
/// # Examples
///
/// ```rust
/// use extkit::variants::is_valid_identifier;
///
/// assert!(is_valid_identifier("FormKC"));
/// assert!(is_valid_identifier("_private2"));
/// assert!(!is_valid_identifier("an invalid name"));
/// assert!(!is_valid_identifier("9lives"));
/// ```
pub fn is_valid_identifier(text: &str) -> bool {
    let mut characters = text.chars();
    match characters.next() {
        Some(first) if unicode_ident::is_xid_start(first) || first == '_' => {
            characters.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}
