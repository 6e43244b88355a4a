//! Tag-name grammar, ASCII case-insensitive:
//!
//! - plain: a letter followed by letters/digits (`div`, `h1`, `whodey`);
//! - custom element: a letter, then letters/digits/hyphens, containing at least one hyphen
//!   (`x-custom-widget`, `my-el`; a trailing hyphen such as `x-` is accepted).
//!
//! Everything else is rejected: empty names, leading digits or hyphens, whitespace, `_`,
//! non-ASCII characters.

pub fn is_valid_tag(tag: &str) -> bool {
    let mut bytes = tag.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    // With the first byte a letter, "plain" and "custom" differ only in whether a hyphen
    // appears, and both accept every remaining byte in `[A-Za-z0-9-]`.
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

pub fn is_custom_element_name(tag: &str) -> bool {
    is_valid_tag(tag) && tag.contains('-')
}

/// Whether `name` could be written as a method/property name at a call site.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
