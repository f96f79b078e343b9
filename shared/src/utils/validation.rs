//! Common validation utilities
//!
//! Form fields are plain text; the only rule the signup page enforces is
//! that a field holds something other than whitespace.

/// Check if a value is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Return the name of the first blank field, in the order given
pub fn first_blank<'a>(fields: &[(&'a str, &str)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| is_blank(value))
        .map(|(name, _)| *name)
}
