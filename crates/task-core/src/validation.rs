//! Description validation.

/// Longest description accepted, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Returns `true` when `value` fits the description length limit.
///
/// Length is counted in characters, not bytes. No minimum is enforced here;
/// callers that need a non-empty description check that themselves.
#[must_use]
pub fn is_valid_description(value: &str) -> bool {
    value.chars().count() <= MAX_DESCRIPTION_LEN
}
