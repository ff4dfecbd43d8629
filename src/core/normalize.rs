/// Strip every character that is not an ASCII digit.
///
/// Order is preserved and the function never fails: `""` yields `""`.
/// Non-ASCII digits (e.g. `'٣'`) are removed as well.
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Trim surrounding whitespace and drop the given separator characters,
/// leaving any other character in place.
pub(crate) fn strip_separators(raw: &str, separators: &[char]) -> String {
    raw.trim().chars().filter(|c| !separators.contains(c)).collect()
}
