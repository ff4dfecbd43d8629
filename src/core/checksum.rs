//! Weighted modulo-11 check digits shared by CPF and CNPJ.

/// Parse a string of ASCII digits into their numeric values.
///
/// Returns `None` as soon as a non-digit is found.
pub(crate) fn parse_digits(s: &str) -> Option<Vec<u32>> {
    s.chars().map(|c| c.to_digit(10)).collect()
}

/// Compute one check digit: `0` when `sum % 11 < 2`, otherwise `11 - sum % 11`.
///
/// `digits` and `weights` are zipped, so only the first `weights.len()` digits
/// contribute.
pub(crate) fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Verify the two trailing check digits of `digits`.
///
/// The first check digit is computed over `first_weights.len()` leading
/// digits; the second over those digits plus the first check digit, using
/// `second_weights`. `digits` must be exactly `first_weights.len() + 2` long.
pub(crate) fn verify_check_digits(
    digits: &[u32],
    first_weights: &[u32],
    second_weights: &[u32],
) -> bool {
    let base_len = first_weights.len();
    debug_assert_eq!(second_weights.len(), base_len + 1);
    if digits.len() != base_len + 2 {
        return false;
    }

    let mut base = digits[..base_len].to_vec();
    let first = check_digit(&base, first_weights);
    base.push(first);
    let second = check_digit(&base, second_weights);

    digits[base_len..] == [first, second]
}
