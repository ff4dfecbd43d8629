use super::checksum::{parse_digits, verify_check_digits};
use super::normalize::strip_separators;

/// Weights for the first CPF check digit (over 9 base digits).
const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
/// Weights for the second CPF check digit (over 9 base digits + first check digit).
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

const CPF_LEN: usize = 11;

/// Validate a CPF (individual taxpayer number) by its check digits.
///
/// Surrounding whitespace and the separators `.` and `-` are removed first;
/// any other character makes the CPF invalid. Sequences of one repeated digit
/// (`00000000000` … `99999999999`) are rejected even though their check
/// digits are arithmetically consistent.
///
/// This is a soft check: malformed input yields `false`, never an error.
pub fn validate_cpf(cpf: &str) -> bool {
    let cpf = strip_separators(cpf, &['.', '-']);
    if cpf.chars().count() != CPF_LEN {
        return false;
    }

    let Some(digits) = parse_digits(&cpf) else {
        return false;
    };

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    verify_check_digits(&digits, &FIRST_WEIGHTS, &SECOND_WEIGHTS)
}
