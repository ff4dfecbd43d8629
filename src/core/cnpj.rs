use super::checksum::{parse_digits, verify_check_digits};
use super::normalize::strip_separators;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

const CNPJ_LEN: usize = 14;

/// Validate a CNPJ (legal entity number) by its check digits.
///
/// Surrounding whitespace and the separators `.`, `-` and `/` are removed
/// first; any other character makes the CNPJ invalid. Unlike
/// [`validate_cpf`](super::validate_cpf), repeated-digit sequences are not
/// rejected here, so `00000000000000` passes. Use
/// [`ValidatorConfig::reject_uniform_corporate`](super::ValidatorConfig) to
/// reject it through the [`Validator`](super::Validator).
pub fn validate_cnpj(cnpj: &str) -> bool {
    let cnpj = strip_separators(cnpj, &['.', '-', '/']);
    if cnpj.chars().count() != CNPJ_LEN {
        return false;
    }

    match parse_digits(&cnpj) {
        Some(digits) => verify_check_digits(&digits, &FIRST_WEIGHTS, &SECOND_WEIGHTS),
        None => false,
    }
}
