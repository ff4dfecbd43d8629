#![no_main]

use cadastro::{LengthBasis, Validator, ValidatorConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — invalid lengths and bad check digits are fine.
        let _ = cadastro::validate_tax_id(s);
        let _ = cadastro::validate_cpf(s);
        let _ = cadastro::validate_cnpj(s);

        let by_digits = Validator::new(ValidatorConfig {
            length_basis: LengthBasis::DigitCount,
            reject_uniform_corporate: true,
        });
        let _ = by_digits.check(s);
    }
});
