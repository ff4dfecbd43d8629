use tracing::{debug, trace};

use super::cnpj::validate_cnpj;
use super::cpf::validate_cpf;
use super::error::TaxIdError;
use super::normalize::normalize_digits;
use super::types::*;

/// Validate a CPF or CNPJ with the default [`ValidatorConfig`].
///
/// The identifier kind is chosen from the character count of `raw` as given:
/// 11 means CPF, 14 means CNPJ. The input is then reduced to its digits and
/// handed to [`validate_cpf`] or [`validate_cnpj`].
///
/// Returns [`TaxIdError::InvalidLength`] when `raw` is neither 11 nor 14
/// characters long. Bad check digits are reported as `valid: false`.
pub fn validate_tax_id(raw: &str) -> Result<TaxIdValidation, TaxIdError> {
    Validator::default().validate(raw)
}

/// Like [`validate_tax_id`], but folds the length failure into [`TaxIdCheck`].
pub fn check_tax_id(raw: &str) -> TaxIdCheck {
    Validator::default().check(raw)
}

/// Classify `raw` by its character count without checking digits.
pub fn classify_tax_id(raw: &str) -> Option<TaxIdKind> {
    Validator::default().classify(raw)
}

/// Tax ID validator carrying a [`ValidatorConfig`].
///
/// Stateless apart from its configuration; cheap to copy and share.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator with the given settings.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The settings this validator was built with.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Classify `raw` according to the configured [`LengthBasis`].
    pub fn classify(&self, raw: &str) -> Option<TaxIdKind> {
        TaxIdKind::from_length(self.measure(raw))
    }

    /// Classify and verify `raw`.
    pub fn validate(&self, raw: &str) -> Result<TaxIdValidation, TaxIdError> {
        let length = self.measure(raw);
        let Some(kind) = TaxIdKind::from_length(length) else {
            debug!(length, basis = ?self.config.length_basis, "unrecognized tax ID length");
            return Err(TaxIdError::InvalidLength { length });
        };
        debug!(?kind, length, basis = ?self.config.length_basis, "classified tax ID");

        let digits = normalize_digits(raw);
        let valid = match kind {
            TaxIdKind::Individual => validate_cpf(&digits),
            TaxIdKind::Corporate => {
                validate_cnpj(&digits)
                    && !(self.config.reject_uniform_corporate && is_uniform(&digits))
            }
        };
        trace!(?kind, valid, "tax ID check digits verified");

        Ok(TaxIdValidation { kind, valid })
    }

    /// Classify and verify `raw`, reporting an unknown length as
    /// [`TaxIdCheck::Unrecognized`] instead of an error.
    pub fn check(&self, raw: &str) -> TaxIdCheck {
        match self.validate(raw) {
            Ok(validation) => TaxIdCheck::Recognized(validation),
            Err(TaxIdError::InvalidLength { length }) => TaxIdCheck::Unrecognized { length },
        }
    }

    fn measure(&self, raw: &str) -> usize {
        match self.config.length_basis {
            LengthBasis::RawInput => raw.chars().count(),
            LengthBasis::DigitCount => raw.chars().filter(|c| c.is_ascii_digit()).count(),
        }
    }
}

fn is_uniform(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}
