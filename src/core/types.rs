use serde::{Deserialize, Serialize};

/// Kind of Brazilian taxpayer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxIdKind {
    /// CPF (Cadastro de Pessoas Físicas) — natural persons, 11 digits.
    Individual,
    /// CNPJ (Cadastro Nacional da Pessoa Jurídica) — legal entities, 14 digits.
    Corporate,
}

impl TaxIdKind {
    /// Number of digits in an identifier of this kind, check digits included.
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Individual => 11,
            Self::Corporate => 14,
        }
    }

    /// Map a length to the kind it identifies, if any.
    pub const fn from_length(length: usize) -> Option<Self> {
        match length {
            11 => Some(Self::Individual),
            14 => Some(Self::Corporate),
            _ => None,
        }
    }
}

/// Outcome of validating a recognized tax ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxIdValidation {
    /// Which identifier the input was classified as.
    pub kind: TaxIdKind,
    /// Whether the check digits (and format) are valid.
    pub valid: bool,
}

/// Infallible counterpart of `Result<TaxIdValidation, TaxIdError>`.
///
/// Returned by [`check_tax_id`](super::check_tax_id) and
/// [`Validator::check`](super::Validator::check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaxIdCheck {
    /// The input length matches no identifier kind.
    Unrecognized {
        /// Measured length, in characters.
        length: usize,
    },
    /// The input was classified; `valid` tells whether it passed.
    Recognized(TaxIdValidation),
}

impl TaxIdCheck {
    /// `true` only for a recognized identifier with valid check digits.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Recognized(TaxIdValidation { valid: true, .. }))
    }

    /// The classified kind, if recognized.
    pub fn kind(&self) -> Option<TaxIdKind> {
        match self {
            Self::Recognized(v) => Some(v.kind),
            Self::Unrecognized { .. } => None,
        }
    }
}

/// Which length decides between CPF and CNPJ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthBasis {
    /// Character count of the raw, unnormalized input.
    ///
    /// A formatted CPF such as `111.444.777-35` (14 characters) is routed to
    /// the CNPJ verifier and fails there.
    #[default]
    RawInput,
    /// Number of ASCII digits in the input, ignoring everything else.
    DigitCount,
}

/// Validator settings, embeddable in a host application's config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// How inputs are classified as CPF or CNPJ.
    pub length_basis: LengthBasis,
    /// Also reject CNPJs made of a single repeated digit (`00000000000000`).
    pub reject_uniform_corporate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_counts() {
        assert_eq!(TaxIdKind::Individual.digit_count(), 11);
        assert_eq!(TaxIdKind::Corporate.digit_count(), 14);
    }

    #[test]
    fn from_length() {
        assert_eq!(TaxIdKind::from_length(11), Some(TaxIdKind::Individual));
        assert_eq!(TaxIdKind::from_length(14), Some(TaxIdKind::Corporate));
        assert_eq!(TaxIdKind::from_length(12), None);
        assert_eq!(TaxIdKind::from_length(0), None);
    }

    #[test]
    fn check_accessors() {
        let ok = TaxIdCheck::Recognized(TaxIdValidation {
            kind: TaxIdKind::Corporate,
            valid: true,
        });
        assert!(ok.is_valid());
        assert_eq!(ok.kind(), Some(TaxIdKind::Corporate));

        let bad = TaxIdCheck::Recognized(TaxIdValidation {
            kind: TaxIdKind::Individual,
            valid: false,
        });
        assert!(!bad.is_valid());

        let none = TaxIdCheck::Unrecognized { length: 3 };
        assert!(!none.is_valid());
        assert_eq!(none.kind(), None);
    }

    #[test]
    fn default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.length_basis, LengthBasis::RawInput);
        assert!(!config.reject_uniform_corporate);
    }
}
