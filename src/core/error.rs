use thiserror::Error;

/// Structural failures raised before any check digit is examined.
///
/// A well-formed input with wrong check digits is not an error: it yields
/// a [`TaxIdValidation`](super::TaxIdValidation) with `valid: false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TaxIdError {
    /// The input length matches neither a CPF (11) nor a CNPJ (14).
    #[error("invalid tax ID length {length}: expected 11 (CPF) or 14 (CNPJ)")]
    InvalidLength {
        /// Length that was measured, in characters.
        length: usize,
    },
}
