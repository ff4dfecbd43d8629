//! Core tax ID types, normalization, and check digit validation.
//!
//! [`validate_tax_id`] is the main entry point. The per-type verifiers
//! [`validate_cpf`] and [`validate_cnpj`] are public as well and apply their
//! own, narrower punctuation stripping.

mod checksum;
mod cnpj;
mod cpf;
mod error;
mod normalize;
mod types;
mod validation;

pub use cnpj::validate_cnpj;
pub use cpf::validate_cpf;
pub use error::*;
pub use normalize::normalize_digits;
pub use types::*;
pub use validation::*;
