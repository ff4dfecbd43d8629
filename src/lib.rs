//! # cadastro
//!
//! Validation of Brazilian taxpayer identification numbers:
//! CPF (individuals, 11 digits) and CNPJ (legal entities, 14 digits).
//!
//! Both identifiers carry two trailing check digits computed with a weighted
//! modulo-11 sum. Validation never touches the network or the filesystem.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::*;
//!
//! let result = validate_tax_id("11144477735").unwrap();
//! assert_eq!(result.kind, TaxIdKind::Individual);
//! assert!(result.valid);
//!
//! let result = validate_tax_id("11222333000181").unwrap();
//! assert_eq!(result.kind, TaxIdKind::Corporate);
//! assert!(result.valid);
//!
//! // Neither 11 nor 14 characters long: structural failure, not `valid: false`.
//! assert!(matches!(
//!     validate_tax_id("123"),
//!     Err(TaxIdError::InvalidLength { length: 3 })
//! ));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Normalization, classification, CPF/CNPJ check digits |
//! | `labels` | Display names and short codes for identifier types |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "labels")]
pub mod labels;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
