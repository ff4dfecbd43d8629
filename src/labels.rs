//! Display metadata for identifier kinds.
//!
//! Kept apart from [`TaxIdKind`] so the core type stays a plain tag.
//!
//! # Example
//!
//! ```rust
//! use cadastro::TaxIdKind;
//! use cadastro::labels::label;
//!
//! let l = label(TaxIdKind::Corporate);
//! assert_eq!(l.code, "cnpj");
//! assert_eq!(l.to_string(), "CNPJ");
//! ```

use std::fmt;

use serde::Serialize;

use crate::core::TaxIdKind;

/// Names and codes for one identifier kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Lowercase short code, e.g. for form field names or API payloads.
    pub code: &'static str,
    /// Uppercase acronym as printed on documents.
    pub acronym: &'static str,
    /// Official Portuguese name of the register.
    pub name_pt: &'static str,
    /// English description.
    pub name_en: &'static str,
}

impl Label {
    /// CPF — Cadastro de Pessoas Físicas.
    pub const INDIVIDUAL: Self = Self {
        code: "cpf",
        acronym: "CPF",
        name_pt: "Cadastro de Pessoas Físicas",
        name_en: "Individual Taxpayer Registry",
    };
    /// CNPJ — Cadastro Nacional da Pessoa Jurídica.
    pub const CORPORATE: Self = Self {
        code: "cnpj",
        acronym: "CNPJ",
        name_pt: "Cadastro Nacional da Pessoa Jurídica",
        name_en: "National Registry of Legal Entities",
    };
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.acronym)
    }
}

/// Look up the label for an identifier kind.
pub fn label(kind: TaxIdKind) -> &'static Label {
    match kind {
        TaxIdKind::Individual => &Label::INDIVIDUAL,
        TaxIdKind::Corporate => &Label::CORPORATE,
    }
}

/// Find the kind whose short code matches `code`, ignoring case and surrounding whitespace.
pub fn kind_for_code(code: &str) -> Option<TaxIdKind> {
    [TaxIdKind::Individual, TaxIdKind::Corporate]
        .into_iter()
        .find(|&kind| {
            let l = label(kind);
            code.trim().eq_ignore_ascii_case(l.code)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(label(TaxIdKind::Individual).code, "cpf");
        assert_eq!(label(TaxIdKind::Corporate).code, "cnpj");
    }

    #[test]
    fn display_uses_acronym() {
        assert_eq!(label(TaxIdKind::Individual).to_string(), "CPF");
    }

    #[test]
    fn lookup_by_code() {
        assert_eq!(kind_for_code("CPF"), Some(TaxIdKind::Individual));
        assert_eq!(kind_for_code(" cnpj "), Some(TaxIdKind::Corporate));
        assert_eq!(kind_for_code("rg"), None);
    }
}
