//! Dispatch over the identifier kinds a masked input field can carry.

use crate::digits::strip_non_digits;
use crate::error::{DocumentError, Result};
use crate::{cep, cpf, phone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier kinds with a validate / format / mask capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Individual taxpayer number
    Cpf,
    /// Landline or mobile number
    #[serde(alias = "telefone")]
    Phone,
    /// Postal code
    Cep,
}

impl DocumentKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::Cpf, Self::Phone, Self::Cep];

    /// Stable lowercase tag, matching the serde representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Phone => "phone",
            Self::Cep => "cep",
        }
    }

    /// Get a human-readable name for the kind.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Phone => "phone number",
            Self::Cep => "CEP",
        }
    }

    /// Longest string [`mask`](Self::mask) can return.
    #[must_use]
    pub fn max_masked_len(&self) -> usize {
        match self {
            Self::Cpf => cpf::CPF_MASKED_LEN,
            Self::Phone => phone::PHONE_MASKED_LEN,
            Self::Cep => cep::CEP_MASKED_LEN,
        }
    }

    /// Validate `input`, reporting why it was rejected.
    pub fn check(self, input: &str) -> Result<()> {
        let digits = strip_non_digits(input);
        match self {
            Self::Cpf => cpf::check(&digits),
            Self::Phone => phone::check(&digits),
            Self::Cep => cep::check(&digits),
        }
    }

    /// Whether `input` is a valid identifier of this kind.
    #[must_use]
    pub fn validate(self, input: &str) -> bool {
        self.check(input).is_ok()
    }

    /// Format `input` for display.
    #[must_use]
    pub fn format(self, input: &str) -> String {
        match self {
            Self::Cpf => cpf::format_cpf(input),
            Self::Phone => phone::format_phone(input),
            Self::Cep => cep::format_cep(input),
        }
    }

    /// Re-mask partial `input` after a keystroke.
    #[must_use]
    pub fn mask(self, input: &str) -> String {
        match self {
            Self::Cpf => cpf::mask_cpf(input),
            Self::Phone => phone::mask_phone(input),
            Self::Cep => cep::mask_cep(input),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for DocumentKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "phone" | "telefone" => Ok(Self::Phone),
            "cep" => Ok(Self::Cep),
            _ => Err(DocumentError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_free_functions() {
        let inputs = ["", "1234", "52998224725", "11987654321", "01310-100", "abc"];

        for input in inputs {
            assert_eq!(DocumentKind::Cpf.validate(input), cpf::validate_cpf(input));
            assert_eq!(DocumentKind::Cpf.mask(input), cpf::mask_cpf(input));
            assert_eq!(DocumentKind::Phone.validate(input), phone::validate_phone(input));
            assert_eq!(DocumentKind::Phone.format(input), phone::format_phone(input));
            assert_eq!(DocumentKind::Cep.validate(input), cep::validate_cep(input));
            assert_eq!(DocumentKind::Cep.mask(input), cep::mask_cep(input));
        }
    }

    #[test]
    fn test_mask_never_exceeds_limit() {
        let long = "9".repeat(40);
        for kind in DocumentKind::ALL {
            assert!(kind.mask(&long).len() <= kind.max_masked_len(), "{kind}");
        }
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("cpf".parse::<DocumentKind>(), Ok(DocumentKind::Cpf));
        assert_eq!("Telefone".parse::<DocumentKind>(), Ok(DocumentKind::Phone));
        assert_eq!(" CEP ".parse::<DocumentKind>(), Ok(DocumentKind::Cep));
        assert_eq!(
            "rg".parse::<DocumentKind>(),
            Err(DocumentError::UnknownKind("rg".to_string()))
        );
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&DocumentKind::Phone).expect("serialize kind");
        assert_eq!(json, "\"phone\"");

        let parsed: DocumentKind = serde_json::from_str("\"telefone\"").expect("deserialize alias");
        assert_eq!(parsed, DocumentKind::Phone);

        for kind in DocumentKind::ALL {
            let json = serde_json::to_string(&kind).expect("serialize kind");
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
