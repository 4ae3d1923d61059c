//! CEP (Código de Endereçamento Postal) postal codes.

use crate::digits::{strip_non_digits, Layout};
use crate::error::{DocumentError, Result};
use crate::kind::DocumentKind;

/// Number of digits in a CEP.
pub const CEP_DIGITS: usize = 8;

/// Longest string produced by [`mask_cep`].
pub const CEP_MASKED_LEN: usize = 9;

/// `XXXXX-XXX`
const CEP_LAYOUT: Layout = Layout::new("", &[5, 3], &["-"]);

document_newtype! {
    /// An eight-digit postal code.
    Cep => DocumentKind::Cep
}

pub(crate) fn check(digits: &str) -> Result<()> {
    if digits.len() == CEP_DIGITS {
        Ok(())
    } else {
        Err(DocumentError::WrongLength {
            kind: DocumentKind::Cep,
            actual: digits.len(),
        })
    }
}

/// Whether `input` holds exactly eight digits.
#[must_use]
pub fn validate_cep(input: &str) -> bool {
    check(&strip_non_digits(input)).is_ok()
}

/// Insert the dash after the fifth digit: `XXXXX-XXX`.
#[must_use]
pub fn format_cep(input: &str) -> String {
    CEP_LAYOUT.render(&strip_non_digits(input))
}

/// Re-mask a CEP field after a keystroke, cut to 9 characters.
#[must_use]
pub fn mask_cep(input: &str) -> String {
    CEP_LAYOUT.render_truncated(&strip_non_digits(input), CEP_MASKED_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_cep() {
        assert!(validate_cep("01310100"));
        assert!(validate_cep("01310-100"));
        assert!(!validate_cep("0131010"));
        assert!(!validate_cep("013101000"));
        assert!(!validate_cep(""));
    }

    #[test]
    fn test_format_cep() {
        assert_eq!(format_cep("01310100"), "01310-100");
        assert_eq!(format_cep("01310-100"), "01310-100");
        assert_eq!(format_cep("01310"), "01310");
    }

    #[test]
    fn test_mask_cep() {
        assert_eq!(mask_cep("0131"), "0131");
        assert_eq!(mask_cep("013101"), "01310-1");
        assert_eq!(mask_cep("01310-1000"), "01310-100");
    }

    #[test]
    fn test_cep_newtype() {
        let cep: Cep = "01310-100".parse().expect("valid CEP");
        assert_eq!(cep.as_digits(), "01310100");
        assert_eq!(cep.to_string(), "01310-100");
        assert_eq!(
            Cep::new("0131010"),
            Err(DocumentError::WrongLength {
                kind: DocumentKind::Cep,
                actual: 7
            })
        );
    }
}
