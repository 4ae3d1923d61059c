//! Rejection reasons for Brazilian identifiers.

use crate::kind::DocumentKind;
use apostello_core::CoreError;
use thiserror::Error;

/// Why an identifier was rejected.
///
/// The boolean validators discard this; the typed constructors
/// ([`Cpf::new`](crate::Cpf::new) and friends) surface it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Wrong number of digits after normalization
    #[error("{kind} has an invalid number of digits: {actual}")]
    WrongLength {
        /// Document being validated
        kind: DocumentKind,
        /// Digits found
        actual: usize,
    },

    /// Every digit is the same (e.g. `000.000.000-00`)
    #[error("CPF cannot be a single repeated digit")]
    RepeatedDigits,

    /// A CPF check digit does not match the weighted sum
    #[error("CPF check digit at position {position} does not match")]
    CheckDigitMismatch {
        /// 1-based position of the failing digit (10 or 11)
        position: usize,
    },

    /// Area code (DDD) outside 11..=99
    #[error("area code {area_code} is out of range")]
    AreaCodeOutOfRange {
        /// The two leading digits
        area_code: u8,
    },

    /// An 11-digit number whose third digit is not `9`
    #[error("mobile numbers must start with 9 after the area code")]
    MobileWithoutNine,

    /// Unrecognized document kind name
    #[error("unknown document kind: {0}")]
    UnknownKind(String),
}

impl From<DocumentError> for CoreError {
    fn from(err: DocumentError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

/// Result type alias using `DocumentError`.
pub type Result<T> = std::result::Result<T, DocumentError>;
