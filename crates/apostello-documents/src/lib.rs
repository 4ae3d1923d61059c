//! Apostello Documents - Validation and input masking for Brazilian identifiers.
//!
//! This crate holds the checks every Apostello form relies on:
//!
//! - **CPF**, **phone** and **CEP**: validate, format for display, and
//!   progressively mask partial input as it is typed. [`DocumentKind`]
//!   dispatches over the three so a masked field only needs a tag.
//! - **E-mail** and **URL** shape checks.
//! - **Password strength** as an ordered rule chain returning a message.
//! - **Birth date** plausibility.
//!
//! All functions are pure. Validators return `false` (or an invalid
//! [`PasswordCheck`]) for malformed input and never panic; formatters and
//! maskers truncate or pass input through.
//!
//! Typed callers can hold [`Cpf`], [`Phone`] and [`Cep`] values, which can
//! only be built from valid input and report a [`DocumentError`] otherwise.
//!
//! ## Example
//!
//! ```rust
//! use apostello_documents::{mask_cpf, validate_cpf, DocumentKind};
//!
//! assert_eq!(mask_cpf("1234"), "123.4");
//! assert!(validate_cpf("529.982.247-25"));
//!
//! let kind: DocumentKind = "telefone".parse().expect("known kind");
//! assert_eq!(kind.mask("11987654321"), "(11) 98765-4321");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

#[macro_use]
mod newtype;

pub mod birth_date;
pub mod cep;
pub mod contact;
pub mod cpf;
pub mod digits;
pub mod error;
pub mod kind;
pub mod password;
pub mod phone;
pub mod validator;

pub use birth_date::{parse_date, validate_birth_date, validate_birth_date_on, MAX_AGE_YEARS};
pub use cep::{format_cep, mask_cep, validate_cep, Cep};
pub use contact::{validate_email, validate_url};
pub use cpf::{format_cpf, mask_cpf, validate_cpf, Cpf};
pub use digits::strip_non_digits;
pub use error::{DocumentError, Result};
pub use kind::DocumentKind;
pub use password::{
    validate_strong_password, PasswordCheck, PasswordPolicy, PasswordRule, VALID_PASSWORD_MESSAGE,
};
pub use phone::{format_phone, mask_phone, validate_phone, Phone};
pub use validator::Validator;
