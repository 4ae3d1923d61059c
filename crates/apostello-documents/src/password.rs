//! Password strength rules evaluated as an ordered short-circuit chain.
//!
//! The first rule a password breaks decides the message shown to the user,
//! so rule order is part of a policy's behavior.

use apostello_core::PasswordConfig;
use serde::{Deserialize, Serialize};

/// Message returned when every rule passes.
pub const VALID_PASSWORD_MESSAGE: &str = "Senha válida";

/// A single password requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    /// At least this many characters
    MinLength(usize),
    /// At least one ASCII uppercase letter
    Uppercase,
    /// At least one ASCII lowercase letter
    Lowercase,
    /// At least one ASCII digit
    Digit,
}

impl PasswordRule {
    /// Whether `password` satisfies the rule.
    #[must_use]
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            Self::MinLength(min) => password.chars().count() >= *min,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    /// User-facing message for a password that breaks the rule.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::MinLength(min) => format!("A senha deve ter no mínimo {min} caracteres"),
            Self::Uppercase => "A senha deve conter pelo menos uma letra maiúscula".to_string(),
            Self::Lowercase => "A senha deve conter pelo menos uma letra minúscula".to_string(),
            Self::Digit => "A senha deve conter pelo menos um número".to_string(),
        }
    }
}

/// Outcome of a password check, shaped for hand-off to a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCheck {
    /// Whether every rule passed
    pub valid: bool,
    /// First failing rule's message, or [`VALID_PASSWORD_MESSAGE`]
    pub message: String,
}

impl PasswordCheck {
    fn passed() -> Self {
        Self {
            valid: true,
            message: VALID_PASSWORD_MESSAGE.to_string(),
        }
    }

    fn failed(rule: PasswordRule) -> Self {
        Self {
            valid: false,
            message: rule.message(),
        }
    }

    /// Whether the password was accepted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// An ordered list of [`PasswordRule`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    rules: Vec<PasswordRule>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::strong()
    }
}

impl PasswordPolicy {
    /// Create a policy from rules, evaluated in the given order.
    #[must_use]
    pub fn new(rules: Vec<PasswordRule>) -> Self {
        Self { rules }
    }

    /// Eight characters with uppercase, lowercase and a digit.
    #[must_use]
    pub fn strong() -> Self {
        Self::new(vec![
            PasswordRule::MinLength(8),
            PasswordRule::Uppercase,
            PasswordRule::Lowercase,
            PasswordRule::Digit,
        ])
    }

    /// Six characters with an uppercase letter and a digit.
    ///
    /// These are the rules the profile form has historically applied.
    #[must_use]
    pub fn basic() -> Self {
        Self::new(vec![
            PasswordRule::MinLength(6),
            PasswordRule::Uppercase,
            PasswordRule::Digit,
        ])
    }

    /// Build a policy from configuration. Length is always checked first.
    #[must_use]
    pub fn from_config(config: &PasswordConfig) -> Self {
        let mut rules = vec![PasswordRule::MinLength(config.min_length)];
        if config.require_uppercase {
            rules.push(PasswordRule::Uppercase);
        }
        if config.require_lowercase {
            rules.push(PasswordRule::Lowercase);
        }
        if config.require_digit {
            rules.push(PasswordRule::Digit);
        }
        Self::new(rules)
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[PasswordRule] {
        &self.rules
    }

    /// Evaluate `password`, stopping at the first broken rule.
    #[must_use]
    pub fn check(&self, password: &str) -> PasswordCheck {
        self.rules
            .iter()
            .find(|rule| !rule.is_satisfied_by(password))
            .map_or_else(PasswordCheck::passed, |rule| PasswordCheck::failed(*rule))
    }
}

/// Check `password` against the [`PasswordPolicy::strong`] rules.
#[must_use]
pub fn validate_strong_password(password: &str) -> PasswordCheck {
    PasswordPolicy::strong().check(password)
}
