//! Configured entry point for the policy-dependent checks.

use crate::birth_date;
use crate::password::{PasswordCheck, PasswordPolicy};
use apostello_core::ValidationConfig;
use chrono::{NaiveDate, Utc};

/// Password and birth-date checks bound to a [`ValidationConfig`].
///
/// Identifier checks take no configuration; use
/// [`DocumentKind`](crate::DocumentKind) for those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    password: PasswordPolicy,
    max_age_years: u32,
}

impl Default for Validator {
    fn default() -> Self {
        Self::from_config(&ValidationConfig::default())
    }
}

impl Validator {
    /// Build the checks described by `config`.
    #[must_use]
    pub fn from_config(config: &ValidationConfig) -> Self {
        let password = PasswordPolicy::from_config(&config.password);
        tracing::debug!(
            rules = password.rules().len(),
            max_age_years = config.birth_date.max_age_years,
            "Configured validator"
        );

        Self {
            password,
            max_age_years: config.birth_date.max_age_years,
        }
    }

    /// The password rules in evaluation order.
    #[must_use]
    pub fn password_policy(&self) -> &PasswordPolicy {
        &self.password
    }

    /// Oldest accepted age, in calendar years.
    #[must_use]
    pub fn max_age_years(&self) -> u32 {
        self.max_age_years
    }

    /// Check `password` against the configured rules.
    #[must_use]
    pub fn check_password(&self, password: &str) -> PasswordCheck {
        self.password.check(password)
    }

    /// Check a birth date against the current UTC date.
    #[must_use]
    pub fn validate_birth_date(&self, input: &str) -> bool {
        self.validate_birth_date_on(input, Utc::now().date_naive())
    }

    /// Check a birth date against `today`.
    #[must_use]
    pub fn validate_birth_date_on(&self, input: &str, today: NaiveDate) -> bool {
        birth_date::is_plausible(input, today, self.max_age_years)
    }
}
