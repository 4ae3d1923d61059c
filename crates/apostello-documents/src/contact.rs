//! E-mail and URL shape checks.
//!
//! Both are form-level usability checks, not security boundaries: the e-mail
//! pattern accepts anything shaped like `local@domain.tld`.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Whether `input` looks like `local@domain.tld`.
///
/// Each part must be non-empty and free of whitespace and `@`.
#[must_use]
pub fn validate_email(input: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

    regex.is_match(input)
}

/// Whether `input` parses as an absolute URL.
#[must_use]
pub fn validate_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}
