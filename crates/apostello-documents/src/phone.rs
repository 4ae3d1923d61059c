//! Brazilian phone numbers: 10-digit landlines and 11-digit mobiles.

use crate::digits::{strip_non_digits, Layout};
use crate::error::{DocumentError, Result};
use crate::kind::DocumentKind;

/// Digits in a landline number, area code included.
pub const LANDLINE_DIGITS: usize = 10;

/// Digits in a mobile number, area code included.
pub const MOBILE_DIGITS: usize = 11;

/// Longest string produced by [`mask_phone`].
pub const PHONE_MASKED_LEN: usize = 15;

/// `(XX) XXXX-XXXX`
const LANDLINE_LAYOUT: Layout = Layout::new("(", &[2, 4, 4], &[") ", "-"]);

/// `(XX) XXXXX-XXXX`
const MOBILE_LAYOUT: Layout = Layout::new("(", &[2, 5, 4], &[") ", "-"]);

document_newtype! {
    /// A landline or mobile number with a valid area code.
    Phone => DocumentKind::Phone
}

/// Check normalized phone digits.
pub(crate) fn check(digits: &str) -> Result<()> {
    let bytes = digits.as_bytes();

    if bytes.len() != LANDLINE_DIGITS && bytes.len() != MOBILE_DIGITS {
        return Err(DocumentError::WrongLength {
            kind: DocumentKind::Phone,
            actual: bytes.len(),
        });
    }

    let area_code = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    if !(11..=99).contains(&area_code) {
        return Err(DocumentError::AreaCodeOutOfRange { area_code });
    }

    if bytes.len() == MOBILE_DIGITS && bytes[2] != b'9' {
        return Err(DocumentError::MobileWithoutNine);
    }

    Ok(())
}

/// Whether `input` is a valid landline or mobile number.
#[must_use]
pub fn validate_phone(input: &str) -> bool {
    check(&strip_non_digits(input)).is_ok()
}

/// Format a complete number; other lengths come back as bare digits.
#[must_use]
pub fn format_phone(input: &str) -> String {
    let digits = strip_non_digits(input);

    match digits.len() {
        LANDLINE_DIGITS => LANDLINE_LAYOUT.render(&digits),
        MOBILE_DIGITS => MOBILE_LAYOUT.render(&digits),
        _ => digits,
    }
}

/// Re-mask a phone field after a keystroke.
///
/// Up to ten digits use the landline grouping; the eleventh switches to the
/// mobile grouping.
#[must_use]
pub fn mask_phone(input: &str) -> String {
    let digits = strip_non_digits(input);
    let layout = if digits.len() <= LANDLINE_DIGITS {
        LANDLINE_LAYOUT
    } else {
        MOBILE_LAYOUT
    };

    layout.render_truncated(&digits, PHONE_MASKED_LEN)
}
