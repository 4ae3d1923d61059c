//! CPF (Cadastro de Pessoas Físicas) validation, formatting and masking.
//!
//! A CPF is eleven digits; the last two are check digits computed from a
//! weighted sum of the digits before them.

use crate::digits::{strip_non_digits, Layout};
use crate::error::{DocumentError, Result};
use crate::kind::DocumentKind;

/// Number of digits in a CPF.
pub const CPF_DIGITS: usize = 11;

/// Longest string produced by [`format_cpf`] and [`mask_cpf`].
pub const CPF_MASKED_LEN: usize = 14;

/// `XXX.XXX.XXX-XX`
const CPF_LAYOUT: Layout = Layout::new("", &[3, 3, 3, 2], &[".", ".", "-"]);

document_newtype! {
    /// A CPF that passed check-digit validation.
    ///
    /// ```rust
    /// use apostello_documents::Cpf;
    ///
    /// let cpf: Cpf = "52998224725".parse().expect("valid CPF");
    /// assert_eq!(cpf.to_string(), "529.982.247-25");
    /// ```
    Cpf => DocumentKind::Cpf
}

/// Check normalized CPF digits.
pub(crate) fn check(digits: &str) -> Result<()> {
    if digits.len() != CPF_DIGITS {
        return Err(DocumentError::WrongLength {
            kind: DocumentKind::Cpf,
            actual: digits.len(),
        });
    }

    let values: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();

    if values.iter().all(|&v| v == values[0]) {
        return Err(DocumentError::RepeatedDigits);
    }

    // First check digit covers 9 digits (weights 10..=2), second covers 10 (11..=2)
    for (covered, first_weight) in [(9, 10), (10, 11)] {
        if check_digit(&values[..covered], first_weight) != values[covered] {
            return Err(DocumentError::CheckDigitMismatch {
                position: covered + 1,
            });
        }
    }

    Ok(())
}

/// Weighted-sum check digit; remainders of 10 collapse to 0.
fn check_digit(prefix: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = prefix
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    let remainder = (sum * 10) % 11;
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}

/// Whether `input` holds a CPF with valid check digits. Punctuation is ignored.
#[must_use]
pub fn validate_cpf(input: &str) -> bool {
    check(&strip_non_digits(input)).is_ok()
}

/// Lay the digits of `input` out as `XXX.XXX.XXX-XX`, cut to 14 characters.
///
/// Partial input is grouped the same way [`mask_cpf`] groups it.
#[must_use]
pub fn format_cpf(input: &str) -> String {
    mask_cpf(input)
}

/// Re-mask a CPF field after a keystroke.
///
/// Punctuation appears only as digits arrive: `"1234"` becomes `"123.4"`.
#[must_use]
pub fn mask_cpf(input: &str) -> String {
    CPF_LAYOUT.render_truncated(&strip_non_digits(input), CPF_MASKED_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpfs() {
        for cpf in ["529.982.247-25", "52998224725", "123.456.789-09", " 529 982 247 25 "] {
            assert!(validate_cpf(cpf), "should accept {cpf}");
        }
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(CPF_DIGITS);
            assert!(!validate_cpf(&cpf), "should reject {cpf}");
        }
        assert_eq!(check("11111111111"), Err(DocumentError::RepeatedDigits));
    }

    #[test]
    fn test_check_digit_mismatch() {
        assert!(!validate_cpf("123.456.789-00"));
        assert_eq!(
            check("12345678900"),
            Err(DocumentError::CheckDigitMismatch { position: 11 })
        );
        assert_eq!(
            check("52998224735"),
            Err(DocumentError::CheckDigitMismatch { position: 10 })
        );
    }

    #[test]
    fn test_wrong_length() {
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("5299822472"));
        assert!(!validate_cpf("529982247250"));
        assert!(!validate_cpf("not a cpf"));
    }

    #[test]
    fn test_remainder_ten_collapses_to_zero() {
        // 1,2,...,9 sums to 210 with weights 10..=2; 2100 % 11 == 10
        assert_eq!(check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 10), 0);
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
        assert_eq!(format_cpf("529.982.247-25"), "529.982.247-25");
        assert_eq!(format_cpf("529982247251234"), "529.982.247-25");
    }

    #[test]
    fn test_format_cpf_idempotent() {
        for input in ["", "1", "1234", "1234567", "52998224725", "529.982.247-25999", "x9y8"] {
            let once = format_cpf(input);
            assert_eq!(format_cpf(&strip_non_digits(&once)), once, "input {input:?}");
            assert_eq!(format_cpf(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_mask_cpf_progressive() {
        let typed = "12345678901";
        let expected = [
            "1",
            "12",
            "123",
            "123.4",
            "123.45",
            "123.456",
            "123.456.7",
            "123.456.78",
            "123.456.789",
            "123.456.789-0",
            "123.456.789-01",
        ];

        for (len, want) in (1..=typed.len()).zip(expected) {
            assert_eq!(mask_cpf(&typed[..len]), want);
        }
    }

    #[test]
    fn test_mask_cpf_reapplied_on_masked_value() {
        // The widget feeds back its own output plus the new keystroke
        assert_eq!(mask_cpf("123.456.7890"), "123.456.789-0");
        assert_eq!(mask_cpf("123.456.789-012"), "123.456.789-01");
        assert!(mask_cpf("99999999999999999").len() <= CPF_MASKED_LEN);
    }

    #[test]
    fn test_cpf_newtype() {
        let cpf = Cpf::new("529.982.247-25").expect("valid CPF");
        assert_eq!(cpf.as_digits(), "52998224725");
        assert_eq!(cpf.to_string(), "529.982.247-25");
        assert_eq!(
            Cpf::new("123.456.789-00"),
            Err(DocumentError::CheckDigitMismatch { position: 11 })
        );
    }
}
