//! Digit normalization and fixed-width punctuation layouts.

/// Remove every character that is not an ASCII digit.
///
/// This is the normalized form all validation arithmetic runs on.
#[must_use]
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// A punctuation template laid over a run of digits.
///
/// Digits are split into fixed-width groups. The separator in front of a
/// group is only written once that group has at least one digit, so partial
/// input renders without trailing punctuation. The last group absorbs any
/// digits beyond the template; callers truncate when they need a cap.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Layout {
    /// Written before the first group once a second group starts.
    open: &'static str,
    groups: &'static [usize],
    /// `separators[i]` precedes `groups[i + 1]`.
    separators: &'static [&'static str],
}

impl Layout {
    pub(crate) const fn new(
        open: &'static str,
        groups: &'static [usize],
        separators: &'static [&'static str],
    ) -> Self {
        Self {
            open,
            groups,
            separators,
        }
    }

    /// Render ASCII `digits` through the layout.
    pub(crate) fn render(&self, digits: &str) -> String {
        let mut out = String::with_capacity(digits.len() + 8);
        let mut rest = digits;

        for (i, &width) in self.groups.iter().enumerate() {
            if rest.is_empty() {
                break;
            }

            let is_last = i + 1 == self.groups.len();
            let take = if is_last {
                rest.len()
            } else {
                width.min(rest.len())
            };
            let (chunk, tail) = rest.split_at(take);

            if i == 0 {
                if !tail.is_empty() {
                    out.push_str(self.open);
                }
            } else if let Some(separator) = self.separators.get(i - 1) {
                out.push_str(separator);
            }

            out.push_str(chunk);
            rest = tail;
        }

        out
    }

    /// Render and cut the result to at most `max_len` characters.
    pub(crate) fn render_truncated(&self, digits: &str, max_len: usize) -> String {
        let mut out = self.render(digits);
        // Layouts only emit ASCII, so byte and char boundaries agree.
        out.truncate(max_len);
        out
    }
}
