//! Validated identifier newtypes.

/// Declare a newtype that only holds digits accepted by a [`DocumentKind`].
///
/// The value stores normalized digits, displays and serializes the formatted
/// form, and rejects invalid input on construction and deserialization.
///
/// [`DocumentKind`]: crate::DocumentKind
macro_rules! document_newtype {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate `input` and keep its normalized digits.
            ///
            /// # Errors
            /// Returns the reason the input was rejected.
            pub fn new(input: &str) -> $crate::error::Result<Self> {
                let digits = $crate::digits::strip_non_digits(input);
                $kind.check(&digits)?;
                Ok(Self(digits))
            }

            /// The normalized digits.
            #[must_use]
            pub fn as_digits(&self) -> &str {
                &self.0
            }

            /// The digits in their display template.
            #[must_use]
            pub fn formatted(&self) -> String {
                $kind.format(&self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.formatted())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::DocumentError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::DocumentError;

            fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.formatted()
            }
        }
    };
}
