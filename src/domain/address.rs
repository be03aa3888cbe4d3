//! Email address parsing and scheme preconditions.

use std::fmt;

/// Reasons a raw address is rejected before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// Nothing was entered.
    #[error("Email cannot be empty.")]
    Empty,

    /// Not exactly one `@` with text on both sides.
    #[error("Please enter a valid email address (e.g., name@domain.com).")]
    Malformed,

    /// Dot scheme requested for a provider that does not ignore dots.
    #[error("Gmail Dot Trick only works for Gmail addresses.")]
    SchemeMismatch,
}

impl AddressError {
    /// Short machine-readable reason, used as a metrics label.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Empty => "empty_input",
            Self::Malformed => "malformed_address",
            Self::SchemeMismatch => "scheme_mismatch",
        }
    }
}

/// A split `local@domain` pair.
///
/// Both halves are non-empty; nothing else about them is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    local_part: String,
    domain: String,
}

impl EmailAddress {
    /// Parse a raw address.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::Empty`] for blank input and
    /// [`AddressError::Malformed`] unless the input splits on `@` into exactly
    /// two non-empty segments.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AddressError::Empty);
        }

        let mut parts = raw.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self {
                    local_part: local.to_string(),
                    domain: domain.to_string(),
                })
            }
            _ => Err(AddressError::Malformed),
        }
    }

    /// Portion before `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// Portion after `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Whether the domain belongs to a dot-insensitive provider.
    #[must_use]
    pub fn is_gmail(&self) -> bool {
        self.domain.to_lowercase().contains("gmail")
    }

    /// Check the dot scheme can apply to this address.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::SchemeMismatch`] for non-Gmail domains.
    pub fn ensure_dot_compatible(&self) -> Result<(), AddressError> {
        if self.is_gmail() {
            Ok(())
        } else {
            Err(AddressError::SchemeMismatch)
        }
    }

    /// Local-part with every `.` removed.
    #[must_use]
    pub fn undotted_local_part(&self) -> String {
        self.local_part.replace('.', "")
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
