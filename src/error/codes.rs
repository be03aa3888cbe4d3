//! Error code constants.
//!
//! All request failures are validation errors in the 3xxx range.

/// Numeric error code carried in the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Validation Errors (3xxx) =====

    /// Bad request / invalid parameters.
    pub const BAD_REQUEST: Self = Self(3001);

    /// No address supplied.
    pub const EMPTY_INPUT: Self = Self(3004);

    /// Address does not split into `local@domain`.
    pub const MALFORMED_ADDRESS: Self = Self(3005);

    /// Scheme not applicable to the address's provider.
    pub const SCHEME_MISMATCH: Self = Self(3006);

    /// Requested result count above the configured ceiling.
    pub const LIMIT_EXCEEDED: Self = Self(3007);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}
