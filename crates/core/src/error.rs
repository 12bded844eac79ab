//! Error types for the SDP origin library.

/// Errors that can occur in the SDP origin library.
///
/// Origin construction itself never fails: every missing field resolves to
/// a concrete default (see [`OriginBuilder::build`](crate::OriginBuilder::build)).
/// The only fallible operations are the precondition guards in
/// [`guard`](crate::guard), which reject absent or empty list-valued fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdpError {
    /// A required argument was absent or empty. Carries the caller's message
    /// verbatim.
    #[error("{0}")]
    InvalidArgument(String),
}

/// Convenience alias for `Result<T, SdpError>`.
pub type Result<T> = std::result::Result<T, SdpError>;
