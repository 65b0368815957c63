//! Error classification and recovery.

/// Broad error kind used to decide what the session shows the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The remote call failed: network, auth, quota or a rejected request.
    Transport,
    /// The remote call returned, but without a usable plan.
    Parse,
    /// The profile is out of range or a field could not be coerced.
    Validation,
    Configuration,
    InvalidState,
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    CheckCredentials,
    CheckConfiguration,
    ResubmitLater,
    Resubmit,
    FixProfile,
    ContactSupport,
}
