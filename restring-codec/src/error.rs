//! Error types for the session-string codec.

use std::fmt;

// ─── InvariantViolation ───────────────────────────────────────────────────────

/// A structural invariant on settled handshake data did not hold.
///
/// These can only originate from a broken upstream handshake, never from
/// user input, and are treated as fatal: the operation aborts rather than
/// emit a corrupt session string, which would fail silently at
/// authentication time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The authorization key is not exactly 256 bytes.
    AuthKeyLength(usize),
    /// The data-center id is outside the known set.
    UnknownDc(i32),
    /// The handshake reported success but left no settled session behind.
    MissingSessionData,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthKeyLength(n)  => write!(f, "auth key is {n} bytes, expected 256"),
            Self::UnknownDc(id)     => write!(f, "unknown data center {id}"),
            Self::MissingSessionData => write!(f, "no settled session after a successful handshake"),
        }
    }
}

impl std::error::Error for InvariantViolation {}

// ─── ExportError ──────────────────────────────────────────────────────────────

/// Errors surfaced by [`encode`](crate::encode).
///
/// All variants are synchronous and returned to the immediate caller; none
/// are retried inside the codec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportError {
    /// Caller-supplied input was missing or malformed; fix and resubmit.
    Validation(String),
    /// The requested format identifier is not one of the supported set.
    UnsupportedFormat(String),
    /// The exporter owned by the session library failed.
    Native(String),
    /// Settled authorization data broke a structural invariant. Fatal.
    Invariant(InvariantViolation),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg)         => write!(f, "invalid request: {msg}"),
            Self::UnsupportedFormat(name) => write!(f, "unsupported session string format: {name:?}"),
            Self::Native(msg)             => write!(f, "native export failed: {msg}"),
            Self::Invariant(v)            => write!(f, "internal invariant violated: {v}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<InvariantViolation> for ExportError {
    fn from(v: InvariantViolation) -> Self {
        Self::Invariant(v)
    }
}
