//! The session-source boundary, where settled handshake output enters.

use std::fmt;

use restring_codec::{AccountInfo, AuthKey, Datacenter, NativeExport};

// ─── SettledSession ───────────────────────────────────────────────────────────

/// What a completed handshake leaves behind: the home data center and the
/// negotiated 256-byte auth key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettledSession {
    /// The data center the session lives on.
    pub datacenter: Datacenter,
    /// The negotiated authorization key.
    pub auth_key:   AuthKey,
}

// ─── SessionSource ────────────────────────────────────────────────────────────

/// A live session produced by an external handshake.
///
/// The codec only reads this interface. Transport, key exchange, retry, and
/// cancellation all belong to the implementor; by the time these methods are
/// called the handshake has already resolved. `Ok(None)` from
/// [`settled`](SessionSource::settled) means the source reported a successful
/// handshake but holds no session, which the driver treats as an internal
/// invariant violation, not a user error.
#[allow(async_fn_in_trait)]
pub trait SessionSource: NativeExport {
    /// The settled data center and auth key, if any.
    async fn settled(&self) -> Result<Option<SettledSession>, SourceError>;

    /// Follow-up round trip fetching the account's numeric identity.
    ///
    /// Only invoked for formats that embed it.
    async fn account_identity(&self) -> Result<AccountInfo, SourceError>;
}

// ─── SourceError ──────────────────────────────────────────────────────────────

/// Errors raised by a [`SessionSource`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceError {
    /// Reading the settled session out of the source failed.
    Storage(String),
    /// The account-identity round trip failed.
    AccountLookup(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(msg)       => write!(f, "session storage error: {msg}"),
            Self::AccountLookup(msg) => write!(f, "account lookup failed: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}
