//! The session-generation driver.
//!
//! Walks a request through the source boundary: read the settled session,
//! fetch the account identity when (and only when) the target format embeds
//! it, then hand everything to the pure codec.

use std::fmt;
use std::str::FromStr;

use restring_codec::{encode, ExportError, ExportRequest, InvariantViolation};

use crate::source::{SessionSource, SourceError};

// ─── GenerateError ────────────────────────────────────────────────────────────

/// Errors from [`generate`] and the pre-handshake request gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The session source failed.
    Source(SourceError),
    /// The codec rejected the request or its settled inputs.
    Export(ExportError),
    /// The requested account kind is outside the supported scope.
    UnsupportedAccountType(AccountType),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "{e}"),
            Self::Export(e) => write!(f, "{e}"),
            Self::UnsupportedAccountType(t) => {
                write!(f, "{t} accounts are currently not supported")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<SourceError> for GenerateError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

impl From<ExportError> for GenerateError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ─── Request gate ─────────────────────────────────────────────────────────────

/// Kind of account to authenticate as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountType {
    /// Bot account, authenticated with a bot token.
    Bot,
    /// User account, authenticated with a phone number.
    User,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bot  => "bot",
            Self::User => "user",
        })
    }
}

impl FromStr for AccountType {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bot"  => Ok(Self::Bot),
            "user" => Ok(Self::User),
            other  => Err(ExportError::Validation(format!("unknown account type {other:?}"))),
        }
    }
}

/// App credentials and account details as submitted by the caller.
///
/// [`validate`](Self::validate) is the gate run before the external
/// handshake is even started; everything it rejects is recoverable by
/// resubmitting a corrected request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    /// The app's API id.
    pub api_id:       u32,
    /// The app's API hash.
    pub api_hash:     String,
    /// Bot or user account.
    pub account_type: AccountType,
    /// Bot token, or phone number in international format.
    pub account:      String,
}

impl Credentials {
    /// Reject requests this system cannot serve, before any network work.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.account_type != AccountType::Bot {
            return Err(GenerateError::UnsupportedAccountType(self.account_type));
        }
        if self.api_id == 0 || self.api_hash.is_empty() {
            return Err(ExportError::Validation("invalid API credentials".into()).into());
        }
        if self.account.is_empty() {
            return Err(ExportError::Validation("invalid account details".into()).into());
        }
        Ok(())
    }
}

// ─── generate ─────────────────────────────────────────────────────────────────

/// Produce the session string `request` asks for from a live `source`.
///
/// Performs at most one extra round trip (the account lookup, for formats
/// that embed the identity) and no retries; retry policy belongs to the
/// handshake, not here.
pub async fn generate<S: SessionSource>(
    source:  &S,
    request: &ExportRequest,
) -> Result<String, GenerateError> {
    let settled = source
        .settled()
        .await?
        .ok_or(ExportError::Invariant(InvariantViolation::MissingSessionData))?;

    let account = if request.format.requires_account() {
        log::debug!("fetching account identity for a {} export", request.format);
        Some(source.account_identity().await?)
    } else {
        None
    };

    let text = encode(request, &settled.datacenter, &settled.auth_key, account.as_ref(), source)?;
    log::info!("generated {} session string ({} chars)", request.format, text.len());
    Ok(text)
}
