//! Settled-session data model: the four logical inputs that every format
//! encoder interprets in its own way.

use std::fmt;
use std::net::IpAddr;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{ExportError, InvariantViolation};

// ─── AuthKey ──────────────────────────────────────────────────────────────────

/// A 256-byte authorization key, opaque and immutable once settled.
///
/// The codec never alters its bytes, only repositions them inside an output
/// layout. The length invariant is structural: a value of this type always
/// holds exactly 256 bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthKey([u8; 256]);

impl AuthKey {
    /// Wrap raw handshake output.
    pub fn from_bytes(data: [u8; 256]) -> Self {
        Self(data)
    }

    /// Checked construction from a slice of unknown length.
    ///
    /// Anything other than exactly 256 bytes can only come from a broken
    /// upstream handshake and is rejected as an invariant violation, not a
    /// recoverable input error.
    pub fn from_slice(data: &[u8]) -> Result<Self, InvariantViolation> {
        <[u8; 256]>::try_from(data)
            .map(Self)
            .map_err(|_| InvariantViolation::AuthKeyLength(data.len()))
    }

    /// The raw 256-byte representation.
    pub fn as_bytes(&self) -> &[u8; 256] {
        &self.0
    }
}

impl TryFrom<&[u8]> for AuthKey {
    type Error = InvariantViolation;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(data)
    }
}

/// Key material stays out of logs.
impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthKey(256 bytes)")
    }
}

// ─── Datacenter ───────────────────────────────────────────────────────────────

/// A settled data center: id, negotiated address, and port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Datacenter {
    /// Data-center id; must fall in [`Datacenter::KNOWN_IDS`].
    pub id:      i32,
    /// IPv4 or IPv6 address the handshake settled on.
    pub address: IpAddr,
    /// TCP port.
    pub port:    u16,
}

impl Datacenter {
    /// The fixed set of known data-center ids.
    pub const KNOWN_IDS: RangeInclusive<i32> = 1..=5;
}

// ─── AccountInfo ──────────────────────────────────────────────────────────────

/// Numeric identity of the logged-in account.
///
/// Fetched via a follow-up round trip only when the chosen format embeds it;
/// otherwise absent and never requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountInfo {
    /// The account's user id.
    pub user_id: u64,
    /// Whether the account is a bot.
    pub is_bot:  bool,
}

// ─── Environment ──────────────────────────────────────────────────────────────

/// Whether the session belongs to the production or the test network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// The production network.
    Production,
    /// The test network.
    Test,
}

impl Environment {
    /// `true` for the test network.
    pub fn is_test(self) -> bool {
        matches!(self, Self::Test)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Production => "production",
            Self::Test       => "test",
        })
    }
}

impl FromStr for Environment {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "test"                => Ok(Self::Test),
            other => Err(ExportError::Validation(format!("unknown environment {other:?}"))),
        }
    }
}

// ─── SessionFormat ────────────────────────────────────────────────────────────

/// The closed set of supported session-string formats.
///
/// Each variant owns its own byte layout and text envelope; adding or
/// removing one is a compiler-checked change at every match site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionFormat {
    /// Telethon string session.
    Telethon,
    /// Pyrogram session string.
    Pyrogram,
    /// GramJS `StringSession`.
    GramJs,
    /// Delegate to the native exporter of the library holding the session.
    Native,
}

impl SessionFormat {
    /// Whether encoding this format needs the account-identity round trip.
    ///
    /// Kept exact so the lookup is never performed for a format that does
    /// not embed the identity.
    pub fn requires_account(self) -> bool {
        matches!(self, Self::Pyrogram)
    }
}

impl fmt::Display for SessionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Telethon => "Telethon",
            Self::Pyrogram => "Pyrogram",
            Self::GramJs   => "GramJS",
            Self::Native   => "native",
        })
    }
}

/// Parse the identifier accepted at the request boundary.
///
/// Anything outside the closed set, including library names a front end may
/// offer but this codec does not implement, is rejected by name.
impl FromStr for SessionFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "telethon" => Ok(Self::Telethon),
            "pyrogram" => Ok(Self::Pyrogram),
            "gramjs"   => Ok(Self::GramJs),
            "native"   => Ok(Self::Native),
            _          => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

// ─── ExportRequest ────────────────────────────────────────────────────────────

/// One immutable session-generation request.
///
/// `api_id` is the caller's app credential, not part of the settled
/// handshake output; only the Pyrogram layout embeds it. The settled data
/// center and auth key travel separately since they come from the session
/// source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportRequest {
    /// Target session-string format.
    pub format:      SessionFormat,
    /// Production or test network.
    pub environment: Environment,
    /// The app's API id.
    pub api_id:      u32,
}
