//! # restring — session-string re-export toolkit
//!
//! Re-export a settled authorization (data center, 256-byte auth key,
//! optional account identity) as the session string of another client
//! library, byte for byte.
//!
//! | Sub-crate         | Role                                              |
//! |-------------------|---------------------------------------------------|
//! | `restring-codec`  | Byte-exact format encoders and the dispatcher     |
//! | `restring-source` | Session-source boundary, DC tables, driver        |
//!
//! ## Quick start
//!
//! ```rust
//! use restring::{encode, AuthKey, Datacenter, Environment, ExportRequest, SessionFormat};
//! use restring::MemorySource;
//!
//! let dc = Datacenter { id: 2, address: "149.154.167.51".parse().unwrap(), port: 443 };
//! let key = AuthKey::from_bytes([0xAA; 256]);
//! let request = ExportRequest {
//!     format:      SessionFormat::Telethon,
//!     environment: Environment::Production,
//!     api_id:      12345,
//! };
//! let text = encode(&request, &dc, &key, None, &MemorySource::empty()).unwrap();
//! assert!(text.starts_with('1'));
//! ```
//!
//! For a live source, implement [`SessionSource`] over your client and call
//! [`generate`]; it performs the account-identity round trip only when the
//! chosen format embeds it.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`restring_codec`]: encoders, dispatcher, data model.
pub use restring_codec as codec;

/// Re-export of [`restring_source`]: source traits, DC tables, driver.
pub use restring_source as source;

// ─── Convenience re-exports ───────────────────────────────────────────────────

pub use restring_codec::{
    encode,
    AccountInfo,
    AuthKey,
    Datacenter,
    Environment,
    ExportError,
    ExportRequest,
    InvariantViolation,
    NativeExport,
    SessionFormat,
};

pub use restring_source::{
    datacenter, generate, AccountType, AddressFamily, Credentials, GenerateError, MemorySource,
    SessionSource, SettledSession, SourceError,
};
