//! # restring-codec
//!
//! Session-string codec: turn a settled authorization (data center, 256-byte
//! auth key, optional account identity) into the exact textual session
//! string of a target client library.
//!
//! Supported targets: Telethon, Pyrogram, GramJS, plus delegation to the
//! native exporter of the library that owns the live session.
//!
//! The codec is synchronous, stateless, and deterministic: identical inputs
//! produce identical strings, nothing is cached or persisted, and it is safe
//! to call concurrently. The asynchronous handshake that produces its inputs
//! lives behind the session-source boundary in `restring-source`.
//!
//! ```rust
//! use restring_codec::{formats, AuthKey, Datacenter};
//!
//! let dc = Datacenter { id: 2, address: "149.154.167.51".parse().unwrap(), port: 443 };
//! let key = AuthKey::from_bytes([0xAA; 256]);
//! let text = formats::telethon(&dc, &key);
//! assert!(text.starts_with('1'));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod formats;
pub mod wire;
mod error;
mod session;

pub use error::{ExportError, InvariantViolation};
pub use session::{AccountInfo, AuthKey, Datacenter, Environment, ExportRequest, SessionFormat};

// ─── Native delegation ────────────────────────────────────────────────────────

/// Capability to export the native session format of the library performing
/// the handshake.
///
/// That byte layout is owned externally and never reproduced here; [`encode`]
/// forwards [`SessionFormat::Native`] requests to this trait and returns the
/// result unchanged.
pub trait NativeExport {
    /// Export the live session in the owning library's own format.
    fn export_native(&self) -> Result<String, ExportError>;
}

// ─── Dispatcher ───────────────────────────────────────────────────────────────

/// Encode a session string for the format named in `request`.
///
/// Checks the settled data's structural invariants, then dispatches
/// exhaustively over [`SessionFormat`]. The auth-key length invariant is
/// carried by [`AuthKey`]'s constructors and needs no re-check here.
/// `account` is consulted by Pyrogram only; other formats ignore it.
///
/// # Errors
///
/// [`ExportError::Invariant`] when the data-center id falls outside
/// [`Datacenter::KNOWN_IDS`] (a broken upstream handshake, not a user
/// error), [`ExportError::Validation`] when Pyrogram is requested without an
/// account identity, and whatever the native exporter returns for
/// [`SessionFormat::Native`].
pub fn encode(
    request:  &ExportRequest,
    dc:       &Datacenter,
    auth_key: &AuthKey,
    account:  Option<&AccountInfo>,
    native:   &dyn NativeExport,
) -> Result<String, ExportError> {
    if !Datacenter::KNOWN_IDS.contains(&dc.id) {
        return Err(InvariantViolation::UnknownDc(dc.id).into());
    }
    log::debug!("encoding {} session string for DC {}", request.format, dc.id);
    match request.format {
        SessionFormat::Telethon => Ok(formats::telethon(dc, auth_key)),
        SessionFormat::Pyrogram => {
            let account = account.ok_or_else(|| {
                ExportError::Validation(
                    "account identity is required for a Pyrogram session string".into(),
                )
            })?;
            Ok(formats::pyrogram(dc, request.api_id, request.environment, auth_key, account))
        }
        SessionFormat::GramJs => Ok(formats::gramjs(dc, auth_key)),
        SessionFormat::Native => native.export_native(),
    }
}
