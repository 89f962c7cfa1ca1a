//! Format encoders, one pure function per target library.
//!
//! Each reproduces an undocumented-but-fixed byte layout; field order,
//! widths, and base64 policy must match the receiving library byte for
//! byte, or the string is rejected or authenticates as the wrong account.

use crate::session::{AccountInfo, AuthKey, Datacenter, Environment};
use crate::wire::{self, Base64Policy, Endian};

/// Version byte leading the Telethon payload.
const SESSION_VERSION: u8 = 1;

/// Fixed size of the packed Pyrogram record, independent of field values.
pub const PYROGRAM_RECORD_LEN: usize = 271;

// ─── Telethon ─────────────────────────────────────────────────────────────────

/// `version(1) || dc_id(1) || address(string) || port(2, BE) || auth_key(256)`,
/// URL-safe unpadded base64, with a literal `'1'` marker prepended outside
/// the payload.
///
/// Output length depends only on the address literal, never on key content.
pub fn telethon(dc: &Datacenter, auth_key: &AuthKey) -> String {
    let address = dc.address.to_string();
    let mut buf = Vec::with_capacity(264 + address.len());
    buf.push(SESSION_VERSION);
    buf.push(dc.id as u8);
    wire::put_bytes(&mut buf, address.as_bytes());
    wire::put_uint(&mut buf, u64::from(dc.port), 2, Endian::Big);
    buf.extend_from_slice(auth_key.as_bytes());
    format!("1{}", wire::base64_text(Base64Policy::UrlSafeUnpadded, &buf))
}

// ─── Pyrogram ─────────────────────────────────────────────────────────────────

/// Fixed 271-byte big-endian record:
/// `dc_id(1) || api_id(4) || test_mode(1) || auth_key(256) || user_id(8) || is_bot(1)`,
/// URL-safe base64 with padding stripped.
///
/// The only layout that embeds the account identity; the caller fetches it
/// before invoking this encoder. Test mode is the explicit boolean at
/// offset 5, not an offset folded into the dc id.
pub fn pyrogram(
    dc:          &Datacenter,
    api_id:      u32,
    environment: Environment,
    auth_key:    &AuthKey,
    account:     &AccountInfo,
) -> String {
    let mut buf = Vec::with_capacity(PYROGRAM_RECORD_LEN);
    buf.push(dc.id as u8);
    wire::put_uint(&mut buf, u64::from(api_id), 4, Endian::Big);
    buf.push(environment.is_test() as u8);
    buf.extend_from_slice(auth_key.as_bytes());
    wire::put_uint(&mut buf, account.user_id, 8, Endian::Big);
    buf.push(account.is_bot as u8);
    debug_assert_eq!(buf.len(), PYROGRAM_RECORD_LEN);
    wire::base64_text(Base64Policy::UrlSafeUnpadded, &buf)
}

// ─── GramJS ───────────────────────────────────────────────────────────────────

/// `'1' || dc_id(1) || address(string) || port(2, BE) || auth_key(256)`,
/// standard padded base64. The version marker is the ASCII character inside
/// the payload here, not a prefix outside it.
///
/// Near-twin of [`telethon`], but the base64 alphabet and padding retention
/// differ; that distinction is load-bearing and the two encoders stay
/// separate.
pub fn gramjs(dc: &Datacenter, auth_key: &AuthKey) -> String {
    let address = dc.address.to_string();
    let mut buf = Vec::with_capacity(264 + address.len());
    buf.push(b'1');
    buf.push(dc.id as u8);
    wire::put_bytes(&mut buf, address.as_bytes());
    wire::put_uint(&mut buf, u64::from(dc.port), 2, Endian::Big);
    buf.extend_from_slice(auth_key.as_bytes());
    wire::base64_text(Base64Policy::StandardPadded, &buf)
}
