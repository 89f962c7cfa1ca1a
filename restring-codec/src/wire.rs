//! Low-level byte packing shared by the format encoders.
//!
//! Three primitives: fixed-width integer packing with an explicit byte
//! order, length-prefixed 4-byte-aligned byte strings, and base64 text
//! under the two alphabet/padding policies the target libraries use.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

// ─── Integers ────────────────────────────────────────────────────────────────

/// Byte order for [`put_uint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// Append `value` to `buf` as a `width`-byte unsigned integer.
///
/// `width` must be 1..=8 and `value` must fit in it.
pub fn put_uint(buf: &mut Vec<u8>, value: u64, width: usize, endian: Endian) {
    debug_assert!((1..=8).contains(&width));
    debug_assert!(width == 8 || value < 1u64 << (width * 8));
    match endian {
        Endian::Big    => buf.extend_from_slice(&value.to_be_bytes()[8 - width..]),
        Endian::Little => buf.extend_from_slice(&value.to_le_bytes()[..width]),
    }
}

// ─── Byte strings ────────────────────────────────────────────────────────────

/// Append a length-prefixed byte string, zero-padded to 4-byte alignment.
///
/// * `len ≤ 253`: `[len as u8][payload][0-padding]`
/// * `len ≥ 254`: `[0xfe][len as 3 LE bytes][payload][0-padding]`
pub fn put_bytes(buf: &mut Vec<u8>, payload: &[u8]) {
    let len = payload.len();
    let header_len = if len <= 253 {
        buf.push(len as u8);
        1
    } else {
        buf.push(0xfe);
        put_uint(buf, len as u64, 3, Endian::Little);
        4
    };
    buf.extend_from_slice(payload);
    let padding = (4 - (header_len + len) % 4) % 4;
    buf.extend(std::iter::repeat(0u8).take(padding));
}

// ─── Base64 ──────────────────────────────────────────────────────────────────

/// Alphabet and padding policy for [`base64_text`].
///
/// Each format encoder declares one; the receiving library rejects the
/// string if alphabet or padding deviates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Base64Policy {
    /// Standard alphabet, `=` padding retained.
    StandardPadded,
    /// URL-safe alphabet (`-`/`_`), trailing `=` padding stripped.
    UrlSafeUnpadded,
}

/// Encode `data` as base64 text under the given policy.
pub fn base64_text(policy: Base64Policy, data: &[u8]) -> String {
    match policy {
        Base64Policy::StandardPadded  => STANDARD.encode(data),
        Base64Policy::UrlSafeUnpadded => URL_SAFE_NO_PAD.encode(data),
    }
}
