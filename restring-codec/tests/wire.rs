use restring_codec::wire::{base64_text, put_bytes, put_uint, Base64Policy, Endian};

// ── Integer packing ───────────────────────────────────────────────────────────

#[test]
fn uint_big_endian() {
    let mut buf = Vec::new();
    put_uint(&mut buf, 0x0102, 2, Endian::Big);
    assert_eq!(buf, [0x01, 0x02]);
}

#[test]
fn uint_little_endian() {
    let mut buf = Vec::new();
    put_uint(&mut buf, 0x0102, 2, Endian::Little);
    assert_eq!(buf, [0x02, 0x01]);
}

#[test]
fn uint_single_byte() {
    let mut buf = Vec::new();
    put_uint(&mut buf, 0xAB, 1, Endian::Big);
    assert_eq!(buf, [0xAB]);
}

#[test]
fn uint_full_width() {
    let mut buf = Vec::new();
    put_uint(&mut buf, u64::MAX, 8, Endian::Big);
    assert_eq!(buf, [0xFF; 8]);
}

#[test]
fn port_443_big_endian() {
    let mut buf = Vec::new();
    put_uint(&mut buf, 443, 2, Endian::Big);
    assert_eq!(buf, [0x01, 0xBB]);
}

// ── Length-prefixed byte strings ──────────────────────────────────────────────

#[test]
fn bytes_empty() {
    let mut buf = Vec::new();
    put_bytes(&mut buf, b"");
    assert_eq!(buf, [0, 0, 0, 0]);
}

#[test]
fn bytes_three_fill_one_unit() {
    let mut buf = Vec::new();
    put_bytes(&mut buf, b"abc");
    assert_eq!(buf, [3, b'a', b'b', b'c']);
}

#[test]
fn bytes_four_get_padded() {
    let mut buf = Vec::new();
    put_bytes(&mut buf, b"abcd");
    assert_eq!(buf, [4, b'a', b'b', b'c', b'd', 0, 0, 0]);
}

#[test]
fn bytes_253_use_short_header() {
    let mut buf = Vec::new();
    put_bytes(&mut buf, &[b'x'; 253]);
    assert_eq!(buf[0], 253);
    assert_eq!(buf.len(), 256);
}

#[test]
fn bytes_254_switch_to_extended_header() {
    let mut buf = Vec::new();
    put_bytes(&mut buf, &[b'x'; 254]);
    // 0xfe marker, then the length as 3 LE bytes
    assert_eq!(&buf[..4], [0xFE, 0xFE, 0x00, 0x00]);
    assert_eq!(buf.len(), 260);
}

#[test]
fn bytes_always_4_byte_aligned() {
    for len in 0..=300 {
        let mut buf = Vec::new();
        put_bytes(&mut buf, &vec![0x55u8; len]);
        assert_eq!(buf.len() % 4, 0, "unit for payload of {len} must align");
    }
}

// ── Base64 policies ───────────────────────────────────────────────────────────

#[test]
fn standard_policy_keeps_padding() {
    assert_eq!(base64_text(Base64Policy::StandardPadded, b"fo"), "Zm8=");
    assert_eq!(base64_text(Base64Policy::StandardPadded, &[0xFF, 0xFE]), "//4=");
}

#[test]
fn url_safe_policy_strips_padding() {
    assert_eq!(base64_text(Base64Policy::UrlSafeUnpadded, b"fo"), "Zm8");
    assert_eq!(base64_text(Base64Policy::UrlSafeUnpadded, &[0xFF, 0xFE]), "__4");
}

#[test]
fn alphabets_diverge_on_high_bytes() {
    let data = [0xFB, 0xEF, 0xBE];
    assert_eq!(base64_text(Base64Policy::StandardPadded, &data), "++++");
    assert_eq!(base64_text(Base64Policy::UrlSafeUnpadded, &data), "----");
}
