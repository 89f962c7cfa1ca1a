use restring_codec::{
    formats, AccountInfo, AuthKey, Datacenter, Environment, ExportError, ExportRequest,
    InvariantViolation, SessionFormat,
};
use restring_source::{
    datacenter, generate, AccountType, AddressFamily, Credentials, GenerateError, MemorySource,
    SettledSession, SourceError,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn settled() -> SettledSession {
    SettledSession {
        datacenter: Datacenter { id: 2, address: "149.154.167.51".parse().unwrap(), port: 443 },
        auth_key:   AuthKey::from_bytes([0xAA; 256]),
    }
}

fn request(format: SessionFormat) -> ExportRequest {
    ExportRequest { format, environment: Environment::Production, api_id: 12345 }
}

// ── Driver ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn telethon_needs_no_account_round_trip() {
    // No account attached: the lookup would fail, so success proves it is
    // never performed for formats that do not embed the identity.
    let source = MemorySource::new(settled());
    let text = generate(&source, &request(SessionFormat::Telethon)).await.unwrap();
    assert!(text.starts_with('1'));
}

#[tokio::test]
async fn pyrogram_fetches_and_embeds_the_account() {
    let account = AccountInfo { user_id: 987_654_321, is_bot: true };
    let source  = MemorySource::new(settled()).with_account(account);
    let text = generate(&source, &request(SessionFormat::Pyrogram)).await.unwrap();

    let s = settled();
    let direct = formats::pyrogram(&s.datacenter, 12345, Environment::Production, &s.auth_key, &account);
    assert_eq!(text, direct);
}

#[tokio::test]
async fn pyrogram_fails_when_the_lookup_fails() {
    let source = MemorySource::new(settled());
    let out = generate(&source, &request(SessionFormat::Pyrogram)).await;
    assert!(matches!(out, Err(GenerateError::Source(SourceError::AccountLookup(_)))));
}

#[tokio::test]
async fn native_string_passes_through_verbatim() {
    let source = MemorySource::new(settled()).with_native("owned-by-the-library");
    let text = generate(&source, &request(SessionFormat::Native)).await.unwrap();
    assert_eq!(text, "owned-by-the-library");
}

#[tokio::test]
async fn native_without_live_session_fails() {
    let source = MemorySource::new(settled());
    let out = generate(&source, &request(SessionFormat::Native)).await;
    assert!(matches!(out, Err(GenerateError::Export(ExportError::Native(_)))));
}

#[tokio::test]
async fn empty_source_is_an_invariant_violation() {
    let out = generate(&MemorySource::empty(), &request(SessionFormat::Telethon)).await;
    assert_eq!(
        out,
        Err(GenerateError::Export(ExportError::Invariant(InvariantViolation::MissingSessionData))),
    );
}

#[tokio::test]
async fn generation_is_deterministic_across_calls() {
    let source = MemorySource::new(settled());
    let a = generate(&source, &request(SessionFormat::GramJs)).await.unwrap();
    let b = generate(&source, &request(SessionFormat::GramJs)).await.unwrap();
    assert_eq!(a, b);
}

// ── Request gate ──────────────────────────────────────────────────────────────

fn bot_credentials() -> Credentials {
    Credentials {
        api_id:       12345,
        api_hash:     "0123456789abcdef".into(),
        account_type: AccountType::Bot,
        account:      "110201543:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw".into(),
    }
}

#[test]
fn bot_credentials_pass_the_gate() {
    assert_eq!(bot_credentials().validate(), Ok(()));
}

#[test]
fn user_accounts_are_rejected() {
    let creds = Credentials { account_type: AccountType::User, ..bot_credentials() };
    assert_eq!(creds.validate(), Err(GenerateError::UnsupportedAccountType(AccountType::User)));
}

#[test]
fn zero_api_id_is_a_validation_error() {
    let creds = Credentials { api_id: 0, ..bot_credentials() };
    assert!(matches!(
        creds.validate(),
        Err(GenerateError::Export(ExportError::Validation(_)))
    ));
}

#[test]
fn empty_account_details_are_a_validation_error() {
    let creds = Credentials { account: String::new(), ..bot_credentials() };
    assert!(matches!(
        creds.validate(),
        Err(GenerateError::Export(ExportError::Validation(_)))
    ));
}

// ── DC tables ─────────────────────────────────────────────────────────────────

#[test]
fn production_table_covers_all_five_dcs() {
    for id in 1..=5 {
        for family in [AddressFamily::Ipv4, AddressFamily::Ipv6] {
            let dc = datacenter(Environment::Production, id, family).unwrap();
            assert_eq!(dc.id, id);
            assert_eq!(dc.port, 443);
            match family {
                AddressFamily::Ipv4 => assert!(dc.address.is_ipv4()),
                AddressFamily::Ipv6 => assert!(dc.address.is_ipv6()),
            }
        }
    }
}

#[test]
fn test_network_has_three_dcs_on_port_80() {
    for id in 1..=3 {
        let dc = datacenter(Environment::Test, id, AddressFamily::Ipv4).unwrap();
        assert_eq!(dc.port, 80);
    }
    assert!(datacenter(Environment::Test, 4, AddressFamily::Ipv4).is_none());
    assert!(datacenter(Environment::Test, 5, AddressFamily::Ipv6).is_none());
}

#[test]
fn unknown_ids_resolve_to_nothing() {
    assert!(datacenter(Environment::Production, 0, AddressFamily::Ipv4).is_none());
    assert!(datacenter(Environment::Production, 6, AddressFamily::Ipv4).is_none());
}

#[test]
fn dc2_production_address_is_pinned() {
    let dc = datacenter(Environment::Production, 2, AddressFamily::Ipv4).unwrap();
    assert_eq!(dc.address.to_string(), "149.154.167.51");
}
