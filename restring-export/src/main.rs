//! restring-export — re-export an already-settled session as another
//! library's session string.
//!
//! The handshake happens elsewhere; feed this tool its output:
//!
//! ```text
//! restring-export telethon --dc 2 --key auth.key
//! restring-export pyrogram --dc 2 --key auth.key --api-id 12345 --user-id 987654321 --bot
//! restring-export gramjs --dc 5 --key auth.key --ipv6
//! ```
//!
//! The key file holds the raw 256-byte auth key, or the same as 512 hex
//! characters.

use std::error::Error;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use restring::{
    datacenter, generate, AccountInfo, AddressFamily, AuthKey, Datacenter, Environment,
    ExportRequest, MemorySource, SessionFormat, SettledSession,
};

#[tokio::main]
async fn main() {
    if std::env::var("RUST_LOG").is_err() {
        // SAFETY: single-threaded at this point, no other threads reading env
        unsafe { std::env::set_var("RUST_LOG", "restring_source=info"); }
    }
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

// ─── Arguments ────────────────────────────────────────────────────────────────

struct Args {
    format:      SessionFormat,
    environment: Environment,
    dc_id:       i32,
    key_path:    PathBuf,
    family:      AddressFamily,
    address:     Option<IpAddr>,
    port:        Option<u16>,
    api_id:      u32,
    account:     Option<AccountInfo>,
}

fn usage() -> ! {
    eprintln!("usage: restring-export <telethon|pyrogram|gramjs|native> --dc <id> --key <file>");
    eprintln!("       [--test] [--ipv6] [--address <ip>] [--port <port>]");
    eprintln!("       [--api-id <n>] [--user-id <n>] [--bot]");
    std::process::exit(2);
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let format: SessionFormat = match args.next() {
        Some(ref s) if s == "-h" || s == "--help" => usage(),
        Some(s) => s.parse()?,
        None    => usage(),
    };

    let mut environment = Environment::Production;
    let mut dc_id       = None;
    let mut key_path    = None;
    let mut family      = AddressFamily::Ipv4;
    let mut address     = None;
    let mut port        = None;
    let mut api_id      = 0u32;
    let mut user_id     = None;
    let mut is_bot      = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dc"      => dc_id   = Some(args.next().ok_or("--dc needs a value")?.parse()?),
            "--key"     => key_path = Some(PathBuf::from(args.next().ok_or("--key needs a value")?)),
            "--test"    => environment = Environment::Test,
            "--ipv6"    => family  = AddressFamily::Ipv6,
            "--address" => address = Some(args.next().ok_or("--address needs a value")?.parse()?),
            "--port"    => port    = Some(args.next().ok_or("--port needs a value")?.parse()?),
            "--api-id"  => api_id  = args.next().ok_or("--api-id needs a value")?.parse()?,
            "--user-id" => user_id = Some(args.next().ok_or("--user-id needs a value")?.parse()?),
            "--bot"     => is_bot  = true,
            "-h" | "--help" => usage(),
            other => return Err(format!("unknown argument {other:?}").into()),
        }
    }

    Ok(Args {
        format,
        environment,
        dc_id:    dc_id.ok_or("--dc is required")?,
        key_path: key_path.ok_or("--key is required")?,
        family,
        address,
        port,
        api_id,
        account: user_id.map(|user_id| AccountInfo { user_id, is_bot }),
    })
}

// ─── Key loading ──────────────────────────────────────────────────────────────

fn load_auth_key(path: &Path) -> Result<AuthKey, Box<dyn Error>> {
    let raw = std::fs::read(path)?;
    if raw.len() == 256 {
        return Ok(AuthKey::from_slice(&raw)?);
    }

    // hex fallback, tolerating a trailing newline
    let text = String::from_utf8(raw)
        .map_err(|_| format!("{} is neither a raw 256-byte key nor hex", path.display()))?;
    let text = text.trim();
    if text.len() % 2 != 0 {
        return Err("odd-length hex key".into());
    }
    let mut bytes = Vec::with_capacity(text.len() / 2);
    for i in (0..text.len()).step_by(2) {
        bytes.push(u8::from_str_radix(&text[i..i + 2], 16)?);
    }
    Ok(AuthKey::from_slice(&bytes)?)
}

// ─── Run ──────────────────────────────────────────────────────────────────────

async fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;
    if args.format == SessionFormat::Pyrogram && args.api_id == 0 {
        return Err("--api-id is required for a pyrogram export".into());
    }

    let auth_key = load_auth_key(&args.key_path)?;

    let dc = match args.address {
        Some(address) => Datacenter { id: args.dc_id, address, port: args.port.unwrap_or(443) },
        None => {
            let mut dc = datacenter(args.environment, args.dc_id, args.family)
                .ok_or_else(|| {
                    format!("no known {} address for DC {}", args.environment, args.dc_id)
                })?;
            if let Some(port) = args.port {
                dc.port = port;
            }
            dc
        }
    };

    let mut source = MemorySource::new(SettledSession { datacenter: dc, auth_key });
    if let Some(account) = args.account {
        source = source.with_account(account);
    }

    let request = ExportRequest {
        format:      args.format,
        environment: args.environment,
        api_id:      args.api_id,
    };
    let text = generate(&source, &request).await?;
    println!("{text}");
    Ok(())
}
