//! # restring-source
//!
//! The boundary between the session-string codec and the library that
//! actually performs the handshake: source traits, data-center address
//! tables, the generation driver, and an in-memory source for tests and
//! offline re-export.
//!
//! The handshake itself (transport, key exchange, retry) is not here; a
//! [`SessionSource`] implementor brings its own. The codec in
//! `restring-codec` only ever reads this crate's interfaces.

#![deny(unsafe_code)]

mod dc;
mod generate;
mod memory;
mod source;

pub use dc::{datacenter, AddressFamily};
pub use generate::{generate, AccountType, Credentials, GenerateError};
pub use memory::MemorySource;
pub use source::{SessionSource, SettledSession, SourceError};
