//! Data-center address resolution.
//!
//! Bootstrap tables for the production and test networks. A live handshake
//! may settle on a different address (the server's config wins); these cover
//! the lookup a re-export needs when only the dc id is known.

use std::net::IpAddr;

use restring_codec::{Datacenter, Environment};

/// Which address family to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressFamily {
    /// IPv4
    Ipv4,
    /// IPv6
    Ipv6,
}

/// Production DCs, `(id, ipv4, ipv6)`.
const PRODUCTION: [(i32, &str, &str); 5] = [
    (1, "149.154.175.53",  "2001:b28:f23d:f001::a"),
    (2, "149.154.167.51",  "2001:67c:4e8:f002::a"),
    (3, "149.154.175.100", "2001:b28:f23d:f003::a"),
    (4, "149.154.167.91",  "2001:67c:4e8:f004::a"),
    (5, "91.108.56.130",   "2001:b28:f23f:f005::a"),
];

/// Test-network DCs. Only 1..=3 exist there.
const TEST: [(i32, &str, &str); 3] = [
    (1, "149.154.175.10",  "2001:b28:f23d:f001::e"),
    (2, "149.154.167.40",  "2001:67c:4e8:f002::e"),
    (3, "149.154.175.117", "2001:b28:f23d:f003::e"),
];

const PRODUCTION_PORT: u16 = 443;
const TEST_PORT:       u16 = 80;

/// Resolve `dc_id` to a [`Datacenter`] on the chosen network and family.
///
/// Returns `None` for ids absent from the table.
pub fn datacenter(environment: Environment, dc_id: i32, family: AddressFamily) -> Option<Datacenter> {
    let (table, port): (&[(i32, &str, &str)], u16) = match environment {
        Environment::Production => (&PRODUCTION, PRODUCTION_PORT),
        Environment::Test       => (&TEST, TEST_PORT),
    };
    let &(_, v4, v6) = table.iter().find(|(id, _, _)| *id == dc_id)?;
    let literal = match family {
        AddressFamily::Ipv4 => v4,
        AddressFamily::Ipv6 => v6,
    };
    let address: IpAddr = literal.parse().expect("bootstrap table holds valid literals");
    Some(Datacenter { id: dc_id, address, port })
}
