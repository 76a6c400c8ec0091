use std::net::IpAddr;
use std::str::FromStr;

/// Address record types a probe can be restricted to (RFC 1035 Section 3.2.2, RFC 3596)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsRecordType {
    /// A record: IPv4 address (32 bits)
    A,
    /// AAAA record: IPv6 address (128 bits) - RFC 3596
    Aaaa,
}

impl DnsRecordType {
    /// Get the record type's mnemonic as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
        }
    }

    /// Whether `ip` belongs to this record type's address family.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) fit in 4 bytes and
    /// are therefore counted as A, never as AAAA.
    pub fn matches(self, ip: &IpAddr) -> bool {
        match (self, ip.to_canonical()) {
            (Self::A, IpAddr::V4(_)) => true,
            (Self::Aaaa, IpAddr::V6(_)) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRecordType(pub String);

impl FromStr for DnsRecordType {
    type Err = UnknownRecordType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            other => Err(UnknownRecordType(other.to_string())),
        }
    }
}

/// Keep the addresses matching `filter`, preserving resolver order.
///
/// `None` means no filtering: every address is kept, duplicates included.
pub fn filter_addrs(addrs: Vec<IpAddr>, filter: Option<DnsRecordType>) -> Vec<IpAddr> {
    match filter {
        Some(record_type) => addrs
            .into_iter()
            .filter(|ip| record_type.matches(ip))
            .collect(),
        None => addrs,
    }
}
