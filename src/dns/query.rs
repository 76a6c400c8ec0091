use super::resolver::Resolve;
use super::types::{DnsRecordType, filter_addrs};
use chrono::{DateTime, Local};
use std::io;
use std::net::IpAddr;
use std::time::Duration;
use tokio::time::Instant;

/// Outcome of a single timed lookup. Built once per tick and dropped after printing.
#[derive(Debug)]
pub struct Resolution {
    pub started_at: DateTime<Local>,
    pub elapsed: Duration,
    pub outcome: io::Result<Vec<IpAddr>>,
}

impl Resolution {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Resolve `domain` once, timing the lookup and applying the family filter.
pub async fn query<R>(resolver: &R, domain: &str, filter: Option<DnsRecordType>) -> Resolution
where
    R: Resolve + ?Sized,
{
    let started_at = Local::now();
    let start = Instant::now();
    let outcome = resolver.lookup_ip(domain).await;
    let elapsed = start.elapsed();

    Resolution {
        started_at,
        elapsed,
        outcome: outcome.map(|ips| filter_addrs(ips, filter)),
    }
}
