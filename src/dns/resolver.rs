use async_trait::async_trait;
use log::debug;
use std::io;
use std::net::IpAddr;

/// Name-to-address lookup used by the probe loop.
#[async_trait]
pub trait Resolve: Send + Sync {
    /// Resolve `domain` to every address the resolver returns, in its order.
    async fn lookup_ip(&self, domain: &str) -> io::Result<Vec<IpAddr>>;
}

/// The platform resolver (`getaddrinfo`), driven through tokio's blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

#[async_trait]
impl Resolve for SystemResolver {
    async fn lookup_ip(&self, domain: &str) -> io::Result<Vec<IpAddr>> {
        // Port 0 only satisfies the socket address API; it is never used.
        let addrs = tokio::net::lookup_host((domain, 0)).await?;
        let ips: Vec<IpAddr> = addrs.map(|sa| sa.ip()).collect();
        debug!("{domain} -> {} address(es)", ips.len());
        Ok(ips)
    }
}
