//! DNS resolution cache.
//!
//! DNS lookups are a measurable part of request latency, and reqwest does not
//! cache them. [`DnsCache`] resolves each host once, keeps every address it
//! got back, and hands them out round-robin so load spreads across all of a
//! host's addresses. Entries expire after a TTL and are re-resolved lazily.
//!
//! [`CachingResolver`] plugs the cache into reqwest's connector.

use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use tokio::sync::Mutex;

use crate::cache::TtlCache;
use crate::error::PoeError;

/// Default lifetime of a resolved host.
pub const DEFAULT_DNS_TTL: Duration = Duration::from_secs(300);

/// Resolves a host name to its addresses.
///
/// Implemented by [`SystemResolver`]; tests and embedders can supply their own.
pub trait HostResolver: Send + Sync + 'static {
    /// Look up every address for `host`.
    fn lookup(&self, host: &str) -> impl Future<Output = std::io::Result<Vec<IpAddr>>> + Send;
}

/// Resolver backed by the operating system's `getaddrinfo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> std::io::Result<Vec<IpAddr>> {
        let addrs = tokio::net::lookup_host((host, 0)).await?;
        let mut ips: Vec<IpAddr> = Vec::new();
        for addr in addrs {
            if !ips.contains(&addr.ip()) {
                ips.push(addr.ip());
            }
        }
        Ok(ips)
    }
}

/// A fixed set of addresses handed out in rotation.
#[derive(Debug, Clone)]
pub struct AddressRing {
    addrs: Box<[IpAddr]>,
    next: usize,
}

impl AddressRing {
    /// Create a ring starting at the first address.
    pub fn new(addrs: Vec<IpAddr>) -> Self {
        Self {
            addrs: addrs.into_boxed_slice(),
            next: 0,
        }
    }

    /// Return the current address and advance to the next one.
    ///
    /// Returns `None` only for an empty ring.
    pub fn next_address(&mut self) -> Option<IpAddr> {
        let addr = *self.addrs.get(self.next)?;
        self.next = (self.next + 1) % self.addrs.len();
        Some(addr)
    }

    /// Return every address, starting at the current one, and advance.
    ///
    /// The first address is the one [`next_address`](Self::next_address)
    /// would have returned; the rest follow in ring order as fallbacks.
    pub fn rotation(&mut self) -> Vec<IpAddr> {
        if self.addrs.is_empty() {
            return Vec::new();
        }
        let (tail, head) = self.addrs.split_at(self.next);
        let ordered = head.iter().chain(tail).copied().collect();
        self.next = (self.next + 1) % self.addrs.len();
        ordered
    }

    /// Number of addresses in the ring.
    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    /// Check if the ring has no addresses.
    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }
}

/// Per-host cache of resolved addresses.
#[derive(Debug)]
pub struct DnsCache<R = SystemResolver> {
    resolver: R,
    hosts: Mutex<TtlCache<String, AddressRing>>,
}

impl DnsCache<SystemResolver> {
    /// Create a cache using the system resolver.
    pub fn new(ttl: Duration) -> Self {
        Self::with_resolver(SystemResolver, ttl)
    }
}

impl Default for DnsCache<SystemResolver> {
    fn default() -> Self {
        Self::new(DEFAULT_DNS_TTL)
    }
}

impl<R: HostResolver> DnsCache<R> {
    /// Create a cache using a custom resolver.
    pub fn with_resolver(resolver: R, ttl: Duration) -> Self {
        Self {
            resolver,
            hosts: Mutex::new(TtlCache::new(ttl)),
        }
    }

    /// Get the next address for `host`, resolving it on first use.
    ///
    /// Fails with [`PoeError::AddressResolution`] when the host cannot be
    /// resolved, and with [`PoeError::InvalidAddress`] when its ring is empty.
    pub async fn get(&self, host: &str) -> Result<IpAddr, PoeError> {
        let addrs = self.addresses(host).await?;
        addrs
            .first()
            .copied()
            .ok_or_else(|| PoeError::InvalidAddress {
                host: host.to_string(),
            })
    }

    /// Get every address for `host`, starting at the next one in rotation.
    ///
    /// Advances the rotation by one, like [`get`](Self::get). The returned
    /// list is never empty.
    pub async fn addresses(&self, host: &str) -> Result<Vec<IpAddr>, PoeError> {
        let invalid = || PoeError::InvalidAddress {
            host: host.to_string(),
        };
        {
            let mut hosts = self.hosts.lock().await;
            if let Some(ring) = hosts.get_mut(host) {
                let addrs = ring.rotation();
                return if addrs.is_empty() { Err(invalid()) } else { Ok(addrs) };
            }
        }

        tracing::debug!(host, "resolving host");
        let addrs = self
            .resolver
            .lookup(host)
            .await
            .map_err(|e| PoeError::AddressResolution {
                host: host.to_string(),
                reason: e.to_string(),
            })?;
        if addrs.is_empty() {
            return Err(PoeError::AddressResolution {
                host: host.to_string(),
                reason: "no addresses returned".to_string(),
            });
        }
        tracing::debug!(host, count = addrs.len(), "resolved host");

        let mut hosts = self.hosts.lock().await;
        // Another task may have resolved the host while the lock was released.
        if hosts.get(host).is_none() {
            hosts.insert(host.to_string(), AddressRing::new(addrs));
        }
        match hosts.get_mut(host).map(AddressRing::rotation) {
            Some(addrs) if !addrs.is_empty() => Ok(addrs),
            _ => Err(invalid()),
        }
    }

    /// Seed a host with a fixed set of addresses, replacing any cached ring.
    pub async fn insert(&self, host: impl Into<String>, addrs: Vec<IpAddr>) {
        self.hosts
            .lock()
            .await
            .insert(host.into(), AddressRing::new(addrs));
    }

    /// Forget a host so the next lookup resolves it again.
    pub async fn invalidate(&self, host: &str) {
        self.hosts.lock().await.remove(host);
    }
}

/// Adapter exposing a [`DnsCache`] to reqwest's connector.
///
/// Each connection attempt receives the host's whole ring, starting at the
/// next address in rotation, so the connector can fall back to the others.
#[derive(Debug)]
pub struct CachingResolver<R = SystemResolver> {
    cache: Arc<DnsCache<R>>,
}

impl<R> CachingResolver<R> {
    /// Wrap a shared cache.
    pub fn new(cache: Arc<DnsCache<R>>) -> Self {
        Self { cache }
    }
}

impl<R> Clone for CachingResolver<R> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
        }
    }
}

impl<R: HostResolver> Resolve for CachingResolver<R> {
    fn resolve(&self, name: Name) -> Resolving {
        let cache = self.cache.clone();
        async move {
            let ips = cache.addresses(name.as_str()).await?;
            // Port 0 lets the connector substitute the port from the URL.
            let addrs: Addrs = Box::new(ips.into_iter().map(|ip| SocketAddr::new(ip, 0)));
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(addrs)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Debug, Default)]
    struct StaticResolver {
        addrs: Vec<IpAddr>,
        lookups: AtomicUsize,
    }

    impl StaticResolver {
        fn new(addrs: Vec<IpAddr>) -> Self {
            Self {
                addrs,
                lookups: AtomicUsize::new(0),
            }
        }
    }

    impl HostResolver for Arc<StaticResolver> {
        async fn lookup(&self, host: &str) -> std::io::Result<Vec<IpAddr>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if host == "unresolvable.invalid" {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such host",
                ));
            }
            Ok(self.addrs.clone())
        }
    }

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
    }

    #[test]
    fn test_ring_rotation() {
        let mut ring = AddressRing::new(vec![ip(1), ip(2)]);
        assert_eq!(ring.next_address(), Some(ip(1)));
        assert_eq!(ring.next_address(), Some(ip(2)));
        assert_eq!(ring.next_address(), Some(ip(1)));

        let mut empty = AddressRing::new(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.next_address(), None);
        assert!(empty.rotation().is_empty());
    }

    #[test]
    fn test_rotation_keeps_fallbacks() {
        let mut ring = AddressRing::new(vec![ip(1), ip(2), ip(3)]);
        assert_eq!(ring.rotation(), vec![ip(1), ip(2), ip(3)]);
        assert_eq!(ring.rotation(), vec![ip(2), ip(3), ip(1)]);
        assert_eq!(ring.next_address(), Some(ip(3)));
        assert_eq!(ring.rotation(), vec![ip(1), ip(2), ip(3)]);
    }

    #[tokio::test]
    async fn test_rotation_across_lookups() {
        let resolver = Arc::new(StaticResolver::new(vec![ip(1), ip(2), ip(3)]));
        let cache = DnsCache::with_resolver(resolver.clone(), DEFAULT_DNS_TTL);

        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(cache.get("api.example").await.unwrap());
        }
        assert_eq!(seen, vec![ip(1), ip(2), ip(3)]);
        assert_eq!(cache.get("api.example").await.unwrap(), ip(1));

        // Only the first call resolved.
        assert_eq!(resolver.lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resolution_failure() {
        let resolver = Arc::new(StaticResolver::new(vec![ip(1)]));
        let cache = DnsCache::with_resolver(resolver, DEFAULT_DNS_TTL);

        match cache.get("unresolvable.invalid").await {
            Err(PoeError::AddressResolution { host, .. }) => {
                assert_eq!(host, "unresolvable.invalid")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_ring_is_invalid() {
        let resolver = Arc::new(StaticResolver::new(vec![ip(1)]));
        let cache = DnsCache::with_resolver(resolver, DEFAULT_DNS_TTL);
        cache.insert("broken.example", Vec::new()).await;

        assert!(matches!(
            cache.get("broken.example").await,
            Err(PoeError::InvalidAddress { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_host_is_resolved_again() {
        let resolver = Arc::new(StaticResolver::new(vec![ip(1)]));
        let cache = DnsCache::with_resolver(resolver.clone(), Duration::from_secs(60));

        cache.get("api.example").await.unwrap();
        cache.get("api.example").await.unwrap();
        assert_eq!(resolver.lookups.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(61)).await;
        cache.get("api.example").await.unwrap();
        assert_eq!(resolver.lookups.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate() {
        let resolver = Arc::new(StaticResolver::new(vec![ip(1)]));
        let cache = DnsCache::with_resolver(resolver.clone(), DEFAULT_DNS_TTL);

        cache.get("api.example").await.unwrap();
        cache.invalidate("api.example").await;
        cache.get("api.example").await.unwrap();
        assert_eq!(resolver.lookups.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_system_resolver_localhost() {
        let cache = DnsCache::default();
        let addr = cache.get("localhost").await.unwrap();
        assert!(addr.is_loopback());
    }

    #[tokio::test]
    async fn test_caching_resolver_yields_rotated_ring() {
        let resolver = Arc::new(StaticResolver::new(vec![ip(7), ip(8)]));
        let cache = Arc::new(DnsCache::with_resolver(resolver, DEFAULT_DNS_TTL));
        let caching = CachingResolver::new(cache);

        let name: Name = "api.example".parse().unwrap();
        let addrs: Vec<SocketAddr> = caching.resolve(name).await.unwrap().collect();
        assert_eq!(
            addrs,
            vec![SocketAddr::new(ip(7), 0), SocketAddr::new(ip(8), 0)]
        );

        let name: Name = "api.example".parse().unwrap();
        let addrs: Vec<SocketAddr> = caching.resolve(name).await.unwrap().collect();
        assert_eq!(
            addrs,
            vec![SocketAddr::new(ip(8), 0), SocketAddr::new(ip(7), 0)]
        );
    }
}
