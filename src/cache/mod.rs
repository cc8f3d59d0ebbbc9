//! In-memory caches used by the request pipeline.
//!
//! - [`LruCache`]: response bodies keyed by request URL, bounded by entry count
//! - [`DnsCache`]: resolved addresses per host, rotated round-robin
//! - [`TtlCache`]: expiring map backing the DNS cache

mod dns;
mod lru;
mod ttl;

pub use dns::{
    AddressRing, CachingResolver, DEFAULT_DNS_TTL, DnsCache, HostResolver, SystemResolver,
};
pub use lru::LruCache;
pub use ttl::TtlCache;
