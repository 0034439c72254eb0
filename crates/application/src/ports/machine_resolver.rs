use async_trait::async_trait;
use machine_dns_domain::DomainError;
use std::net::Ipv4Addr;

/// Looks up the current IPv4 address of a machine by its identifier.
///
/// Every call performs a fresh lookup; implementations must not cache.
#[async_trait]
pub trait MachineResolver: Send + Sync {
    async fn resolve_machine(&self, machine: &str) -> Result<Ipv4Addr, DomainError>;
}
