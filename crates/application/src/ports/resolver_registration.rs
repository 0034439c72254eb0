use machine_dns_domain::DomainError;
use std::path::Path;

/// Port for pointing the operating system's resolver at this server.
pub trait ResolverRegistration: Send + Sync {
    fn register(&self) -> Result<(), DomainError>;

    /// Undo `register`. Succeeds when there is nothing to remove.
    fn unregister(&self) -> Result<(), DomainError>;

    /// Location of the registration artifact, if this implementation writes one.
    fn path(&self) -> Option<&Path> {
        None
    }
}
