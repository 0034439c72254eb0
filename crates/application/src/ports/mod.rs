mod machine_resolver;
mod resolver_registration;

pub use machine_resolver::MachineResolver;
pub use resolver_registration::ResolverRegistration;
