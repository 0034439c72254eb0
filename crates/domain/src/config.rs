pub mod dns;
pub mod errors;
pub mod logging;
pub mod registration;
pub mod resolution;
pub mod root;
pub mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use registration::RegistrationConfig;
pub use resolution::ResolutionConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
