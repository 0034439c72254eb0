use machine_dns_application::ports::ResolverRegistration;
use machine_dns_domain::{CliOverrides, Config};
use tracing::error;

/// Load, override and validate the configuration.
pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Remove the resolver configuration file, logging instead of failing.
pub fn unregister(registration: &dyn ResolverRegistration) {
    if let Err(e) = registration.unregister() {
        error!(error = %e, "Failed to remove resolver configuration file");
    }
}
