use machine_dns_application::ports::ResolverRegistration;
use machine_dns_domain::{Config, DomainError};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Whether this platform reads per-domain files from a resolver directory.
pub const RESOLVER_FILES_SUPPORTED: bool = cfg!(target_os = "macos");

const NAMESERVER_ADDRESS: &str = "127.0.0.1";

/// Writes `<dir>/<tld>` so the system resolver sends `*.<tld>` queries here.
pub struct ResolverFileRegistration {
    path: PathBuf,
    port: u16,
}

impl ResolverFileRegistration {
    pub fn new(dir: impl AsRef<Path>, tld: &str, port: u16) -> Self {
        Self {
            path: dir.as_ref().join(tld),
            port,
        }
    }

    pub fn contents(&self) -> String {
        format!("nameserver {}\nport {}\n", NAMESERVER_ADDRESS, self.port)
    }
}

impl ResolverRegistration for ResolverFileRegistration {
    fn register(&self) -> Result<(), DomainError> {
        info!(path = %self.path.display(), "Creating configuration file");

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        options
            .open(&self.path)
            .and_then(|mut file| file.write_all(self.contents().as_bytes()))
            .map_err(|e| {
                DomainError::Registration(format!(
                    "Could not create configuration file {}: {}",
                    self.path.display(),
                    e
                ))
            })
    }

    fn unregister(&self) -> Result<(), DomainError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Removed configuration file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::IoError(format!(
                "Could not remove configuration file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Registration used where resolver files are unsupported or disabled.
#[derive(Debug, Default)]
pub struct NoopRegistration;

impl ResolverRegistration for NoopRegistration {
    fn register(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn unregister(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

/// Pick the registration strategy for this host.
pub fn select_registration(config: &Config) -> Box<dyn ResolverRegistration> {
    select_registration_for(RESOLVER_FILES_SUPPORTED, config)
}

/// Same as [`select_registration`] with platform support given explicitly.
pub fn select_registration_for(supported: bool, config: &Config) -> Box<dyn ResolverRegistration> {
    if supported && !config.registration.server_only {
        Box::new(ResolverFileRegistration::new(
            &config.registration.resolver_dir,
            &config.dns.tld,
            config.server.port,
        ))
    } else {
        Box::new(NoopRegistration)
    }
}
