use async_trait::async_trait;
use machine_dns_application::ports::MachineResolver;
use machine_dns_domain::config::ResolutionConfig;
use machine_dns_domain::DomainError;
use std::net::Ipv4Addr;
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::debug;

const SUDO_PROGRAM: &str = "sudo";

/// Resolves machine addresses by running `<command> ip <machine>`, optionally
/// as another user through `sudo -u`.
pub struct CommandMachineResolver {
    program: String,
    args: Vec<String>,
    user: Option<String>,
}

impl CommandMachineResolver {
    pub fn new(config: &ResolutionConfig) -> Self {
        Self {
            program: config.command.clone(),
            args: config.args.clone(),
            user: config.effective_user().map(str::to_string),
        }
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Build the process invocation for one lookup.
    pub fn build_command(&self, machine: &str) -> Command {
        let mut command = match &self.user {
            Some(user) => {
                let mut command = Command::new(SUDO_PROGRAM);
                command.arg("-u").arg(user).arg(&self.program);
                command
            }
            None => Command::new(&self.program),
        };

        command
            .args(&self.args)
            .arg("ip")
            .arg(machine)
            .stdin(Stdio::null());
        command
    }

    /// Parse the command's output as a dotted-decimal IPv4 address.
    ///
    /// Exactly one trailing newline is stripped; anything else must be the
    /// address itself.
    pub fn parse_address(machine: &str, output: &[u8]) -> Result<Ipv4Addr, DomainError> {
        let text = String::from_utf8_lossy(output);
        let literal = text.strip_suffix('\n').unwrap_or(&text);

        literal
            .parse::<Ipv4Addr>()
            .map_err(|_| DomainError::InvalidAddress {
                machine: machine.to_string(),
                output: text.to_string(),
            })
    }
}

/// stdout followed by stderr.
fn combined_output(output: &Output) -> Vec<u8> {
    let mut combined = Vec::with_capacity(output.stdout.len() + output.stderr.len());
    combined.extend_from_slice(&output.stdout);
    combined.extend_from_slice(&output.stderr);
    combined
}

#[async_trait]
impl MachineResolver for CommandMachineResolver {
    async fn resolve_machine(&self, machine: &str) -> Result<Ipv4Addr, DomainError> {
        debug!(
            machine = %machine,
            command = %self.program,
            user = self.user.as_deref().unwrap_or(""),
            "Running machine address lookup"
        );

        let output = self
            .build_command(machine)
            .output()
            .await
            .map_err(|e| DomainError::ResolutionFailed {
                machine: machine.to_string(),
                output: e.to_string(),
            })?;

        let combined = combined_output(&output);

        if !output.status.success() {
            return Err(DomainError::ResolutionFailed {
                machine: machine.to_string(),
                output: String::from_utf8_lossy(&combined).into_owned(),
            });
        }

        Self::parse_address(machine, &combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_strips_single_newline() {
        let address = CommandMachineResolver::parse_address("dev", b"192.168.99.100\n").unwrap();
        assert_eq!(address, Ipv4Addr::new(192, 168, 99, 100));
    }

    #[test]
    fn test_parse_address_without_newline() {
        let address = CommandMachineResolver::parse_address("dev", b"10.0.0.1").unwrap();
        assert_eq!(address, Ipv4Addr::new(10, 0, 0, 1));
    }

    #[test]
    fn test_parse_address_rejects_empty_output() {
        let result = CommandMachineResolver::parse_address("dev", b"");
        assert!(matches!(result, Err(DomainError::InvalidAddress { .. })));
    }

    #[test]
    fn test_parse_address_rejects_extra_newlines_and_noise() {
        let outputs: [&[u8]; 4] = [
            b"10.0.0.1\n\n",
            b"10.0.0.1\r\n",
            b"Host does not exist\n",
            b"::1\n",
        ];
        for output in outputs {
            assert!(
                CommandMachineResolver::parse_address("dev", output).is_err(),
                "{:?} should not parse",
                String::from_utf8_lossy(output)
            );
        }
    }
}
