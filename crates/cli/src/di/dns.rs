use machine_dns_application::use_cases::HandleDnsQueryUseCase;
use machine_dns_domain::Config;
use machine_dns_infrastructure::dns::DnsServerHandler;
use machine_dns_infrastructure::system::CommandMachineResolver;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver = Arc::new(CommandMachineResolver::new(&config.resolution));
        let use_case = Arc::new(HandleDnsQueryUseCase::new(resolver, config.dns.ttl));
        let handler = Arc::new(DnsServerHandler::new(use_case, &config.dns.tld)?);

        info!(zone = %handler.zone(), "DNS services initialized");

        Ok(Self { handler })
    }
}
