#![allow(dead_code)]
use machine_dns_domain::Config;

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn tld(mut self, tld: &str) -> Self {
        self.config.dns.tld = tld.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.config.dns.ttl = ttl;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn bind(mut self, bind: &str) -> Self {
        self.config.server.bind_address = bind.to_string();
        self
    }

    pub fn command(mut self, command: &str) -> Self {
        self.config.resolution.command = command.to_string();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
