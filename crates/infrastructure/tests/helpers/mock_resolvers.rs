#![allow(dead_code)]

use async_trait::async_trait;
use machine_dns_application::ports::MachineResolver;
use machine_dns_domain::DomainError;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub struct MockMachineResolver {
    responses: Arc<RwLock<HashMap<String, Result<Ipv4Addr, DomainError>>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockMachineResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn set_address(&self, machine: &str, address: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(machine.to_string(), Ok(address.parse().unwrap()));
    }

    pub fn set_failure(&self, machine: &str, output: &str) {
        self.responses.write().unwrap().insert(
            machine.to_string(),
            Err(DomainError::ResolutionFailed {
                machine: machine.to_string(),
                output: output.to_string(),
            }),
        );
    }

    pub fn set_error(&self, machine: &str, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert(machine.to_string(), Err(error));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

impl Default for MockMachineResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MachineResolver for MockMachineResolver {
    async fn resolve_machine(&self, machine: &str) -> Result<Ipv4Addr, DomainError> {
        self.calls.write().unwrap().push(machine.to_string());

        match self.responses.read().unwrap().get(machine) {
            Some(response) => response.clone(),
            None => Err(DomainError::ResolutionFailed {
                machine: machine.to_string(),
                output: "Host does not exist".to_string(),
            }),
        }
    }
}
