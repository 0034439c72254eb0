use std::net::Ipv4Addr;
use std::sync::Arc;

/// An IN/A answer synthesized for one resolved question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: Arc<str>,

    pub ttl: u32,

    pub address: Ipv4Addr,
}

impl AnswerRecord {
    pub fn new(name: impl Into<Arc<str>>, ttl: u32, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            ttl,
            address,
        }
    }
}
