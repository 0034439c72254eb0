use super::RecordType;
use std::sync::Arc;

/// A single question from an inbound message, as it appeared on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuestion {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }

    pub fn is_address(&self) -> bool {
        self.record_type == RecordType::A
    }
}
