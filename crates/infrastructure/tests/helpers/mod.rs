#![allow(dead_code)]

mod mock_resolvers;

pub use mock_resolvers::MockMachineResolver;

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use machine_dns_application::use_cases::HandleDnsQueryUseCase;
use machine_dns_infrastructure::dns::DnsServerHandler;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

pub const CLIENT_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));

/// Build wire-format bytes for a DNS query carrying the given questions.
pub fn build_query_bytes(id: u16, questions: &[(&str, RecordType)]) -> Vec<u8> {
    let mut msg = Message::new();
    msg.set_id(id);
    msg.set_message_type(MessageType::Query);
    msg.set_op_code(OpCode::Query);
    msg.set_recursion_desired(true);
    for (name, record_type) in questions {
        let mut query = Query::new();
        query.set_name(Name::from_ascii(name).unwrap());
        query.set_query_type(*record_type);
        query.set_query_class(DNSClass::IN);
        msg.add_query(query);
    }
    msg.to_vec().unwrap()
}

pub fn build_handler(resolver: Arc<MockMachineResolver>, tld: &str, ttl: u32) -> DnsServerHandler {
    let use_case = Arc::new(HandleDnsQueryUseCase::new(resolver, ttl));
    DnsServerHandler::new(use_case, tld).expect("failed to create DnsServerHandler")
}

/// Send a query through the handler and parse the reply.
pub async fn execute_query(
    handler: &DnsServerHandler,
    id: u16,
    questions: &[(&str, RecordType)],
) -> Message {
    let bytes = build_query_bytes(id, questions);
    let reply = handler
        .handle_raw_udp(&bytes, CLIENT_IP)
        .await
        .expect("handler dropped a well-formed query");
    Message::from_vec(&reply).expect("failed to parse DNS response")
}

/// Extract A addresses from a response.
pub fn extract_a_ips(msg: &Message) -> Vec<Ipv4Addr> {
    msg.answers()
        .iter()
        .filter_map(|r| match r.data() {
            Some(RData::A(a)) => Some(a.0),
            _ => None,
        })
        .collect()
}
