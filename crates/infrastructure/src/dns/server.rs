use crate::dns::record_type_map::RecordTypeMapper;
use hickory_proto::error::ProtoError;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use machine_dns_application::use_cases::HandleDnsQueryUseCase;
use machine_dns_domain::{AnswerRecord, DnsQuestion};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, trace, warn};

/// Turns raw DNS datagrams into raw replies for names under one zone.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
    zone: Name,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>, tld: &str) -> Result<Self, ProtoError> {
        let mut zone = Name::from_ascii(tld)?;
        zone.set_fqdn(true);

        Ok(Self { use_case, zone })
    }

    pub fn zone(&self) -> &Name {
        &self.zone
    }

    /// Handle one inbound datagram.
    ///
    /// Returns `None` when the datagram is not a decodable query, in which case
    /// nothing is sent back. Otherwise a reply is always produced, even when no
    /// question could be answered.
    pub async fn handle_raw_udp(&self, query_buf: &[u8], client_ip: IpAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(query_buf) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %client_ip, error = %e, "Dropping undecodable datagram");
                return None;
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(client = %client_ip, id = request.id(), "Dropping non-query message");
            return None;
        }

        let response = self.handle_message(&request, client_ip).await;

        match response.to_vec() {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, id = request.id(), "Failed to encode response");
                None
            }
        }
    }

    /// Build the reply for a decoded query message.
    pub async fn handle_message(&self, request: &Message, client_ip: IpAddr) -> Message {
        let mut response = reply_to(request);

        let in_zone = request
            .queries()
            .first()
            .map(|query| self.zone.zone_of(query.name()))
            .unwrap_or(false);

        if !in_zone {
            debug!(
                client = %client_ip,
                zone = %self.zone,
                "Question outside served zone, replying SERVFAIL"
            );
            response.set_response_code(ResponseCode::ServFail);
            return response;
        }

        let questions: Vec<DnsQuestion> = request
            .queries()
            .iter()
            .filter(|query| {
                let in_zone = self.zone.zone_of(query.name());
                if !in_zone {
                    trace!(
                        client = %client_ip,
                        name = %query.name(),
                        zone = %self.zone,
                        "Skipping question outside served zone"
                    );
                }
                in_zone
            })
            .map(|query| {
                DnsQuestion::new(
                    query.name().to_ascii(),
                    RecordTypeMapper::from_hickory(query.query_type()),
                )
            })
            .collect();

        debug!(
            client = %client_ip,
            id = request.id(),
            questions = questions.len(),
            "DNS query received"
        );

        for answer in self.use_case.execute(&questions).await {
            match to_record(&answer) {
                Ok(record) => {
                    response.add_answer(record);
                }
                Err(e) => {
                    warn!(name = %answer.name, error = %e, "Failed to build answer record");
                }
            }
        }

        debug!(
            client = %client_ip,
            id = request.id(),
            answers = response.answers().len(),
            "Sending response"
        );

        response
    }
}

/// Start a response bound to the same transaction as `request`, echoing its
/// questions.
fn reply_to(request: &Message) -> Message {
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(request.op_code())
        .set_recursion_desired(request.recursion_desired())
        .set_checking_disabled(request.checking_disabled())
        .set_response_code(ResponseCode::NoError);
    response.add_queries(request.queries().iter().cloned());
    response
}

fn to_record(answer: &AnswerRecord) -> Result<Record, ProtoError> {
    let name = Name::from_ascii(&answer.name)?;
    let mut record = Record::from_rdata(name, answer.ttl, RData::A(A(answer.address)));
    record.set_dns_class(DNSClass::IN);
    Ok(record)
}
