use crate::ports::MachineResolver;
use machine_dns_domain::{extract_machine_name, AnswerRecord, DnsQuestion, DomainError};
use std::sync::Arc;
use tracing::{debug, trace, warn};

pub struct HandleDnsQueryUseCase {
    resolver: Arc<dyn MachineResolver>,
    ttl: u32,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<dyn MachineResolver>, ttl: u32) -> Self {
        Self { resolver, ttl }
    }

    /// Answer every address question in `questions`, in order.
    ///
    /// A question that cannot be answered is logged and skipped; it never
    /// prevents the remaining questions from being answered.
    pub async fn execute(&self, questions: &[DnsQuestion]) -> Vec<AnswerRecord> {
        let mut answers = Vec::with_capacity(questions.len());

        for question in questions {
            match self.resolve_question(question).await {
                Ok(answer) => answers.push(answer),
                Err(DomainError::UnsupportedRecordType(_)) => {
                    trace!(
                        name = %question.name,
                        record_type = %question.record_type,
                        "Skipping non-address question"
                    );
                }
                Err(e @ DomainError::MalformedQuestion(_)) => {
                    warn!(name = %question.name, "{}", e);
                }
                Err(DomainError::ResolutionFailed { machine, output }) => {
                    warn!(
                        name = %question.name,
                        machine = %machine,
                        output = %output.trim_end(),
                        "No IP found for machine"
                    );
                }
                Err(e) => {
                    warn!(name = %question.name, error = %e, "Failed to answer question");
                }
            }
        }

        answers
    }

    /// Resolve a single question into its answer record.
    pub async fn resolve_question(
        &self,
        question: &DnsQuestion,
    ) -> Result<AnswerRecord, DomainError> {
        if !question.is_address() {
            return Err(DomainError::UnsupportedRecordType(
                question.record_type.to_string(),
            ));
        }

        let machine = extract_machine_name(&question.name)?;
        let address = self.resolver.resolve_machine(&machine).await?;

        debug!(
            name = %question.name,
            machine = %machine,
            address = %address,
            "Resolved machine address"
        );

        Ok(AnswerRecord::new(Arc::clone(&question.name), self.ttl, address))
    }
}
