//! Machine DNS Domain Layer
pub mod config;
pub mod dns_question;
pub mod dns_record;
pub mod errors;
pub mod machine_name;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_question::DnsQuestion;
pub use dns_record::{AnswerRecord, RecordType};
pub use errors::DomainError;
pub use machine_name::extract_machine_name;
