use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Couldn't parse the DNS question '{0}'")]
    MalformedQuestion(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("No IP found for machine '{machine}' ({output})")]
    ResolutionFailed { machine: String, output: String },

    #[error("Invalid IPv4 address for machine '{machine}': {output:?}")]
    InvalidAddress { machine: String, output: String },

    #[error("Resolver registration error: {0}")]
    Registration(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
