//! Machine identifier extraction from question names.

use crate::DomainError;

/// Minimum number of dot-separated levels a question name must split into.
pub const MIN_DOMAIN_LEVELS: usize = 3;

/// Returns the machine identifier carried by a question name.
///
/// The name is split on `.` exactly as received, so the empty level produced by
/// a trailing dot counts: `web1.machine.docker.` splits into four levels and
/// yields `machine`, while `docker.` has only two and is rejected.
pub fn extract_machine_name(name: &str) -> Result<String, DomainError> {
    let levels: Vec<&str> = name.split('.').collect();

    if levels.len() < MIN_DOMAIN_LEVELS {
        return Err(DomainError::MalformedQuestion(name.to_string()));
    }

    Ok(levels[levels.len() - MIN_DOMAIN_LEVELS].to_string())
}
