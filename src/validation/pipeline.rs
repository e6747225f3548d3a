use crate::error::{MxCheckError, PipelineError};
use crate::models::AddressResult;
use crate::models::email::{
    MSG_FORMAT_ONLY, MSG_INVALID_FORMAT, MSG_NO_MX, MSG_PROCESSING_ERROR, MSG_VALID_MX,
    MSG_VERIFICATION_UNAVAILABLE,
};
use crate::validation::mx::{DomainChecker, DomainVerdict};
use crate::validation::syntax::{extract_domain, is_valid_format};
use futures::FutureExt;
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::panic::AssertUnwindSafe;
use tracing::{debug, error, warn};

/// # Validation Pipeline
///
/// Produces one [`AddressResult`] per candidate, in input order, duplicates
/// included.
///
/// 1. Candidates failing the format rule are marked "Invalid email format"
///    and take no further part.
/// 2. Domains of the remaining candidates are deduplicated and sent to
///    `checker` in a single call. Nothing is sent if no candidate passed.
/// 3. A failed or misaligned checker response means no verdicts; affected
///    addresses stay valid with the "verification unavailable" message.
/// 4. Results are reassembled in input order.
///
/// Any other failure, including a panic in the checker, degrades every
/// candidate to format-only validation.
pub async fn validate_emails(
    candidates: &[String],
    checker: &dyn DomainChecker,
) -> Vec<AddressResult> {
    let outcome = AssertUnwindSafe(run_pipeline(candidates, checker))
        .catch_unwind()
        .await;

    let failure = match outcome {
        Ok(Ok(results)) => return results,
        Ok(Err(err)) => err,
        Err(payload) => PipelineError::Panicked(panic_message(payload.as_ref())),
    };

    error!(
        error = %failure,
        candidates = candidates.len(),
        "validation pipeline failed, degrading to format-only results"
    );
    format_only(candidates)
}

/// Format-only verdicts used when the pipeline cannot complete.
pub fn format_only(candidates: &[String]) -> Vec<AddressResult> {
    candidates
        .iter()
        .map(|candidate| {
            if is_valid_format(candidate) {
                AddressResult::new(candidate.as_str(), true, MSG_FORMAT_ONLY)
            } else {
                AddressResult::new(candidate.as_str(), false, MSG_INVALID_FORMAT)
            }
        })
        .collect()
}

async fn run_pipeline(
    candidates: &[String],
    checker: &dyn DomainChecker,
) -> Result<Vec<AddressResult>, PipelineError> {
    let mut computed: HashMap<&str, AddressResult> = HashMap::with_capacity(candidates.len());
    let mut pending: Vec<(&str, &str)> = Vec::new();

    for candidate in candidates {
        if !is_valid_format(candidate) {
            computed.insert(
                candidate.as_str(),
                AddressResult::new(candidate.as_str(), false, MSG_INVALID_FORMAT),
            );
            continue;
        }
        let domain = extract_domain(candidate)
            .ok_or_else(|| PipelineError::MissingDomain(candidate.clone()))?;
        pending.push((candidate.as_str(), domain));
    }

    let mut seen = HashSet::new();
    let domains: Vec<String> = pending
        .iter()
        .filter(|(_, domain)| seen.insert(*domain))
        .map(|(_, domain)| domain.to_string())
        .collect();

    debug!(
        candidates = candidates.len(),
        format_valid = pending.len(),
        unique_domains = domains.len(),
        "checking domains"
    );

    let verdicts = if domains.is_empty() {
        HashMap::new()
    } else {
        lookup_verdicts(checker, &domains).await
    };

    for (candidate, domain) in pending {
        let result = match verdicts.get(domain) {
            Some(verdict) if verdict.has_mx => AddressResult::new(candidate, true, MSG_VALID_MX),
            Some(_) => AddressResult::new(candidate, false, MSG_NO_MX),
            None => AddressResult::new(candidate, true, MSG_VERIFICATION_UNAVAILABLE),
        };
        computed.insert(candidate, result);
    }

    Ok(candidates
        .iter()
        .map(|candidate| {
            computed.get(candidate.as_str()).cloned().unwrap_or_else(|| {
                AddressResult::new(candidate.as_str(), false, MSG_PROCESSING_ERROR)
            })
        })
        .collect())
}

/// Runs the batched check. Errors and misaligned responses yield an empty
/// table.
async fn lookup_verdicts<'a>(
    checker: &dyn DomainChecker,
    domains: &'a [String],
) -> HashMap<&'a str, DomainVerdict> {
    let response = checker
        .check_domains(domains)
        .await
        .and_then(|verdicts| {
            if verdicts.len() == domains.len() {
                Ok(verdicts)
            } else {
                Err(MxCheckError::Malformed {
                    expected: domains.len(),
                    actual: verdicts.len(),
                })
            }
        });

    match response {
        Ok(verdicts) => domains
            .iter()
            .map(String::as_str)
            .zip(verdicts)
            .filter_map(|(domain, verdict)| verdict.map(|v| (domain, v)))
            .collect(),
        Err(err) => {
            warn!(error = %err, domains = domains.len(), "domain verification unavailable");
            HashMap::new()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
