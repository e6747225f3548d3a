use crate::models::SubmissionOutcome;
use crate::models::email::{ERR_EMPTY_SUBMISSION, ERR_NO_CANDIDATES};
use crate::validation::normalize::normalize;
use crate::validation::{DomainChecker, validate_emails};
use tracing::{debug, info};

/// # Submit Email List
///
/// Checks a raw newline-separated submission.
///
/// - blank submission: "Please enter at least one email address."
/// - no candidate left after normalization: "Please enter valid email addresses."
///
/// In both cases the pipeline is not run. Otherwise the outcome carries one
/// result per non-empty line.
pub async fn submit_email_list(raw_text: &str, checker: &dyn DomainChecker) -> SubmissionOutcome {
    if raw_text.trim().is_empty() {
        debug!("rejecting blank submission");
        return SubmissionOutcome::rejected(ERR_EMPTY_SUBMISSION);
    }

    let candidates = normalize(raw_text);
    if candidates.is_empty() {
        debug!("rejecting submission without candidates");
        return SubmissionOutcome::rejected(ERR_NO_CANDIDATES);
    }

    let results = validate_emails(&candidates, checker).await;
    let valid = results.iter().filter(|r| r.is_valid).count();
    info!(
        submitted = results.len(),
        valid,
        invalid = results.len() - valid,
        "email list checked"
    );

    SubmissionOutcome::checked(results)
}
