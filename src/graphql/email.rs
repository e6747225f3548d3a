use crate::models::{AddressResult, ReportSummary, SubmissionOutcome};
use crate::service::submit_email_list;
use crate::validation::DomainChecker;
use async_graphql::{Context, Object, Result, SimpleObject};
use std::sync::Arc;

/// Verdict for one submitted line.
#[derive(SimpleObject, Debug, Clone)]
pub struct AddressReport {
    pub email: String,
    pub is_valid: bool,
    pub message: String,
}

impl From<AddressResult> for AddressReport {
    fn from(result: AddressResult) -> Self {
        Self {
            email: result.email,
            is_valid: result.is_valid,
            message: result.message,
        }
    }
}

#[derive(SimpleObject, Debug, Clone, Copy)]
pub struct SummaryReport {
    pub total: i32,
    pub valid: i32,
    pub invalid: i32,
}

impl From<ReportSummary> for SummaryReport {
    fn from(summary: ReportSummary) -> Self {
        let count = |n: usize| i32::try_from(n).unwrap_or(i32::MAX);
        Self {
            total: count(summary.total),
            valid: count(summary.valid),
            invalid: count(summary.invalid),
        }
    }
}

/// Either `results` or `error` is set, never both.
#[derive(SimpleObject, Debug)]
pub struct SubmissionReport {
    pub results: Option<Vec<AddressReport>>,
    pub error: Option<String>,
    pub summary: Option<SummaryReport>,
}

impl From<SubmissionOutcome> for SubmissionReport {
    fn from(outcome: SubmissionOutcome) -> Self {
        let summary = outcome.summary().map(SummaryReport::from);
        Self {
            results: outcome
                .results
                .map(|results| results.into_iter().map(AddressReport::from).collect()),
            error: outcome.error,
            summary,
        }
    }
}

#[derive(Default)]
pub struct EmailQuery;

#[Object]
impl EmailQuery {
    /// Checks a newline-separated list of addresses, same as the HTML form.
    async fn validate_emails(
        &self,
        ctx: &Context<'_>,
        input_text: String,
    ) -> Result<SubmissionReport> {
        let checker = ctx.data::<Arc<dyn DomainChecker>>()?;
        let outcome = submit_email_list(&input_text, checker.as_ref()).await;
        Ok(SubmissionReport::from(outcome))
    }
}
