use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MSG_VALID_MX: &str = "Valid domain with MX record";
pub const MSG_NO_MX: &str = "Domain has no valid MX record";
pub const MSG_VERIFICATION_UNAVAILABLE: &str = "Domain verification unavailable - format is valid";
pub const MSG_INVALID_FORMAT: &str = "Invalid email format";
pub const MSG_FORMAT_ONLY: &str = "Format valid (verification unavailable)";
pub const MSG_PROCESSING_ERROR: &str = "Processing error";

pub const ERR_EMPTY_SUBMISSION: &str = "Please enter at least one email address.";
pub const ERR_NO_CANDIDATES: &str = "Please enter valid email addresses.";

/// Verdict for one submitted line.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddressResult {
    pub email: String,
    pub is_valid: bool,
    pub message: String,
}

impl AddressResult {
    pub fn new(email: impl Into<String>, is_valid: bool, message: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_valid,
            message: message.into(),
        }
    }
}

/// Form and JSON body carrying the raw newline-separated list.
///
/// A missing field is read as an empty submission.
#[derive(Deserialize, Serialize, ToSchema, Debug, Default)]
pub struct EmailListRequest {
    #[serde(rename = "inputText", default)]
    pub input_text: String,
}

/// Outcome of one submission: either results or a user-facing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub results: Option<Vec<AddressResult>>,
    pub error: Option<String>,
}

impl SubmissionOutcome {
    pub fn checked(results: Vec<AddressResult>) -> Self {
        Self {
            results: Some(results),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            results: None,
            error: Some(error.into()),
        }
    }

    pub fn summary(&self) -> Option<ReportSummary> {
        self.results.as_deref().map(ReportSummary::from_results)
    }
}

/// Totals shown above the report table.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl ReportSummary {
    pub fn from_results(results: &[AddressResult]) -> Self {
        let valid = results.iter().filter(|r| r.is_valid).count();
        Self {
            total: results.len(),
            valid,
            invalid: results.len() - valid,
        }
    }
}

/// JSON response of `POST /api/v1/validate-emails`.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct EmailListResponse {
    pub results: Option<Vec<AddressResult>>,
    pub error: Option<String>,
    pub summary: Option<ReportSummary>,
}

impl From<SubmissionOutcome> for EmailListResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        let summary = outcome.summary();
        Self {
            results: outcome.results,
            error: outcome.error,
            summary,
        }
    }
}
