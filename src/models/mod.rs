/// # Health Status Response
///
/// Operational status of the service with a timestamp, returned by the
/// health endpoints.
pub mod health;

/// # Email List Models
///
/// Request and response shapes of the email list check: per-address
/// results, the submission outcome and the report summary.
pub mod email;

pub use email::{
    AddressResult, EmailListRequest, EmailListResponse, ReportSummary, SubmissionOutcome,
};
pub use health::HealthResponse;
