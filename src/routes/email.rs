use crate::models::{EmailListRequest, EmailListResponse};
use crate::service::submit_email_list;
use crate::validation::DomainChecker;
use actix_web::{HttpResponse, Responder, post, web};

/// # Email List Validation Endpoint
///
/// Checks every non-empty line of `inputText` for format and domain MX
/// presence.
///
/// ## Responses
/// - **200 OK**: always, for any well-formed body. A blank submission sets
///   `error` and leaves `results` and `summary` null.
/// - **400 Bad Request**: body is not valid JSON
///
/// ## Example Request
/// ```json
/// { "inputText": "user@example.com\nnot-an-email" }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-emails",
    request_body = EmailListRequest,
    responses(
        (status = 200, description = "Results or a user-facing error", body = EmailListResponse),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Email Validation"
)]
#[post("/validate-emails")]
pub async fn validate_emails(
    req: web::Json<EmailListRequest>,
    checker: web::Data<dyn DomainChecker>,
) -> impl Responder {
    let outcome = submit_email_list(&req.input_text, checker.get_ref()).await;
    HttpResponse::Ok().json(EmailListResponse::from(outcome))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_emails);
}
