use utoipa::OpenApi;

/// OpenAPI document served at `/api-docs/openapi.json` and rendered by the
/// Swagger UI at `/swagger-ui/`.
///
/// The HTML form at `/` and the GraphQL endpoint are not described here.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_emails,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::EmailListRequest,
            crate::models::email::EmailListResponse,
            crate::models::email::AddressResult,
            crate::models::email::ReportSummary
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Email list format and MX checks")
    ),
    info(
        description = "Checks email address lists for format and domain MX presence",
        title = "Email List Checker API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
