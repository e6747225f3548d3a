use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /api/v1/health` returns `{ status, version, timestamp }`.
pub mod health;

/// # Email List Endpoint
///
/// `POST /api/v1/validate-emails` takes `{ "inputText": "..." }` and returns
/// the per-address results, the user-facing error and a summary.
pub mod email;

/// # HTML Form
///
/// `GET /` serves the submission form, `POST /` renders the report.
pub mod page;

/// # GraphQL Endpoints
///
/// `POST /api/v1/graphql` and the playground at `GET /api/v1/playground`.
pub mod graphql;

/// # Route Configuration
///
/// ```text
/// GET  /                           - submission form
/// POST /                           - form submission, HTML report
/// GET  /api/v1/health              - service health status
/// POST /api/v1/validate-emails     - JSON email list check
/// POST /api/v1/graphql             - GraphQL endpoint
/// GET  /api/v1/playground          - GraphQL playground
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(page::configure_routes).service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(email::configure_routes)
            .configure(graphql::configure_routes),
    );
}
