use email_list_checker::config::AppConfig;
use email_list_checker::server::EmailCheckServer;
use email_list_checker::validation::DnsMxChecker;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Email List Checker entry point
///
/// Loads `.env`, installs the tracing subscriber (`RUST_LOG`, default
/// `info`), reads [`AppConfig`] from the environment and serves:
/// - HTML form: `/`
/// - JSON API: `/api/v1/validate-emails`, `/api/v1/health`
/// - GraphQL: `/api/v1/graphql`, playground at `/api/v1/playground`
/// - Swagger UI: `/swagger-ui/`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
    let checker = Arc::new(DnsMxChecker::new(&config.dns));

    EmailCheckServer::new(config, checker).run().await
}
