use crate::config::AppConfig;
use crate::graphql::schema::create_schema;
use crate::openapi::ApiDoc;
use crate::routes;
use crate::validation::DomainChecker;
use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// # Email Check Server
///
/// Owns the configuration and the domain checker shared by every worker.
///
/// ```rust,no_run
/// use email_list_checker::config::AppConfig;
/// use email_list_checker::server::EmailCheckServer;
/// use email_list_checker::validation::DnsMxChecker;
/// use std::sync::Arc;
///
/// # async fn start() -> std::io::Result<()> {
/// let config = AppConfig::default();
/// let checker = Arc::new(DnsMxChecker::new(&config.dns));
/// EmailCheckServer::new(config, checker).run().await
/// # }
/// ```
pub struct EmailCheckServer {
    config: AppConfig,
    checker: Arc<dyn DomainChecker>,
}

impl EmailCheckServer {
    pub fn new(config: AppConfig, checker: Arc<dyn DomainChecker>) -> Self {
        Self { config, checker }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Binds the configured address and serves until shutdown.
    pub async fn run(self) -> std::io::Result<()> {
        let Self { config, checker } = self;

        info!(
            host = %config.host,
            port = config.port,
            "email list checker listening on http://{}:{}",
            config.host,
            config.port
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .configure(app_config(checker.clone()))
        })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
    }
}

/// Registers shared state, all routes and the Swagger UI.
///
/// Used by [`EmailCheckServer::run`] and by tests through
/// `actix_web::test::init_service`.
pub fn app_config(checker: Arc<dyn DomainChecker>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let schema = create_schema(checker.clone());
        let openapi = ApiDoc::openapi();

        cfg.app_data(web::Data::from(checker))
            .app_data(web::Data::new(schema))
            .configure(routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi));
    }
}
