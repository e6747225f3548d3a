use super::email::EmailQuery;
use super::health::HealthQuery;
use crate::validation::DomainChecker;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};
use std::sync::Arc;

/// Root query combining health and email list operations.
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, EmailQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Builds the schema with `checker` available to resolvers as context data.
///
/// ```rust,no_run
/// use email_list_checker::config::DnsConfig;
/// use email_list_checker::graphql::schema::create_schema;
/// use email_list_checker::validation::DnsMxChecker;
/// use std::sync::Arc;
///
/// let schema = create_schema(Arc::new(DnsMxChecker::new(&DnsConfig::default())));
/// ```
pub fn create_schema(checker: Arc<dyn DomainChecker>) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(checker)
        .finish()
}
