use crate::config::DnsConfig;
use crate::error::MxCheckError;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};
use trust_dns_resolver::{
    Name, TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
};

/// Mail-exchange verdict for one domain, shared by every address on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainVerdict {
    pub has_mx: bool,
    pub message: String,
}

impl DomainVerdict {
    pub fn reachable(message: impl Into<String>) -> Self {
        Self {
            has_mx: true,
            message: message.into(),
        }
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            has_mx: false,
            message: message.into(),
        }
    }
}

/// # Domain Checker
///
/// Outbound mail-exchange collaborator used by the validation pipeline.
///
/// The returned vector is aligned positionally with `domains`. `None` at a
/// position means no verdict could be produced for that domain. An `Err`
/// means the whole batch is unusable; callers treat it the same as a vector
/// of `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainChecker: Send + Sync {
    async fn check_domains(
        &self,
        domains: &[String],
    ) -> Result<Vec<Option<DomainVerdict>>, MxCheckError>;
}

/// DNS-backed [`DomainChecker`].
///
/// Looks up MX records with at most `concurrency` queries in flight. A
/// null MX answer (RFC 7505) is unreachable. A lookup that answers
/// "no records" yields an unreachable verdict; any other resolver failure
/// (timeout, I/O) leaves the domain without a verdict. With implicit MX
/// enabled, a domain without MX records but with an A/AAAA record counts as
/// reachable (RFC 5321 §5.1).
pub struct DnsMxChecker {
    resolver: TokioAsyncResolver,
    implicit_mx: bool,
    concurrency: usize,
}

impl DnsMxChecker {
    pub fn new(config: &DnsConfig) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = config.timeout;
        opts.attempts = config.attempts;

        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
            implicit_mx: config.implicit_mx,
            concurrency: config.concurrency.max(1),
        }
    }

    async fn check_domain(&self, domain: &str) -> Result<DomainVerdict, ResolveError> {
        match self.resolver.mx_lookup(domain).await {
            Ok(records) => match verdict_from_exchanges(records.iter().map(|mx| mx.exchange())) {
                Some(verdict) => Ok(verdict),
                None => self.check_without_mx(domain).await,
            },
            Err(err) if is_no_records(&err) => self.check_without_mx(domain).await,
            Err(err) => Err(err),
        }
    }

    async fn check_without_mx(&self, domain: &str) -> Result<DomainVerdict, ResolveError> {
        if !self.implicit_mx {
            return Ok(DomainVerdict::unreachable("No MX record found"));
        }

        match self.resolver.lookup_ip(domain).await {
            Ok(addresses) if addresses.iter().next().is_some() => Ok(DomainVerdict::reachable(
                "No MX record, address record accepted as implicit MX",
            )),
            Ok(_) => Ok(DomainVerdict::unreachable("No MX or address record found")),
            Err(err) if is_no_records(&err) => {
                Ok(DomainVerdict::unreachable("No MX or address record found"))
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl DomainChecker for DnsMxChecker {
    async fn check_domains(
        &self,
        domains: &[String],
    ) -> Result<Vec<Option<DomainVerdict>>, MxCheckError> {
        let lookups: Vec<_> = domains.iter().map(|domain| self.check_domain(domain)).collect();
        let outcomes: Vec<_> = stream::iter(lookups)
            .buffered(self.concurrency)
            .collect()
            .await;

        collect_verdicts(domains, outcomes)
    }
}

/// Verdict for a non-empty MX answer; `None` when the answer has no records.
fn verdict_from_exchanges<'a>(
    exchanges: impl IntoIterator<Item = &'a Name>,
) -> Option<DomainVerdict> {
    let mut exchanges = exchanges.into_iter().peekable();
    exchanges.peek()?;
    if exchanges.all(Name::is_root) {
        Some(DomainVerdict::unreachable("Null MX record, domain accepts no mail"))
    } else {
        Some(DomainVerdict::reachable("MX record found"))
    }
}

/// Aligns lookup outcomes with `domains`. Failed lookups leave no verdict;
/// a batch where every lookup failed is an error.
fn collect_verdicts(
    domains: &[String],
    outcomes: Vec<Result<DomainVerdict, ResolveError>>,
) -> Result<Vec<Option<DomainVerdict>>, MxCheckError> {
    let mut failed = 0;
    let verdicts: Vec<Option<DomainVerdict>> = domains
        .iter()
        .zip(outcomes)
        .map(|(domain, outcome)| match outcome {
            Ok(verdict) => {
                debug!(%domain, has_mx = verdict.has_mx, "MX lookup finished");
                Some(verdict)
            }
            Err(err) => {
                failed += 1;
                warn!(%domain, error = %err, "MX lookup failed");
                None
            }
        })
        .collect();

    if failed > 0 && failed == domains.len() {
        return Err(MxCheckError::Unavailable { failed });
    }

    Ok(verdicts)
}

/// NXDOMAIN and NODATA answers both surface as `NoRecordsFound`.
fn is_no_records(err: &ResolveError) -> bool {
    matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. })
}


#[cfg(test)]
mod tests {
    use super::testing::StaticDomainChecker;
    use super::*;
    use std::time::Duration;
    use trust_dns_resolver::proto::op::{Query, ResponseCode};

    fn no_records() -> ResolveError {
        ResolveErrorKind::NoRecordsFound {
            query: Box::new(Query::default()),
            soa: None,
            negative_ttl: None,
            response_code: ResponseCode::NXDomain,
            trusted: true,
        }
        .into()
    }

    fn timeout() -> ResolveError {
        ResolveErrorKind::Message("request timed out").into()
    }

    fn names(domains: &[&str]) -> Vec<String> {
        domains.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_verdict_constructors() {
        let yes = DomainVerdict::reachable("ok");
        assert!(yes.has_mx);
        assert_eq!(yes.message, "ok");

        let no = DomainVerdict::unreachable("nope");
        assert!(!no.has_mx);
        assert_eq!(no.message, "nope");
    }

    #[test]
    fn test_nxdomain_is_no_records() {
        assert!(is_no_records(&no_records()));
    }

    #[test]
    fn test_other_resolver_errors_are_not_no_records() {
        assert!(!is_no_records(&timeout()));
    }

    #[test]
    fn test_verdict_from_exchanges() {
        let root = Name::root();
        let mx = Name::from_ascii("mx.b.com.").unwrap();

        assert_eq!(verdict_from_exchanges(Vec::<&Name>::new()), None);
        assert!(verdict_from_exchanges([&mx]).unwrap().has_mx);
        assert!(verdict_from_exchanges([&root, &mx]).unwrap().has_mx);

        let null_mx = verdict_from_exchanges([&root]).unwrap();
        assert!(!null_mx.has_mx);
        assert_eq!(null_mx.message, "Null MX record, domain accepts no mail");
    }

    #[test]
    fn test_collect_all_ok() {
        let verdicts = collect_verdicts(
            &names(&["b.com", "d.org"]),
            vec![
                Ok(DomainVerdict::reachable("MX record found")),
                Ok(DomainVerdict::unreachable("No MX record found")),
            ],
        )
        .unwrap();

        assert_eq!(
            verdicts.iter().map(|v| v.as_ref().map(|v| v.has_mx)).collect::<Vec<_>>(),
            vec![Some(true), Some(false)]
        );
    }

    #[test]
    fn test_collect_partial_failure_leaves_gaps() {
        let verdicts = collect_verdicts(
            &names(&["b.com", "slow.net", "d.org"]),
            vec![
                Ok(DomainVerdict::reachable("MX record found")),
                Err(timeout()),
                Ok(DomainVerdict::unreachable("No MX record found")),
            ],
        )
        .unwrap();

        assert_eq!(verdicts.len(), 3);
        assert!(verdicts[0].is_some());
        assert!(verdicts[1].is_none());
        assert!(verdicts[2].is_some());
    }

    #[test]
    fn test_collect_all_failed_is_unavailable() {
        let err = collect_verdicts(&names(&["a.io", "b.io"]), vec![Err(timeout()), Err(timeout())])
            .unwrap_err();
        assert!(matches!(err, MxCheckError::Unavailable { failed: 2 }));
    }

    #[test]
    fn test_collect_empty_batch() {
        assert!(collect_verdicts(&[], Vec::new()).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dns_checker_with_no_domains_makes_no_lookups() {
        let checker = DnsMxChecker::new(&DnsConfig {
            timeout: Duration::from_millis(100),
            attempts: 1,
            implicit_mx: false,
            concurrency: 4,
        });
        let verdicts = checker.check_domains(&[]).await.unwrap();
        assert!(verdicts.is_empty());
    }

    #[tokio::test]
    async fn test_static_checker_aligns_with_request() {
        let checker = StaticDomainChecker::with(&[("b.com", true), ("dead.org", false)]);
        let domains = vec![
            "dead.org".to_string(),
            "unknown.net".to_string(),
            "b.com".to_string(),
        ];

        let verdicts = checker.check_domains(&domains).await.unwrap();

        assert_eq!(verdicts.len(), 3);
        assert_eq!(verdicts[0].as_ref().map(|v| v.has_mx), Some(false));
        assert!(verdicts[1].is_none());
        assert_eq!(verdicts[2].as_ref().map(|v| v.has_mx), Some(true));
        assert_eq!(checker.calls(), vec![domains]);
    }

    #[tokio::test]
    async fn test_failing_checker_reports_unavailable() {
        let checker = StaticDomainChecker::failing();
        let err = checker
            .check_domains(&["b.com".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, MxCheckError::Unavailable { failed: 1 }));
    }
}
