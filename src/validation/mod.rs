/// Splits submitted text into trimmed, non-empty candidate lines.
///
/// # Examples
/// ```
/// use email_list_checker::validation::normalize::normalize;
///
/// assert_eq!(normalize(" a@b.com \n\nbad"), vec!["a@b.com", "bad"]);
/// ```
pub mod normalize;

/// Email shape rule and domain extraction.
///
/// The rule only checks shape: a local part, `@`, and a dotted domain part,
/// with no whitespace or extra `@` anywhere.
pub mod syntax;

/// Mail-exchange reachability: the [`mx::DomainChecker`] seam and its
/// DNS-backed implementation.
pub mod mx;

/// Format filtering, domain deduplication, the batched MX check and
/// reassembly of results in input order.
pub mod pipeline;

pub use mx::{DnsMxChecker, DomainChecker, DomainVerdict};
pub use pipeline::validate_emails;
