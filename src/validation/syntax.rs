use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern is valid")
});

/// Checks the candidate against the email shape rule:
/// a local part and a dotted domain part, both free of whitespace and `@`.
///
/// # Examples
/// ```
/// use email_list_checker::validation::syntax::is_valid_format;
///
/// assert!(is_valid_format("user@example.com"));
/// assert!(!is_valid_format("user@localhost"));
/// assert!(!is_valid_format(" user@example.com"));
/// ```
pub fn is_valid_format(candidate: &str) -> bool {
    EMAIL_SHAPE.is_match(candidate)
}

/// Returns the part of `candidate` after the first `@`.
pub fn extract_domain(candidate: &str) -> Option<&str> {
    candidate.split_once('@').map(|(_, domain)| domain)
}
