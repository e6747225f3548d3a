/// Splits submitted text into candidate addresses.
///
/// Each line is trimmed and lines that end up empty are dropped. Order and
/// duplicates are kept as submitted.
///
/// # Examples
/// ```
/// use email_list_checker::validation::normalize::normalize;
///
/// let candidates = normalize("  a@b.com \r\n\n bad\na@b.com");
/// assert_eq!(candidates, vec!["a@b.com", "bad", "a@b.com"]);
/// ```
pub fn normalize(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
