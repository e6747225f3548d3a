use thiserror::Error;

/// Failure of the outbound mail-exchange check as a whole.
///
/// Individual domains that cannot be resolved are reported as missing
/// verdicts instead; this error means no usable answer came back at all.
#[derive(Debug, Error)]
pub enum MxCheckError {
    #[error("mail exchange lookup unavailable: {failed} domain lookup(s) failed")]
    Unavailable { failed: usize },
    #[error("mail exchange response has {actual} verdict(s) for {expected} domain(s)")]
    Malformed { expected: usize, actual: usize },
}

/// Unexpected failure inside the validation pipeline.
///
/// Never shown to clients; the pipeline degrades to format-only results.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("format-valid candidate without a domain: {0}")]
    MissingDomain(String),
    #[error("validation panicked: {0}")]
    Panicked(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
