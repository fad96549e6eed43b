use thiserror::Error;

/// Fatal failures of a run. None of these are retried: the front end reports
/// the message and exits non-zero without producing partial output.
#[derive(Debug, Error)]
pub enum Error {
    /// The derivative expression could not be parsed, or uses identifiers
    /// other than `x` and `y`.
    #[error("error parsing expr `{expr}`: {source}")]
    Expression {
        expr: String,
        #[source]
        source: meval::Error,
    },

    /// Inputs that would make the computation degenerate or unbounded,
    /// rejected before any stepping or sampling begins.
    #[error("{0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
