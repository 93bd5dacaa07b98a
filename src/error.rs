use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaseError {
    #[error("Unknown case convention: {0}")]
    UnknownCase(String),

    /// An initialism that could never match a word produced by the splitter.
    #[error("Invalid initialism '{0}': expected one or more ASCII letters or digits")]
    InvalidInitialism(String),
}
