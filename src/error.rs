use thiserror::Error;

use crate::domain::describe::DESCRIBE_COMMAND;

/// Unified error type for release-meta operations
#[derive(Error, Debug)]
pub enum ReleaseMetaError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Release metadata error: {0}")]
    Metadata(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error(
        "Failed to parse the output of `{command}`: got {output:?}. The embedded base version \
         ({base}) must be present in the output of this command, so the repository may be \
         missing a tag named \"v{base}\", or another parse case is needed for this describe \
         format."
    )]
    DescribeMismatch {
        base: String,
        output: String,
        command: &'static str,
    },

    #[error(
        "The embedded base version ({base}) denotes a final release, but {commits} commit(s) \
         exist after the tag \"v{base}\" on this branch. A new \"vX.Y.Z-alpha\" phase tag needs \
         to be created for the next version, and the base version constant updated to match it."
    )]
    FinalReleaseAdvanced { base: String, commits: u32 },
}

/// Convenience type alias for Results in release-meta
pub type Result<T> = std::result::Result<T, ReleaseMetaError>;

impl ReleaseMetaError {
    /// Create a release metadata error with context
    pub fn metadata(msg: impl Into<String>) -> Self {
        ReleaseMetaError::Metadata(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseMetaError::Version(msg.into())
    }

    /// Create the fatal error for describe output no parse case recognizes
    pub fn describe_mismatch(base: impl Into<String>, output: impl Into<String>) -> Self {
        ReleaseMetaError::DescribeMismatch {
            base: base.into(),
            output: output.into(),
            command: DESCRIBE_COMMAND,
        }
    }
}
