use crate::error::{ReleaseMetaError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    output: Option<String>,
}

impl MockRepository {
    /// Create a mock whose describe query fails, as when the repository is
    /// unreadable or version control is absent
    pub fn unavailable() -> Self {
        MockRepository { output: None }
    }

    /// Create a mock returning a fixed describe line
    pub fn with_output(output: impl Into<String>) -> Self {
        MockRepository {
            output: Some(output.into()),
        }
    }
}

impl Repository for MockRepository {
    fn describe(&self) -> Result<String> {
        match &self.output {
            Some(output) => Ok(output.clone()),
            None => Err(ReleaseMetaError::Git(git2::Error::from_str(
                "describe is unavailable in this mock",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_fixed_output() {
        let repo = MockRepository::with_output("v1.0.0-0-gabc1234");
        assert_eq!(repo.describe().unwrap(), "v1.0.0-0-gabc1234");
    }

    #[test]
    fn test_mock_repository_unavailable() {
        let repo = MockRepository::unavailable();
        let err = repo.describe().unwrap_err();
        assert!(err.to_string().contains("unavailable"));
    }
}
