use git2::{DescribeFormatOptions, DescribeOptions, Repository as Git2Repo};
use std::path::Path;

use crate::error::Result;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the git repository rooted at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::open(path)?;

        Ok(Git2Repository { repo })
    }
}

impl super::Repository for Git2Repository {
    fn describe(&self) -> Result<String> {
        let mut opts = DescribeOptions::new();
        opts.describe_tags().show_commit_oid_as_fallback(true);
        let describe = self.repo.describe(&opts)?;

        // Long format keeps the commit count and object id visible even at
        // an exact tag match.
        let mut format = DescribeFormatOptions::new();
        format.always_use_long_format(true).dirty_suffix("-dirty");

        Ok(describe.format(Some(&format))?)
    }
}
