//! Parsing of describe output into commit distance, object id and dirty state

use regex::RegexBuilder;

use crate::error::{ReleaseMetaError, Result};

/// The logical describe query, for diagnostics. [crate::git::Git2Repository]
/// issues the same query through libgit2.
pub const DESCRIBE_COMMAND: &str = "git describe --tags --long --dirty --always";

/// Parsed fields of one describe output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOutput {
    /// Commits since the matching tag (zero at an exact tag match)
    pub commits: u32,
    /// Abbreviated object id, when one was captured
    pub object_id: Option<String>,
    /// Uncommitted changes present in the working copy
    pub dirty: bool,
}

/// Parse a describe output line against the embedded base version.
///
/// Two shapes are recognized, case-insensitively:
/// 1. The nearest tag matches `v<base_version>`, followed by an optional
///    commit distance, an optional abbreviated object id, and an optional
///    dirty marker.
/// 2. A bare object id (7+ hex digits), produced when no tags are reachable
///    at all.
///
/// Anything else means the repository and the base version constant disagree,
/// which is fatal for a release build.
pub fn parse(raw: &str, base_version: &str) -> Result<DescribeOutput> {
    let tagged_pattern = format!(
        r"^v{}(?:-(\d+))?(?:-g([0-9a-f]+))?(?:-(dirty))?$",
        regex::escape(base_version)
    );
    let tagged_re = RegexBuilder::new(&tagged_pattern)
        .case_insensitive(true)
        .build()?;

    if let Some(captures) = tagged_re.captures(raw) {
        let commits = match captures.get(1) {
            Some(m) => m.as_str().parse::<u32>().map_err(|_| {
                ReleaseMetaError::version(format!(
                    "Invalid commit count '{}' in describe output",
                    m.as_str()
                ))
            })?,
            None => 0,
        };
        return Ok(DescribeOutput {
            commits,
            object_id: captures.get(2).map(|m| m.as_str().to_string()),
            dirty: captures.get(3).is_some(),
        });
    }

    let bare_re = RegexBuilder::new(r"^([0-9a-f]{7,})$")
        .case_insensitive(true)
        .build()?;
    if let Some(captures) = bare_re.captures(raw) {
        return Ok(DescribeOutput {
            commits: 0,
            object_id: Some(captures[1].to_string()),
            dirty: false,
        });
    }

    Err(ReleaseMetaError::describe_mismatch(base_version, raw))
}
