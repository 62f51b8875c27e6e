//! Version resolution: derive the (base, formal, ceremonial) triple from the
//! embedded constant plus the state of a source tree.

use std::path::Path;

use crate::domain::describe;
use crate::domain::version::{base_is_prerelease, VersionTriple};
use crate::error::{ReleaseMetaError, Result};
use crate::git::{Git2Repository, Repository};
use crate::release_info;
use crate::ui;

/// Default build-metadata prefix: builds are assumed to come from an exported
/// tarball unless the caller says otherwise.
pub const DEFAULT_GIT_PREFIX: &str = "gitexport";

/// Resolve the version triple for the source tree at `dir`.
///
/// An exported release tree carries a `release_info` fragment and wins
/// outright. Otherwise a git working copy contributes describe data, and a
/// bare tree yields the constant-only fallback.
///
/// # Arguments
/// * `dir` - Root of the source tree being versioned
/// * `base_version` - The embedded base version constant
/// * `git_prefix` - Build-metadata prefix denoting git-derived provenance
///
/// # Returns
/// * `Ok(VersionTriple)` - The resolved strings
/// * `Err` - On unreadable metadata, or a fatal tag/version mismatch
pub fn resolve(dir: &Path, base_version: &str, git_prefix: &str) -> Result<VersionTriple> {
    let mut versions = VersionTriple::fallback(base_version);

    let info_path = dir.join(release_info::FILE_NAME);
    if info_path.is_file() {
        release_info::load(&info_path)?.apply_to(&mut versions);
    } else if dir.join(".git").exists() {
        match Git2Repository::open(dir) {
            Ok(repo) => return resolve_from_repository(&repo, base_version, git_prefix),
            Err(e) => ui::display_warning(&format!(
                "Cannot open git repository in '{}': {}. Build will be marked as unsupported.",
                dir.display(),
                e
            )),
        }
    }

    Ok(versions)
}

/// Resolve from the current working directory.
pub fn resolve_current_dir(base_version: &str, git_prefix: &str) -> Result<VersionTriple> {
    resolve(Path::new("."), base_version, git_prefix)
}

/// Resolve using an already-opened describe source.
///
/// A failing describe query is not fatal: a warning is printed and the
/// constant-only fallback comes back. Describe output that parses but does
/// not match the base version is fatal.
pub fn resolve_from_repository<R: Repository>(
    repo: &R,
    base_version: &str,
    git_prefix: &str,
) -> Result<VersionTriple> {
    match repo.describe() {
        Ok(raw) => from_describe_output(raw.trim(), base_version, git_prefix),
        Err(e) => {
            ui::display_warning(&format!(
                "Failed to run `{}`: {}. Build will be marked as unsupported.",
                describe::DESCRIBE_COMMAND,
                e
            ));
            Ok(VersionTriple::fallback(base_version))
        }
    }
}

/// Derive the triple from one describe output line.
fn from_describe_output(raw: &str, base_version: &str, git_prefix: &str) -> Result<VersionTriple> {
    let parsed = describe::parse(raw, base_version)?;

    let formal = if parsed.commits > 0 {
        if !base_is_prerelease(base_version)? {
            // A hyphen suffix invented here would sort below the final
            // release, so the next phase has to be declared in source.
            return Err(ReleaseMetaError::FinalReleaseAdvanced {
                base: base_version.to_string(),
                commits: parsed.commits,
            });
        }
        // Base is already something like "1.2.0-alpha", so a dot suffix
        // keeps semver precedence intact: "1.2.0-alpha.42".
        format!("{}.{}", base_version, parsed.commits)
    } else {
        base_version.to_string()
    };

    let mut build_ids = Vec::new();
    if let Some(object_id) = &parsed.object_id {
        build_ids.push(format!("{}.{}", git_prefix, object_id));
    }
    if parsed.dirty {
        build_ids.push("dirty".to_string());
    }

    let ceremonial = if build_ids.is_empty() {
        formal.clone()
    } else {
        format!("{}+{}", formal, build_ids.join("."))
    };

    Ok(VersionTriple {
        base: base_version.to_string(),
        formal,
        ceremonial,
    })
}
