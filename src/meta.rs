//! Project meta-information.
//!
//! Version strings follow Semantic Versioning:
//!
//! ```text
//! MAJOR.MINOR.PATCH[-PREREL][+BUILD]
//! ```
//!
//! Prerelease phases are declared in the code itself through the `-PREREL`
//! suffix of [BASE_VERSION]: "-alpha" is the active development cycle,
//! "-beta.N" the bugfix-only beta cycle, "-rc" the release candidate cycle,
//! and an empty suffix marks the final release commit itself, and only that
//! commit.
//!
//! Release scripting expands the base version by appending a dot and the
//! number of commits since the tag of the same name (prefixed with "v"),
//! which must exist in the repository: "1.3.0-alpha.42" is 42 commits after
//! the "v1.3.0-alpha" tag. Build provenance goes after a plus sign
//! ("+git.1a2b3c4", "+gitexport.1a2b3c4.dirty") and appears only in
//! long-form display, never in artifact names.

/// Program name, for display.
pub const PROGRAM_NAME: &str = "release-meta";

/// Base version string.
///
/// This is required to match a "v"-prefixed tag in git for formal releases.
/// For prerelease (hyphenated) base versions, the formal version will be
/// further decorated with the number of commits following the tag.
pub const BASE_VERSION: &str = "1.3.0-alpha";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_version_matches_package_version() {
        assert_eq!(BASE_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_base_version_is_valid_semver() {
        assert!(semver::Version::parse(BASE_VERSION).is_ok());
    }
}
