use crate::error::{ReleaseMetaError, Result};

/// Build-metadata marker for the ceremonial fallback when no provenance is
/// available at all
pub const UNKNOWN_BUILD_SUFFIX: &str = "+unknown";

/// The three derived version strings, in derivation order.
///
/// Each downstream string extends its predecessor, never shortens it:
/// `formal` is `base` plus an optional commit-distance suffix, and
/// `ceremonial` is `formal` plus optional build metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTriple {
    /// Source-embedded semantic version, manually maintained
    pub base: String,
    /// Base version decorated with commit distance, used in artifact names
    pub formal: String,
    /// Formal version decorated with build provenance, display only
    pub ceremonial: String,
}

impl VersionTriple {
    /// The constant-only triple, used when neither release metadata nor a
    /// git repository can contribute anything.
    pub fn fallback(base_version: &str) -> Self {
        VersionTriple {
            base: base_version.to_string(),
            formal: base_version.to_string(),
            ceremonial: format!("{}{}", base_version, UNKNOWN_BUILD_SUFFIX),
        }
    }
}

/// Check whether the base version declares a prerelease phase.
///
/// Decided by a strict semver parse rather than a scan for '-': an
/// unparsable base version constant is a configuration error.
pub fn base_is_prerelease(base_version: &str) -> Result<bool> {
    let parsed = semver::Version::parse(base_version).map_err(|e| {
        ReleaseMetaError::version(format!("Invalid base version '{}': {}", base_version, e))
    })?;
    Ok(!parsed.pre.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_triple() {
        let versions = VersionTriple::fallback("1.2.0-beta.0");
        assert_eq!(versions.base, "1.2.0-beta.0");
        assert_eq!(versions.formal, "1.2.0-beta.0");
        assert_eq!(versions.ceremonial, "1.2.0-beta.0+unknown");
    }

    #[test]
    fn test_fallback_ceremonial_extends_formal() {
        let versions = VersionTriple::fallback("2.0.0");
        assert!(versions.ceremonial.starts_with(&versions.formal));
    }

    #[test]
    fn test_prerelease_detection() {
        assert!(base_is_prerelease("1.2.0-alpha").unwrap());
        assert!(base_is_prerelease("1.2.0-beta.0").unwrap());
        assert!(base_is_prerelease("1.2.0-rc.1").unwrap());
        assert!(!base_is_prerelease("1.2.0").unwrap());
    }

    #[test]
    fn test_invalid_base_version_is_an_error() {
        assert!(base_is_prerelease("1.2").is_err());
        assert!(base_is_prerelease("not-a-version").is_err());
        assert!(base_is_prerelease("").is_err());
    }

    #[test]
    fn test_invalid_base_version_message_names_the_constant() {
        let err = base_is_prerelease("1.2").unwrap_err();
        assert!(err.to_string().contains("1.2"));
    }
}
