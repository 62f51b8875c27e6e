//! Reading and writing the `release_info` metadata fragment.
//!
//! An exported release tree carries this file forward so builds made from the
//! export can report the same version strings as the repository the export
//! was cut from. The fragment is three assignment lines with double-quoted
//! values and no spaces around `=`, which makes it valid TOML and at the same
//! time sourceable by a POSIX shell. Reading is strict key-value parsing,
//! never evaluation.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::version::VersionTriple;
use crate::error::{ReleaseMetaError, Result};

/// File name of the metadata fragment inside an exported release tree
pub const FILE_NAME: &str = "release_info";

/// Version strings read back from a release_info fragment.
///
/// Every key is optional: a fragment only overrides the strings it names.
/// Unrecognized keys are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ReleaseInfo {
    #[serde(rename = "RELEASE_VERSION_BASE")]
    pub base: Option<String>,

    #[serde(rename = "RELEASE_VERSION_FORMAL")]
    pub formal: Option<String>,

    #[serde(rename = "RELEASE_VERSION_CEREMONIAL")]
    pub ceremonial: Option<String>,
}

impl ReleaseInfo {
    /// Override the strings this fragment names, leaving the rest untouched.
    pub fn apply_to(&self, versions: &mut VersionTriple) {
        if let Some(base) = &self.base {
            versions.base = base.clone();
        }
        if let Some(formal) = &self.formal {
            versions.formal = formal.clone();
        }
        if let Some(ceremonial) = &self.ceremonial {
            versions.ceremonial = ceremonial.clone();
        }
    }
}

/// Load version overrides from a release_info file.
///
/// # Arguments
/// * `path` - Location of the fragment
///
/// # Returns
/// * `Ok(ReleaseInfo)` - Parsed overrides, any subset of the three keys
/// * `Err` - If the file cannot be read or is not well-formed
pub fn load(path: &Path) -> Result<ReleaseInfo> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        ReleaseMetaError::metadata(format!("Cannot parse '{}': {}", path.display(), e))
    })
}

/// Format the metadata fragment for a resolved triple.
///
/// Pure formatting: one assignment per version string, each value quoted.
pub fn emit(versions: &VersionTriple) -> String {
    format!(
        "RELEASE_VERSION_BASE=\"{}\"\n\
         RELEASE_VERSION_FORMAL=\"{}\"\n\
         RELEASE_VERSION_CEREMONIAL=\"{}\"\n",
        versions.base, versions.formal, versions.ceremonial
    )
}

/// Write the metadata fragment to a file.
pub fn write(path: &Path, versions: &VersionTriple) -> Result<()> {
    fs::write(path, emit(versions))?;
    Ok(())
}
