//! Domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest-release metadata served to update clients
///
/// Wire field names are camelCase; field order matches the payload the
/// desktop and mobile clients already parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    pub build_number: String,
    pub platforms: Platforms,
    pub release_notes: String,
    pub is_required: bool,
    pub release_date: DateTime<Utc>,
}

/// Download artifacts per distribution channel
///
/// A struct rather than a map: the key set and serialization order are fixed,
/// so repeated responses are byte-identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platforms {
    pub windows: PlatformArtifact,
    pub android: PlatformArtifact,
}

/// A single downloadable release artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformArtifact {
    pub download_url: String,
    pub is_required: bool,
}
