//! Current release metadata
//!
//! The values below are edited by hand when cutting a release; there is no
//! runtime mechanism to change them. The payload is built fresh per request
//! and discarded after the response is sent.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::models::{PlatformArtifact, Platforms, VersionInfo};

// Update these values when releasing a new version.
const VERSION: &str = "1.0.24";
const BUILD_NUMBER: &str = "25";
const WINDOWS_DOWNLOAD_URL: &str =
    "https://github.com/Abinaya-Ramanathan/central360/releases/download/v1.0.24/company360-setup.exe";
const ANDROID_DOWNLOAD_URL: &str =
    "https://github.com/Abinaya-Ramanathan/central360/releases/download/v1.0.24/company360-v1.0.24.apk";
const RELEASE_NOTES: &str = "Added search option in staff attendance entry page. \
    Updated Daily Mining Activity with Edit Activity button. \
    Renamed Purchase details to Expense details. \
    Added Credit Received and Purchase Credit Paid columns to overall summary. \
    Added Calculated Salary column in Present days count. \
    Added custom mahal details option. \
    Made all fields non-mandatory. \
    Backend version 0.1.10";
// Set to true for critical security updates
const UPDATE_REQUIRED: bool = false;
const RELEASE_DATE: &str = "2025-01-16T00:00:00Z";

/// Build the version payload for the current release
///
/// Parsing the release-date literal is the one fallible step; a bad hand
/// edit surfaces as an error here rather than a panic.
pub fn current() -> Result<VersionInfo> {
    let release_date: DateTime<Utc> = RELEASE_DATE
        .parse()
        .map_err(|e: chrono::ParseError| Error::ReleaseMetadata(e.to_string()))?;

    Ok(VersionInfo {
        version: VERSION.to_string(),
        build_number: BUILD_NUMBER.to_string(),
        platforms: Platforms {
            windows: PlatformArtifact {
                download_url: WINDOWS_DOWNLOAD_URL.to_string(),
                is_required: false,
            },
            android: PlatformArtifact {
                download_url: ANDROID_DOWNLOAD_URL.to_string(),
                is_required: false,
            },
        },
        release_notes: RELEASE_NOTES.to_string(),
        is_required: UPDATE_REQUIRED,
        release_date,
    })
}
