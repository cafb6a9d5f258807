//! Serializable icon generation profile.
//!
//! An [`IconProfile`] holds everything the batch driver needs: the status
//! color table, the list of sizes, the file prefix, the output directory and
//! the `(status, size)` pairs to skip. Two presets ship with the crate; other
//! profiles can be loaded from JSON.
//!
//! # Example
//!
//! ```
//! use status_icons::{Color, IconProfile};
//!
//! let profile = IconProfile::new("icons", "icon")
//!     .with_size(16)
//!     .with_size(48)
//!     .with_status("idle", Color::INACTIVE)
//!     .with_status("busy", Color::ACTIVE)
//!     .with_exclusion("busy", 48);
//!
//! let json = profile.to_json().unwrap();
//! let restored = IconProfile::from_json(&json).unwrap();
//! assert_eq!(restored.specs().count(), 3);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::icon::IconSpec;

/// Sizes generated by both presets.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// File prefix used by both presets.
pub const DEFAULT_PREFIX: &str = "icon";

/// Output directory used by both presets.
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

// ============================================================================
// Profile entries
// ============================================================================

/// A status name and the color its icon is filled with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusColor {
    pub name: String,
    pub color: Color,
}

/// A `(status, size)` pair that is never generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exclusion {
    pub status: String,
    pub size: u32,
}

impl Exclusion {
    pub fn new(status: impl Into<String>, size: u32) -> Self {
        Self {
            status: status.into(),
            size,
        }
    }
}

// ============================================================================
// Presets
// ============================================================================

/// The built-in profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Preset {
    /// `inactive` and `active`, without the 128px active icon.
    TimerExtension,
    /// `inactive`, `connected` and `error` at every size.
    #[default]
    WatchParty,
}

impl Preset {
    pub fn profile(self) -> IconProfile {
        match self {
            Self::TimerExtension => IconProfile::timer_extension(),
            Self::WatchParty => IconProfile::watch_party(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::TimerExtension => "timer-extension",
            Self::WatchParty => "watch-party",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "timer-extension" => Ok(Self::TimerExtension),
            "watch-party" => Ok(Self::WatchParty),
            other => Err(Error::InvalidProfile(format!("unknown preset `{other}`"))),
        }
    }
}

// ============================================================================
// IconProfile
// ============================================================================

/// Configuration for one batch of status icons.
///
/// # JSON Format
///
/// ```json
/// {
///   "outputDir": "icons",
///   "prefix": "icon",
///   "sizes": [16, 48, 128],
///   "statuses": [
///     { "name": "inactive", "color": "#808080ff" },
///     { "name": "active", "color": "#00b400ff" }
///   ],
///   "exclusions": [{ "status": "active", "size": 128 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconProfile {
    /// Directory the icons are written to. Created if missing.
    pub output_dir: PathBuf,

    /// File name prefix, as in `<prefix>-<status>-<size>.png`.
    pub prefix: String,

    /// Square pixel sizes to render, in generation order.
    pub sizes: Vec<u32>,

    /// Status color table, in generation order.
    pub statuses: Vec<StatusColor>,

    /// Pairs to skip.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<Exclusion>,
}

impl Default for IconProfile {
    fn default() -> Self {
        Preset::default().profile()
    }
}

impl IconProfile {
    /// Creates a profile with no sizes or statuses.
    pub fn new(output_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: prefix.into(),
            sizes: Vec::new(),
            statuses: Vec::new(),
            exclusions: Vec::new(),
        }
    }

    /// Toolbar icons for the timer extension.
    ///
    /// Five files: the 128px `active` icon is not generated.
    pub fn timer_extension() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR, DEFAULT_PREFIX)
            .with_sizes(DEFAULT_SIZES)
            .with_status("inactive", Color::INACTIVE)
            .with_status("active", Color::ACTIVE)
            .with_exclusion("active", 128)
    }

    /// Toolbar icons for the watch-party extension. Nine files.
    pub fn watch_party() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR, DEFAULT_PREFIX)
            .with_sizes(DEFAULT_SIZES)
            .with_status("inactive", Color::INACTIVE)
            .with_status("connected", Color::ACTIVE)
            .with_status("error", Color::ERROR)
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.sizes.push(size);
        self
    }

    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = u32>) -> Self {
        self.sizes.extend(sizes);
        self
    }

    pub fn with_status(mut self, name: impl Into<String>, color: Color) -> Self {
        self.statuses.push(StatusColor {
            name: name.into(),
            color,
        });
        self
    }

    pub fn with_exclusion(mut self, status: impl Into<String>, size: u32) -> Self {
        self.exclusions.push(Exclusion::new(status, size));
        self
    }

    /// Replaces the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Returns true if `(status, size)` is excluded.
    pub fn is_excluded(&self, status: &str, size: u32) -> bool {
        self.exclusions
            .iter()
            .any(|e| e.status == status && e.size == size)
    }

    /// Enumerates every icon to generate: statuses × sizes, minus exclusions.
    pub fn specs(&self) -> impl Iterator<Item = IconSpec> + '_ {
        self.statuses.iter().flat_map(move |status| {
            self.sizes
                .iter()
                .filter(move |&&size| !self.is_excluded(&status.name, size))
                .map(move |&size| IconSpec::new(status.name.clone(), size, status.color))
        })
    }

    /// Returns `<prefix>-<status>-<size>.png`.
    pub fn file_name(&self, status: &str, size: u32) -> String {
        format!("{}-{}-{}.png", self.prefix, status, size)
    }

    /// Returns `<output_dir>/<prefix>-<status>-<size>.png`.
    pub fn path_for(&self, status: &str, size: u32) -> PathBuf {
        self.output_dir.join(self.file_name(status, size))
    }

    /// Checks that the profile describes a consistent set of files.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(Error::InvalidProfile("prefix must not be empty".into()));
        }
        if self.sizes.contains(&0) {
            return Err(Error::InvalidProfile("sizes must be positive".into()));
        }

        let mut sizes = HashSet::new();
        for &size in &self.sizes {
            if !sizes.insert(size) {
                return Err(Error::InvalidProfile(format!("duplicate size {size}")));
            }
        }

        let mut seen = HashSet::new();
        for status in &self.statuses {
            if status.name.is_empty() {
                return Err(Error::InvalidProfile("status names must not be empty".into()));
            }
            if !seen.insert(status.name.as_str()) {
                return Err(Error::InvalidProfile(format!(
                    "duplicate status `{}`",
                    status.name
                )));
            }
        }
        Ok(())
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes and validates a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reads a profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::ReadProfile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Tests
// ============================================================================
