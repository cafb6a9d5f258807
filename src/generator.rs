//! Batch generation of status icons.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::icon::render_icon;
use crate::profile::IconProfile;

// ============================================================================
// GenerationReport
// ============================================================================

/// An icon that could not be written.
#[derive(Debug)]
pub struct IconFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Outcome of a batch run.
///
/// Failures of individual icons do not stop the batch; they are collected
/// here next to the files that were written.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Paths written, in generation order.
    pub written: Vec<PathBuf>,

    /// Icons that failed to render or save.
    pub failures: Vec<IconFailure>,
}

impl GenerationReport {
    /// Number of files successfully written.
    pub fn written_count(&self) -> usize {
        self.written.len()
    }

    /// Returns true if every icon was written.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Renders every icon described by `profile` into its output directory.
///
/// The profile is validated and the output directory created first; either
/// failing aborts the run before anything is written. Afterwards each
/// `(status, size)` pair not excluded by the profile is rendered to
/// `<output_dir>/<prefix>-<status>-<size>.png`, overwriting existing files.
/// A failed icon is logged and recorded, and the batch moves on to the next
/// one.
///
/// # Example
///
/// ```no_run
/// use status_icons::{generate_all, IconProfile};
///
/// let report = generate_all(&IconProfile::timer_extension())?;
/// assert_eq!(report.written_count(), 5);
/// # Ok::<(), status_icons::Error>(())
/// ```
pub fn generate_all(profile: &IconProfile) -> Result<GenerationReport> {
    profile.validate()?;
    ensure_output_dir(profile)?;

    let mut report = GenerationReport::default();
    for spec in profile.specs() {
        let path = profile.path_for(&spec.status, spec.size);
        match render_icon(spec.size, spec.color, &path) {
            Ok(()) => report.written.push(path),
            Err(error) => {
                tracing::error!(event = "icon_failed", path = %path.display(), error = %error);
                report.failures.push(IconFailure { path, error });
            }
        }
    }

    tracing::info!(
        event = "generation_done",
        written = report.written_count(),
        failed = report.failures.len(),
        dir = %profile.output_dir.display()
    );
    Ok(report)
}

fn ensure_output_dir(profile: &IconProfile) -> Result<()> {
    let dir = &profile.output_dir;
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.clone(),
        source,
    })?;
    tracing::info!(event = "output_dir_created", dir = %dir.display());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::icon::padding_for;
    use std::collections::BTreeSet;
    use std::path::Path;

    fn listing(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn watch_party_writes_nine_icons() {
        let dir = tempfile::tempdir().unwrap();
        let profile = IconProfile::watch_party().with_output_dir(dir.path());

        let report = generate_all(&profile).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.written_count(), 9);
        assert_eq!(listing(dir.path()).len(), 9);

        for spec in profile.specs() {
            let path = profile.path_for(&spec.status, spec.size);
            let img = image::open(&path).unwrap().to_rgba8();
            let size = spec.size;

            assert_eq!(img.dimensions(), (size, size));
            assert_eq!(*img.get_pixel(size / 2, size / 2), spec.color.to_pixel());
            assert_eq!(img.get_pixel(0, 0)[3], 0);
            let p = padding_for(size);
            assert_eq!(img.get_pixel(p - 1, size / 2)[3], 0);
        }
    }

    #[test]
    fn timer_extension_skips_excluded_pair() {
        let dir = tempfile::tempdir().unwrap();
        let profile = IconProfile::timer_extension().with_output_dir(dir.path());

        let report = generate_all(&profile).unwrap();

        assert_eq!(report.written_count(), 5);
        let files = listing(dir.path());
        assert!(!files.contains("icon-active-128.png"));
        let expected: BTreeSet<String> = [
            "icon-inactive-16.png",
            "icon-inactive-48.png",
            "icon-inactive-128.png",
            "icon-active-16.png",
            "icon-active-48.png",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(files, expected);
    }

    #[test]
    fn creates_missing_output_dir() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("nested").join("icons");
        assert!(!out.exists());

        let profile = IconProfile::timer_extension().with_output_dir(&out);
        generate_all(&profile).unwrap();

        assert!(out.is_dir());
        assert_eq!(listing(&out).len(), 5);
    }

    #[test]
    fn rerun_is_pixel_identical() {
        let dir = tempfile::tempdir().unwrap();
        let profile = IconProfile::watch_party().with_output_dir(dir.path());

        let first = generate_all(&profile).unwrap();
        let before: Vec<Vec<u8>> = first.written.iter().map(|p| fs::read(p).unwrap()).collect();

        let second = generate_all(&profile).unwrap();
        let after: Vec<Vec<u8>> = second.written.iter().map(|p| fs::read(p).unwrap()).collect();

        assert_eq!(first.written, second.written);
        assert_eq!(before, after);
    }

    #[test]
    fn overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let profile = IconProfile::timer_extension().with_output_dir(dir.path());
        let stale = profile.path_for("inactive", 16);
        fs::write(&stale, b"stale").unwrap();

        generate_all(&profile).unwrap();

        let img = image::open(&stale).unwrap().to_rgba8();
        assert_eq!(*img.get_pixel(8, 8), Color::INACTIVE.to_pixel());
    }

    #[test]
    fn failed_icon_does_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let profile = IconProfile::watch_party().with_output_dir(dir.path());

        // A directory squatting on the target path makes that one save fail.
        let blocked = profile.path_for("connected", 48);
        fs::create_dir(&blocked).unwrap();

        let report = generate_all(&profile).unwrap();

        assert_eq!(report.written_count(), 8);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, blocked);
        assert!(matches!(report.failures[0].error, Error::Save { .. }));
        assert!(profile.path_for("error", 128).is_file());
    }

    #[test]
    fn repeated_size_is_rejected_before_writing() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("icons");
        let profile = IconProfile::new(&out, "icon")
            .with_sizes([16, 16])
            .with_status("busy", Color::ACTIVE);

        assert!(matches!(
            generate_all(&profile),
            Err(Error::InvalidProfile(_))
        ));
        assert!(!out.exists());
    }

    #[test]
    fn repeated_status_is_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let profile = IconProfile::new(dir.path(), "icon")
            .with_size(16)
            .with_status("busy", Color::ACTIVE)
            .with_status("busy", Color::ERROR);

        assert!(generate_all(&profile).is_err());
        assert!(listing(dir.path()).is_empty());
    }

    #[test]
    fn zero_size_is_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let profile = IconProfile::new(dir.path(), "icon")
            .with_sizes([0, 16])
            .with_status("busy", Color::ACTIVE);

        assert!(matches!(
            generate_all(&profile),
            Err(Error::InvalidProfile(_))
        ));
        assert!(listing(dir.path()).is_empty());
    }

    #[test]
    fn uncreatable_output_dir_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, b"").unwrap();

        let profile = IconProfile::watch_party().with_output_dir(file.join("icons"));

        assert!(matches!(
            generate_all(&profile),
            Err(Error::CreateDir { .. })
        ));
    }
}
