use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use super::PathFilter;
use crate::classifier::Classifier;
use crate::error::{Error, IoError, Result};
use crate::runner::CancelToken;
use crate::tally::Tally;

/// Counters collected during one walk, for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub files_visited: usize,
    pub files_classified: usize,
    pub files_unclassified: usize,
    pub paths_ignored: usize,
    pub read_failures: usize,
}

/// Feeds every eligible file under a root to the classifier and folds the
/// labels into a [`Tally`].
pub struct Walker {
    classifier: Arc<dyn Classifier>,
    filter: PathFilter,
    cancel: CancelToken,
}

impl Walker {
    pub fn new(classifier: Arc<dyn Classifier>, filter: PathFilter) -> Self {
        Self {
            classifier,
            filter,
            cancel: CancelToken::new(),
        }
    }

    /// Stop the walk at the next entry once `cancel` is set.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Walk `root` and record every classified file in `tally`.
    ///
    /// A root that is a single file is classified as-is: the path filter is
    /// not consulted for a file the caller named explicitly. A directory
    /// root goes through the filter like every entry below it, so an
    /// ignored root yields an empty tally. Directories are traversed
    /// depth-first in file-name order, and an ignored directory is pruned
    /// along with everything below it.
    ///
    /// Unreadable files are logged and skipped. A directory that cannot be
    /// listed aborts the walk.
    pub fn walk(&self, root: &Path, tally: &mut Tally) -> Result<WalkSummary> {
        let metadata = fs::metadata(root).map_err(|e| IoError::stat(root, e))?;
        self.walk_with_metadata(root, &metadata, tally)
    }

    /// Same as [`Walker::walk`] for a root the caller has already stat'ed.
    pub fn walk_with_metadata(
        &self,
        root: &Path,
        metadata: &fs::Metadata,
        tally: &mut Tally,
    ) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();

        if !metadata.is_dir() {
            self.classify_file(root, tally, &mut summary);
            return Ok(summary);
        }

        let mut pruned = 0;
        let entries = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if self.filter.should_ignore(entry.path()) {
                    debug!(path = %entry.path().display(), "ignoring path");
                    pruned += 1;
                    false
                } else {
                    true
                }
            });

        for entry in entries {
            if self.cancel.is_cancelled() {
                debug!(root = %root.display(), "walk cancelled");
                return Err(Error::Cancelled);
            }

            let entry = entry.map_err(|e| IoError::directory_listing(root, e))?;
            if entry.file_type().is_dir() {
                continue;
            }
            self.classify_file(entry.path(), tally, &mut summary);
        }

        summary.paths_ignored = pruned;
        debug!(
            root = %root.display(),
            visited = summary.files_visited,
            classified = summary.files_classified,
            ignored = summary.paths_ignored,
            read_failures = summary.read_failures,
            "walk finished"
        );
        Ok(summary)
    }

    fn classify_file(&self, path: &Path, tally: &mut Tally, summary: &mut WalkSummary) {
        summary.files_visited += 1;

        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) => {
                let err = IoError::read(path, e);
                warn!(error = %err, "skipping unreadable file");
                summary.read_failures += 1;
                return;
            }
        };

        match self.classifier.classify(path, &content) {
            Some(label) if tally.record(&label) => {
                trace!(path = %path.display(), label = %label, "classified");
                summary.files_classified += 1;
            }
            _ => {
                trace!(path = %path.display(), "no language detected");
                summary.files_unclassified += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ExtensionClassifier;
    use std::io::Write;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        tempfile::Builder::new().prefix("langshare").tempdir().unwrap()
    }

    fn walker(patterns: &[&str]) -> Walker {
        let classifier: Arc<dyn Classifier> = Arc::new(ExtensionClassifier::new());
        let filter = PathFilter::new(classifier.clone(), patterns.iter().copied());
        Walker::new(classifier, filter)
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::File::create(path)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
    }

    #[test]
    fn test_walk_counts_languages() {
        let temp_dir = tree();
        let root = temp_dir.path();
        write(root, "main.go", "package main");
        write(root, "cmd/tool/tool.go", "package tool");
        write(root, "scripts/build.py", "print('hi')");

        let mut tally = Tally::new();
        let summary = walker(&[]).walk(root, &mut tally).unwrap();

        assert_eq!(tally.count("Go"), 2);
        assert_eq!(tally.count("Python"), 1);
        assert_eq!(tally.total(), 3);
        assert_eq!(summary.files_visited, 3);
        assert_eq!(summary.files_classified, 3);
    }

    #[test]
    fn test_walk_prunes_ignored_subtree() {
        let temp_dir = tree();
        let root = temp_dir.path();
        write(root, "main.go", "package main");
        write(root, "vendor/sub/dep.go", "package dep");
        write(root, "vendor/other.go", "package other");

        let mut tally = Tally::new();
        let summary = walker(&["vendor"]).walk(root, &mut tally).unwrap();

        assert_eq!(tally.count("Go"), 1);
        assert_eq!(tally.total(), 1);
        assert_eq!(summary.paths_ignored, 1);
    }

    #[test]
    fn test_walk_skips_hidden_docs_and_images() {
        let temp_dir = tree();
        let root = temp_dir.path();
        write(root, "lib.rs", "pub fn f() {}");
        write(root, ".hidden/secret.rs", "fn x() {}");
        write(root, ".env.rs", "fn y() {}");
        write(root, "README.md", "# readme");
        write(root, "logo.png", "not really a png");

        let mut tally = Tally::new();
        walker(&[]).walk(root, &mut tally).unwrap();

        assert_eq!(tally.count("Rust"), 1);
        assert_eq!(tally.total(), 1);
    }

    #[test]
    fn test_walk_drops_unclassified_files() {
        let temp_dir = tree();
        let root = temp_dir.path();
        write(root, "main.go", "package main");
        write(root, "data.unknownext", "???");

        let mut tally = Tally::new();
        let summary = walker(&[]).walk(root, &mut tally).unwrap();

        assert_eq!(tally.total(), 1);
        assert_eq!(summary.files_unclassified, 1);
    }

    #[test]
    fn test_walk_single_file_bypasses_filter() {
        let temp_dir = tree();
        let root = temp_dir.path();
        write(root, "vendor/dep.go", "package dep");

        let mut tally = Tally::new();
        walker(&["vendor"])
            .walk(&root.join("vendor/dep.go"), &mut tally)
            .unwrap();

        assert_eq!(tally.count("Go"), 1);
        assert_eq!(tally.total(), 1);
    }

    #[test]
    fn test_walk_missing_root_is_stat_error() {
        let mut tally = Tally::new();
        let err = walker(&[])
            .walk(Path::new("/nonexistent/langshare/root"), &mut tally)
            .unwrap_err();

        assert!(matches!(err, Error::Io(IoError::Stat { .. })));
    }

    #[test]
    fn test_walk_stops_when_cancelled() {
        let temp_dir = tree();
        let root = temp_dir.path();
        write(root, "main.go", "package main");

        let cancel = CancelToken::new();
        cancel.cancel();

        let mut tally = Tally::new();
        let err = walker(&[])
            .with_cancel(cancel)
            .walk(root, &mut tally)
            .unwrap_err();

        assert!(matches!(err, Error::Cancelled));
        assert!(tally.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_continues_past_dangling_symlink() {
        let temp_dir = tree();
        let root = temp_dir.path();
        write(root, "main.go", "package main");
        std::os::unix::fs::symlink(root.join("gone.go"), root.join("link.go")).unwrap();

        let mut tally = Tally::new();
        let summary = walker(&[]).walk(root, &mut tally).unwrap();

        assert_eq!(tally.count("Go"), 1);
        assert_eq!(summary.read_failures, 1);
    }

    #[test]
    fn test_walk_hidden_root_is_ignored() {
        let temp_dir = tree();
        write(temp_dir.path(), ".hidden/main.go", "package main");

        let mut tally = Tally::new();
        let summary = walker(&[])
            .walk(&temp_dir.path().join(".hidden"), &mut tally)
            .unwrap();

        assert!(tally.is_empty());
        assert_eq!(summary.paths_ignored, 1);
        assert_eq!(summary.files_visited, 0);
    }

    #[test]
    fn test_walk_root_matching_ignore_pattern_is_ignored() {
        let temp_dir = tree();
        write(temp_dir.path(), "vendor/dep.go", "package dep");

        let mut tally = Tally::new();
        walker(&["vendor"])
            .walk(&temp_dir.path().join("vendor"), &mut tally)
            .unwrap();

        assert!(tally.is_empty());
    }

    #[test]
    fn test_walk_with_metadata_uses_given_stat() {
        let temp_dir = tree();
        let root = temp_dir.path();
        write(root, "main.go", "package main");
        let metadata = fs::metadata(root.join("main.go")).unwrap();

        let mut tally = Tally::new();
        walker(&[])
            .walk_with_metadata(&root.join("main.go"), &metadata, &mut tally)
            .unwrap();

        assert_eq!(tally.count("Go"), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_fails_on_unlistable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tree();
        let root = temp_dir.path();
        write(root, "main.go", "package main");
        write(root, "locked/inner.go", "package inner");
        let locked = root.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not restrict root.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut tally = Tally::new();
        let result = walker(&[]).walk(root, &mut tally);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, Error::Io(IoError::DirectoryListing { .. })));
    }
}
