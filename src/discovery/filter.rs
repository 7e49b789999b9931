use std::path::Path;
use std::sync::Arc;

use crate::classifier::Classifier;

/// Decides which paths the walker skips.
///
/// A path is ignored when the classifier flags it as a dotfile,
/// documentation or an image, or when its string form contains any of the
/// ignore substrings. Matching works on the path exactly as given.
#[derive(Clone)]
pub struct PathFilter {
    classifier: Arc<dyn Classifier>,
    patterns: Vec<String>,
}

impl PathFilter {
    pub fn new<I, S>(classifier: Arc<dyn Classifier>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classifier,
            patterns: patterns
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    pub fn should_ignore(&self, path: &Path) -> bool {
        if self.classifier.is_dotfile(path)
            || self.classifier.is_documentation(path)
            || self.classifier.is_image(path)
        {
            return true;
        }
        self.matching_pattern(path).is_some()
    }

    pub fn matching_pattern(&self, path: &Path) -> Option<&str> {
        let raw = path.to_string_lossy();
        self.patterns
            .iter()
            .find(|pattern| raw.contains(pattern.as_str()))
            .map(String::as_str)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl std::fmt::Debug for PathFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathFilter")
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}
