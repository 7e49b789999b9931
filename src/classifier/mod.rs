mod extensions;
mod predicates;

pub use extensions::ExtensionClassifier;
pub use predicates::{is_documentation, is_dotfile, is_image};

use std::path::Path;

/// Maps a file to a language label.
///
/// Implementations must be deterministic and free of side effects: the same
/// path and content always produce the same label. `None` means the file
/// could not be attributed to any language and is left out of the tally.
pub trait Classifier: Send + Sync {
    fn classify(&self, path: &Path, content: &[u8]) -> Option<String>;

    fn is_dotfile(&self, path: &Path) -> bool {
        is_dotfile(path)
    }

    fn is_documentation(&self, path: &Path) -> bool {
        is_documentation(path)
    }

    fn is_image(&self, path: &Path) -> bool {
        is_image(path)
    }
}
