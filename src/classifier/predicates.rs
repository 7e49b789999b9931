use once_cell::sync::Lazy;
use regex::RegexSet;
use std::path::Path;

// Documentation locations as recognised by GitHub linguist.
static DOCUMENTATION: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"^[Dd]ocs?/",
        r"(^|/)[Dd]ocumentation/",
        r"(^|/)[Gg]roovydoc/",
        r"(^|/)[Jj]avadoc/",
        r"^[Mm]an/",
        r"^[Ee]xamples/",
        r"^[Dd]emos?/",
        r"(^|/)inst/doc/",
        r"(^|/)CHANGE(S|LOG)?(\.|$)",
        r"(^|/)CONTRIBUTING(\.|$)",
        r"(^|/)COPYING(\.|$)",
        r"(^|/)INSTALL(\.|$)",
        r"(^|/)LICEN[CS]E(\.|$)",
        r"(^|/)[Ll]icen[cs]e(\.|$)",
        r"(^|/)README(\.|$)",
        r"(^|/)[Rr]eadme(\.|$)",
        r"^[Ss]amples?/",
    ])
    .expect("documentation patterns are valid")
});

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// True when the last path component is hidden. `.` and `..` have no file
/// name and are never dotfiles.
pub fn is_dotfile(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

pub fn is_documentation(path: &Path) -> bool {
    let raw = path.to_string_lossy().replace('\\', "/");
    let relative = raw.strip_prefix("./").unwrap_or(&raw);
    DOCUMENTATION.is_match(relative)
}

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|image| ext.eq_ignore_ascii_case(image))
        })
        .unwrap_or(false)
}
