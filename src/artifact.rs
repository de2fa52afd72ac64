//! Generated files and the fixed layout of the theme package.

use crate::palette::Mode;
use std::fmt;

/// Directory every artifact path is rooted at.
pub const PACKAGE_NAME: &str = "theme-themer-vscode";

/// Package-relative directory holding the theme-definition files.
pub const THEMES_DIRECTORY: &str = "themes";

/// Package manifest file name.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Readme file name.
pub const README_FILE_NAME: &str = "README.md";

/// Preview icon file name.
pub const ICON_FILE_NAME: &str = "icon.svg";

/// File name of the theme definition for `mode`
/// (`themer-dark-color-theme.json`).
#[must_use]
pub fn theme_file_name(mode: Mode) -> String {
    format!("themer-{mode}-color-theme.json")
}

/// Path of the theme definition for `mode`, relative to the package
/// directory.
#[must_use]
pub fn theme_package_path(mode: Mode) -> String {
    format!("{THEMES_DIRECTORY}/{}", theme_file_name(mode))
}

/// Join a package-relative path onto [`PACKAGE_NAME`].
#[must_use]
pub fn package_path(relative: &str) -> String {
    format!("{PACKAGE_NAME}/{relative}")
}

/// One generated file: a slash-joined relative path and its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Destination, e.g. `theme-themer-vscode/themes/themer-dark-color-theme.json`.
    pub path: String,
    /// File contents.
    pub contents: Vec<u8>,
}

impl Artifact {
    /// Create an artifact from any text or byte buffer.
    #[must_use]
    pub fn new(path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Contents as text, if they are valid UTF-8.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.contents).ok()
    }

    /// Last path component.
    #[must_use]
    pub fn file_name(&self) -> &str {
        base_name(&self.path)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.path, self.contents.len())
    }
}

/// Separators accepted when splitting written paths; Windows paths use `\`.
const SEPARATORS: [char; 2] = ['/', '\\'];

/// Last component of `path`, split on either separator.
pub(crate) fn base_name(path: &str) -> &str {
    path.rsplit(SEPARATORS).next().unwrap_or(path)
}

/// Everything before the last separator of `path`, or `.` when there is none.
pub(crate) fn dir_name(path: &str) -> &str {
    match path.rfind(SEPARATORS) {
        Some(0) => &path[..1],
        Some(i) => &path[..i],
        None => ".",
    }
}
