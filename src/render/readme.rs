//! Package readme.

use crate::artifact::{Artifact, README_FILE_NAME, package_path};
use crate::palette::ModeEntry;

const TEMPLATE_URL: &str = "https://github.com/mjswensen/themer/tree/master/cli/packages/themer-vscode";
const THEMER_URL: &str = "https://github.com/mjswensen/themer";

pub(super) fn render(entries: &[ModeEntry]) -> Artifact {
    let noun = if entries.len() == 1 { "theme" } else { "themes" };
    let contents = format!(
        "Your personal {noun}, generated by the [VS Code template]({TEMPLATE_URL}) for [themer]({THEMER_URL})."
    );
    Artifact::new(package_path(README_FILE_NAME), contents)
}
