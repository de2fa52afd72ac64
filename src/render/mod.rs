//! Artifact rendering
//!
//! [`render`] turns a palette into the full set of package files, in a fixed
//! order: manifest, readme, icon, then one theme definition per mode in
//! palette order. Every renderer is a pure function of the palette, so a
//! render either returns all artifacts or an error and never touches the
//! filesystem. [`render_instructions`] describes how to install whatever a
//! caller ended up writing.

mod icon;
mod manifest;
mod readme;
mod theme;

use crate::artifact::{Artifact, MANIFEST_FILE_NAME, base_name, dir_name, theme_file_name};
use crate::error::RenderError;
use crate::palette::{Mode, PaletteInput};
use serde::Serialize;
use tracing::debug;

/// Display label of a mode's theme (`Themer Dark`).
pub(crate) fn theme_label(mode: Mode) -> String {
    format!("Themer {}", mode.display_name())
}

/// Encode `value` as two-space indented JSON.
fn json_artifact(path: String, value: &impl Serialize) -> Result<Artifact, RenderError> {
    match serde_json::to_vec_pretty(value) {
        Ok(contents) => Ok(Artifact::new(path, contents)),
        Err(source) => Err(RenderError::Serialize { path, source }),
    }
}

/// Render every artifact of the theme package.
///
/// `version` is written verbatim into the manifest.
///
/// # Errors
///
/// Returns [`RenderError`] if a structured document fails to encode; no
/// artifacts are returned in that case.
pub fn render(palette: &PaletteInput, version: &str) -> Result<Vec<Artifact>, RenderError> {
    let entries = palette.entries();
    debug!(
        modes = ?entries.iter().map(|entry| entry.mode).collect::<Vec<_>>(),
        version,
        "Rendering theme package"
    );

    let mut artifacts = Vec::with_capacity(3 + entries.len());
    artifacts.push(manifest::render(entries, version)?);
    artifacts.push(readme::render(entries));
    artifacts.push(icon::render(palette));
    for entry in entries {
        artifacts.push(theme::render(entry)?);
    }

    debug!(count = artifacts.len(), "Rendered theme package");
    Ok(artifacts)
}

/// Post-install instructions for a set of written artifact paths.
///
/// The install directory is the parent of the `package.json` path, and the
/// theme names listed are those whose definition files appear among `paths`,
/// dark before light.
#[must_use]
pub fn render_instructions<P: AsRef<str>>(paths: &[P]) -> String {
    let package_directory = paths
        .iter()
        .map(AsRef::as_ref)
        .find(|path| base_name(path) == MANIFEST_FILE_NAME)
        .map_or("", dir_name);

    let theme_names = Mode::ALL
        .into_iter()
        .filter(|&mode| {
            let file_name = theme_file_name(mode);
            paths.iter().any(|path| base_name(path.as_ref()) == file_name)
        })
        .map(|mode| format!("\"{}\"", theme_label(mode)))
        .collect::<Vec<_>>()
        .join(" / ");

    format!(
        "
Copy (or symlink) the generated package directory into the VS Code extensions directory:

    cp -R '{package_directory}' ~/.vscode/extensions/

Then reload or restart VS Code. The generated theme package should be in the list of installed extensions, and {theme_names} will be available in the list of themes.
  "
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::tests::sample_palette;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn paths(artifacts: &[Artifact]) -> Vec<&str> {
        artifacts.iter().map(|artifact| artifact.path.as_str()).collect()
    }

    #[test]
    fn test_render_order_single_mode() -> Result<(), Box<dyn std::error::Error>> {
        let artifacts = render(&sample_palette(&[Mode::Light]), "1.0.0")?;
        assert_eq!(
            paths(&artifacts),
            vec![
                "theme-themer-vscode/package.json",
                "theme-themer-vscode/README.md",
                "theme-themer-vscode/icon.svg",
                "theme-themer-vscode/themes/themer-light-color-theme.json",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_render_themes_follow_palette_order() -> Result<(), Box<dyn std::error::Error>> {
        let artifacts = render(&sample_palette(&[Mode::Light, Mode::Dark]), "1.0.0")?;
        assert_eq!(artifacts.len(), 5);
        assert_eq!(
            paths(&artifacts)[3..],
            [
                "theme-themer-vscode/themes/themer-light-color-theme.json",
                "theme-themer-vscode/themes/themer-dark-color-theme.json",
            ]
        );
        let unique: HashSet<&str> = paths(&artifacts).into_iter().collect();
        assert_eq!(unique.len(), artifacts.len());
        Ok(())
    }

    #[test]
    fn test_render_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
        let palette = sample_palette(&[Mode::Dark, Mode::Light]);
        assert_eq!(render(&palette, "2.0.0")?, render(&palette, "2.0.0")?);
        Ok(())
    }

    #[test]
    fn test_instructions_dark_only() {
        let text = render_instructions(&[
            "out/theme-themer-vscode/package.json",
            "out/theme-themer-vscode/README.md",
            "out/theme-themer-vscode/themes/themer-dark-color-theme.json",
        ]);
        assert!(text.contains("cp -R 'out/theme-themer-vscode' ~/.vscode/extensions/"));
        assert!(text.contains("\"Themer Dark\""));
        assert!(!text.contains("Themer Light"));
    }

    #[test]
    fn test_instructions_windows_paths() {
        let text = render_instructions(&[
            r"C:\out\theme-themer-vscode\package.json",
            r"C:\out\theme-themer-vscode\themes\themer-dark-color-theme.json",
        ]);
        assert!(text.contains(r"cp -R 'C:\out\theme-themer-vscode' ~/.vscode/extensions/"));
        assert!(text.contains("and \"Themer Dark\" will be available"));
        assert!(!text.contains("Themer Light"));
    }

    #[test]
    fn test_instructions_list_dark_before_light() {
        let text = render_instructions(&[
            "pkg/themes/themer-light-color-theme.json",
            "pkg/themes/themer-dark-color-theme.json",
            "pkg/package.json",
        ]);
        let expected = "
Copy (or symlink) the generated package directory into the VS Code extensions directory:

    cp -R 'pkg' ~/.vscode/extensions/

Then reload or restart VS Code. The generated theme package should be in the list of installed extensions, and \"Themer Dark\" / \"Themer Light\" will be available in the list of themes.
  ";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_instructions_without_theme_files() {
        let text = render_instructions(&["pkg/package.json"]);
        assert!(text.contains("installed extensions, and  will be available"));
        assert!(!text.contains("Themer"));
    }

    #[test]
    fn test_instructions_ignore_lookalike_names() {
        let text = render_instructions(&[
            "pkg/package.json.bak",
            "pkg/themes/my-themer-dark-color-theme.json",
        ]);
        assert!(text.contains("cp -R ''"));
        assert!(!text.contains("Themer Dark"));
    }
}
