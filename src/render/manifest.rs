//! Extension manifest (`package.json`).

use crate::artifact::{
    Artifact, ICON_FILE_NAME, MANIFEST_FILE_NAME, PACKAGE_NAME, package_path, theme_package_path,
};
use crate::error::RenderError;
use crate::palette::{Mode, ModeEntry};
use serde::Serialize;

use super::{json_artifact, theme_label};

const DISPLAY_NAME: &str = "Themer VS Code Themes";
const DESCRIPTION: &str = "Personal theme generated by themer";
const PUBLISHER: &str = "Themer";
const ENGINE_CONSTRAINT: &str = "^1.14.0";
const CATEGORY: &str = "Themes";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
    version: &'a str,
    publisher: &'static str,
    engines: Engines,
    categories: [&'static str; 1],
    icon: &'static str,
    contributes: Contributes,
}

#[derive(Debug, Serialize)]
struct Engines {
    vscode: &'static str,
}

#[derive(Debug, Serialize)]
struct Contributes {
    themes: Vec<ThemeContribution>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeContribution {
    label: String,
    ui_theme: &'static str,
    path: String,
}

const fn ui_theme(mode: Mode) -> &'static str {
    match mode {
        Mode::Dark => "vs-dark",
        Mode::Light => "vs",
    }
}

/// Render the manifest listing one theme contribution per entry.
pub(super) fn render(entries: &[ModeEntry], version: &str) -> Result<Artifact, RenderError> {
    let manifest = Manifest {
        name: PACKAGE_NAME,
        display_name: DISPLAY_NAME,
        description: DESCRIPTION,
        version,
        publisher: PUBLISHER,
        engines: Engines {
            vscode: ENGINE_CONSTRAINT,
        },
        categories: [CATEGORY],
        icon: ICON_FILE_NAME,
        contributes: Contributes {
            themes: entries
                .iter()
                .map(|entry| ThemeContribution {
                    label: theme_label(entry.mode),
                    ui_theme: ui_theme(entry.mode),
                    path: theme_package_path(entry.mode),
                })
                .collect(),
        },
    };

    json_artifact(package_path(MANIFEST_FILE_NAME), &manifest)
}
