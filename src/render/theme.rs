//! Per-mode color theme definition (`themes/themer-<mode>-color-theme.json`).
//!
//! The workbench colors are a literal table from editor surface to a slot,
//! optionally with a fixed two-digit alpha suffix appended to the slot's
//! token. Entries are emitted in table order.

use crate::artifact::{Artifact, package_path, theme_package_path};
use crate::error::RenderError;
use crate::palette::Slot::{
    Accent0, Accent1, Accent2, Accent3, Accent4, Accent5, Accent6, Accent7, Shade0, Shade1, Shade2,
    Shade3, Shade4, Shade5, Shade6, Shade7,
};
use crate::palette::{ColorSlots, Mode, ModeEntry, Slot};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::{json_artifact, theme_label};
use ColorValue::{Alpha, Shadow, Solid};

/// How a workbench color is derived from the palette.
#[derive(Debug, Clone, Copy)]
enum ColorValue {
    /// The slot's token as-is.
    Solid(Slot),
    /// The slot's token with an alpha suffix appended.
    Alpha(Slot, &'static str),
    /// Drop shadows: opaque `shade0` in dark mode, `shade7` at `66` alpha
    /// otherwise.
    Shadow,
}

impl ColorValue {
    fn resolve(self, mode: Mode, colors: &ColorSlots) -> String {
        match self {
            Solid(slot) => colors[slot].to_string(),
            Alpha(slot, alpha) => colors[slot].with_alpha(alpha),
            Shadow => shadow(mode, colors),
        }
    }
}

fn shadow(mode: Mode, colors: &ColorSlots) -> String {
    match mode {
        Mode::Dark => colors[Shade0].to_string(),
        Mode::Light => colors[Shade7].with_alpha("66"),
    }
}

const WORKBENCH_COLORS: &[(&str, ColorValue)] = &[
    // Base colors
    ("focusBorder", Solid(Accent6)),
    ("foreground", Solid(Shade7)),
    ("widget.shadow", Shadow),
    ("selection.background", Solid(Shade2)),
    ("errorForeground", Solid(Accent0)),

    // Button control
    ("button.background", Solid(Accent5)),
    ("button.foreground", Solid(Shade0)),
    ("button.hoverBackground", Solid(Accent4)),

    // Dropdown control
    ("dropdown.background", Solid(Shade1)),
    ("dropdown.border", Solid(Shade1)),
    ("dropdown.foreground", Solid(Shade6)),

    // Input control
    ("input.background", Solid(Shade1)),
    ("input.border", Solid(Shade1)),
    ("input.foreground", Solid(Shade6)),
    ("input.placeholderForeground", Solid(Shade2)),
    ("inputOption.activeBorder", Solid(Accent4)),
    ("inputValidation.errorBackground", Solid(Shade1)),
    ("inputValidation.errorBorder", Solid(Accent0)),
    ("inputValidation.infoBackground", Solid(Shade1)),
    ("inputValidation.infoBorder", Solid(Accent5)),
    ("inputValidation.warningBackground", Solid(Shade1)),
    ("inputValidation.warningBorder", Solid(Accent1)),

    // Scroll bar control
    ("scrollbar.shadow", Shadow),
    ("scrollbarSlider.activeBackground", Alpha(Shade5, "7f")),
    ("scrollbarSlider.background", Alpha(Shade3, "7f")),
    ("scrollbarSlider.hoverBackground", Alpha(Shade4, "7f")),

    // Badge
    ("badge.foreground", Solid(Shade0)),
    ("badge.background", Solid(Accent6)),

    // Progress bar
    ("progressBar.background", Solid(Accent3)),

    // Lists and trees
    ("list.activeSelectionBackground", Alpha(Accent3, "7f")),
    ("list.activeSelectionForeground", Solid(Shade0)),
    ("list.dropBackground", Solid(Shade3)),
    ("list.focusBackground", Solid(Shade3)),
    ("list.highlightForeground", Solid(Accent2)),
    ("list.hoverBackground", Solid(Shade1)),
    ("list.inactiveSelectionBackground", Solid(Shade1)),
    ("list.inactiveSelectionForeground", Solid(Shade7)),
    ("list.hoverForeground", Solid(Shade5)),
    ("list.focusForeground", Solid(Shade0)),
    ("list.invalidItemForeground", Solid(Accent0)),
    ("list.errorForeground", Solid(Accent0)),
    ("list.warningForeground", Solid(Accent2)),
    ("listFilterWidget.background", Solid(Shade1)),
    ("listFilterWidget.outline", Solid(Accent5)),
    ("listFilterWidget.noMatchesOutline", Solid(Accent0)),
    ("tree.indentGuidesStroke", Solid(Shade1)),

    // Activity bar
    ("activityBar.background", Solid(Shade0)),
    ("activityBar.dropBackground", Solid(Shade1)),
    ("activityBar.foreground", Solid(Shade5)),
    ("activityBar.border", Solid(Shade0)),
    ("activityBarBadge.background", Solid(Accent6)),
    ("activityBarBadge.foreground", Solid(Shade0)),

    // Side bar
    ("sideBar.background", Solid(Shade0)),
    ("sideBar.foreground", Solid(Shade6)),
    ("sideBar.border", Solid(Shade1)),
    ("sideBarTitle.foreground", Solid(Shade5)),
    ("sideBarSectionHeader.background", Solid(Shade2)),
    ("sideBarSectionHeader.foreground", Solid(Shade6)),

    // Editor groups & tabs
    ("editorPane.background", Solid(Shade0)),
    ("editorGroup.emptyBackground", Solid(Shade0)),
    ("editorGroup.border", Solid(Shade1)),
    ("editorGroup.focusedEmptyBorder", Solid(Shade1)),
    ("editorGroup.dropBackground", Alpha(Shade2, "7f")),
    ("editorGroupHeader.noTabsBackground", Solid(Shade0)),
    ("editorGroupHeader.tabsBackground", Solid(Shade0)),
    ("editorGroupHeader.tabsBorder", Solid(Shade0)),
    ("tab.activeBackground", Solid(Shade0)),
    ("tab.activeForeground", Solid(Shade6)),
    ("tab.border", Solid(Shade0)),
    ("tab.inactiveBackground", Solid(Shade1)),
    ("tab.inactiveForeground", Solid(Shade3)),
    ("tab.unfocusedActiveForeground", Solid(Shade3)),
    ("tab.unfocusedInactiveForeground", Solid(Shade2)),

    // Editor colors
    ("editor.background", Solid(Shade0)),
    ("editor.foreground", Solid(Shade7)),
    ("editorLineNumber.foreground", Solid(Shade2)),
    ("editorCursor.foreground", Solid(Accent6)),
    ("editor.selectionBackground", Alpha(Accent5, "33")),
    ("editor.selectionHighlightBackground", Solid(Shade1)),
    ("editor.inactiveSelectionBackground", Alpha(Accent5, "33")),
    ("editor.wordHighlightBackground", Alpha(Accent6, "7f")),
    ("editor.wordHighlightStrongBackground", Alpha(Accent7, "7f")),
    ("editor.findMatchBackground", Alpha(Accent2, "7f")),
    ("editor.findMatchHighlightBackground", Alpha(Accent2, "3f")),
    ("editor.findRangeHighlightBackground", Solid(Shade1)),
    ("editor.hoverHighlightBackground", Solid(Shade2)),
    ("editor.lineHighlightBackground", Solid(Shade0)),
    ("editor.lineHighlightBorder", Solid(Shade1)),
    ("editorLink.activeForeground", Solid(Accent4)),
    ("editor.rangeHighlightBackground", Solid(Shade1)),
    ("editorWhitespace.foreground", Solid(Shade1)),
    ("editorIndentGuide.background", Solid(Shade1)),
    ("editorIndentGuide.activeBackground", Solid(Shade2)),
    ("editorRuler.foreground", Solid(Shade1)),
    ("editorCodeLens.foreground", Solid(Shade5)),
    ("editorBracketMatch.background", Solid(Shade1)),
    ("editorBracketMatch.border", Solid(Shade1)),
    ("editorOverviewRuler.border", Solid(Shade1)),
    ("editorOverviewRuler.findMatchForeground", Alpha(Accent2, "bf")),
    ("editorOverviewRuler.rangeHighlightForeground", Alpha(Shade2, "bf")),
    ("editorOverviewRuler.selectionHighlightForeground", Alpha(Shade1, "bf")),
    ("editorOverviewRuler.wordHighlightForeground", Alpha(Shade2, "bf")),
    ("editorOverviewRuler.wordHighlightStrongForeground", Alpha(Shade3, "bf")),
    ("editorOverviewRuler.modifiedForeground", Alpha(Accent2, "7f")),
    ("editorOverviewRuler.addedForeground", Alpha(Accent3, "7f")),
    ("editorOverviewRuler.deletedForeground", Alpha(Accent0, "7f")),
    ("editorOverviewRuler.errorForeground", Alpha(Accent0, "7f")),
    ("editorOverviewRuler.warningForeground", Alpha(Accent1, "7f")),
    ("editorOverviewRuler.infoForeground", Alpha(Accent5, "7f")),
    ("editorError.foreground", Solid(Accent0)),
    ("editorError.border", Solid(Shade7)),
    ("editorWarning.foreground", Solid(Accent1)),
    ("editorWarning.border", Solid(Shade6)),
    ("editorGutter.background", Solid(Shade0)),
    ("editorGutter.modifiedBackground", Solid(Accent2)),
    ("editorGutter.addedBackground", Solid(Accent3)),
    ("editorGutter.deletedBackground", Solid(Accent0)),

    // Diff editor colors
    ("diffEditor.insertedTextBackground", Alpha(Accent3, "20")),
    ("diffEditor.removedTextBackground", Alpha(Accent0, "20")),

    // Editor widget colors
    ("editorWidget.background", Solid(Shade1)),
    ("editorWidget.border", Solid(Shade1)),
    ("editorSuggestWidget.background", Solid(Shade1)),
    ("editorSuggestWidget.border", Solid(Shade1)),
    ("editorSuggestWidget.foreground", Solid(Shade6)),
    ("editorSuggestWidget.highlightForeground", Solid(Accent7)),
    ("editorSuggestWidget.selectedBackground", Solid(Shade2)),
    ("editorHoverWidget.background", Solid(Shade1)),
    ("editorHoverWidget.border", Solid(Shade1)),
    ("debugExceptionWidget.background", Solid(Shade1)),
    ("debugExceptionWidget.border", Solid(Shade1)),
    ("editorMarkerNavigation.background", Solid(Shade1)),
    ("editorMarkerNavigationError.background", Solid(Accent0)),
    ("editorMarkerNavigationWarning.background", Solid(Accent1)),

    // Peek view colors
    ("peekView.border", Solid(Accent7)),
    ("peekViewEditor.background", Solid(Shade1)),
    ("peekViewEditorGutter.background", Solid(Shade1)),
    ("peekViewEditor.matchHighlightBackground", Alpha(Accent2, "7f")),
    ("peekViewResult.background", Solid(Shade1)),
    ("peekViewResult.fileForeground", Solid(Shade6)),
    ("peekViewResult.lineForeground", Solid(Shade2)),
    ("peekViewResult.matchHighlightBackground", Solid(Accent2)),
    ("peekViewResult.selectionBackground", Solid(Shade3)),
    ("peekViewResult.selectionForeground", Solid(Shade7)),
    ("peekViewTitle.background", Solid(Shade2)),
    ("peekViewTitleDescription.foreground", Solid(Shade5)),
    ("peekViewTitleLabel.foreground", Solid(Shade7)),

    // Merge conflicts
    ("merge.currentHeaderBackground", Alpha(Accent4, "4c")),
    ("merge.currentContentBackground", Alpha(Accent4, "4c")),
    ("merge.incomingHeaderBackground", Alpha(Accent5, "4c")),
    ("merge.incomingContentBackground", Alpha(Accent5, "4c")),
    ("merge.commonContentBackground", Alpha(Accent6, "4c")),
    ("merge.commonHeaderBackground", Alpha(Accent6, "4c")),
    ("merge.border", Solid(Shade4)),
    ("editorOverviewRuler.currentContentForeground", Solid(Accent4)),
    ("editorOverviewRuler.incomingContentForeground", Solid(Accent5)),
    ("editorOverviewRuler.commonContentForeground", Solid(Accent6)),

    // Panel colors
    ("panel.background", Solid(Shade0)),
    ("panel.border", Solid(Shade1)),
    ("panelTitle.activeBorder", Solid(Shade3)),
    ("panelTitle.activeForeground", Solid(Shade6)),
    ("panelTitle.inactiveForeground", Solid(Shade4)),

    // Status bar colors
    ("statusBar.background", Solid(Accent5)),
    ("statusBar.foreground", Solid(Shade0)),
    ("statusBar.border", Alpha(Accent5, "7f")),
    ("statusBar.debuggingBackground", Solid(Accent1)),
    ("statusBar.debuggingForeground", Solid(Shade0)),
    ("statusBar.debuggingBorder", Alpha(Accent1, "7f")),
    ("statusBar.noFolderBackground", Solid(Accent6)),
    ("statusBar.noFolderForeground", Solid(Shade0)),
    ("statusBar.noFolderBorder", Alpha(Accent6, "7f")),
    ("statusBarItem.activeBackground", Solid(Accent4)),
    ("statusBarItem.hoverBackground", Solid(Accent3)),
    ("statusBarItem.prominentBackground", Solid(Accent4)),
    ("statusBarItem.prominentHoverBackground", Solid(Accent3)),

    // Title bar colors
    ("titleBar.activeBackground", Solid(Shade0)),
    ("titleBar.activeForeground", Solid(Shade5)),
    ("titleBar.inactiveBackground", Solid(Shade0)),
    ("titleBar.inactiveForeground", Solid(Shade3)),

    // Notification dialog colors
    ("notification.background", Solid(Shade1)),
    ("notification.foreground", Solid(Shade7)),
    ("notification.buttonBackground", Solid(Accent5)),
    ("notification.buttonHoverBackground", Solid(Accent4)),
    ("notification.buttonForeground", Solid(Shade0)),
    ("notification.infoBackground", Solid(Accent5)),
    ("notification.infoForeground", Solid(Shade0)),
    ("notification.warningBackground", Solid(Accent1)),
    ("notification.warningForeground", Solid(Shade0)),
    ("notification.errorBackground", Solid(Accent0)),
    ("notification.errorForeground", Solid(Shade0)),

    // Extensions
    ("extensionButton.prominentForeground", Solid(Shade0)),
    ("extensionButton.prominentBackground", Solid(Accent5)),
    ("extensionButton.prominentHoverBackground", Solid(Accent4)),

    // Quick picker
    ("pickerGroup.border", Solid(Shade5)),
    ("pickerGroup.foreground", Solid(Shade7)),

    // Integrated terminal colors
    ("terminal.background", Solid(Shade0)),
    ("terminal.foreground", Solid(Shade6)),
    ("terminal.ansiBlack", Solid(Shade0)),
    ("terminal.ansiBlue", Solid(Accent5)),
    ("terminal.ansiBrightBlack", Solid(Shade1)),
    ("terminal.ansiBrightBlue", Solid(Accent5)),
    ("terminal.ansiBrightCyan", Solid(Accent4)),
    ("terminal.ansiBrightGreen", Solid(Accent4)),
    ("terminal.ansiBrightMagenta", Solid(Accent7)),
    ("terminal.ansiBrightRed", Solid(Accent1)),
    ("terminal.ansiBrightWhite", Solid(Shade7)),
    ("terminal.ansiBrightYellow", Solid(Accent2)),
    ("terminal.ansiCyan", Solid(Accent4)),
    ("terminal.ansiGreen", Solid(Accent3)),
    ("terminal.ansiMagenta", Solid(Accent7)),
    ("terminal.ansiRed", Solid(Accent0)),
    ("terminal.ansiWhite", Solid(Shade6)),
    ("terminal.ansiYellow", Solid(Accent2)),
    ("terminal.selectionBackground", Alpha(Accent5, "7f")),
    ("terminalCursor.background", Solid(Shade1)),
    ("terminalCursor.foreground", Solid(Shade5)),

    // Debug
    ("debugToolBar.background", Solid(Shade1)),

    // Welcome page
    ("welcomePage.buttonBackground", Solid(Shade1)),
    ("welcomePage.buttonHoverBackground", Solid(Shade2)),
    ("walkThrough.embeddedEditorBackground", Solid(Shade0)),

    // Git
    ("gitDecoration.modifiedResourceForeground", Solid(Accent2)),
    ("gitDecoration.deletedResourceForeground", Solid(Accent0)),
    ("gitDecoration.untrackedResourceForeground", Solid(Accent6)),
    ("gitDecoration.ignoredResourceForeground", Solid(Shade3)),
    ("gitDecoration.conflictingResourceForeground", Solid(Accent4)),
];

/// Workbench colors for one mode, serialized as an ordered JSON object.
#[derive(Debug)]
struct WorkbenchColors<'a> {
    mode: Mode,
    colors: &'a ColorSlots,
}

impl Serialize for WorkbenchColors<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(WORKBENCH_COLORS.len()))?;
        for (key, value) in WORKBENCH_COLORS {
            map.serialize_entry(key, &value.resolve(self.mode, self.colors))?;
        }
        map.end()
    }
}

/// Style of a named syntax scope.
#[derive(Debug, Clone, Copy)]
enum ScopeStyle {
    Foreground(Slot),
    FontStyle(&'static str),
}

/// `(name, scope, style)` for each syntax rule after the global settings.
const SCOPE_RULES: &[(&str, &str, ScopeStyle)] = &[
    ("Comment", "comment", ScopeStyle::Foreground(Shade3)),
    ("Constant", "constant", ScopeStyle::Foreground(Accent7)),
    ("Entity", "entity", ScopeStyle::Foreground(Accent4)),
    ("Invalid", "invalid", ScopeStyle::Foreground(Accent0)),
    ("Keyword", "keyword", ScopeStyle::Foreground(Accent6)),
    ("Storage", "storage", ScopeStyle::Foreground(Accent7)),
    ("String", "string", ScopeStyle::Foreground(Accent3)),
    ("Support", "support", ScopeStyle::Foreground(Accent4)),
    ("Variable", "variable", ScopeStyle::Foreground(Shade7)),
    ("Markup Heading", "markup.heading", ScopeStyle::Foreground(Accent4)),
    ("Markup Deleted", "markup.deleted", ScopeStyle::Foreground(Accent0)),
    ("Markup Inserted", "markup.inserted", ScopeStyle::Foreground(Accent3)),
    ("Markup Changed", "markup.changed", ScopeStyle::Foreground(Accent2)),
    ("Markup Underline", "markup.underline", ScopeStyle::FontStyle("underline")),
    ("Markup Underline Link", "markup.underline.link", ScopeStyle::Foreground(Accent5)),
    ("Markup List", "markup.list", ScopeStyle::Foreground(Shade7)),
    ("Markup Raw", "markup.raw", ScopeStyle::Foreground(Accent7)),
];

const STIPPLED_UNDERLINE: &str = "stippled_underline";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GlobalSettings {
    background: String,
    foreground: String,
    selection_border: String,
    find_highlight: String,
    find_highlight_foreground: String,
    active_guide: String,
    brackets_foreground: String,
    brackets_options: &'static str,
    brackets_contents_foreground: String,
    tags_options: &'static str,
}

impl GlobalSettings {
    fn new(colors: &ColorSlots) -> Self {
        Self {
            background: colors[Shade0].to_string(),
            foreground: colors[Shade6].to_string(),
            selection_border: colors[Shade5].to_string(),
            find_highlight: colors[Accent2].to_string(),
            find_highlight_foreground: colors[Shade0].to_string(),
            active_guide: colors[Accent1].to_string(),
            brackets_foreground: colors[Shade6].with_alpha("7F"),
            brackets_options: STIPPLED_UNDERLINE,
            brackets_contents_foreground: colors[Shade6].with_alpha("7F"),
            tags_options: STIPPLED_UNDERLINE,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum TokenColor {
    Global {
        settings: GlobalSettings,
    },
    Scope {
        name: &'static str,
        scope: &'static str,
        settings: ScopeSettings,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ScopeSettings {
    Foreground {
        foreground: String,
    },
    FontStyle {
        #[serde(rename = "fontStyle")]
        font_style: &'static str,
    },
}

fn token_colors(colors: &ColorSlots) -> Vec<TokenColor> {
    std::iter::once(TokenColor::Global {
        settings: GlobalSettings::new(colors),
    })
    .chain(SCOPE_RULES.iter().map(|&(name, scope, style)| TokenColor::Scope {
        name,
        scope,
        settings: match style {
            ScopeStyle::Foreground(slot) => ScopeSettings::Foreground {
                foreground: colors[slot].to_string(),
            },
            ScopeStyle::FontStyle(font_style) => ScopeSettings::FontStyle { font_style },
        },
    }))
    .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeDocument<'a> {
    name: String,
    #[serde(rename = "type")]
    kind: Mode,
    colors: WorkbenchColors<'a>,
    token_colors: Vec<TokenColor>,
}

/// Render the theme definition for one mode.
pub(super) fn render(entry: &ModeEntry) -> Result<Artifact, RenderError> {
    let document = ThemeDocument {
        name: theme_label(entry.mode),
        kind: entry.mode,
        colors: WorkbenchColors {
            mode: entry.mode,
            colors: &entry.colors,
        },
        token_colors: token_colors(&entry.colors),
    };
    json_artifact(package_path(&theme_package_path(entry.mode)), &document)
}
