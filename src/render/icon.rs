//! Preview icon (`icon.svg`).
//!
//! The icon is a 400x400 SVG showing each mode as a panel: the mode's
//! background, its eight accents as a 4x2 grid of swatches, and a bar
//! with a horizontal gradient across `shade1..=shade7`. With both modes
//! the light panel sits on top of the dark one and each panel gets its own
//! gradient id. All coordinates are fixed; generated icons are diffed
//! downstream, so the output is byte-stable including whitespace.

use crate::artifact::{Artifact, ICON_FILE_NAME, package_path};
use crate::palette::{ColorSlots, PaletteInput, Slot};

const SVG_OPEN: &str = r#"<svg width="400px" height="400px" viewBox="0 0 400 400" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#;

const GRADIENT_SHADES: [Slot; 7] = [
    Slot::Shade1,
    Slot::Shade2,
    Slot::Shade3,
    Slot::Shade4,
    Slot::Shade5,
    Slot::Shade6,
    Slot::Shade7,
];

const STOP_OFFSETS: [&str; 7] = ["0%", "16.67%", "33.33%", "50%", "66.67%", "83.33%", "100%"];

const SWATCH_COLUMNS: [u32; 4] = [28, 118, 208, 298];
const SWATCH_WIDTH: u32 = 74;

/// Fixed placement of one panel's shapes.
#[derive(Debug, Clone, Copy)]
struct Panel {
    height: u32,
    swatch_rows: [u32; 2],
    swatch_height: u32,
    bar_x: u32,
    bar_y: u32,
    bar_height: u32,
}

const BAR_WIDTH: u32 = 344;

/// Half-height panel used when both modes share the icon.
const HALF_PANEL: Panel = Panel {
    height: 200,
    swatch_rows: [28, 81],
    swatch_height: 37,
    bar_x: 28,
    bar_y: 134,
    bar_height: 37,
};

/// Full-height panel used for a single mode.
const FULL_PANEL: Panel = Panel {
    height: 400,
    swatch_rows: [28, 118],
    swatch_height: 74,
    bar_x: 27,
    bar_y: 208,
    bar_height: 164,
};

/// Indented line writer. Every line is preceded by a newline, and the
/// document ends on a newline indented one level shallower than the root.
#[derive(Debug)]
struct SvgWriter {
    out: String,
    root_indent: usize,
}

impl SvgWriter {
    const fn new(root_indent: usize) -> Self {
        Self {
            out: String::new(),
            root_indent,
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.out.push('\n');
        self.out.push_str(&" ".repeat(self.root_indent + 2 * depth));
        self.out.push_str(text);
    }

    fn finish(mut self) -> String {
        self.out.push('\n');
        self.out
            .push_str(&" ".repeat(self.root_indent.saturating_sub(2)));
        self.out
    }

    fn gradient(&mut self, depth: usize, id: &str, colors: &ColorSlots) {
        self.line(
            depth,
            &format!(r#"<linearGradient x1="0%" y1="50%" x2="100%" y2="50%" id="{id}">"#),
        );
        for (slot, offset) in GRADIENT_SHADES.into_iter().zip(STOP_OFFSETS) {
            self.line(
                depth + 1,
                &format!(
                    r#"<stop stop-color="{}" offset="{offset}"></stop>"#,
                    colors[slot]
                ),
            );
        }
        self.line(depth, "</linearGradient>");
    }

    fn panel(&mut self, depth: usize, panel: Panel, gradient_id: &str, colors: &ColorSlots) {
        self.line(
            depth,
            &format!(
                r#"<rect fill="{}" x="0" y="0" width="400" height="{}"></rect>"#,
                colors[Slot::Shade0],
                panel.height
            ),
        );
        let cells = panel
            .swatch_rows
            .iter()
            .flat_map(|&y| SWATCH_COLUMNS.iter().map(move |&x| (x, y)));
        for (slot, (x, y)) in Slot::ACCENTS.into_iter().zip(cells) {
            self.line(
                depth,
                &format!(
                    r#"<rect fill="{}" x="{x}" y="{y}" width="{SWATCH_WIDTH}" height="{}"></rect>"#,
                    colors[slot], panel.swatch_height
                ),
            );
        }
        self.line(
            depth,
            &format!(
                r#"<rect fill="url(#{gradient_id})" x="{}" y="{}" width="{BAR_WIDTH}" height="{}"></rect>"#,
                panel.bar_x, panel.bar_y, panel.bar_height
            ),
        );
    }
}

fn render_pair(light: &ColorSlots, dark: &ColorSlots) -> String {
    let mut svg = SvgWriter::new(8);
    svg.line(0, SVG_OPEN);
    svg.line(1, "<defs>");
    svg.gradient(2, "shadeGradientLight", light);
    svg.gradient(2, "shadeGradientDark", dark);
    svg.line(1, "</defs>");
    svg.line(1, r#"<g id="light">"#);
    svg.panel(2, HALF_PANEL, "shadeGradientLight", light);
    svg.line(1, "</g>");
    svg.line(
        1,
        r#"<g id="dark" transform="translate(0.000000, 200.000000)">"#,
    );
    svg.panel(2, HALF_PANEL, "shadeGradientDark", dark);
    svg.line(1, "</g>");
    svg.line(0, "</svg>");
    svg.finish()
}

fn render_single(colors: &ColorSlots) -> String {
    let mut svg = SvgWriter::new(6);
    svg.line(0, SVG_OPEN);
    svg.line(1, "<defs>");
    svg.gradient(2, "shadeGradient", colors);
    svg.line(1, "</defs>");
    svg.panel(1, FULL_PANEL, "shadeGradient", colors);
    svg.line(0, "</svg>");
    svg.finish()
}

/// Render the icon from whichever modes the palette defines.
pub(super) fn render(palette: &PaletteInput) -> Artifact {
    let contents = if let (Some(light), Some(dark)) = (palette.light(), palette.dark()) {
        render_pair(light, dark)
    } else {
        // Exactly one entry remains.
        palette
            .entries()
            .iter()
            .map(|entry| render_single(&entry.colors))
            .collect()
    };
    Artifact::new(package_path(ICON_FILE_NAME), contents)
}
