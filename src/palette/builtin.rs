//! Palettes shipped with the generator.

use super::{Color, ColorSlots, Mode, PaletteInput, Slot};

/// Names accepted by [`find`].
pub const NAMES: &[&str] = &["monokai"];

/// Look up a built-in palette by name (case-insensitive).
#[must_use]
pub fn find(name: &str) -> Option<PaletteInput> {
    match name.to_ascii_lowercase().as_str() {
        "monokai" => Some(monokai()),
        _ => None,
    }
}

/// Monokai, dark only. Shades step from the classic background to the
/// classic foreground in sevenths.
#[must_use]
pub fn monokai() -> PaletteInput {
    let dark = ColorSlots::from_fn(|slot| {
        Color::new(match slot {
            Slot::Accent0 => "#F92672",
            Slot::Accent1 => "#FD971F",
            Slot::Accent2 => "#E6DB74",
            Slot::Accent3 => "#A6E22E",
            Slot::Accent4 => "#A1EFE4",
            Slot::Accent5 => "#66D9EF",
            Slot::Accent6 => "#AE81FF",
            Slot::Accent7 => "#FD5FF0",
            Slot::Shade0 => "#272822",
            Slot::Shade1 => "#454640",
            Slot::Shade2 => "#63635D",
            Slot::Shade3 => "#81817B",
            Slot::Shade4 => "#9E9F99",
            Slot::Shade5 => "#BCBDB7",
            Slot::Shade6 => "#DADAD4",
            Slot::Shade7 => "#F8F8F2",
        })
    });
    PaletteInput::single(Mode::Dark, dark)
}
