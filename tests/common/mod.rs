//! Common test utilities for the render integration tests

use themer_vscode::{Color, ColorSlots, Mode, ModeEntry, PaletteInput, Slot};

/// Colors tagged with their mode and slot, e.g. `#dark-accent3`.
pub fn tagged_slots(mode: Mode) -> ColorSlots {
    ColorSlots::from_fn(|slot| Color::new(format!("#{mode}-{}", slot.key())))
}

/// A valid palette with the given modes in the given order.
pub fn palette(modes: &[Mode]) -> Result<PaletteInput, Box<dyn std::error::Error>> {
    let entries = modes
        .iter()
        .map(|&mode| ModeEntry::new(mode, tagged_slots(mode)))
        .collect();
    Ok(PaletteInput::new(entries)?)
}

/// `(key, color)` pairs for every slot except `missing`.
pub fn pairs_without(missing: Option<Slot>) -> Vec<(&'static str, String)> {
    Slot::ALL
        .into_iter()
        .filter(|&slot| Some(slot) != missing)
        .map(|slot| (slot.key(), format!("#{}", slot.key())))
        .collect()
}

/// Artifact contents as text.
pub fn text(artifact: &themer_vscode::Artifact) -> Result<&str, Box<dyn std::error::Error>> {
    artifact.text().ok_or_else(|| format!("{} is not UTF-8", artifact.path).into())
}
