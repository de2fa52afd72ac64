//! Palette data model
//!
//! A palette assigns sixteen color slots (eight accents, eight shades) for
//! one or both appearance modes. Slots are a closed enum so a [`ColorSlots`]
//! value can only exist once every slot has a color; a missing slot is a
//! [`ConfigurationError`] at construction rather than a failed lookup later.

pub mod builtin;

use crate::error::ConfigurationError;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// An opaque color token, usually a hex code such as `#272822`.
///
/// The contents are never parsed; the only operation is appending a fixed
/// alpha suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap a color token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The token with a two-digit hex alpha suffix appended (`#272822` + `7f`).
    #[must_use]
    pub fn with_alpha(&self, alpha: &str) -> String {
        format!("{}{alpha}", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Color {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// One named color role within a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `accent0`, conventionally red / errors.
    Accent0,
    /// `accent1`, conventionally orange / warnings.
    Accent1,
    /// `accent2`, conventionally yellow.
    Accent2,
    /// `accent3`, conventionally green.
    Accent3,
    /// `accent4`, conventionally cyan.
    Accent4,
    /// `accent5`, conventionally blue.
    Accent5,
    /// `accent6`, conventionally purple.
    Accent6,
    /// `accent7`, conventionally pink.
    Accent7,
    /// `shade0`, the background tone.
    Shade0,
    /// `shade1`
    Shade1,
    /// `shade2`
    Shade2,
    /// `shade3`
    Shade3,
    /// `shade4`
    Shade4,
    /// `shade5`
    Shade5,
    /// `shade6`
    Shade6,
    /// `shade7`, the foreground tone.
    Shade7,
}

impl Slot {
    /// Every slot, accents first, each group in ascending index order.
    pub const ALL: [Self; 16] = [
        Self::Accent0,
        Self::Accent1,
        Self::Accent2,
        Self::Accent3,
        Self::Accent4,
        Self::Accent5,
        Self::Accent6,
        Self::Accent7,
        Self::Shade0,
        Self::Shade1,
        Self::Shade2,
        Self::Shade3,
        Self::Shade4,
        Self::Shade5,
        Self::Shade6,
        Self::Shade7,
    ];

    /// The eight accent slots in index order.
    pub const ACCENTS: [Self; 8] = [
        Self::Accent0,
        Self::Accent1,
        Self::Accent2,
        Self::Accent3,
        Self::Accent4,
        Self::Accent5,
        Self::Accent6,
        Self::Accent7,
    ];

    /// Key used for this slot in palette files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Accent0 => "accent0",
            Self::Accent1 => "accent1",
            Self::Accent2 => "accent2",
            Self::Accent3 => "accent3",
            Self::Accent4 => "accent4",
            Self::Accent5 => "accent5",
            Self::Accent6 => "accent6",
            Self::Accent7 => "accent7",
            Self::Shade0 => "shade0",
            Self::Shade1 => "shade1",
            Self::Shade2 => "shade2",
            Self::Shade3 => "shade3",
            Self::Shade4 => "shade4",
            Self::Shade5 => "shade5",
            Self::Shade6 => "shade6",
            Self::Shade7 => "shade7",
        }
    }

    /// Look a slot up by its palette-file key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.key() == key)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete set of sixteen colors for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSlots([Color; 16]);

impl ColorSlots {
    /// Build a full set by asking `color` for every slot.
    #[must_use]
    pub fn from_fn(mut color: impl FnMut(Slot) -> Color) -> Self {
        Self(std::array::from_fn(|i| color(Slot::ALL[i])))
    }

    /// Build a set from `(key, color)` pairs as they appear in a palette file.
    ///
    /// Keys that are not slot names are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingSlot`] naming the first absent
    /// slot in [`Slot::ALL`] order.
    pub fn try_from_pairs<K, C>(
        mode: Mode,
        pairs: impl IntoIterator<Item = (K, C)>,
    ) -> Result<Self, ConfigurationError>
    where
        K: AsRef<str>,
        C: Into<Color>,
    {
        let mut colors: [Color; 16] = std::array::from_fn(|_| Color::new(String::new()));
        let mut seen = [false; 16];
        for (key, color) in pairs {
            if let Some(slot) = Slot::from_key(key.as_ref()) {
                colors[slot.index()] = color.into();
                seen[slot.index()] = true;
            }
        }

        if let Some(slot) = Slot::ALL.into_iter().find(|slot| !seen[slot.index()]) {
            return Err(ConfigurationError::MissingSlot { mode, slot });
        }
        Ok(Self(colors))
    }

    /// Color assigned to `slot`.
    #[must_use]
    pub const fn get(&self, slot: Slot) -> &Color {
        &self.0[slot.index()]
    }

    /// `(slot, color)` pairs in [`Slot::ALL`] order.
    pub fn pairs(&self) -> impl Iterator<Item = (Slot, &Color)> {
        Slot::ALL.into_iter().zip(self.0.iter())
    }
}

impl Index<Slot> for ColorSlots {
    type Output = Color;

    fn index(&self, slot: Slot) -> &Color {
        self.get(slot)
    }
}

/// An appearance variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Light text on a dark background.
    Dark,
    /// Dark text on a light background.
    Light,
}

impl Mode {
    /// Both modes, dark first.
    pub const ALL: [Self; 2] = [Self::Dark, Self::Light];

    /// Lowercase key (`dark` / `light`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Capitalized name used in display labels.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    /// Parse a palette-file mode key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownMode`] for anything other than
    /// `dark` or `light`.
    pub fn from_key(key: &str) -> Result<Self, ConfigurationError> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == key)
            .ok_or_else(|| ConfigurationError::UnknownMode(key.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mode paired with its colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeEntry {
    /// Which mode these colors are for.
    pub mode: Mode,
    /// The mode's sixteen colors.
    pub colors: ColorSlots,
}

impl ModeEntry {
    /// Pair a mode with its colors.
    #[must_use]
    pub const fn new(mode: Mode, colors: ColorSlots) -> Self {
        Self { mode, colors }
    }
}

/// The palette handed to the renderer: one or two modes, in a caller-chosen
/// order that every ordered output follows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPalette")]
pub struct PaletteInput {
    entries: Vec<ModeEntry>,
}

impl PaletteInput {
    /// Validate an ordered list of modes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NoModes`] for an empty list and
    /// [`ConfigurationError::DuplicateMode`] if a mode repeats.
    pub fn new(entries: Vec<ModeEntry>) -> Result<Self, ConfigurationError> {
        if entries.is_empty() {
            return Err(ConfigurationError::NoModes);
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|prior| prior.mode == entry.mode) {
                return Err(ConfigurationError::DuplicateMode(entry.mode));
            }
        }
        Ok(Self { entries })
    }

    /// A palette with a single mode.
    #[must_use]
    pub fn single(mode: Mode, colors: ColorSlots) -> Self {
        Self {
            entries: vec![ModeEntry::new(mode, colors)],
        }
    }

    /// Build a palette from `(mode key, slot pairs)` in document order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found: an unknown mode key, a
    /// missing slot, a duplicate mode, or no modes at all.
    pub fn from_pairs<M, S, K, C>(
        modes: impl IntoIterator<Item = (M, S)>,
    ) -> Result<Self, ConfigurationError>
    where
        M: AsRef<str>,
        S: IntoIterator<Item = (K, C)>,
        K: AsRef<str>,
        C: Into<Color>,
    {
        let entries = modes
            .into_iter()
            .map(|(key, slots)| {
                let mode = Mode::from_key(key.as_ref())?;
                let colors = ColorSlots::try_from_pairs(mode, slots)?;
                Ok(ModeEntry::new(mode, colors))
            })
            .collect::<Result<Vec<_>, ConfigurationError>>()?;
        Self::new(entries)
    }

    /// Mode entries in palette order.
    #[must_use]
    pub fn entries(&self) -> &[ModeEntry] {
        &self.entries
    }

    /// Colors for `mode`, if the palette defines it.
    #[must_use]
    pub fn get(&self, mode: Mode) -> Option<&ColorSlots> {
        self.entries
            .iter()
            .find(|entry| entry.mode == mode)
            .map(|entry| &entry.colors)
    }

    /// Dark-mode colors, if present.
    #[must_use]
    pub fn dark(&self) -> Option<&ColorSlots> {
        self.get(Mode::Dark)
    }

    /// Light-mode colors, if present.
    #[must_use]
    pub fn light(&self) -> Option<&ColorSlots> {
        self.get(Mode::Light)
    }
}

/// Palette file contents before validation, keeping document key order.
#[derive(Debug)]
struct RawPalette(Vec<(String, RawSlots)>);

/// One mode's slot colors. Keys that are not slots are skipped whatever
/// their value.
#[derive(Debug)]
struct RawSlots(Vec<(String, String)>);

impl TryFrom<RawPalette> for PaletteInput {
    type Error = ConfigurationError;

    fn try_from(raw: RawPalette) -> Result<Self, Self::Error> {
        Self::from_pairs(raw.0.into_iter().map(|(mode, slots)| (mode, slots.0)))
    }
}

impl<'de> Deserialize<'de> for RawPalette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawPaletteVisitor;

        impl<'de> Visitor<'de> for RawPaletteVisitor {
            type Value = RawPalette;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from mode name to color slots")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut modes = Vec::with_capacity(map.size_hint().unwrap_or(2));
                while let Some(entry) = map.next_entry::<String, RawSlots>()? {
                    modes.push(entry);
                }
                Ok(RawPalette(modes))
            }
        }

        deserializer.deserialize_map(RawPaletteVisitor)
    }
}

impl<'de> Deserialize<'de> for RawSlots {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawSlotsVisitor;

        impl<'de> Visitor<'de> for RawSlotsVisitor {
            type Value = RawSlots;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from slot name to color")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut slots = Vec::with_capacity(Slot::ALL.len());
                while let Some(key) = map.next_key::<String>()? {
                    if Slot::from_key(&key).is_some() {
                        let color = map.next_value::<String>()?;
                        slots.push((key, color));
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(RawSlots(slots))
            }
        }

        deserializer.deserialize_map(RawSlotsVisitor)
    }
}
