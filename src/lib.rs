//! themer-vscode - VS Code theme package generator
//!
//! Turns a palette of accent and shade colors into the files of an
//! installable VS Code theme extension: a manifest, a readme, a preview
//! icon, and one color theme per appearance mode. Rendering is pure and
//! returns in-memory artifacts; writing them is left to the caller.

pub mod artifact;
pub mod config;
pub mod error;
pub mod palette;
pub mod paths;
pub mod render;
pub mod writer;

pub use artifact::Artifact;
pub use config::Config;
pub use error::{ConfigurationError, RenderError};
pub use palette::{Color, ColorSlots, Mode, ModeEntry, PaletteInput, Slot};
pub use render::{render, render_instructions};
