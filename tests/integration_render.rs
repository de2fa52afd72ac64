//! Integration tests for rendering a theme package through the public API

mod common;

use common::{pairs_without, palette, tagged_slots, text};
use proptest::prelude::*;
use rstest::rstest;
use serde_json::Value;
use std::collections::HashSet;
use themer_vscode::artifact::package_path;
use themer_vscode::{
    Color, ColorSlots, ConfigurationError, Mode, ModeEntry, PaletteInput, Slot, render,
    render_instructions,
};

const VERSION: &str = "1.0.0";

#[rstest]
#[case(&[Mode::Dark])]
#[case(&[Mode::Light])]
#[case(&[Mode::Dark, Mode::Light])]
#[case(&[Mode::Light, Mode::Dark])]
fn test_render_produces_three_plus_one_per_mode(
    #[case] modes: &[Mode],
) -> Result<(), Box<dyn std::error::Error>> {
    let artifacts = render(&palette(modes)?, VERSION)?;
    assert_eq!(artifacts.len(), 3 + modes.len());

    let unique: HashSet<&str> = artifacts.iter().map(|a| a.path.as_str()).collect();
    assert_eq!(unique.len(), artifacts.len());
    Ok(())
}

#[rstest]
#[case(&[Mode::Dark])]
#[case(&[Mode::Dark, Mode::Light])]
fn test_manifest_links_every_theme_file(
    #[case] modes: &[Mode],
) -> Result<(), Box<dyn std::error::Error>> {
    let artifacts = render(&palette(modes)?, VERSION)?;
    let manifest: Value = serde_json::from_slice(&artifacts[0].contents)?;
    assert_eq!(manifest["version"], VERSION);

    let contributions = manifest["contributes"]["themes"]
        .as_array()
        .ok_or("themes is not an array")?;
    assert_eq!(contributions.len(), modes.len());

    for contribution in contributions {
        let relative = contribution["path"].as_str().ok_or("path is not a string")?;
        let full = package_path(relative);
        let matching = artifacts.iter().filter(|a| a.path == full).count();
        assert_eq!(matching, 1, "{full} should be produced exactly once");
    }
    Ok(())
}

#[test]
fn test_shadow_asymmetry() -> Result<(), Box<dyn std::error::Error>> {
    let artifacts = render(&palette(&[Mode::Dark, Mode::Light])?, VERSION)?;
    let dark: Value = serde_json::from_slice(&artifacts[3].contents)?;
    let light: Value = serde_json::from_slice(&artifacts[4].contents)?;

    assert_eq!(dark["colors"]["widget.shadow"], "#dark-shade0");
    assert_eq!(dark["colors"]["scrollbar.shadow"], "#dark-shade0");
    assert_eq!(light["colors"]["widget.shadow"], "#light-shade766");
    assert_eq!(light["colors"]["scrollbar.shadow"], "#light-shade766");
    Ok(())
}

#[test]
fn test_readme_pluralization() -> Result<(), Box<dyn std::error::Error>> {
    let single = render(&palette(&[Mode::Light])?, VERSION)?;
    let readme = text(&single[1])?;
    assert!(readme.contains("theme"));
    assert!(!readme.contains("themes"));

    let both = render(&palette(&[Mode::Dark, Mode::Light])?, VERSION)?;
    assert!(text(&both[1])?.contains("themes"));
    Ok(())
}

#[test]
fn test_icon_branching() -> Result<(), Box<dyn std::error::Error>> {
    let single = render(&palette(&[Mode::Dark])?, VERSION)?;
    let icon = text(&single[2])?;
    assert_eq!(icon.matches("<linearGradient").count(), 1);
    assert_eq!(icon.matches("#dark-accent").count(), 8);

    let both = render(&palette(&[Mode::Dark, Mode::Light])?, VERSION)?;
    let icon = text(&both[2])?;
    assert!(icon.contains(r#"id="shadeGradientLight""#));
    assert!(icon.contains(r#"id="shadeGradientDark""#));
    assert_eq!(
        icon.matches("#dark-accent").count() + icon.matches("#light-accent").count(),
        16
    );
    Ok(())
}

#[test]
fn test_instructions_from_rendered_paths() -> Result<(), Box<dyn std::error::Error>> {
    let artifacts = render(&palette(&[Mode::Dark])?, VERSION)?;
    let paths: Vec<String> = artifacts
        .iter()
        .map(|a| format!("/home/user/out/{}", a.path))
        .collect();

    let instructions = render_instructions(&paths);
    assert!(instructions.contains("/home/user/out/theme-themer-vscode"));
    assert!(instructions.contains("\"Themer Dark\""));
    assert!(!instructions.contains("Themer Light"));
    Ok(())
}

#[rstest]
#[case(Slot::Accent3)]
#[case(Slot::Shade0)]
#[case(Slot::Shade7)]
fn test_missing_slot_is_rejected(#[case] missing: Slot) {
    let result = PaletteInput::from_pairs([
        ("dark", pairs_without(None)),
        ("light", pairs_without(Some(missing))),
    ]);
    assert_eq!(
        result,
        Err(ConfigurationError::MissingSlot {
            mode: Mode::Light,
            slot: missing,
        })
    );
}

#[test]
fn test_palette_with_no_modes_is_rejected() {
    let modes: [(&str, Vec<(&str, String)>); 0] = [];
    assert_eq!(
        PaletteInput::from_pairs(modes),
        Err(ConfigurationError::NoModes)
    );
}

#[test]
fn test_palette_json_round_trip_through_render() -> Result<(), Box<dyn std::error::Error>> {
    let slots: serde_json::Map<String, Value> = tagged_slots(Mode::Dark)
        .pairs()
        .map(|(slot, color)| (slot.key().to_string(), Value::from(color.as_str())))
        .collect();
    let json = serde_json::json!({ "dark": slots }).to_string();
    let from_json: PaletteInput = serde_json::from_str(&json)?;

    assert_eq!(
        render(&from_json, VERSION)?,
        render(&palette(&[Mode::Dark])?, VERSION)?
    );
    Ok(())
}

fn color_strategy() -> impl Strategy<Value = Color> {
    "#[0-9a-f]{6}".prop_map(Color::from)
}

fn slots_strategy() -> impl Strategy<Value = ColorSlots> {
    prop::collection::vec(color_strategy(), 16).prop_map(|colors| {
        let mut colors = colors.into_iter();
        ColorSlots::from_fn(|_| colors.next().unwrap_or_else(|| Color::new("#000000")))
    })
}

fn palette_strategy() -> impl Strategy<Value = PaletteInput> {
    prop_oneof![
        Just(vec![Mode::Dark]),
        Just(vec![Mode::Light]),
        Just(vec![Mode::Dark, Mode::Light]),
        Just(vec![Mode::Light, Mode::Dark]),
    ]
    .prop_flat_map(|modes| {
        let count = modes.len();
        (Just(modes), prop::collection::vec(slots_strategy(), count))
    })
    .prop_filter_map("palette must be valid", |(modes, slots)| {
        let entries = modes
            .into_iter()
            .zip(slots)
            .map(|(mode, colors)| ModeEntry::new(mode, colors))
            .collect();
        PaletteInput::new(entries).ok()
    })
}

proptest! {
    #[test]
    fn prop_render_is_complete_unique_and_deterministic(palette in palette_strategy()) {
        let first = render(&palette, VERSION).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let second = render(&palette, VERSION).map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(first.len(), 3 + palette.entries().len());
        let unique: HashSet<&str> = first.iter().map(|a| a.path.as_str()).collect();
        prop_assert_eq!(unique.len(), first.len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_theme_colors_come_from_the_palette(palette in palette_strategy()) {
        let artifacts = render(&palette, VERSION).map_err(|e| TestCaseError::fail(e.to_string()))?;
        for (entry, artifact) in palette.entries().iter().zip(&artifacts[3..]) {
            let theme: Value = serde_json::from_slice(&artifact.contents)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(&theme["type"], entry.mode.as_str());
            prop_assert_eq!(
                &theme["colors"]["editor.background"],
                entry.colors[Slot::Shade0].as_str()
            );
            let border = entry.colors[Slot::Accent5].with_alpha("7f");
            prop_assert_eq!(&theme["colors"]["statusBar.border"], border.as_str());
        }
    }
}
