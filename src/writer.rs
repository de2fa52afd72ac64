//! Persisting rendered artifacts to disk.

use crate::artifact::Artifact;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Write every artifact under `root`, creating directories as needed.
///
/// Unless `force` is set, nothing is written if any destination already
/// exists. Returns the written paths in artifact order.
///
/// # Errors
///
/// Returns an error if a destination exists without `force`, or if a
/// directory or file cannot be written.
pub fn write_artifacts(root: &Path, artifacts: &[Artifact], force: bool) -> Result<Vec<PathBuf>> {
    let destinations: Vec<PathBuf> = artifacts
        .iter()
        .map(|artifact| destination(root, artifact))
        .collect();

    if !force {
        let existing: Vec<String> = destinations
            .iter()
            .filter(|path| path.exists())
            .map(|path| path.display().to_string())
            .collect();
        if !existing.is_empty() {
            bail!(
                "Refusing to overwrite existing files (use --force): {}",
                existing.join(", ")
            );
        }
    }

    for (artifact, path) in artifacts.iter().zip(&destinations) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, &artifact.contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(path = %path.display(), bytes = artifact.contents.len(), "Wrote artifact");
    }

    info!(count = destinations.len(), root = %root.display(), "Wrote theme package");
    Ok(destinations)
}

fn destination(root: &Path, artifact: &Artifact) -> PathBuf {
    artifact
        .path
        .split('/')
        .fold(root.to_path_buf(), |path, component| path.join(component))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_artifacts() -> Vec<Artifact> {
        vec![
            Artifact::new("pkg/package.json", "{}"),
            Artifact::new("pkg/themes/themer-dark-color-theme.json", "{\"type\":\"dark\"}"),
        ]
    }

    #[test]
    fn test_writes_nested_paths() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let written = write_artifacts(temp_dir.path(), &sample_artifacts(), false)?;

        assert_eq!(written.len(), 2);
        let theme = temp_dir
            .path()
            .join("pkg")
            .join("themes")
            .join("themer-dark-color-theme.json");
        assert_eq!(written[1], theme);
        assert_eq!(fs::read_to_string(theme)?, "{\"type\":\"dark\"}");
        Ok(())
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let theme_path = temp_dir.path().join("pkg/themes/themer-dark-color-theme.json");
        fs::create_dir_all(temp_dir.path().join("pkg/themes"))?;
        fs::write(&theme_path, "original")?;

        let result = write_artifacts(temp_dir.path(), &sample_artifacts(), false);

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&theme_path)?, "original");
        assert!(!temp_dir.path().join("pkg/package.json").exists());
        Ok(())
    }

    #[test]
    fn test_force_overwrites() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        write_artifacts(temp_dir.path(), &sample_artifacts(), false)?;

        let updated = vec![Artifact::new("pkg/package.json", "{\"v\":2}")];
        write_artifacts(temp_dir.path(), &updated, true)?;

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("pkg/package.json"))?,
            "{\"v\":2}"
        );
        Ok(())
    }
}
