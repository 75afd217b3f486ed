use crate::palette::{FixedPalette, PaletteProvider, RandomPalettes, find_theme};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where pictograms come from
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetLocation {
    /// Labels only
    #[default]
    None,
    /// `{path}/{code}.png` on disk
    Directory { path: PathBuf },
    /// `{base_url}/{code}.png` over HTTP
    Http { base_url: String },
}

/// How each grid's colors are chosen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaletteMode {
    /// A random built-in theme per grid
    Random { seed: Option<u64> },
    /// One built-in theme for every grid
    Theme { name: String },
    /// Explicit colors for every grid
    Fixed { palette: Palette },
}

impl Default for PaletteMode {
    fn default() -> Self {
        PaletteMode::Random { seed: None }
    }
}

/// Render configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Document title stored in the PDF metadata
    pub title: String,
    pub assets: AssetLocation,
    pub palette: PaletteMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Pictogram grids".to_string(),
            assets: AssetLocation::None,
            palette: PaletteMode::default(),
        }
    }
}

impl RenderOptions {
    /// Load options from JSON file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| GridError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GridError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        match &self.assets {
            AssetLocation::Http { base_url } if base_url.trim().is_empty() => {
                return Err(GridError::Config("Asset base URL is empty".to_string()));
            }
            _ => {}
        }
        match &self.palette {
            PaletteMode::Theme { name } if find_theme(name).is_none() => {
                Err(GridError::Config(format!("Unknown theme: {}", name)))
            }
            _ => Ok(()),
        }
    }

    /// Build the palette provider described by these options
    pub fn palette_provider(&self) -> Result<Box<dyn PaletteProvider + Send + Sync>> {
        Ok(match &self.palette {
            PaletteMode::Random { seed: Some(seed) } => Box::new(RandomPalettes::seeded(*seed)),
            PaletteMode::Random { seed: None } => Box::new(RandomPalettes::new()),
            PaletteMode::Theme { name } => {
                let theme = find_theme(name)
                    .ok_or_else(|| GridError::Config(format!("Unknown theme: {}", name)))?;
                Box::new(FixedPalette(theme.palette.clone()))
            }
            PaletteMode::Fixed { palette } => Box::new(FixedPalette(palette.clone())),
        })
    }
}
