//! # Engine Configuration
//!
//! TOML configuration for the frame pipeline. Every section and key is
//! optional:
//!
//! ```toml
//! [field]
//! width = 256
//! height = 256
//! noise = "lattice"   # "lattice" | "simplex"
//! mode = 4            # 0..=10
//! stretch = false
//!
//! [palette]
//! preset = "blue"     # "blue" | "red"
//! # stops = [ { r = 0.0, g = 0.0, b = 0.0, a = 1.0, width = 1.0 }, ... ]
//!
//! [histogram]
//! bins = 256          # defaults to the field width
//! ```

use std::path::Path;

use noisefield_procedural::{CompositionMode, FieldDimensions, NoiseKind, ProceduralResult};
use noisefield_rendering::{ColorMap, ColorStop, RenderingError, RenderingResult};
use serde::Deserialize;

use crate::error::{NoisefieldError, NoisefieldResult};

/// Field size, noise selection, and composition mode.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    /// Base noise.
    pub noise: NoiseKind,
    /// Composition mode selector, `0..=10`.
    pub mode: u8,
    /// Remap each frame's observed range onto `[0, 1]` before coloring.
    pub stretch: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FieldDimensions::DEFAULT.width(),
            height: FieldDimensions::DEFAULT.height(),
            noise: NoiseKind::default(),
            mode: CompositionMode::default().index(),
            stretch: false,
        }
    }
}

/// Built-in palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PalettePreset {
    /// Black through blue to white.
    #[default]
    Blue,
    /// White through orange to black.
    Red,
}

/// Palette selection. Explicit `stops` take precedence over `preset`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    /// Built-in palette.
    pub preset: PalettePreset,
    /// Custom stop list.
    pub stops: Option<Vec<ColorStop>>,
}

impl PaletteConfig {
    /// Builds the configured color map.
    ///
    /// # Errors
    ///
    /// Returns [`RenderingError::InvalidPalette`] if custom stops are invalid.
    pub fn color_map(&self) -> RenderingResult<ColorMap> {
        match (&self.stops, self.preset) {
            (Some(stops), _) => ColorMap::new(stops.clone()),
            (None, PalettePreset::Blue) => Ok(ColorMap::blue()),
            (None, PalettePreset::Red) => Ok(ColorMap::red()),
        }
    }
}

/// Histogram settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistogramConfig {
    /// Bucket count. Unset means one bucket per field column.
    pub bins: Option<usize>,
}

/// Complete pipeline configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// `[field]` section.
    pub field: FieldConfig,
    /// `[palette]` section.
    pub palette: PaletteConfig,
    /// `[histogram]` section.
    pub histogram: HistogramConfig,
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`NoisefieldError::ConfigParse`] for malformed TOML or
    /// unknown keys, or the validation error from [`Self::validate`].
    pub fn from_toml_str(text: &str) -> NoisefieldResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NoisefieldError::ConfigRead`] if the file cannot be read,
    /// otherwise as [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> NoisefieldResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| NoisefieldError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            width = config.field.width,
            height = config.field.height,
            noise = %config.field.noise,
            mode = config.field.mode,
            "config loaded"
        );
        Ok(config)
    }

    /// Checks every setting that can be invalid.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: zero field size, mode out of
    /// range, invalid custom palette, or zero histogram bins.
    pub fn validate(&self) -> NoisefieldResult<()> {
        self.dimensions()?;
        self.mode()?;
        self.palette.color_map()?;
        if self.bins() == 0 {
            return Err(RenderingError::InvalidBinCount.into());
        }
        Ok(())
    }

    /// Field size.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either axis is 0.
    pub fn dimensions(&self) -> ProceduralResult<FieldDimensions> {
        FieldDimensions::new(self.field.width, self.field.height)
    }

    /// Composition mode.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMode` if the selector is outside `0..=10`.
    pub fn mode(&self) -> ProceduralResult<CompositionMode> {
        CompositionMode::try_from(self.field.mode).map_err(|err| {
            tracing::warn!(mode = self.field.mode, "rejected composition mode");
            err
        })
    }

    /// Histogram bucket count.
    #[must_use]
    pub fn bins(&self) -> usize {
        self.histogram.bins.unwrap_or(self.field.width)
    }
}
