use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::tex::TexTemplate;

/// Run-wide settings, read from JSON. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerSettings {
    /// Seconds left to read a text before the next object shows up.
    pub legend_interval: f64,
    /// Announce the parts of the study as numbered episodes.
    pub episodes: bool,
    /// Skip the study and only draw the curve.
    pub skip_study: bool,
    /// Samples per continuous piece of curve.
    pub samples_per_segment: usize,
    /// Duration of each curve drawing animation, in seconds.
    pub create_run_time: f64,
    /// Directory holding the pre-formatted LaTeX assets.
    pub assets_dir: PathBuf,
    /// Default LaTeX template for every TeX text.
    pub tex: TexTemplate,
}

impl Default for SequencerSettings {
    fn default() -> Self {
        Self {
            legend_interval: 1.2,
            episodes: true,
            skip_study: false,
            samples_per_segment: 240,
            create_run_time: 2.0,
            assets_dir: PathBuf::from("assets"),
            tex: TexTemplate::default(),
        }
    }
}

impl SequencerSettings {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid settings JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(ConfigError::from)?)
    }

    /// Reads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json)
    }
}
