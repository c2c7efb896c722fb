//! # Engine Configuration
//!
//! Limits and formatting thresholds for the engine. Every field has a
//! default, so a config file only needs the values it overrides.
//!
//! ## File Format
//!
//! Plain JSON. Saves are atomic: write to `.tmp`, sync, rename.
//!
//! ```json
//! { "version": "0.1.0", "max_input_length": 16 }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::config::{load_config, EngineConfig};
//! use std::path::Path;
//!
//! let config = load_config(Path::new("tally.json")).unwrap_or_default();
//! assert!(config.validate().is_ok());
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Current schema version for config files
pub const CONFIG_VERSION: &str = "0.1.0";

/// Tunable limits used by the transition and formatting functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Digits stop being appended once the entry reaches this length
    pub max_input_length: usize,

    /// Results below the scientific threshold are rounded to this many places
    pub result_decimal_places: u32,

    /// Results with a magnitude strictly above this switch to scientific notation
    pub scientific_threshold: f64,

    /// Fractional digits in scientific notation (`2.00000e+13`)
    pub scientific_fraction_digits: usize,

    /// Magnitude at which the display starts grouping thousands
    pub grouping_threshold: f64,

    /// Maximum fractional digits shown for grouped numbers
    pub max_display_fraction_digits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            version: CONFIG_VERSION.to_string(),
            max_input_length: 12,
            result_decimal_places: 10,
            scientific_threshold: 1e12,
            scientific_fraction_digits: 5,
            grouping_threshold: 1000.0,
            max_display_fraction_digits: 8,
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON text and validate it.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|e| CalcError::serialization(format!("Invalid config JSON: {}", e)))?;
        validate_version(&config.version)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_input_length == 0 {
            return Err(CalcError::invalid_input(
                "max_input_length",
                self.max_input_length.to_string(),
                "must be at least 1",
            ));
        }
        // 10^places must stay finite and exact enough to be a useful scale
        if self.result_decimal_places > 15 {
            return Err(CalcError::invalid_input(
                "result_decimal_places",
                self.result_decimal_places.to_string(),
                "must be 15 or less",
            ));
        }
        if !self.scientific_threshold.is_finite() || self.scientific_threshold <= 0.0 {
            return Err(CalcError::invalid_input(
                "scientific_threshold",
                self.scientific_threshold.to_string(),
                "must be a positive finite number",
            ));
        }
        // Results up to the threshold get scaled by 10^places for rounding
        let scale = 10f64.powi(self.result_decimal_places as i32);
        if !(self.scientific_threshold * scale).is_finite() {
            return Err(CalcError::invalid_input(
                "scientific_threshold",
                self.scientific_threshold.to_string(),
                "too large to round at result_decimal_places",
            ));
        }
        if self.scientific_fraction_digits > 20 {
            return Err(CalcError::invalid_input(
                "scientific_fraction_digits",
                self.scientific_fraction_digits.to_string(),
                "must be 20 or less",
            ));
        }
        if !self.grouping_threshold.is_finite() || self.grouping_threshold < 0.0 {
            return Err(CalcError::invalid_input(
                "grouping_threshold",
                self.grouping_threshold.to_string(),
                "must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}

/// Save a config to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize config to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp over the target
pub fn save_config(config: &EngineConfig, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(config).map_err(|e| CalcError::serialization(e.to_string()))?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load and validate a config file.
///
/// # Returns
///
/// * `Ok(EngineConfig)` - Successfully loaded config
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::InvalidInput)` - A value failed validation
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_config(path: &Path) -> CalcResult<EngineConfig> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let config = EngineConfig::from_json(&contents).map_err(|e| match e {
        CalcError::SerializationError { reason } => {
            CalcError::serialization(format!("{} ({})", reason, path.display()))
        }
        other => other,
    })?;

    tracing::debug!(path = %path.display(), "loaded engine config");
    Ok(config)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: CONFIG_VERSION.to_string(),
    };

    let file = Version::parse(file_version).map_err(|_| mismatch())?;
    let current = Version::parse(CONFIG_VERSION).map_err(|_| mismatch())?;

    if file.major != current.major {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor may carry fields we don't understand
    if current.major == 0 && file.minor > current.minor {
        return Err(mismatch());
    }

    Ok(())
}
