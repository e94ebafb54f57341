//! Program settings loaded from a TOML file.
use crate::inventory::{AnalysisPlan, InventoryConfig};
use crate::log::DEFAULT_LOG_LEVEL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default log level for program
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Program settings from config file.
///
/// Every field has a default, so an empty file (or no file at all) gives the
/// reference analysis: demand N(100, 20), lead time 2 days, holding cost 2,
/// shortage cost 10, 95% service level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// The default program log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub analysis: AnalysisPlan,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            inventory: InventoryConfig::default(),
            analysis: AnalysisPlan::default(),
        }
    }
}

impl Settings {
    /// Read settings from `file_path`, or use defaults if no path is given.
    ///
    /// # Returns
    ///
    /// The program settings as a `Settings` struct or an error if the file is
    /// missing or invalid
    pub fn load(file_path: Option<&Path>) -> Result<Settings> {
        let Some(file_path) = file_path else {
            return Ok(Settings::default());
        };

        let toml_str = fs::read_to_string(file_path)
            .with_context(|| format!("Could not read settings file {}", file_path.display()))?;
        let settings: Settings = toml::from_str(&toml_str)
            .with_context(|| format!("Could not parse settings file {}", file_path.display()))?;

        settings.inventory.validate()?;
        settings.analysis.level_grid.validate()?;
        settings.analysis.service_grid.validate()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let file = settings_file("");
        assert_eq!(Settings::load(Some(file.path())).unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_overrides_fields() {
        let file = settings_file(
            "log_level = \"debug\"\n\
             [inventory]\n\
             lead_time_days = 4.0\n\
             [analysis]\n\
             seed = 7\n\
             [analysis.level_grid]\n\
             start = 100.0\n\
             end = 200.0\n\
             step = 10.0\n",
        );
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.inventory.lead_time_days, 4.0);
        assert_eq!(settings.inventory.demand_mean, 100.0);
        assert_eq!(settings.analysis.seed, 7);
        assert_eq!(settings.analysis.sample_count, 1000);
        assert_eq!(settings.analysis.level_grid.points().unwrap().len(), 11);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = settings_file("[inventory]\ndemand_std_dev = -1.0\n");
        assert!(Settings::load(Some(file.path())).is_err());

        let file = settings_file("[analysis.service_grid]\nstart = 0.9\nend = 0.8\nstep = 0.01\n");
        assert!(Settings::load(Some(file.path())).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/no/such/settings.toml"))).is_err());
    }
}
