// src/config/dashboard.rs
use config::{Config, ConfigError, Environment, File};
use serde::{Serialize, Deserialize};
use std::path::PathBuf;

use super::launch::ALL_SITES;

/// Prefix for environment overrides, e.g. `SPACEX_DASH_DATA_PATH`.
pub const ENV_PREFIX: &str = "SPACEX_DASH";
/// Names an alternative settings file instead of `./dashboard.*`.
pub const CONFIG_PATH_VAR: &str = "SPACEX_DASH_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

impl SiteOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Startup settings. Built once in `main` and handed to the app read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub slider_step: f64,
    pub site_options: Vec<SiteOption>,
    pub export_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            window_title: "SpaceX Launch Records Dashboard".to_string(),
            window_size: [1100.0, 900.0],
            slider_step: 1000.0,
            site_options: vec![
                SiteOption::new("All Sites", ALL_SITES),
                SiteOption::new("CCAFS LC-40", "CCAFS LC-40"),
                SiteOption::new("VAFB SLC-4E", "VAFB SLC-4E"),
                SiteOption::new("KSC LC-39A", "KSC LC-39A"),
                SiteOption::new("CCAFS SLC-40", "CCAFS SLC-40"),
            ],
            export_dir: None,
        }
    }
}

impl DashboardConfig {
    /// Defaults, then `./dashboard.*` (or the file named by `SPACEX_DASH_CONFIG`),
    /// then `SPACEX_DASH_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let name = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "dashboard".to_string());
        Self::load_from(&name)
    }

    pub fn load_from(name: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let dashboard: DashboardConfig = settings.try_deserialize()?;
        dashboard.validate()?;
        Ok(dashboard)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.site_options.first() {
            None => return Err(ConfigError::Message("site_options must not be empty".to_string())),
            Some(first) if first.value != ALL_SITES => {
                return Err(ConfigError::Message(format!(
                    "first site option must be `{}`, found `{}`",
                    ALL_SITES, first.value
                )));
            }
            _ => {}
        }

        if !(self.slider_step.is_finite() && self.slider_step > 0.0) {
            return Err(ConfigError::Message(format!(
                "slider_step must be positive, found {}",
                self.slider_step
            )));
        }

        Ok(())
    }
}
