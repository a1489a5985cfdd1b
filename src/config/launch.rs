// src/config/launch.rs
use serde::{Serialize, Deserialize};
use std::fmt;

/// Dropdown value that stands for every launch site at once.
pub const ALL_SITES: &str = "ALL";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the launch table. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
    pub booster_version: Option<String>,
    pub flight_number: Option<u32>,
}

impl LaunchRecord {
    #[cfg(test)]
    pub fn new(launch_site: &str, payload_mass_kg: f64, outcome: Outcome, booster_version_category: &str) -> Self {
        Self {
            launch_site: launch_site.to_string(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.to_string(),
            booster_version: None,
            flight_number: None,
        }
    }

    pub fn class_label(&self) -> &'static str {
        self.outcome.label()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site == launch_site,
        }
    }
}

impl Default for SiteSelection {
    fn default() -> Self {
        SiteSelection::All
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
