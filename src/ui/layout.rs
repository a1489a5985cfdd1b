// src/ui/layout.rs
use eframe::egui::Color32;

use crate::analysis::{Dataset, PayloadRange};
use crate::config::{DashboardConfig, SiteOption, SiteSelection};
use crate::state::Selection;

pub const SITE_DROPDOWN: &str = "site-dropdown";
pub const PAYLOAD_SLIDER: &str = "payload-slider";
pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";
pub const SUCCESS_PAYLOAD_SCATTER_CHART: &str = "success-payload-scatter-chart";
pub const OUTPUT_CONTAINER: &str = "output-container";

#[derive(Debug, Clone, PartialEq)]
pub struct TitleSpec {
    pub text: String,
    pub color: Color32,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownSpec {
    pub id: &'static str,
    pub options: Vec<SiteOption>,
    pub placeholder: String,
    pub value: SiteSelection,
    pub searchable: bool,
    pub width_fraction: f32,
}

impl DropdownSpec {
    /// Display label for `value`, the raw value if it is not a declared option.
    pub fn label_for<'a>(&'a self, value: &'a str) -> &'a str {
        self.options.iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
            .unwrap_or(value)
    }

    /// Options whose label or value contains `query`, ignoring case.
    pub fn matching(&self, query: &str) -> Vec<&SiteOption> {
        let query = query.trim().to_lowercase();
        self.options.iter()
            .filter(|o| {
                query.is_empty()
                    || o.label.to_lowercase().contains(&query)
                    || o.value.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeSliderSpec {
    pub id: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<(f64, String)>,
    pub value: PayloadRange,
}

impl RangeSliderSpec {
    /// Snaps to `min + k * step` inside the bounds; both bounds stay reachable.
    pub fn snap(&self, value: f64) -> f64 {
        if value <= self.min {
            return self.min;
        }
        if value >= self.max {
            return self.max;
        }
        let snapped = self.min + ((value - self.min) / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }

    /// Snapped lower handle, held at or below `high`.
    pub fn clamp_low(&self, low: f64, high: f64) -> f64 {
        self.snap(low).min(high)
    }

    /// Snapped upper handle, held at or above `low`.
    pub fn clamp_high(&self, low: f64, high: f64) -> f64 {
        self.snap(high).max(low)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphSpec {
    pub id: &'static str,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSpec {
    pub id: &'static str,
    pub wrap: bool,
}

/// The static widget tree, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub title: TitleSpec,
    pub site_label: String,
    pub dropdown: DropdownSpec,
    pub pie: GraphSpec,
    pub slider: RangeSliderSpec,
    pub scatter: GraphSpec,
    pub output_container: ContainerSpec,
}

impl Layout {
    pub fn build(dataset: &Dataset, config: &DashboardConfig) -> Self {
        let (min, max) = (dataset.min_payload(), dataset.max_payload());

        Self {
            title: TitleSpec {
                text: "SpaceX Launch Records Dashboard".to_string(),
                color: Color32::from_rgb(0x50, 0x3D, 0x36),
                size: 40.0,
            },
            site_label: "Select Launch Site:".to_string(),
            dropdown: DropdownSpec {
                id: SITE_DROPDOWN,
                options: config.site_options.clone(),
                placeholder: "Select a Site".to_string(),
                value: SiteSelection::All,
                searchable: true,
                width_fraction: 0.8,
            },
            pie: GraphSpec {
                id: SUCCESS_PIE_CHART,
                height: 320.0,
            },
            slider: RangeSliderSpec {
                id: PAYLOAD_SLIDER,
                min,
                max,
                step: config.slider_step,
                marks: vec![
                    (min, format!("{}", min as i64)),
                    (max, format!("{}", max as i64)),
                ],
                value: dataset.full_range(),
            },
            scatter: GraphSpec {
                id: SUCCESS_PAYLOAD_SCATTER_CHART,
                height: 320.0,
            },
            output_container: ContainerSpec {
                id: OUTPUT_CONTAINER,
                wrap: true,
            },
        }
    }

    pub fn initial_selection(&self) -> Selection {
        Selection::new(self.dropdown.value.clone(), self.slider.value)
    }
}
