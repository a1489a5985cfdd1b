// src/state/mod.rs
use crate::analysis::PayloadRange;
use crate::config::SiteSelection;
use crate::ui::layout;

pub mod subscriptions;

pub use subscriptions::{ReactiveHost, SubscriptionTable};

/// Widget properties a chart can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputField {
    SiteDropdown,
    PayloadSlider,
}

impl InputField {
    pub fn id(self) -> &'static str {
        match self {
            InputField::SiteDropdown => layout::SITE_DROPDOWN,
            InputField::PayloadSlider => layout::PAYLOAD_SLIDER,
        }
    }
}

/// Chart figures driven by the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputField {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

impl OutputField {
    pub fn id(self) -> &'static str {
        match self {
            OutputField::SuccessPieChart => layout::SUCCESS_PIE_CHART,
            OutputField::SuccessPayloadScatterChart => layout::SUCCESS_PAYLOAD_SCATTER_CHART,
        }
    }

    pub fn file_stem(self) -> String {
        self.id().replace('-', "_")
    }
}

// Current widget values, passed explicitly to every chart evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl Selection {
    pub fn new(site: SiteSelection, payload: PayloadRange) -> Self {
        Self { site, payload }
    }
}
