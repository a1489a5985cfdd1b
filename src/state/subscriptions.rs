// src/state/subscriptions.rs
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::analysis::{pie_chart, scatter_chart, ChartSpec, Dataset, PayloadRange};
use crate::config::SiteSelection;
use super::{InputField, OutputField, Selection};

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub output: OutputField,
    pub inputs: Vec<InputField>,
}

/// Output field -> the input fields it is recomputed from.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionTable {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionTable {
    pub fn new(subscriptions: Vec<Subscription>) -> Self {
        Self { subscriptions }
    }

    /// Pie follows the dropdown; scatter follows dropdown and slider.
    pub fn dashboard() -> Self {
        Self::new(vec![
            Subscription {
                output: OutputField::SuccessPieChart,
                inputs: vec![InputField::SiteDropdown],
            },
            Subscription {
                output: OutputField::SuccessPayloadScatterChart,
                inputs: vec![InputField::SiteDropdown, InputField::PayloadSlider],
            },
        ])
    }

    pub fn outputs(&self) -> impl Iterator<Item = OutputField> + '_ {
        self.subscriptions.iter().map(|s| s.output)
    }

    pub fn dependents(&self, changed: InputField) -> Vec<OutputField> {
        self.subscriptions.iter()
            .filter(|s| s.inputs.contains(&changed))
            .map(|s| s.output)
            .collect()
    }
}

/// Holds the current selection and the latest figure for every output.
/// Changing an input re-evaluates exactly the outputs subscribed to it.
#[derive(Debug)]
pub struct ReactiveHost {
    dataset: Arc<Dataset>,
    table: SubscriptionTable,
    selection: Selection,
    figures: BTreeMap<OutputField, ChartSpec>,
}

impl ReactiveHost {
    pub fn new(dataset: Arc<Dataset>, table: SubscriptionTable, selection: Selection) -> Self {
        let figures = table.outputs()
            .map(|output| (output, evaluate(&dataset, output, &selection)))
            .collect();

        Self {
            dataset,
            table,
            selection,
            figures,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn figure(&self, output: OutputField) -> Option<&ChartSpec> {
        self.figures.get(&output)
    }

    /// Returns the outputs that were re-evaluated, empty if `site` is unchanged.
    pub fn set_site(&mut self, site: SiteSelection) -> Vec<OutputField> {
        if self.selection.site == site {
            return Vec::new();
        }
        self.selection.site = site;
        self.propagate(InputField::SiteDropdown)
    }

    pub fn set_payload_range(&mut self, payload: PayloadRange) -> Vec<OutputField> {
        if self.selection.payload == payload {
            return Vec::new();
        }
        self.selection.payload = payload;
        self.propagate(InputField::PayloadSlider)
    }

    fn propagate(&mut self, changed: InputField) -> Vec<OutputField> {
        let outputs = self.table.dependents(changed);
        debug!(
            input = changed.id(),
            site = %self.selection.site,
            low = self.selection.payload.low(),
            high = self.selection.payload.high(),
            outputs = ?outputs,
            "input changed"
        );

        for &output in &outputs {
            let figure = evaluate(&self.dataset, output, &self.selection);
            self.figures.insert(output, figure);
        }
        outputs
    }
}

fn evaluate(dataset: &Dataset, output: OutputField, selection: &Selection) -> ChartSpec {
    match output {
        OutputField::SuccessPieChart => ChartSpec::Pie(pie_chart(dataset, &selection.site)),
        OutputField::SuccessPayloadScatterChart => {
            ChartSpec::Scatter(scatter_chart(dataset, &selection.site, &selection.payload))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LaunchRecord, Outcome};
    use pretty_assertions::assert_eq;

    fn host() -> ReactiveHost {
        let dataset = Dataset::new(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 700.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 500.0, Outcome::Success, "FT"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, Outcome::Success, "B4"),
        ]).unwrap();
        let selection = Selection::new(SiteSelection::All, dataset.full_range());
        ReactiveHost::new(Arc::new(dataset), SubscriptionTable::dashboard(), selection)
    }

    fn scatter_len(host: &ReactiveHost) -> usize {
        match host.figure(OutputField::SuccessPayloadScatterChart) {
            Some(ChartSpec::Scatter(scatter)) => scatter.points.len(),
            other => panic!("expected scatter figure, got {:?}", other),
        }
    }

    #[test]
    fn dependents_follow_declared_inputs() {
        let table = SubscriptionTable::dashboard();
        assert_eq!(
            table.dependents(InputField::SiteDropdown),
            vec![OutputField::SuccessPieChart, OutputField::SuccessPayloadScatterChart]
        );
        assert_eq!(table.dependents(InputField::PayloadSlider), vec![OutputField::SuccessPayloadScatterChart]);
    }

    #[test]
    fn every_output_is_evaluated_on_start() {
        let host = host();
        assert_eq!(
            host.figure(OutputField::SuccessPieChart).map(ChartSpec::title),
            Some("Success Counts by Launch Site")
        );
        assert_eq!(scatter_len(&host), 4);
    }

    #[test]
    fn slider_change_leaves_pie_untouched() {
        let mut host = host();
        let pie_before = host.figure(OutputField::SuccessPieChart).cloned();

        let updated = host.set_payload_range(PayloadRange::new(0.0, 600.0));
        assert_eq!(updated, vec![OutputField::SuccessPayloadScatterChart]);
        assert_eq!(scatter_len(&host), 2);
        assert_eq!(host.figure(OutputField::SuccessPieChart).cloned(), pie_before);
    }

    #[test]
    fn site_change_updates_both_charts_with_current_range() {
        let mut host = host();
        host.set_payload_range(PayloadRange::new(0.0, 600.0));

        let updated = host.set_site(SiteSelection::from_value("CCAFS LC-40"));
        assert_eq!(updated.len(), 2);
        assert_eq!(
            host.figure(OutputField::SuccessPieChart).map(ChartSpec::title),
            Some("Success and Failure Rates for CCAFS LC-40")
        );
        assert_eq!(scatter_len(&host), 1);
    }

    #[test]
    fn unchanged_value_triggers_nothing() {
        let mut host = host();
        assert!(host.set_site(SiteSelection::All).is_empty());
        assert!(host.set_payload_range(PayloadRange::new(500.0, 9600.0)).is_empty());
    }
}
