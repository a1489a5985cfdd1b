// src/analysis/charts.rs

use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use crate::config::{Outcome, SiteSelection};
use super::dataset::{Dataset, PayloadRange};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(pie) => &pie.title,
            ChartSpec::Scatter(scatter) => &scatter.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Fraction of the whole held by slice `index`, 0.0 for an empty pie.
    pub fn share(&self, index: usize) -> f64 {
        let total = self.total();
        match self.slices.get(index) {
            Some(slice) if total > 0 => slice.value as f64 / total as f64,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
    pub launch_site: String,
    pub booster_version: Option<String>,
    pub flight_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    /// Color categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for point in &self.points {
            if !categories.contains(&point.booster_version_category.as_str()) {
                categories.push(&point.booster_version_category);
            }
        }
        categories
    }

    pub fn points_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ScatterPoint> + 'a {
        self.points.iter().filter(move |p| p.booster_version_category == category)
    }
}

/// Success counts per site for `ALL`, otherwise success/failure counts for one site.
pub fn pie_chart(dataset: &Dataset, site: &SiteSelection) -> PieChart {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    let title = match site {
        SiteSelection::All => {
            for record in dataset.records().iter().filter(|r| r.outcome.is_success()) {
                *counts.entry(record.launch_site.as_str()).or_insert(0) += 1;
            }
            "Success Counts by Launch Site".to_string()
        }
        SiteSelection::Site(name) => {
            for record in dataset.records().iter().filter(|r| &r.launch_site == name) {
                *counts.entry(record.class_label()).or_insert(0) += 1;
            }
            format!("Success and Failure Rates for {}", name)
        }
    };

    PieChart {
        title,
        slices: counts.into_iter()
            .map(|(label, value)| PieSlice { label: label.to_string(), value })
            .collect(),
    }
}

/// Payload vs. outcome for every record inside `range` (and `site`, unless `ALL`).
pub fn scatter_chart(dataset: &Dataset, site: &SiteSelection, range: &PayloadRange) -> ScatterChart {
    let title = match site {
        SiteSelection::All => "Payload and Outcome Scatter Plot for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload and Outcome Scatter Plot for {}", name),
    };

    let points = dataset.records().iter()
        .filter(|r| range.contains(r.payload_mass_kg) && site.matches(&r.launch_site))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_version_category: r.booster_version_category.clone(),
            launch_site: r.launch_site.clone(),
            booster_version: r.booster_version.clone(),
            flight_number: r.flight_number,
        })
        .collect();

    ScatterChart { title, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchRecord;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

    fn four_launches() -> Dataset {
        Dataset::new(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 700.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 500.0, Outcome::Success, "FT"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, Outcome::Success, "B4"),
        ]).unwrap()
    }

    fn value_of(pie: &PieChart, label: &str) -> Option<usize> {
        pie.slices.iter().find(|s| s.label == label).map(|s| s.value)
    }

    fn slice(label: &str, value: usize) -> PieSlice {
        PieSlice { label: label.to_string(), value }
    }

    #[test]
    fn all_sites_pie_counts_successes_per_site() {
        let pie = pie_chart(&four_launches(), &SiteSelection::All);
        assert_eq!(pie.title, "Success Counts by Launch Site");
        assert_eq!(pie.slices, vec![
            slice("CCAFS LC-40", 1),
            slice("KSC LC-39A", 1),
            slice("VAFB SLC-4E", 1),
        ]);
    }

    #[test]
    fn single_site_pie_splits_success_and_failure() {
        let pie = pie_chart(&four_launches(), &SiteSelection::from_value("CCAFS LC-40"));
        assert_eq!(pie.title, "Success and Failure Rates for CCAFS LC-40");
        assert_eq!(pie.slices, vec![slice("Failure", 1), slice("Success", 1)]);
        assert_eq!(pie.share(0), 0.5);
    }

    #[test]
    fn site_without_records_gives_empty_pie() {
        let pie = pie_chart(&four_launches(), &SiteSelection::from_value("CCAFS SLC-40"));
        assert!(pie.slices.is_empty());
        assert_eq!(pie.total(), 0);
        assert_eq!(pie.share(0), 0.0);
    }

    #[test]
    fn site_with_only_successes_has_one_slice() {
        let pie = pie_chart(&four_launches(), &SiteSelection::from_value("KSC LC-39A"));
        assert_eq!(pie.slices, vec![slice("Success", 1)]);
    }

    #[test]
    fn scatter_keeps_points_inside_range() {
        let scatter = scatter_chart(&four_launches(), &SiteSelection::All, &PayloadRange::new(0.0, 600.0));
        assert_eq!(scatter.title, "Payload and Outcome Scatter Plot for All Sites");
        let masses: Vec<f64> = scatter.points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(masses, vec![500.0, 500.0]);
        assert_eq!(scatter.categories(), vec!["v1.0", "FT"]);
    }

    #[test]
    fn scatter_for_one_site_is_titled_by_site() {
        let site = SiteSelection::from_value("CCAFS LC-40");
        let scatter = scatter_chart(&four_launches(), &site, &PayloadRange::new(600.0, 9600.0));
        assert_eq!(scatter.title, "Payload and Outcome Scatter Plot for CCAFS LC-40");
        assert_eq!(scatter.points.len(), 1);
        assert_eq!(scatter.points[0].outcome, Outcome::Failure);
    }

    #[test]
    fn scatter_with_nothing_in_range_is_empty() {
        let site = SiteSelection::from_value("VAFB SLC-4E");
        let scatter = scatter_chart(&four_launches(), &site, &PayloadRange::new(0.0, 1000.0));
        assert!(scatter.points.is_empty());
        assert!(scatter.categories().is_empty());
    }

    fn arb_record() -> impl Strategy<Value = LaunchRecord> {
        (0..SITES.len(), 0.0..10_000.0f64, any::<bool>(), 0..3usize).prop_map(|(site, mass, ok, booster)| {
            let outcome = if ok { Outcome::Success } else { Outcome::Failure };
            LaunchRecord::new(SITES[site], mass.round(), outcome, ["v1.1", "FT", "B5"][booster])
        })
    }

    fn arb_dataset() -> impl Strategy<Value = Dataset> {
        prop::collection::vec(arb_record(), 1..60).prop_map(|records| Dataset::new(records).unwrap())
    }

    fn arb_site() -> impl Strategy<Value = SiteSelection> {
        prop_oneof![
            Just(SiteSelection::All),
            (0..SITES.len()).prop_map(|i| SiteSelection::from_value(SITES[i])),
        ]
    }

    proptest! {
        #[test]
        fn all_pie_has_one_slice_per_successful_site(dataset in arb_dataset()) {
            let pie = pie_chart(&dataset, &SiteSelection::All);
            for site in SITES {
                let expected = dataset.records().iter()
                    .filter(|r| r.launch_site == site && r.outcome.is_success())
                    .count();
                let value = value_of(&pie, site);
                if expected == 0 {
                    prop_assert_eq!(value, None);
                } else {
                    prop_assert_eq!(value, Some(expected));
                }
            }
        }

        #[test]
        fn site_pie_counts_sum_to_site_total(dataset in arb_dataset(), index in 0..SITES.len()) {
            let pie = pie_chart(&dataset, &SiteSelection::from_value(SITES[index]));
            let total = dataset.records().iter().filter(|r| r.launch_site == SITES[index]).count();
            prop_assert!(pie.slices.len() <= 2);
            prop_assert!(pie.slices.iter().all(|s| s.label == "Success" || s.label == "Failure"));
            prop_assert_eq!(pie.total(), total);
        }

        #[test]
        fn scatter_matches_filter_exactly(
            dataset in arb_dataset(),
            site in arb_site(),
            a in 0.0..10_000.0f64,
            b in 0.0..10_000.0f64,
        ) {
            let range = PayloadRange::new(a, b);
            let scatter = scatter_chart(&dataset, &site, &range);
            for point in &scatter.points {
                prop_assert!(range.contains(point.payload_mass_kg));
                prop_assert!(site.matches(&point.launch_site));
            }
            let expected: Vec<f64> = dataset.records().iter()
                .filter(|r| range.contains(r.payload_mass_kg) && site.matches(&r.launch_site))
                .map(|r| r.payload_mass_kg)
                .collect();
            let actual: Vec<f64> = scatter.points.iter().map(|p| p.payload_mass_kg).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn full_range_keeps_every_site_record(dataset in arb_dataset(), site in arb_site()) {
            let scatter = scatter_chart(&dataset, &site, &dataset.full_range());
            let expected = dataset.records().iter().filter(|r| site.matches(&r.launch_site)).count();
            prop_assert_eq!(scatter.points.len(), expected);
        }

        #[test]
        fn callbacks_are_idempotent(dataset in arb_dataset(), site in arb_site()) {
            prop_assert_eq!(pie_chart(&dataset, &site), pie_chart(&dataset, &site));
            let range = dataset.full_range();
            prop_assert_eq!(scatter_chart(&dataset, &site, &range), scatter_chart(&dataset, &site, &range));
        }
    }
}
