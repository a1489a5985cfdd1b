// src/analysis/dataset.rs
use serde::{Serialize, Deserialize};
use crate::config::LaunchRecord;

/// The full launch table plus payload bounds, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
}

impl Dataset {
    /// Returns `None` for an empty table, where the bounds are undefined.
    pub fn new(records: Vec<LaunchRecord>) -> Option<Self> {
        let first = records.first()?.payload_mass_kg;
        let (min_payload, max_payload) = records.iter()
            .map(|r| r.payload_mass_kg)
            .fold((first, first), |(lo, hi), mass| (lo.min(mass), hi.max(mass)));

        Some(Self {
            records,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn full_range(&self) -> PayloadRange {
        PayloadRange::new(self.min_payload, self.max_payload)
    }
}

/// Closed payload interval in kilograms; `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, mass: f64) -> bool {
        mass >= self.low && mass <= self.high
    }
}
