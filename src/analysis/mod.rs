// src/analysis/mod.rs
pub mod charts;
pub mod dataset;

// Re-export commonly used types
pub use charts::{
    pie_chart,
    scatter_chart,
    ChartSpec,
    PieChart,
    ScatterChart
};
pub use dataset::{Dataset, PayloadRange};
