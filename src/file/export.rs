// src/file/export.rs

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use csv::Writer;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::analysis::{ChartSpec, PieChart, ScatterChart};
use crate::config::DashboardConfig;

/// Suggested name for an export of `stem`, e.g. `success_pie_chart_20240101_120000.csv`.
pub fn default_file_name(stem: &str, timestamp: DateTime<Local>) -> String {
    format!("{}_{}.csv", stem, timestamp.format("%Y%m%d_%H%M%S"))
}

/// Configured export dir, else the user's download or home directory.
pub fn default_export_dir(config: &DashboardConfig) -> Option<PathBuf> {
    config.export_dir.clone()
        .or_else(dirs::download_dir)
        .or_else(dirs::home_dir)
}

pub fn write_pie_csv<W: io::Write>(writer: W, chart: &PieChart) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(["label", "count"])?;
    for slice in &chart.slices {
        writer.write_record([slice.label.clone(), slice.value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_scatter_csv<W: io::Write>(writer: W, chart: &ScatterChart) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record([
        "payload_mass_kg",
        "outcome",
        "booster_version_category",
        "booster_version",
        "flight_number",
    ])?;

    for point in &chart.points {
        writer.write_record([
            point.payload_mass_kg.to_string(),
            point.outcome.label().to_string(),
            point.booster_version_category.clone(),
            point.booster_version.clone().unwrap_or_default(),
            point.flight_number.map(|n| n.to_string()).unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes `chart` as RON when `path` ends in `.ron`, otherwise as CSV.
pub fn export_chart(path: &Path, chart: &ChartSpec) -> Result<()> {
    let is_ron = path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("ron"));

    if is_ron {
        let content = ron::ser::to_string_pretty(
            chart,
            ron::ser::PrettyConfig::new()
                .depth_limit(4)
                .separate_tuple_members(true)
        )?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write chart file: {}", path.display()))?;
    } else {
        let file = fs::File::create(path)
            .with_context(|| format!("Failed to create export file: {}", path.display()))?;
        match chart {
            ChartSpec::Pie(pie) => write_pie_csv(file, pie)?,
            ChartSpec::Scatter(scatter) => write_scatter_csv(file, scatter)?,
        }
    }

    info!(path = %path.display(), title = chart.title(), "exported chart");
    Ok(())
}
