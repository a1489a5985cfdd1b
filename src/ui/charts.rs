// src/ui/charts.rs
use eframe::egui::{self, Color32, Pos2};
use egui_plot::{Legend, Plot, Points};
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::analysis::{PieChart, ScatterChart};
use crate::analysis::charts::ScatterPoint;
use crate::config::Outcome;
use crate::ui::layout::GraphSpec;

// Qualitative palette shared by both charts
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x63, 0x6E, 0xFA),
    Color32::from_rgb(0xEF, 0x55, 0x3B),
    Color32::from_rgb(0x00, 0xCC, 0x96),
    Color32::from_rgb(0xAB, 0x63, 0xFA),
    Color32::from_rgb(0xFF, 0xA1, 0x5A),
    Color32::from_rgb(0x19, 0xD3, 0xF3),
    Color32::from_rgb(0xFF, 0x66, 0x92),
    Color32::from_rgb(0xB6, 0xE8, 0x80),
    Color32::from_rgb(0xFF, 0x97, 0xFF),
    Color32::from_rgb(0xFE, 0xCB, 0x52),
];

/// Pie slices narrower than this share carry no percentage label.
pub const LABEL_MIN_SHARE: f32 = 0.04;

pub fn palette_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// y coordinate of an outcome on the scatter plot.
pub fn outcome_axis(outcome: Outcome) -> f64 {
    outcome.class() as f64
}

pub fn outcome_axis_label(y: f64) -> String {
    if (y - outcome_axis(Outcome::Success)).abs() < 1e-6 {
        Outcome::Success.label().to_string()
    } else if (y - outcome_axis(Outcome::Failure)).abs() < 1e-6 {
        Outcome::Failure.label().to_string()
    } else {
        String::new()
    }
}

/// Index of the slice under `angle`, measured clockwise from twelve o'clock.
pub fn slice_at(chart: &PieChart, angle: f32) -> Option<usize> {
    let angle = angle.rem_euclid(TAU);
    let mut start = 0.0;
    for index in 0..chart.slices.len() {
        let end = start + chart.share(index) as f32 * TAU;
        if angle >= start && angle < end {
            return Some(index);
        }
        start = end;
    }
    None
}

fn point_text(point: &ScatterPoint) -> String {
    let mut text = format!(
        "Payload Mass (kg): {}\nOutcome: {}\nBooster: {}",
        point.payload_mass_kg, point.outcome, point.booster_version_category
    );
    if let Some(version) = &point.booster_version {
        text.push_str(&format!("\nVersion: {}", version));
    }
    if let Some(flight) = point.flight_number {
        text.push_str(&format!("\nFlight: {}", flight));
    }
    text
}

/// Hover text for the `category` series at (`x`, `y`). Launches drawn on the
/// same spot are listed together.
pub fn hover_text(chart: &ScatterChart, category: &str, x: f64, y: f64) -> Option<String> {
    let texts: Vec<String> = chart.points_in(category)
        .filter(|p| p.payload_mass_kg == x && outcome_axis(p.outcome) == y)
        .map(point_text)
        .collect();

    if texts.is_empty() {
        None
    } else {
        Some(texts.join("\n\n"))
    }
}

pub fn show_pie_chart(ui: &mut egui::Ui, spec: &GraphSpec, chart: &PieChart) {
    ui.push_id(spec.id, |ui| {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.heading(&chart.title);
            ui.add_space(4.0);

            if chart.slices.is_empty() {
                ui.allocate_ui(egui::vec2(ui.available_width(), spec.height), |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label("No launches match the current selection");
                    });
                });
                return;
            }

            ui.horizontal(|ui| {
                let (response, painter) = ui.allocate_painter(
                    egui::vec2(spec.height, spec.height),
                    egui::Sense::hover(),
                );
                let center = response.rect.center();
                let radius = response.rect.width().min(response.rect.height()) * 0.45;

                let mut start = -FRAC_PI_2;
                for index in 0..chart.slices.len() {
                    let share = chart.share(index) as f32;
                    let sweep = share * TAU;
                    paint_wedge(&painter, center, radius, start, sweep, palette_color(index));

                    if share >= LABEL_MIN_SHARE {
                        let mid = start + sweep / 2.0;
                        painter.text(
                            center + egui::vec2(mid.cos(), mid.sin()) * radius * 0.65,
                            egui::Align2::CENTER_CENTER,
                            format!("{:.1}%", share * 100.0),
                            egui::FontId::proportional(13.0),
                            Color32::WHITE,
                        );
                    }
                    start += sweep;
                }

                if let Some(pos) = response.hover_pos() {
                    let offset = pos - center;
                    if offset.length() <= radius {
                        let angle = offset.y.atan2(offset.x) + FRAC_PI_2;
                        if let Some(slice) = slice_at(chart, angle).and_then(|i| chart.slices.get(i)) {
                            response.on_hover_text(format!("{}: {}", slice.label, slice.value));
                        }
                    }
                }

                ui.vertical(|ui| {
                    for (index, slice) in chart.slices.iter().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("■").color(palette_color(index)));
                            ui.label(format!("{} ({})", slice.label, slice.value));
                        });
                    }
                });
            });
        });
    });
}

fn paint_wedge(painter: &egui::Painter, center: Pos2, radius: f32, start: f32, sweep: f32, fill: Color32) {
    let segments = ((sweep / 0.05).ceil() as usize).max(1);
    let step = sweep / segments as f32;
    let point = |angle: f32| center + egui::vec2(angle.cos(), angle.sin()) * radius;

    for segment in 0..segments {
        let a = start + step * segment as f32;
        painter.add(egui::Shape::convex_polygon(
            vec![center, point(a), point(a + step)],
            fill,
            egui::Stroke::NONE,
        ));
    }

    // Separator between neighbouring slices
    painter.line_segment([center, point(start)], egui::Stroke::new(1.5, Color32::WHITE));
}

pub fn show_scatter_chart(ui: &mut egui::Ui, spec: &GraphSpec, chart: &ScatterChart) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading(&chart.title);
        ui.add_space(4.0);

        let hovered = chart.clone();
        let plot = Plot::new(spec.id)
            .height(spec.height)
            .legend(Legend::default())
            .include_y(-0.5)
            .include_y(1.5)
            .allow_scroll(false)
            .y_axis_formatter(|y, _max_chars, _range| outcome_axis_label(y))
            .label_formatter(move |name, value| {
                hover_text(&hovered, name, value.x, value.y)
                    .unwrap_or_else(|| format!("Payload Mass (kg): {:.0}", value.x))
            });

        plot.show(ui, |plot_ui| {
            for (index, category) in chart.categories().into_iter().enumerate() {
                let points: Vec<[f64; 2]> = chart.points_in(category)
                    .map(|p| [p.payload_mass_kg, outcome_axis(p.outcome)])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(palette_color(index))
                        .radius(4.0),
                );
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::charts::PieSlice;

    fn early_failure(flight: u32, category: &str) -> ScatterPoint {
        ScatterPoint {
            payload_mass_kg: 0.0,
            outcome: Outcome::Failure,
            booster_version_category: category.to_string(),
            launch_site: "CCAFS LC-40".to_string(),
            booster_version: None,
            flight_number: Some(flight),
        }
    }

    #[test]
    fn axis_labels_name_the_outcomes() {
        assert_eq!(outcome_axis_label(1.0), "Success");
        assert_eq!(outcome_axis_label(0.0), "Failure");
        assert_eq!(outcome_axis_label(0.5), "");
    }

    #[test]
    fn hover_angle_finds_slice() {
        let chart = PieChart {
            title: String::new(),
            slices: vec![
                PieSlice { label: "Failure".to_string(), value: 1 },
                PieSlice { label: "Success".to_string(), value: 3 },
            ],
        };
        assert_eq!(slice_at(&chart, 0.1), Some(0));
        assert_eq!(slice_at(&chart, TAU * 0.5), Some(1));
        assert_eq!(slice_at(&chart, -0.1), Some(1));
    }

    #[test]
    fn coincident_launches_share_one_hover() {
        let chart = ScatterChart {
            title: String::new(),
            points: vec![early_failure(1, "v1.0"), early_failure(2, "v1.0"), early_failure(3, "v1.1")],
        };

        let text = hover_text(&chart, "v1.0", 0.0, 0.0).unwrap();
        assert!(text.contains("Flight: 1"));
        assert!(text.contains("Flight: 2"));
        assert!(!text.contains("Flight: 3"));

        assert_eq!(hover_text(&chart, "v1.0", 0.0, 1.0), None);
        assert_eq!(hover_text(&chart, "FT", 0.0, 0.0), None);
    }

    #[test]
    fn small_slices_fall_below_label_share() {
        let chart = PieChart {
            title: String::new(),
            slices: vec![
                PieSlice { label: "CCAFS LC-40".to_string(), value: 1 },
                PieSlice { label: "KSC LC-39A".to_string(), value: 30 },
            ],
        };
        assert!((chart.share(0) as f32) < LABEL_MIN_SHARE);
        assert!((chart.share(1) as f32) >= LABEL_MIN_SHARE);
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(palette_color(0), palette_color(PALETTE.len()));
    }
}
