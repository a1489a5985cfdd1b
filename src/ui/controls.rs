// src/ui/controls.rs
use eframe::egui;

use crate::analysis::PayloadRange;
use crate::config::SiteSelection;
use crate::ui::layout::{DropdownSpec, RangeSliderSpec};

/// Returns the newly picked site, if the user picked one this frame.
pub fn show_site_dropdown(
    ui: &mut egui::Ui,
    spec: &DropdownSpec,
    current: &SiteSelection,
    search: &mut String,
) -> Option<SiteSelection> {
    let mut picked = None;
    let declared = spec.options.iter().any(|o| o.value == current.value());
    let selected_text = if declared {
        spec.label_for(current.value()).to_string()
    } else {
        spec.placeholder.clone()
    };

    egui::ComboBox::from_id_source(spec.id)
        .selected_text(selected_text)
        .width(ui.available_width() * spec.width_fraction)
        .show_ui(ui, |ui| {
            if spec.searchable {
                ui.add(egui::TextEdit::singleline(&mut *search).hint_text("Search sites"));
                ui.separator();
            }

            for option in spec.matching(search.as_str()) {
                let is_selected = option.value == current.value();
                if ui.selectable_label(is_selected, &option.label).clicked() && !is_selected {
                    picked = Some(SiteSelection::from_value(&option.value));
                }
            }
        });

    if picked.is_some() {
        search.clear();
    }
    picked
}

/// Two handles over the dataset's payload bounds. A dragged handle is snapped
/// and stops at the other handle, so `low <= high` holds between frames.
pub fn show_payload_slider(
    ui: &mut egui::Ui,
    spec: &RangeSliderSpec,
    low: &mut f64,
    high: &mut f64,
) -> Option<PayloadRange> {
    let before = (*low, *high);

    ui.push_id(spec.id, |ui| {
        ui.label("Payload range (Kg):");
        ui.horizontal(|ui| {
            ui.add(egui::Slider::new(&mut *low, spec.min..=spec.max).text("from"));
            ui.add(egui::Slider::new(&mut *high, spec.min..=spec.max).text("to"));
        });

        ui.horizontal(|ui| {
            for (value, label) in &spec.marks {
                ui.small(format!("{}: {}", if *value <= spec.min { "min" } else { "max" }, label));
            }
        });
    });

    if before == (*low, *high) {
        return None;
    }

    if *low != before.0 {
        *low = spec.clamp_low(*low, *high);
    }
    if *high != before.1 {
        *high = spec.clamp_high(*low, *high);
    }
    Some(PayloadRange::new(*low, *high))
}
