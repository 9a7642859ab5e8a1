use eframe::egui;

use crate::egui_app::debug::{DebugCategory, DebugLevel, DebugLogger};
use crate::egui_app::theme::colors;

/// Collapsible in-app log console, shared by both app binaries.
pub fn render_debug_panel(
    ui: &mut egui::Ui,
    logger: &DebugLogger,
    filter: &mut Option<DebugCategory>,
) {
    ui.horizontal(|ui| {
        ui.colored_label(colors::TEXT_LIGHT, "Debug log");
        ui.label(format!("{} entries", logger.count()));

        if ui.small_button("Clear").clicked() {
            logger.clear();
        }

        ui.separator();

        let categories = [
            ("All", None),
            ("Session", Some(DebugCategory::Session)),
            ("Auth", Some(DebugCategory::Auth)),
            ("Api", Some(DebugCategory::Api)),
            ("State", Some(DebugCategory::State)),
            ("Ui", Some(DebugCategory::Ui)),
        ];
        for (label, category) in categories {
            if ui.selectable_label(*filter == category, label).clicked() {
                *filter = category;
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let errors = logger.count_at_level(DebugLevel::Error);
            let warns = logger.count_at_level(DebugLevel::Warn);
            ui.colored_label(colors::ERROR, format!("errors: {}", errors));
            ui.colored_label(colors::TEXT_SECONDARY, format!("warnings: {}", warns));
        });
    });

    ui.separator();

    let entries = match filter {
        Some(category) => logger.get_entries_by_category(*category),
        None => logger.get_entries(),
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .max_height(160.0)
        .show(ui, |ui| {
            for entry in entries.iter().rev().take(200) {
                let color = match entry.level {
                    DebugLevel::Error => colors::ERROR,
                    DebugLevel::Warn => egui::Color32::YELLOW,
                    DebugLevel::Info => colors::TEXT_LIGHT,
                    DebugLevel::Debug => colors::TEXT_SECONDARY,
                };
                ui.colored_label(color, entry.to_string());
            }
        });
}
