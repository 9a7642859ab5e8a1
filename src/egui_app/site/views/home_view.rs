use eframe::egui;

use crate::egui_app::site::state::SiteAppState;
use crate::egui_app::theme::{colors, styles};

/// The four pillars listed under the differentials section
const DIFFERENTIALS: [(&str, &str, &str); 4] = [
    ("✨", "Innovation", "Leading-edge technology"),
    ("🛡", "Accessibility", "Solutions for everyone"),
    ("⚡", "Technology", "Advanced tooling"),
    ("🌍", "Sustainable future", "A long-term vision"),
];

pub fn render(ui: &mut egui::Ui, state: &mut SiteAppState) {
    if !state.site.public_loaded && !state.site.is_loading_public {
        let config = state.auth.api_config();
        state.site.load_public(&config);
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);

                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() - 320.0).max(0.0) / 2.0);
                    ui.colored_label(
                        colors::TEXT_LIGHT,
                        egui::RichText::new("Nova").size(52.0).strong(),
                    );
                    ui.colored_label(
                        colors::ACCENT,
                        egui::RichText::new("Holdings").size(52.0).strong(),
                    );
                });
                ui.add_space(8.0);

                let hero = state
                    .site
                    .section("hero")
                    .map(|section| section.content.clone())
                    .unwrap_or_else(|| "The future of payments starts here".to_string());
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    egui::RichText::new(hero).size(20.0),
                );

                if state.site.is_loading_public {
                    ui.add_space(20.0);
                    ui.spinner();
                }

                ui.add_space(40.0);

                // About
                let about_title = state
                    .site
                    .section("about")
                    .and_then(|section| section.title.clone())
                    .unwrap_or_else(|| "About us".to_string());
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new(about_title).size(28.0).strong(),
                );
                ui.add_space(8.0);
                if let Some(about) = state.site.section("about") {
                    let text = about.content.clone();
                    styles::card_frame().show(ui, |ui| {
                        ui.set_max_width(620.0);
                        ui.colored_label(colors::TEXT_SECONDARY, text);
                    });
                }

                ui.add_space(32.0);

                // Companies
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("Our companies").size(28.0).strong(),
                );
                ui.add_space(12.0);
                if state.site.companies.is_empty() && state.site.public_loaded {
                    ui.colored_label(colors::TEXT_SECONDARY, "No companies published yet");
                }
                let companies = state.site.companies.clone();
                ui.horizontal_wrapped(|ui| {
                    ui.add_space((ui.available_width() - 640.0).max(0.0) / 2.0);
                    for company in &companies {
                        styles::card_frame().show(ui, |ui| {
                            ui.set_width(280.0);
                            ui.colored_label(
                                colors::TEXT_LIGHT,
                                egui::RichText::new(&company.name).size(18.0).strong(),
                            );
                            ui.colored_label(colors::TEXT_SECONDARY, &company.description);
                            if let Some(category) = &company.category {
                                ui.colored_label(colors::ACCENT, format!("· {}", category));
                            }
                            if let Some(website) = &company.website {
                                ui.hyperlink_to("Visit site", website);
                            }
                        });
                        ui.add_space(8.0);
                    }
                });

                ui.add_space(32.0);

                // Differentials
                let differentials_title = state
                    .site
                    .section("differentials")
                    .and_then(|section| section.title.clone())
                    .unwrap_or_else(|| "Our differentials".to_string());
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new(differentials_title).size(28.0).strong(),
                );
                ui.add_space(12.0);
                ui.horizontal_wrapped(|ui| {
                    ui.add_space((ui.available_width() - 640.0).max(0.0) / 2.0);
                    for (icon, title, description) in DIFFERENTIALS {
                        styles::card_frame().show(ui, |ui| {
                            ui.set_width(140.0);
                            ui.vertical_centered(|ui| {
                                ui.colored_label(colors::PRIMARY, egui::RichText::new(icon).size(24.0));
                                ui.colored_label(
                                    colors::TEXT_LIGHT,
                                    egui::RichText::new(title).strong(),
                                );
                                ui.colored_label(colors::TEXT_SECONDARY, description);
                            });
                        });
                        ui.add_space(8.0);
                    }
                });

                ui.add_space(40.0);
                ui.separator();

                let footer = state
                    .site
                    .section("footer")
                    .map(|section| section.content.clone())
                    .unwrap_or_else(|| "© Nova Holdings".to_string());
                ui.colored_label(colors::TEXT_SECONDARY, footer);
                ui.add_space(24.0);
            });
        });
}
