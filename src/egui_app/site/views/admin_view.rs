use eframe::egui;

use crate::egui_app::site::state::{AdminTab, CompanyForm, ContentForm, SiteAppState};
use crate::egui_app::theme::{colors, styles};
use crate::shared::site::CONTENT_SECTIONS;

pub fn render(ui: &mut egui::Ui, state: &mut SiteAppState) {
    // The dashboard edits live data; reload whenever a mutation finished
    if !state.site.public_loaded && !state.site.is_loading_public {
        let config = state.auth.api_config();
        state.site.load_public(&config);
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("Admin Dashboard").size(24.0).strong(),
                );
                ui.add_space(10.0);

                if let Some((success, text)) = state.site.message() {
                    let text = text.to_string();
                    styles::notice_frame(success).show(ui, |ui| {
                        let color = if success { colors::SUCCESS } else { colors::ERROR };
                        ui.colored_label(color, text);
                    });
                    ui.add_space(8.0);
                }

                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() - 320.0).max(0.0) / 2.0);
                    for (tab, label) in [
                        (AdminTab::Companies, "Companies"),
                        (AdminTab::Content, "Content"),
                        (AdminTab::Config, "Configuration"),
                    ] {
                        if ui
                            .selectable_label(state.site.admin_tab == tab, label)
                            .clicked()
                        {
                            state.site.admin_tab = tab;
                        }
                    }
                });
                ui.add_space(12.0);

                if state.site.is_loading_public {
                    ui.spinner();
                    ui.add_space(8.0);
                }

                match state.site.admin_tab {
                    AdminTab::Companies => render_companies_tab(ui, state),
                    AdminTab::Content => render_content_tab(ui, state),
                    AdminTab::Config => render_config_tab(ui, state),
                }
                ui.add_space(24.0);
            });
        });
}

fn render_companies_tab(ui: &mut egui::Ui, state: &mut SiteAppState) {
    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(460.0);
        let editing = state.site.company_form.editing_id.is_some();
        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new(if editing { "Edit company" } else { "New company" }).strong(),
        );
        ui.add_space(6.0);

        if let Some(ref error) = state.site.company_form_error {
            ui.label(egui::RichText::new(error).color(colors::ERROR));
            ui.add_space(6.0);
        }

        {
            let form = &mut state.site.company_form;
            for (label, value, hint) in [
                ("Name:", &mut form.name, "Company name"),
                ("Category:", &mut form.category, "Fintech, logistics..."),
                ("Website:", &mut form.website, "https://..."),
                ("Logo URL:", &mut form.logo_url, "/uploads/..."),
            ] {
                ui.horizontal(|ui| {
                    ui.add_sized(
                        [100.0, 24.0],
                        egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
                    );
                    ui.add_sized(
                        [320.0, 28.0],
                        egui::TextEdit::singleline(value)
                            .hint_text(hint)
                            .text_color(colors::TEXT_LIGHT),
                    );
                });
                ui.add_space(4.0);
            }
            ui.horizontal(|ui| {
                ui.add_sized(
                    [100.0, 24.0],
                    egui::Label::new(
                        egui::RichText::new("Description:").color(colors::TEXT_SECONDARY),
                    ),
                );
                ui.add_sized(
                    [320.0, 56.0],
                    egui::TextEdit::multiline(&mut form.description)
                        .hint_text("What the company does")
                        .text_color(colors::TEXT_LIGHT),
                );
            });
        }
        ui.add_space(8.0);

        let saving = state.site.is_saving();
        ui.horizontal(|ui| {
            let label = if editing { "Update" } else { "Create" };
            let button =
                egui::Button::new(egui::RichText::new(label).color(colors::TEXT_LIGHT))
                    .fill(colors::BUTTON_PRIMARY);
            let response = ui
                .add_enabled_ui(!saving, |ui| ui.add_sized([120.0, 30.0], button))
                .inner;
            if response.clicked() {
                let config = state.auth.api_config();
                state.site.save_company(&config);
            }
            if editing && ui.button("Cancel").clicked() {
                state.site.company_form = CompanyForm::default();
                state.site.company_form_error = None;
            }
            if saving {
                ui.spinner();
            }
        });
    });

    ui.add_space(12.0);

    let companies = state.site.companies.clone();
    for company in &companies {
        styles::list_item_frame().show(ui, |ui| {
            ui.set_min_width(460.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.colored_label(
                        colors::TEXT_LIGHT,
                        egui::RichText::new(&company.name).strong(),
                    );
                    ui.colored_label(colors::TEXT_SECONDARY, &company.description);
                    if let Some(category) = &company.category {
                        ui.colored_label(colors::ACCENT, category);
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.site.pending_delete.as_deref() == Some(company.id.as_str()) {
                        if ui
                            .button(egui::RichText::new("Confirm delete").color(colors::ERROR))
                            .clicked()
                        {
                            let config = state.auth.api_config();
                            state.site.delete_company(&config, company.id.clone());
                        }
                        if ui.button("Keep").clicked() {
                            state.site.pending_delete = None;
                        }
                    } else {
                        if ui
                            .button(egui::RichText::new("🗑").color(colors::ERROR))
                            .clicked()
                        {
                            state.site.pending_delete = Some(company.id.clone());
                        }
                        if ui.button("✏").clicked() {
                            state.site.company_form = CompanyForm::from_company(company);
                            state.site.company_form_error = None;
                        }
                    }
                });
            });
        });
        ui.add_space(6.0);
    }
}

fn render_content_tab(ui: &mut egui::Ui, state: &mut SiteAppState) {
    let saving = state.site.is_saving();
    let mut save_requested = false;
    let mut cancel_requested = false;

    if let Some(form) = state.site.content_form.as_mut() {
        styles::card_frame().show(ui, |ui| {
            ui.set_min_width(460.0);
            ui.colored_label(
                colors::TEXT_LIGHT,
                egui::RichText::new(format!("Editing: {}", form.section)).strong(),
            );
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.add_sized(
                    [80.0, 24.0],
                    egui::Label::new(egui::RichText::new("Title:").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [340.0, 28.0],
                    egui::TextEdit::singleline(&mut form.title).text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.add_sized(
                    [80.0, 24.0],
                    egui::Label::new(
                        egui::RichText::new("Content:").color(colors::TEXT_SECONDARY),
                    ),
                );
                ui.add_sized(
                    [340.0, 80.0],
                    egui::TextEdit::multiline(&mut form.content).text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let button = egui::Button::new(
                    egui::RichText::new("Save").color(colors::TEXT_LIGHT),
                )
                .fill(colors::BUTTON_PRIMARY);
                let response = ui
                    .add_enabled_ui(!saving, |ui| ui.add_sized([100.0, 30.0], button))
                    .inner;
                if response.clicked() {
                    save_requested = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel_requested = true;
                }
                if saving {
                    ui.spinner();
                }
            });
        });
        ui.add_space(12.0);
    }

    if cancel_requested {
        state.site.content_form = None;
    } else if save_requested {
        let config = state.auth.api_config();
        state.site.save_content(&config);
    }

    for (key, label) in CONTENT_SECTIONS {
        let section = state.site.content.get(key).cloned();
        styles::list_item_frame().show(ui, |ui| {
            ui.set_min_width(460.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new(label).strong());
                    match &section {
                        Some(section) => {
                            if let Some(title) = &section.title {
                                ui.colored_label(colors::TEXT_SECONDARY, format!("Title: {}", title));
                            }
                            ui.colored_label(colors::TEXT_SECONDARY, &section.content);
                        }
                        None => {
                            ui.colored_label(colors::TEXT_SECONDARY, "Not set yet");
                        }
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✏").clicked() {
                        state.site.content_form = Some(ContentForm {
                            section: key.to_string(),
                            title: section
                                .as_ref()
                                .and_then(|s| s.title.clone())
                                .unwrap_or_default(),
                            content: section
                                .as_ref()
                                .map(|s| s.content.clone())
                                .unwrap_or_default(),
                        });
                    }
                });
            });
        });
        ui.add_space(6.0);
    }
}

fn render_config_tab(ui: &mut egui::Ui, state: &mut SiteAppState) {
    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(460.0);
        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new("Site logo").strong(),
        );
        ui.add_space(6.0);

        match &state.site.site_config.logo_url {
            Some(logo_url) => {
                ui.colored_label(colors::TEXT_SECONDARY, format!("Current logo: {}", logo_url));
            }
            None => {
                ui.colored_label(colors::TEXT_SECONDARY, "No logo uploaded yet");
            }
        }
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.add_sized(
                [100.0, 24.0],
                egui::Label::new(egui::RichText::new("Image file:").color(colors::TEXT_SECONDARY)),
            );
            ui.add_sized(
                [280.0, 28.0],
                egui::TextEdit::singleline(&mut state.site.logo_path_input)
                    .hint_text("/path/to/logo.png")
                    .text_color(colors::TEXT_LIGHT),
            );
            let saving = state.site.is_saving();
            let response = ui
                .add_enabled_ui(!saving, |ui| ui.button("Upload"))
                .inner;
            if response.clicked() {
                let config = state.auth.api_config();
                state.site.upload_logo(&config);
            }
            if saving {
                ui.spinner();
            }
        });
    });
}
