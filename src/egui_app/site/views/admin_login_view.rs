use eframe::egui;

use crate::egui_app::site::state::SiteAppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut SiteAppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let top_space = (available_rect.height() - 300.0).max(0.0) / 2.0;
            ui.add_space(top_space);

            styles::card_frame().show(ui, |ui| {
                ui.set_width(380.0);
                ui.vertical_centered(|ui| {
                    ui.colored_label(
                        colors::TEXT_LIGHT,
                        egui::RichText::new("Admin Login").size(24.0).strong(),
                    );
                    ui.colored_label(colors::TEXT_SECONDARY, "Access the management dashboard");
                    ui.add_space(12.0);

                    if let Some(ref error) = state.login_error {
                        ui.label(egui::RichText::new(error).color(colors::ERROR));
                        ui.add_space(6.0);
                    }

                    ui.horizontal(|ui| {
                        ui.add_sized(
                            [80.0, 24.0],
                            egui::Label::new(
                                egui::RichText::new("Email:").color(colors::TEXT_SECONDARY),
                            ),
                        );
                        ui.add_sized(
                            [240.0, 28.0],
                            egui::TextEdit::singleline(&mut state.email_input)
                                .hint_text("admin@example.com")
                                .text_color(colors::TEXT_LIGHT),
                        );
                    });
                    ui.add_space(6.0);

                    ui.horizontal(|ui| {
                        ui.add_sized(
                            [80.0, 24.0],
                            egui::Label::new(
                                egui::RichText::new("Password:").color(colors::TEXT_SECONDARY),
                            ),
                        );
                        ui.add_sized(
                            [206.0, 28.0],
                            egui::TextEdit::singleline(&mut state.password_input)
                                .password(!state.show_password)
                                .text_color(colors::TEXT_LIGHT),
                        );
                        if ui
                            .button(if state.show_password { "🙈" } else { "👁" })
                            .clicked()
                        {
                            state.show_password = !state.show_password;
                        }
                    });
                    ui.add_space(14.0);

                    let pending = state.auth.login_pending();
                    let button = egui::Button::new(
                        egui::RichText::new("Sign In").color(colors::TEXT_LIGHT),
                    )
                    .fill(colors::BUTTON_PRIMARY);
                    let response = ui
                        .add_enabled_ui(!pending, |ui| ui.add_sized([140.0, 32.0], button))
                        .inner;
                    if response.clicked() {
                        state.handle_login();
                    }
                    if pending {
                        ui.add_space(8.0);
                        ui.spinner();
                    }
                });
            });
        });
    });
}
