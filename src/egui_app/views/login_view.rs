use eframe::egui;

use crate::egui_app::route::WalletRoute;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

const DEMO_EMAIL: &str = "usuario@example.com";
const DEMO_PASSWORD: &str = "123456";

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let top_space = (available_rect.height() - 380.0).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - 120.0) / 2.0);
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("Nova").size(32.0).strong(),
                );
                ui.colored_label(
                    colors::ACCENT,
                    egui::RichText::new("Pay").size(32.0).strong(),
                );
            });
            ui.add_space(12.0);

            ui.label(
                egui::RichText::new("Sign in to your NovaPay account")
                    .size(16.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(16.0);

            if let Some(ref error) = state.login_error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(8.0);
            }

            let input_width = 280.0;
            let label_width = 80.0;

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("Email:").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.email_input)
                        .hint_text("you@example.com")
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(
                        egui::RichText::new("Password:").color(colors::TEXT_SECONDARY),
                    ),
                );
                ui.add_sized(
                    [input_width - 34.0, 28.0],
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
            ui.add_space(20.0);

            let pending = state.auth.login_pending();
            ui.horizontal(|ui| {
                let button_width = 140.0;
                ui.add_space((available_rect.width() - button_width) / 2.0);
                let button = egui::Button::new(
                    egui::RichText::new("Sign In").color(colors::TEXT_LIGHT),
                )
                .fill(colors::BUTTON_PRIMARY);
                let response = ui
                    .add_enabled_ui(!pending, |ui| ui.add_sized([button_width, 32.0], button))
                    .inner;
                if response.clicked() {
                    state.handle_login();
                }
            });

            if pending {
                ui.add_space(10.0);
                ui.spinner();
            }

            ui.add_space(18.0);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - 300.0) / 2.0);
                if ui
                    .link(egui::RichText::new("Create account").color(colors::ACCENT))
                    .clicked()
                {
                    state.route = WalletRoute::Register;
                }
                ui.add_space(20.0);
                if ui
                    .link(
                        egui::RichText::new("Forgot password or need help?")
                            .color(colors::ACCENT),
                    )
                    .clicked()
                {
                    state.route = WalletRoute::Help;
                }
            });

            ui.add_space(20.0);

            // Demo account, matching the seeded backend data
            ui.group(|ui| {
                ui.colored_label(colors::TEXT_SECONDARY, "Demo account");
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    format!("{} / {}", DEMO_EMAIL, DEMO_PASSWORD),
                );
                if ui.small_button("Fill in").clicked() {
                    state.email_input = DEMO_EMAIL.to_string();
                    state.password_input = DEMO_PASSWORD.to_string();
                }
            });
        });
    });
}
