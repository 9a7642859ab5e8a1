use eframe::egui;

use crate::egui_app::masks;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::wallet::SettingsTab;
use crate::shared::user::TwoFactorMethod;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Settings are read once per visit to the screen
    if !state.wallet.security_loaded {
        let config = state.auth.api_config();
        state.wallet.load_security_settings(&config);
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("Account Settings").size(24.0).strong(),
                );
                ui.add_space(12.0);

                if let Some((success, text)) = state.wallet.message() {
                    let text = text.to_string();
                    styles::notice_frame(success).show(ui, |ui| {
                        let color = if success { colors::SUCCESS } else { colors::ERROR };
                        ui.colored_label(color, text);
                    });
                    ui.add_space(8.0);
                }

                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() - 360.0).max(0.0) / 2.0);
                    for (tab, label) in [
                        (SettingsTab::Personal, "Personal data"),
                        (SettingsTab::Security, "Security"),
                        (SettingsTab::Biometric, "Biometrics"),
                    ] {
                        if ui
                            .selectable_label(state.wallet.settings_tab == tab, label)
                            .clicked()
                        {
                            state.wallet.settings_tab = tab;
                        }
                    }
                });
                ui.add_space(12.0);

                match state.wallet.settings_tab {
                    SettingsTab::Personal => render_personal_tab(ui, state),
                    SettingsTab::Security => render_security_tab(ui, state),
                    SettingsTab::Biometric => render_biometric_tab(ui, state),
                }
                ui.add_space(24.0);
            });
        });
}

fn render_personal_tab(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(420.0);
        let form = &mut state.wallet.personal;

        ui.horizontal(|ui| {
            ui.add_sized(
                [110.0, 24.0],
                egui::Label::new(egui::RichText::new("Phone:").color(colors::TEXT_SECONDARY)),
            );
            let response = ui.add_sized(
                [260.0, 28.0],
                egui::TextEdit::singleline(&mut form.phone)
                    .hint_text("(11) 99999-9999")
                    .text_color(colors::TEXT_LIGHT),
            );
            if response.changed() {
                form.phone = masks::phone(&form.phone);
            }
        });
        ui.add_space(6.0);

        for (label, value, hint) in [
            ("Address:", &mut form.address, "Rua das Flores, 123"),
            ("City:", &mut form.city, "Sao Paulo"),
            ("State:", &mut form.state, "SP"),
        ] {
            ui.horizontal(|ui| {
                ui.add_sized(
                    [110.0, 24.0],
                    egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [260.0, 28.0],
                    egui::TextEdit::singleline(value)
                        .hint_text(hint)
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(6.0);
        }

        ui.separator();
        ui.colored_label(colors::TEXT_SECONDARY, "Confirm your password to save");
        ui.horizontal(|ui| {
            ui.add_sized(
                [110.0, 24.0],
                egui::Label::new(egui::RichText::new("Password:").color(colors::TEXT_SECONDARY)),
            );
            ui.add_sized(
                [226.0, 28.0],
                egui::TextEdit::singleline(&mut form.password_confirmation)
                    .password(!form.show_password)
                    .hint_text("Your current password")
                    .text_color(colors::TEXT_LIGHT),
            );
            if ui
                .button(if form.show_password { "🙈" } else { "👁" })
                .clicked()
            {
                form.show_password = !form.show_password;
            }
        });
        ui.add_space(10.0);

        let saving = state.wallet.is_saving();
        let button = egui::Button::new(
            egui::RichText::new("Save changes").color(colors::TEXT_LIGHT),
        )
        .fill(colors::BUTTON_PRIMARY);
        let response = ui
            .add_enabled_ui(!saving, |ui| ui.add_sized([160.0, 30.0], button))
            .inner;
        if response.clicked() {
            let config = state.auth.api_config();
            state.wallet.save_personal_data(&config);
        }
        if saving {
            ui.spinner();
        }
    });
}

fn render_security_tab(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(420.0);
        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new("🛡 Two-factor authentication").strong(),
        );
        ui.add_space(8.0);

        let saving = state.wallet.is_saving();

        if !state.wallet.security.two_factor_enabled {
            ui.colored_label(
                colors::TEXT_SECONDARY,
                "Add an extra layer of protection to your account.",
            );
            ui.add_space(8.0);

            ui.add_enabled_ui(!saving, |ui| {
                if ui.button("📱 Use an authenticator app").clicked() {
                    let config = state.auth.api_config();
                    state
                        .wallet
                        .toggle_two_factor(&config, true, Some(TwoFactorMethod::Totp));
                }
                if ui.button("✉ Use email codes").clicked() {
                    let config = state.auth.api_config();
                    state
                        .wallet
                        .toggle_two_factor(&config, true, Some(TwoFactorMethod::Email));
                }
            });
        } else {
            let method = state
                .wallet
                .security
                .two_factor_method
                .map(|m| m.label())
                .unwrap_or("enabled");
            ui.horizontal(|ui| {
                ui.colored_label(colors::SUCCESS, format!("✔ 2FA active ({})", method));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let response = ui
                        .add_enabled_ui(!saving, |ui| {
                            ui.button(egui::RichText::new("Disable").color(colors::ERROR))
                        })
                        .inner;
                    if response.clicked() {
                        let config = state.auth.api_config();
                        state.wallet.toggle_two_factor(&config, false, None);
                    }
                });
            });

            if state.wallet.totp_enrolling {
                ui.add_space(8.0);
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    "Add NovaPay to your authenticator app, then confirm with the 6-digit code.",
                );
            }

            if state.wallet.security.two_factor_method == Some(TwoFactorMethod::Email) {
                ui.add_space(8.0);
                let response = ui
                    .add_enabled_ui(!saving, |ui| ui.button("Send a test code"))
                    .inner;
                if response.clicked() {
                    let config = state.auth.api_config();
                    state.wallet.send_email_code(&config);
                }
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add_sized(
                    [160.0, 28.0],
                    egui::TextEdit::singleline(&mut state.wallet.code_input)
                        .hint_text("Enter the code")
                        .text_color(colors::TEXT_LIGHT),
                );
                let enabled = !saving && !state.wallet.code_input.is_empty();
                let response = ui
                    .add_enabled_ui(enabled, |ui| ui.button("Verify"))
                    .inner;
                if response.clicked() {
                    let config = state.auth.api_config();
                    state.wallet.verify_code(&config);
                }
            });
        }

        if saving {
            ui.add_space(6.0);
            ui.spinner();
        }
    });
}

fn render_biometric_tab(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(420.0);
        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new("☝ Biometric sign-in").strong(),
        );
        ui.add_space(6.0);
        ui.colored_label(
            colors::TEXT_SECONDARY,
            "Use your fingerprint, Face ID or Windows Hello to sign in quickly.",
        );
        ui.add_space(10.0);

        let enabled_now = state.wallet.security.biometric_enabled;
        ui.horizontal(|ui| {
            ui.colored_label(
                colors::TEXT_LIGHT,
                if enabled_now { "Enabled" } else { "Disabled" },
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if enabled_now { "Disable" } else { "Enable" };
                let fill = if enabled_now {
                    colors::ERROR
                } else {
                    colors::SUCCESS
                };
                let button = egui::Button::new(
                    egui::RichText::new(label).color(colors::TEXT_LIGHT),
                )
                .fill(fill);
                let response = ui
                    .add_enabled_ui(!state.wallet.is_saving(), |ui| ui.add(button))
                    .inner;
                if response.clicked() {
                    let config = state.auth.api_config();
                    state.wallet.toggle_biometric(&config, !enabled_now);
                }
            });
        });
    });
}
