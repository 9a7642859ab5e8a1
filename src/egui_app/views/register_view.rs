use eframe::egui;

use crate::egui_app::masks;
use crate::egui_app::route::WalletRoute;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Brazilian state codes for the address selector
const BR_STATES: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

fn labeled_input(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.add_sized(
            [110.0, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        let response = ui.add_sized(
            [260.0, 28.0],
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .text_color(colors::TEXT_LIGHT),
        );
        changed = response.changed();
    });
    ui.add_space(6.0);
    changed
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("Create your NovaPay account")
                        .size(24.0)
                        .strong(),
                );
                ui.add_space(16.0);

                if let Some(ref error) = state.register_form.error {
                    ui.label(egui::RichText::new(error).color(colors::ERROR));
                    ui.add_space(8.0);
                }

                styles::card_frame().show(ui, |ui| {
                    let form = &mut state.register_form;

                    labeled_input(ui, "Full name:", &mut form.full_name, "Your full name");
                    labeled_input(ui, "Email:", &mut form.email, "you@example.com");

                    if labeled_input(ui, "CPF:", &mut form.cpf, "000.000.000-00") {
                        form.cpf = masks::cpf(&form.cpf);
                    }
                    if labeled_input(ui, "RG:", &mut form.rg, "12.345.678-9") {
                        form.rg = masks::rg(&form.rg);
                    }
                    if labeled_input(ui, "Phone:", &mut form.phone, "(11) 99999-9999") {
                        form.phone = masks::phone(&form.phone);
                    }

                    labeled_input(ui, "Birth date:", &mut form.birth_date, "YYYY-MM-DD");
                    labeled_input(ui, "Address:", &mut form.address, "Street, number, district");
                    labeled_input(ui, "City:", &mut form.city, "Sao Paulo");

                    ui.horizontal(|ui| {
                        ui.add_sized(
                            [110.0, 24.0],
                            egui::Label::new(
                                egui::RichText::new("State:").color(colors::TEXT_SECONDARY),
                            ),
                        );
                        egui::ComboBox::from_id_salt("register_state")
                            .selected_text(if form.state.is_empty() {
                                "Select"
                            } else {
                                form.state.as_str()
                            })
                            .show_ui(ui, |ui| {
                                for code in BR_STATES {
                                    ui.selectable_value(&mut form.state, code.to_string(), code);
                                }
                            });
                    });
                    ui.add_space(6.0);

                    if labeled_input(ui, "CEP:", &mut form.postal_code, "00000-000") {
                        form.postal_code = masks::cep(&form.postal_code);
                    }

                    ui.horizontal(|ui| {
                        ui.add_sized(
                            [110.0, 24.0],
                            egui::Label::new(
                                egui::RichText::new("Password:").color(colors::TEXT_SECONDARY),
                            ),
                        );
                        ui.add_sized(
                            [226.0, 28.0],
                            egui::TextEdit::singleline(&mut form.password)
                                .password(!form.show_password)
                                .hint_text("At least 6 characters")
                                .text_color(colors::TEXT_LIGHT),
                        );
                        if ui
                            .button(if form.show_password { "🙈" } else { "👁" })
                            .clicked()
                        {
                            form.show_password = !form.show_password;
                        }
                    });
                    ui.add_space(6.0);

                    ui.horizontal(|ui| {
                        ui.add_sized(
                            [110.0, 24.0],
                            egui::Label::new(
                                egui::RichText::new("Confirm:").color(colors::TEXT_SECONDARY),
                            ),
                        );
                        ui.add_sized(
                            [226.0, 28.0],
                            egui::TextEdit::singleline(&mut form.confirm_password)
                                .password(!form.show_confirm_password)
                                .hint_text("Repeat your password")
                                .text_color(colors::TEXT_LIGHT),
                        );
                        if ui
                            .button(if form.show_confirm_password { "🙈" } else { "👁" })
                            .clicked()
                        {
                            form.show_confirm_password = !form.show_confirm_password;
                        }
                    });
                });

                ui.add_space(16.0);

                let pending = state.auth.register_pending();
                let button = egui::Button::new(
                    egui::RichText::new("Create Account").color(colors::TEXT_LIGHT),
                )
                .fill(colors::BUTTON_PRIMARY);
                let response = ui
                    .add_enabled_ui(!pending, |ui| ui.add_sized([180.0, 32.0], button))
                    .inner;
                if response.clicked() {
                    state.handle_register();
                }

                if pending {
                    ui.add_space(10.0);
                    ui.spinner();
                }

                ui.add_space(14.0);
                if ui
                    .link(egui::RichText::new("Already have an account? Sign in").color(colors::ACCENT))
                    .clicked()
                {
                    state.route = WalletRoute::Login;
                }
                ui.add_space(24.0);
            });
        });
}
