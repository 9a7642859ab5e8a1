use eframe::egui;

use crate::egui_app::route::WalletRoute;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

const SUPPORT_EMAIL: &str = "support@novapay.example";

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - 360.0).max(0.0) / 2.0);
            if ui.button("←").clicked() {
                state.route = WalletRoute::Login;
            }
            ui.colored_label(
                colors::TEXT_LIGHT,
                egui::RichText::new("Help Center").size(22.0).strong(),
            );
        });
        ui.add_space(16.0);

        for (icon, title, description) in [
            (
                "🔒",
                "I forgot my password",
                "Recover access to your NovaPay account",
            ),
            (
                "🛡",
                "Trouble with two-factor codes",
                "Fix problems with verification codes",
            ),
        ] {
            styles::card_frame().show(ui, |ui| {
                ui.set_min_width(360.0);
                ui.horizontal(|ui| {
                    ui.colored_label(colors::ACCENT, egui::RichText::new(icon).size(20.0));
                    ui.vertical(|ui| {
                        ui.colored_label(
                            colors::TEXT_LIGHT,
                            egui::RichText::new(title).strong(),
                        );
                        ui.colored_label(colors::TEXT_SECONDARY, description);
                    });
                });
                if ui.small_button("Contact support").clicked() {
                    state
                        .wallet
                        .show_message(true, "Self-service recovery is coming soon");
                }
            });
            ui.add_space(10.0);
        }

        if let Some((success, text)) = state.wallet.message() {
            let color = if success { colors::SUCCESS } else { colors::ERROR };
            ui.colored_label(color, text);
            ui.add_space(8.0);
        }

        styles::card_frame().show(ui, |ui| {
            ui.set_min_width(360.0);
            ui.colored_label(
                colors::TEXT_LIGHT,
                egui::RichText::new("Need more help?").strong(),
            );
            ui.colored_label(
                colors::TEXT_SECONDARY,
                "Our support team is always ready to help you.",
            );
            ui.colored_label(colors::TEXT_SECONDARY, format!("✉ {}", SUPPORT_EMAIL));
        });
    });
}
