use eframe::egui;

use crate::egui_app::context::{Notice, NoticeKind};
use crate::egui_app::route::{self, Disposition, WalletRoute};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod dashboard_view;
pub mod debug_view;
pub mod help_view;
pub mod login_view;
pub mod register_view;
pub mod settings_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("Nova").size(18.0).strong(),
                );
                ui.colored_label(
                    colors::ACCENT,
                    egui::RichText::new("Pay").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if ui.button("🐛").clicked() {
                        state.debug_view_expanded = !state.debug_view_expanded;
                    }

                    if state.auth.is_authenticated() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if ui.button("Settings").clicked() {
                            state.route = WalletRoute::Settings;
                        }
                        if ui.button("Dashboard").clicked() {
                            state.route = WalletRoute::Dashboard;
                        }
                        if let Some(user) = state.auth.user() {
                            ui.colored_label(
                                colors::TEXT_SECONDARY,
                                format!("Hello, {}", user.short_name()),
                            );
                        }
                    }
                });
            });
        });

    if state.debug_view_expanded {
        egui::TopBottomPanel::bottom("debug_panel")
            .frame(styles::top_bar_frame())
            .show(ctx, |ui| {
                debug_view::render_debug_panel(
                    ui,
                    &state.debug_logger,
                    &mut state.debug_filter_category,
                );
            });
    }
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::main_frame())
        .show(ctx, |ui| {
            render_notice(ui, state.auth.notice());

            match route::resolve(state.route.gate(), state.auth.session()) {
                Disposition::Placeholder => render_loading(ui),
                Disposition::RedirectToLogin => {
                    state.route = WalletRoute::Login;
                    login_view::render(ui, state);
                }
                Disposition::RedirectToHome => {
                    state.route = WalletRoute::Dashboard;
                    dashboard_view::render(ui, state);
                }
                Disposition::Render => match state.route {
                    WalletRoute::Login => login_view::render(ui, state),
                    WalletRoute::Register => register_view::render(ui, state),
                    WalletRoute::Help => help_view::render(ui, state),
                    WalletRoute::Dashboard => dashboard_view::render(ui, state),
                    WalletRoute::Settings => settings_view::render(ui, state),
                },
            }
        });
}

/// Neutral placeholder shown while the stored token is being verified
pub fn render_loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 2.0 - 40.0);
        ui.spinner();
        ui.add_space(10.0);
        ui.colored_label(colors::TEXT_SECONDARY, "Loading...");
    });
}

/// Transient notice banner under the top bar
pub fn render_notice(ui: &mut egui::Ui, notice: Option<&Notice>) {
    if let Some(notice) = notice {
        let success = notice.kind == NoticeKind::Success;
        styles::notice_frame(success).show(ui, |ui| {
            let color = if success { colors::SUCCESS } else { colors::ERROR };
            ui.colored_label(color, &notice.text);
        });
    }
}
