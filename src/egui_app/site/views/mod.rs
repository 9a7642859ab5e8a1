use eframe::egui;

use crate::egui_app::route::{self, Disposition, SiteRoute};
use crate::egui_app::site::state::SiteAppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::{debug_view, render_loading, render_notice};

pub mod admin_login_view;
pub mod admin_view;
pub mod home_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut SiteAppState) {
    egui::TopBottomPanel::top("site_top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("Nova").size(18.0).strong(),
                );
                ui.colored_label(
                    colors::ACCENT,
                    egui::RichText::new("Holdings").size(18.0).strong(),
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
                        if ui.button("View site").clicked() {
                            state.route = SiteRoute::Home;
                        }
                        if ui.button("Admin").clicked() {
                            state.route = SiteRoute::Admin;
                        }
                    } else if ui.button("Admin").clicked() {
                        state.route = SiteRoute::AdminLogin;
                    }
                });
            });
        });

    if state.debug_view_expanded {
        egui::TopBottomPanel::bottom("site_debug_panel")
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

pub fn render_main_panel(ctx: &egui::Context, state: &mut SiteAppState) {
    egui::CentralPanel::default()
        .frame(styles::main_frame())
        .show(ctx, |ui| {
            render_notice(ui, state.auth.notice());

            match route::resolve(state.route.gate(), state.auth.session()) {
                Disposition::Placeholder => render_loading(ui),
                Disposition::RedirectToLogin => {
                    state.route = SiteRoute::AdminLogin;
                    admin_login_view::render(ui, state);
                }
                Disposition::RedirectToHome => {
                    state.route = SiteRoute::Admin;
                    admin_view::render(ui, state);
                }
                Disposition::Render => match state.route {
                    SiteRoute::Home => home_view::render(ui, state),
                    SiteRoute::AdminLogin => admin_login_view::render(ui, state),
                    SiteRoute::Admin => admin_view::render(ui, state),
                },
            }
        });
}
