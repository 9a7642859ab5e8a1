/**
 * Nova Holdings Site - Main Entry Point
 *
 * Native desktop client for the holding-company showcase: the public
 * screen with content sections and companies, and the admin CMS behind
 * login.
 */
use eframe::egui;
use novapay::egui_app::site::{views, SiteAppState};
use novapay::egui_app::theme::styles;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Nova Holdings",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(SiteApp::default()))
        }),
    )
}

/// Main application state
struct SiteApp {
    state: SiteAppState,
}

impl Default for SiteApp {
    fn default() -> Self {
        Self {
            state: SiteAppState::new(),
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
