use eframe::egui;

use crate::egui_app::masks;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::wallet::{Transaction, TransactionKind};

/// Quick actions below the balance card. Everything except the history jump
/// is a not-yet-available notice, matching the shipped product.
const QUICK_ACTIONS: [(&str, &str); 8] = [
    ("➕", "Add money"),
    ("✦", "PIX"),
    ("⬆", "Send"),
    ("⬇", "Withdraw"),
    ("📱", "Top-up"),
    ("🧾", "Payments"),
    ("📄", "Boletos"),
    ("👑", "Premium"),
];

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Kick off the history load on the first authenticated frame
    if !state.wallet.transactions_loaded && !state.wallet.is_loading_transactions {
        let config = state.auth.api_config();
        state.wallet.load_transactions(&config);
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.add_space(16.0);

            render_balance_card(ui, state);
            ui.add_space(16.0);
            render_quick_actions(ui, state);
            ui.add_space(16.0);
            render_history(ui, state);
            ui.add_space(24.0);
        });
}

fn render_balance_card(ui: &mut egui::Ui, state: &mut AppState) {
    let balance = state.auth.user().map(|user| user.balance).unwrap_or(0.0);
    let premium = state.auth.user().map(|user| user.premium).unwrap_or(false);

    ui.horizontal(|ui| {
        ui.add_space(24.0);
        styles::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width() - 48.0);
            ui.colored_label(colors::TEXT_SECONDARY, "Main balance");
            ui.horizontal(|ui| {
                let shown = if state.wallet.show_balance {
                    masks::format_currency(balance)
                } else {
                    "R$ •••••".to_string()
                };
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new(shown).size(32.0).strong(),
                );
                if ui
                    .button(if state.wallet.show_balance { "🙈" } else { "👁" })
                    .clicked()
                {
                    state.wallet.show_balance = !state.wallet.show_balance;
                }
            });
            ui.colored_label(colors::TEXT_SECONDARY, "Available to spend");
            if premium {
                ui.colored_label(
                    colors::PREMIUM_BADGE,
                    egui::RichText::new("👑 Premium").strong(),
                );
            }
        });
    });
}

fn render_quick_actions(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal_wrapped(|ui| {
        ui.add_space(24.0);
        for (icon, label) in QUICK_ACTIONS {
            ui.vertical(|ui| {
                let button = egui::Button::new(egui::RichText::new(icon).size(20.0))
                    .min_size(egui::vec2(52.0, 52.0))
                    .fill(colors::BUTTON_SECONDARY);
                if ui.add(button).clicked() {
                    state
                        .wallet
                        .show_message(true, format!("{} is coming soon", label));
                }
                ui.colored_label(colors::TEXT_SECONDARY, label);
            });
            ui.add_space(8.0);
        }
    });
}

fn render_history(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.add_space(24.0);
        styles::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width() - 48.0);

            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("History").size(18.0).strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let selected = match state.wallet.filter {
                        None => "All",
                        Some(kind) => kind.label(),
                    };
                    egui::ComboBox::from_id_salt("history_filter")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut state.wallet.filter, None, "All");
                            for kind in [
                                TransactionKind::Deposit,
                                TransactionKind::Transfer,
                                TransactionKind::Pix,
                            ] {
                                ui.selectable_value(
                                    &mut state.wallet.filter,
                                    Some(kind),
                                    kind.label(),
                                );
                            }
                        });
                });
            });
            ui.separator();

            if let Some((success, text)) = state.wallet.message() {
                let color = if success { colors::SUCCESS } else { colors::ERROR };
                ui.colored_label(color, text);
                ui.add_space(6.0);
            }

            if state.wallet.is_loading_transactions {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.colored_label(colors::TEXT_SECONDARY, "Loading transactions...");
                });
                return;
            }

            let transactions: Vec<Transaction> = state
                .wallet
                .filtered_transactions()
                .into_iter()
                .cloned()
                .collect();

            if transactions.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.colored_label(colors::TEXT_SECONDARY, "No transactions found");
                    ui.colored_label(colors::TEXT_SECONDARY, "Your transactions will show up here");
                    ui.add_space(20.0);
                });
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("history_list")
                .max_height(320.0)
                .show(ui, |ui| {
                    for tx in &transactions {
                        render_transaction_row(ui, tx);
                        ui.add_space(4.0);
                    }
                });
        });
    });
}

fn transaction_icon(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Deposit => "➕",
        TransactionKind::Transfer => "⬆",
        TransactionKind::Pix => "✦",
    }
}

fn render_transaction_row(ui: &mut egui::Ui, tx: &Transaction) {
    styles::list_item_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(colors::ACCENT, transaction_icon(tx.kind));
            ui.vertical(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new(&tx.description).strong());
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    format!(
                        "{}, {}",
                        masks::format_date(tx.created_at),
                        masks::format_time(tx.created_at)
                    ),
                );
                if let Some(cashback) = tx.cashback {
                    ui.colored_label(
                        colors::AMOUNT_POSITIVE,
                        format!("+{} cashback", masks::format_currency(cashback)),
                    );
                }
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.vertical(|ui| {
                    let (color, sign) = if tx.is_credit() {
                        (colors::AMOUNT_POSITIVE, "+")
                    } else {
                        (colors::AMOUNT_NEGATIVE, "-")
                    };
                    ui.colored_label(
                        color,
                        egui::RichText::new(format!(
                            "{}{}",
                            sign,
                            masks::format_currency(tx.amount)
                        ))
                        .strong(),
                    );
                    ui.colored_label(colors::TEXT_SECONDARY, &tx.status);
                });
            });
        });
    });
}
