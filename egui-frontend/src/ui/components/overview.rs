//! # Overview Screen
//!
//! Landing screen of the app: current balance, the most recent ledger
//! entries, and the entry point into the comparison screen. Doubles as
//! the navigation host the comparison screen's back action returns to.

use eframe::egui;
use log::warn;

use crate::ui::app_state::SpendingCompareApp;
use crate::ui::components::comparison_renderer::money;
use crate::ui::components::theme;

const RECENT_TRANSACTION_LIMIT: usize = 8;

impl SpendingCompareApp {
    /// Load balance and recent transactions for the overview screen.
    pub fn load_overview_data(&mut self) {
        match self.backend.transaction_service.latest_balance() {
            Ok(balance) => {
                self.overview.balance = balance;
                self.overview.error_message = None;
            }
            Err(e) => {
                warn!("❌ Failed to load balance: {:#}", e);
                self.overview.error_message = Some(format!("Failed to load balance: {}", e));
                self.overview.balance = 0.0;
            }
        }

        match self
            .backend
            .transaction_service
            .list_recent(RECENT_TRANSACTION_LIMIT)
        {
            Ok(transactions) => {
                self.overview.recent_transactions = transactions;
            }
            Err(e) => {
                warn!("❌ Failed to load recent transactions: {:#}", e);
                self.overview.error_message =
                    Some(format!("Failed to load transactions: {}", e));
                self.overview.recent_transactions = Vec::new();
            }
        }

        self.overview.loaded = true;
    }

    /// Render the overview screen.
    pub fn render_overview(&mut self, ui: &mut egui::Ui) {
        ui.add(
            egui::Label::new(
                egui::RichText::new("Spending Compare")
                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );

        ui.add_space(4.0);

        if let Some(error) = &self.overview.error_message {
            ui.colored_label(theme::ERROR, format!("❌ {}", error));
        }

        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("Balance {}", money(self.overview.balance)))
                        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let compare_button = egui::Button::new("Compare months")
                    .stroke(egui::Stroke::new(1.5, theme::ACCENT))
                    .rounding(egui::Rounding::same(6.0));
                if ui.add(compare_button).clicked() {
                    self.open_comparison();
                }
            });
        });

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        ui.label(
            egui::RichText::new("Recent transactions")
                .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                .strong(),
        );

        if self.overview.recent_transactions.is_empty() {
            ui.label(
                egui::RichText::new("No transactions yet. The ledger lives in transactions.csv.")
                    .color(theme::TEXT_MUTED),
            );
            return;
        }

        for transaction in &self.overview.recent_transactions {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(transaction.date.format("%Y-%m-%d").to_string())
                        .color(theme::TEXT_MUTED),
                );
                ui.label(&transaction.description);
                ui.label(egui::RichText::new(&transaction.category).color(theme::TEXT_MUTED));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let color = if transaction.amount >= 0.0 {
                        theme::FAVORABLE
                    } else {
                        theme::TEXT_PRIMARY
                    };
                    ui.colored_label(color, money(transaction.amount));
                });
            });
        }
    }
}
