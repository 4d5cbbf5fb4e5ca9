//! # Comparison Renderer
//!
//! Renders a computed `MonthlyComparison`: a summary card per month, the
//! headline spending change, and the per-category table.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::{MonthSummary, MonthlyComparison};

use crate::ui::components::theme;

/// "$62.10" / "-$62.10" money formatting.
pub fn money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

/// "+$25.00" / "-$25.00" formatting for changes.
pub fn signed_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("+${:.2}", value)
    }
}

pub fn render_comparison(ui: &mut egui::Ui, comparison: &MonthlyComparison) {
    ui.columns(2, |columns| {
        render_month_card(&mut columns[0], "Current period", &comparison.current, true);
        render_month_card(&mut columns[1], "Compare with", &comparison.previous, false);
    });

    ui.add_space(12.0);
    render_spending_delta(ui, comparison);

    ui.add_space(12.0);
    render_category_table(ui, comparison);
}

fn render_month_card(ui: &mut egui::Ui, heading: &str, summary: &MonthSummary, emphasized: bool) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            let heading_text = if emphasized {
                egui::RichText::new(heading).strong().color(theme::TEXT_PRIMARY)
            } else {
                egui::RichText::new(heading).color(theme::TEXT_MUTED)
            };
            ui.add(egui::Label::new(heading_text).selectable(false));

            ui.add(
                egui::Label::new(
                    egui::RichText::new(summary.period.label())
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );

            ui.label(format!("Income {}", money(summary.total_income)));
            ui.label(format!("Spending {}", money(summary.total_expenses)));

            let net_color = if summary.net >= 0.0 {
                theme::FAVORABLE
            } else {
                theme::UNFAVORABLE
            };
            ui.colored_label(net_color, format!("Net {}", money(summary.net)));
        });
    });
}

fn render_spending_delta(ui: &mut egui::Ui, comparison: &MonthlyComparison) {
    let percent_text = match comparison.spending_delta_percent {
        Some(percent) => format!(" ({:+.1}%)", percent),
        None => String::new(),
    };

    let (color, text) = if comparison.spending_delta > 0.0 {
        (
            theme::UNFAVORABLE,
            format!(
                "Spending up {}{} vs {}",
                money(comparison.spending_delta),
                percent_text,
                comparison.previous.period.label()
            ),
        )
    } else if comparison.spending_delta < 0.0 {
        (
            theme::FAVORABLE,
            format!(
                "Spending down {}{} vs {}",
                money(-comparison.spending_delta),
                percent_text,
                comparison.previous.period.label()
            ),
        )
    } else {
        (
            theme::TEXT_MUTED,
            format!("Spending unchanged vs {}", comparison.previous.period.label()),
        )
    };

    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                .strong()
                .color(color),
        )
        .selectable(false),
    );
}

fn render_category_table(ui: &mut egui::Ui, comparison: &MonthlyComparison) {
    if comparison.categories.is_empty() {
        ui.label(
            egui::RichText::new("No categorized spending in either month.")
                .color(theme::TEXT_MUTED),
        );
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Category");
            });
            header.col(|ui| {
                ui.strong(comparison.current.period.label());
            });
            header.col(|ui| {
                ui.strong(comparison.previous.period.label());
            });
            header.col(|ui| {
                ui.strong("Change");
            });
        })
        .body(|mut body| {
            for category in &comparison.categories {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&category.category);
                    });
                    row.col(|ui| {
                        ui.label(money(category.current_amount));
                    });
                    row.col(|ui| {
                        ui.label(money(category.previous_amount));
                    });
                    row.col(|ui| {
                        let color = if category.delta > 0.0 {
                            theme::UNFAVORABLE
                        } else if category.delta < 0.0 {
                            theme::FAVORABLE
                        } else {
                            theme::TEXT_MUTED
                        };
                        ui.colored_label(color, signed_money(category.delta));
                    });
                });
            }
        });
}
