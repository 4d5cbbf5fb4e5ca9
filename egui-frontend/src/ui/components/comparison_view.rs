//! # Comparison View
//!
//! The month-over-month comparison screen: back navigation, the period
//! selector pair, and the status region. The status region shows exactly
//! one of loading / error / result / placeholder, decided by
//! `StatusRegion::for_state` in that priority order.
//!
//! The view renders from a read-only state snapshot and emits actions;
//! what the actions do is owned by the host and the view-model.

use eframe::egui;
use shared::MonthPeriod;

use crate::ui::components::comparison_renderer;
use crate::ui::components::period_selector::{self, PeriodRole, PeriodStep};
use crate::ui::components::theme;
use crate::ui::view_model::ComparisonUiState;

/// Fallback shown when the state carries an error with no text.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Actions the comparison screen emits; the host decides what they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonViewAction {
    NavigateBack,
    Step(PeriodStep),
}

/// What the status region shows for a given snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRegion {
    Loading,
    Error,
    Comparison,
    Empty,
}

impl StatusRegion {
    /// Single exclusive branch: loading wins, then error, then data.
    pub fn for_state(state: &ComparisonUiState) -> Self {
        if state.is_loading {
            StatusRegion::Loading
        } else if state.error_message.is_some() {
            StatusRegion::Error
        } else if state.comparison.is_some() {
            StatusRegion::Comparison
        } else {
            StatusRegion::Empty
        }
    }
}

/// Error text shown for a state in the error branch.
pub fn display_error(state: &ComparisonUiState) -> &str {
    match &state.error_message {
        Some(message) if !message.trim().is_empty() => message,
        _ => GENERIC_ERROR_MESSAGE,
    }
}

/// Render the full comparison screen from a read-only snapshot.
pub fn render_comparison_view(
    ui: &mut egui::Ui,
    state: &ComparisonUiState,
    present: MonthPeriod,
) -> Option<ComparisonViewAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui
            .add(
                egui::Button::new("⬅ Back")
                    .stroke(egui::Stroke::new(1.0, theme::ACCENT))
                    .rounding(egui::Rounding::same(6.0)),
            )
            .clicked()
        {
            action = Some(ComparisonViewAction::NavigateBack);
        }

        ui.add_space(12.0);
        ui.add(
            egui::Label::new(
                egui::RichText::new("Monthly comparison")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
    });

    ui.add_space(12.0);

    ui.group(|ui| {
        ui.vertical(|ui| {
            if let Some(step) =
                period_selector::render_period_selector_row(ui, PeriodRole::Current, state, present)
            {
                action = Some(ComparisonViewAction::Step(step));
            }
            ui.add_space(6.0);
            if let Some(step) = period_selector::render_period_selector_row(
                ui,
                PeriodRole::Comparison,
                state,
                present,
            ) {
                action = Some(ComparisonViewAction::Step(step));
            }
        });
    });

    ui.add_space(16.0);

    match StatusRegion::for_state(state) {
        StatusRegion::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.spinner();
                ui.label("Loading comparison...");
            });
        }
        StatusRegion::Error => {
            ui.colored_label(theme::ERROR, format!("❌ {}", display_error(state)));
        }
        StatusRegion::Comparison => {
            if let Some(comparison) = &state.comparison {
                comparison_renderer::render_comparison(ui, comparison);
            }
        }
        StatusRegion::Empty => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(
                    egui::RichText::new("Pick two months to compare.").color(theme::TEXT_MUTED),
                );
            });
        }
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{MonthSummary, MonthlyComparison};

    fn comparison_fixture() -> MonthlyComparison {
        let current = MonthPeriod::new(2024, 6);
        let previous = MonthPeriod::new(2024, 5);
        MonthlyComparison {
            current: MonthSummary {
                period: current,
                total_income: 2400.0,
                total_expenses: 75.0,
                net: 2325.0,
            },
            previous: MonthSummary {
                period: previous,
                total_income: 2400.0,
                total_expenses: 50.0,
                net: 2350.0,
            },
            spending_delta: 25.0,
            spending_delta_percent: Some(50.0),
            categories: Vec::new(),
        }
    }

    fn state(
        is_loading: bool,
        error_message: Option<&str>,
        comparison: Option<MonthlyComparison>,
    ) -> ComparisonUiState {
        let current = MonthPeriod::new(2024, 6);
        let previous = MonthPeriod::new(2024, 5);
        ComparisonUiState {
            current_month: current,
            previous_month: previous,
            current_month_label: current.label(),
            previous_month_label: previous.label(),
            is_loading,
            error_message: error_message.map(str::to_string),
            comparison,
        }
    }

    #[test]
    fn test_loading_wins_over_error_and_data() {
        let snapshot = state(true, Some("boom"), Some(comparison_fixture()));
        assert_eq!(StatusRegion::for_state(&snapshot), StatusRegion::Loading);
    }

    #[test]
    fn test_error_wins_over_data() {
        let snapshot = state(false, Some("boom"), Some(comparison_fixture()));
        assert_eq!(StatusRegion::for_state(&snapshot), StatusRegion::Error);
        assert_eq!(display_error(&snapshot), "boom");
    }

    #[test]
    fn test_data_shows_when_idle_and_error_free() {
        let snapshot = state(false, None, Some(comparison_fixture()));
        assert_eq!(StatusRegion::for_state(&snapshot), StatusRegion::Comparison);
    }

    #[test]
    fn test_nothing_to_show_is_an_explicit_empty_state() {
        let snapshot = state(false, None, None);
        assert_eq!(StatusRegion::for_state(&snapshot), StatusRegion::Empty);
    }

    #[test]
    fn test_blank_error_text_falls_back_to_the_generic_message() {
        let empty = state(false, Some(""), None);
        assert_eq!(display_error(&empty), GENERIC_ERROR_MESSAGE);

        let whitespace = state(false, Some("   "), None);
        assert_eq!(display_error(&whitespace), GENERIC_ERROR_MESSAGE);
    }
}
