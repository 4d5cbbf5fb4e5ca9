//! # Period Selector Row
//!
//! One row of the period selector pair: label, backward-step button,
//! formatted month label, forward-step button. Backward stepping is
//! always allowed; forward stepping is bounded, and the bounds live in
//! the pure enablement functions below so they can be tested without an
//! egui context.

use eframe::egui;
use shared::MonthPeriod;

use crate::ui::components::theme;
use crate::ui::view_model::ComparisonUiState;

/// One-month step requests emitted by the selector rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodStep {
    CurrentBackward,
    CurrentForward,
    ComparisonBackward,
    ComparisonForward,
}

/// Which of the two selector rows is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodRole {
    Current,
    Comparison,
}

/// Forward stepping on the current period stops at the present month.
pub fn current_forward_enabled(state: &ComparisonUiState, present: MonthPeriod) -> bool {
    state.current_month < present
}

/// Forward stepping on the comparison period keeps at least a one-month
/// gap below the current period.
pub fn comparison_forward_enabled(state: &ComparisonUiState) -> bool {
    state.previous_month < state.current_month.previous()
}

/// Draw one selector row; returns the step requested this frame, if any.
pub fn render_period_selector_row(
    ui: &mut egui::Ui,
    role: PeriodRole,
    state: &ComparisonUiState,
    present: MonthPeriod,
) -> Option<PeriodStep> {
    let (label, month_label, emphasized, forward_enabled, backward_step, forward_step) = match role
    {
        PeriodRole::Current => (
            "Current period",
            state.current_month_label.as_str(),
            true,
            current_forward_enabled(state, present),
            PeriodStep::CurrentBackward,
            PeriodStep::CurrentForward,
        ),
        PeriodRole::Comparison => (
            "Compare with",
            state.previous_month_label.as_str(),
            false,
            comparison_forward_enabled(state),
            PeriodStep::ComparisonBackward,
            PeriodStep::ComparisonForward,
        ),
    };

    let mut step = None;
    ui.horizontal(|ui| {
        let label_text = if emphasized {
            egui::RichText::new(label)
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .strong()
                .color(theme::TEXT_PRIMARY)
        } else {
            egui::RichText::new(label)
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .color(theme::TEXT_MUTED)
        };
        // Fixed label column keeps the two rows aligned
        ui.add_sized(
            [130.0, 24.0],
            egui::Label::new(label_text).selectable(false),
        );

        if ui.add(nav_button("<")).clicked() {
            step = Some(backward_step);
        }

        ui.add_space(8.0);
        ui.add_sized(
            [140.0, 24.0],
            egui::Label::new(
                egui::RichText::new(month_label)
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(8.0);

        if ui.add_enabled(forward_enabled, nav_button(">")).clicked() {
            step = Some(forward_step);
        }
    });

    step
}

/// Shared styling for the month-step buttons.
fn nav_button(glyph: &str) -> egui::Button<'_> {
    egui::Button::new(glyph)
        .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 100))
        .stroke(egui::Stroke::new(1.5, theme::ACCENT))
        .rounding(egui::Rounding::same(6.0))
        .min_size(egui::vec2(32.0, 32.0))
}
