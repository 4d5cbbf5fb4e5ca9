//! # App Coordinator Module
//!
//! Main application update loop (implements `eframe::App`): routes
//! between the overview and comparison screens and dispatches
//! comparison-view actions.
//!
//! ## Application Flow:
//! 1. Apply app-wide styling
//! 2. Load screen data if needed (synchronous, first frame of a screen)
//! 3. Render the active screen
//! 4. Dispatch any action the comparison view emitted

use eframe::egui;
use shared::MonthPeriod;

use crate::ui::app_state::{MainTab, SpendingCompareApp};
use crate::ui::components::comparison_view::{render_comparison_view, ComparisonViewAction};
use crate::ui::components::theme;

impl eframe::App for SpendingCompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        theme::setup_app_style(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.current_tab {
                MainTab::Overview => {
                    if !self.overview.loaded {
                        self.load_overview_data();
                    }
                    self.render_overview(ui);
                }
                MainTab::Comparison => {
                    // First entry into the screen; recomputes synchronously
                    if self.comparison.state().is_loading {
                        self.comparison.reload(&self.backend);
                    }

                    let present = MonthPeriod::current();
                    if let Some(action) = render_comparison_view(ui, self.comparison.state(), present)
                    {
                        self.dispatch_comparison_action(action, present);
                    }
                }
            }
        });
    }
}

impl SpendingCompareApp {
    /// Route a comparison-view action: back-navigation to the host,
    /// period steps to the view-model. One view-model call per action.
    fn dispatch_comparison_action(&mut self, action: ComparisonViewAction, present: MonthPeriod) {
        match action {
            ComparisonViewAction::NavigateBack => self.close_comparison(),
            ComparisonViewAction::Step(step) => {
                self.comparison.apply_step(step, &self.backend, present);
            }
        }
    }
}
