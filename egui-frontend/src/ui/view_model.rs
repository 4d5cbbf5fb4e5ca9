//! # Comparison View-Model
//!
//! Owns the comparison screen's UI state. The view renders from a
//! read-only snapshot and emits step actions; only the methods here
//! mutate the state.
//!
//! ## State invariants:
//! - the month labels always match their month field
//! - `previous_month` stays at least one month behind `current_month`
//! - `current_month` never passes the present month
//! - after a recompute, at most one of error/comparison is set

use log::info;
use shared::{MonthPeriod, MonthlyComparison};

use crate::backend::Backend;
use crate::ui::components::period_selector::PeriodStep;

/// Read-only snapshot the comparison view renders from.
#[derive(Debug, Clone)]
pub struct ComparisonUiState {
    pub current_month: MonthPeriod,
    pub previous_month: MonthPeriod,
    pub current_month_label: String,
    pub previous_month_label: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub comparison: Option<MonthlyComparison>,
}

impl ComparisonUiState {
    fn initial(present: MonthPeriod) -> Self {
        let previous = present.previous();
        Self {
            current_month: present,
            previous_month: previous,
            current_month_label: present.label(),
            previous_month_label: previous.label(),
            is_loading: true,
            error_message: None,
            comparison: None,
        }
    }
}

/// Sole owner and writer of `ComparisonUiState`.
pub struct ComparisonViewModel {
    state: ComparisonUiState,
}

impl ComparisonViewModel {
    /// View-model starting at the present month vs the month before it.
    pub fn new(present: MonthPeriod) -> Self {
        Self {
            state: ComparisonUiState::initial(present),
        }
    }

    /// Current snapshot; the view's only access to the state.
    pub fn state(&self) -> &ComparisonUiState {
        &self.state
    }

    /// Route a selector step to its navigation method.
    pub fn apply_step(&mut self, step: PeriodStep, backend: &Backend, present: MonthPeriod) {
        match step {
            PeriodStep::CurrentBackward => self.current_month_backward(backend),
            PeriodStep::CurrentForward => self.current_month_forward(backend, present),
            PeriodStep::ComparisonBackward => self.comparison_month_backward(backend),
            PeriodStep::ComparisonForward => self.comparison_month_forward(backend),
        }
    }

    /// Step the current period one month back, dragging the comparison
    /// period along when the gap would close.
    pub fn current_month_backward(&mut self, backend: &Backend) {
        self.state.current_month = self.state.current_month.previous();
        if self.state.previous_month >= self.state.current_month {
            self.state.previous_month = self.state.current_month.previous();
        }
        self.sync_labels();
        info!("📅 Current period moved back to {}", self.state.current_month);
        self.recompute(backend);
    }

    /// Step the current period one month forward; no-op at the present month.
    pub fn current_month_forward(&mut self, backend: &Backend, present: MonthPeriod) {
        if self.state.current_month >= present {
            return;
        }
        self.state.current_month = self.state.current_month.next();
        self.sync_labels();
        info!("📅 Current period moved forward to {}", self.state.current_month);
        self.recompute(backend);
    }

    /// Step the comparison period one month back.
    pub fn comparison_month_backward(&mut self, backend: &Backend) {
        self.state.previous_month = self.state.previous_month.previous();
        self.sync_labels();
        info!("📅 Comparison period moved back to {}", self.state.previous_month);
        self.recompute(backend);
    }

    /// Step the comparison period one month forward; no-op once it would
    /// close within one month of the current period.
    pub fn comparison_month_forward(&mut self, backend: &Backend) {
        if self.state.previous_month >= self.state.current_month.previous() {
            return;
        }
        self.state.previous_month = self.state.previous_month.next();
        self.sync_labels();
        info!("📅 Comparison period moved forward to {}", self.state.previous_month);
        self.recompute(backend);
    }

    /// Recompute the comparison for the selected pair.
    pub fn reload(&mut self, backend: &Backend) {
        self.recompute(backend);
    }

    fn sync_labels(&mut self) {
        self.state.current_month_label = self.state.current_month.label();
        self.state.previous_month_label = self.state.previous_month.label();
    }

    fn recompute(&mut self, backend: &Backend) {
        self.state.is_loading = true;

        let result = backend.comparison_service.compare(
            self.state.current_month,
            self.state.previous_month,
            &backend.transaction_service,
        );

        self.state.is_loading = false;
        match result {
            Ok(comparison) => {
                self.state.comparison = Some(comparison);
                self.state.error_message = None;
            }
            Err(e) => {
                log::error!("❌ Comparison failed: {:#}", e);
                self.state.error_message = Some(format!("{:#}", e));
                self.state.comparison = None;
            }
        }
    }
}
