//! # App State Module
//!
//! Central application state for Spending Compare.
//!
//! ## Key Types:
//! - `MainTab` - the screens reachable from the navigation host
//! - `OverviewState` - data backing the overview landing screen
//! - `SpendingCompareApp` - main application struct
//!
//! ## State Management:
//! The app struct owns the backend connection, the active screen, the
//! overview data, and the comparison view-model. The comparison screen's
//! UI state lives inside the view-model and is only ever read by the view.

use anyhow::Result;
use log::info;
use shared::MonthPeriod;

use crate::backend::domain::models::transaction::Transaction;
use crate::backend::Backend;
use crate::ui::view_model::ComparisonViewModel;

/// Screens reachable from the navigation host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Overview,
    Comparison,
}

/// State backing the overview landing screen.
#[derive(Debug, Default)]
pub struct OverviewState {
    pub loaded: bool,
    pub balance: f64,
    pub recent_transactions: Vec<Transaction>,
    pub error_message: Option<String>,
}

/// Main application struct for the egui spending comparison app
pub struct SpendingCompareApp {
    pub backend: Backend,
    pub current_tab: MainTab,
    pub overview: OverviewState,
    pub comparison: ComparisonViewModel,
}

impl SpendingCompareApp {
    /// Create a new SpendingCompareApp with backend connection
    pub fn new() -> Result<Self> {
        info!("🚀 Initializing SpendingCompareApp");

        let backend = Backend::new()?;
        let present = MonthPeriod::current();

        Ok(Self {
            backend,
            current_tab: MainTab::Overview,
            overview: OverviewState::default(),
            comparison: ComparisonViewModel::new(present),
        })
    }

    /// Switch to the comparison screen.
    pub fn open_comparison(&mut self) {
        info!("📅 Opening comparison screen");
        self.current_tab = MainTab::Comparison;
    }

    /// The comparison screen's back action returns to the overview.
    pub fn close_comparison(&mut self) {
        info!("⬅ Leaving comparison screen");
        self.current_tab = MainTab::Overview;
        // Reloads on the next overview frame
        self.overview.loaded = false;
    }
}
