//! # Theme Configuration
//!
//! Centralized colors and app-wide style setup so the screens stay
//! visually consistent.

use eframe::egui;
use eframe::egui::Color32;

/// Accent used for interactive outlines
pub const ACCENT: Color32 = Color32::from_rgb(126, 120, 229);
/// Primary text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(60, 60, 60);
/// De-emphasized text
pub const TEXT_MUTED: Color32 = Color32::from_rgb(130, 130, 140);
/// Error text
pub const ERROR: Color32 = Color32::from_rgb(200, 60, 60);
/// Favorable change (spending down, income up)
pub const FAVORABLE: Color32 = Color32::from_rgb(46, 140, 90);
/// Unfavorable change (spending up)
pub const UNFAVORABLE: Color32 = Color32::from_rgb(200, 60, 60);

/// Apply the app-wide style tweaks.
pub fn setup_app_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    ctx.set_style(style);
}
