use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::app_state::SpendingCompareApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Spending Compare egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])   // Comfortable for the comparison table
            .with_min_inner_size([760.0, 560.0]) // Minimum usable size
            .with_title("Spending Compare")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Spending Compare",
        options,
        Box::new(|_cc| {
            match SpendingCompareApp::new() {
                Ok(app) => {
                    info!("Successfully initialized Spending Compare app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe::Error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
