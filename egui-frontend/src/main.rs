use eframe::egui;
use log::{error, info};

use party_menu_egui::ui::PartyMenuApp;

fn main() -> Result<(), eframe::Error> {
    // RUST_LOG controls verbosity
    env_logger::init();
    info!("Starting Party Menu egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([360.0, 560.0])
            .with_title("Party Menu")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Party Menu",
        options,
        Box::new(|cc| match PartyMenuApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Party Menu app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {:#}", e);
                Err(format!("Failed to initialize app: {:#}", e).into())
            }
        }),
    )
}
