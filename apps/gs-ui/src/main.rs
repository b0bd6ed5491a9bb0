#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod fetch_worker;
mod views;

use app::ExplorerApp;
use clap::Parser;

/// Desktop explorer for a gridscope network backend.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of the backend serving network data
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    base_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Gridscope"),
        ..Default::default()
    };

    eframe::run_native(
        "Gridscope",
        options,
        Box::new(move |_cc| Ok(Box::new(ExplorerApp::new(&cli.base_url)))),
    )
}
