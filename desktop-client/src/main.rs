mod broadcaster;
mod config;
mod runner;
mod state;
mod ui;

use clap::Parser;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use state::SharedState;
use ui::GameApp;

#[derive(Parser)]
#[command(name = "tic_tac_toe_client")]
struct Args {
    /// Path to the YAML config file (defaults to one next to the binary).
    #[arg(long)]
    config: Option<String>,

    /// Fixed seed for the bot's random tie-breaks.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger();

    let config_manager = match args.config.as_deref() {
        Some(path) => config::config_manager_for(path),
        None => config::get_config_manager(),
    };
    let config = config_manager.get_config()?;

    let seed = args.seed.or(config.bot_seed).unwrap_or_else(rand::random);
    log!("Session RNG seed: {}", seed);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let config_clone = config.clone();
    let shared_state_clone = shared_state.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(runner::run_session(
            config_clone,
            seed,
            shared_state_clone,
            command_rx,
        ));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|_cc| Ok(Box::new(GameApp::new(shared_state, command_tx)))),
    )?;

    Ok(())
}
