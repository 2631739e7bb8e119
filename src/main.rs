//! Rockfall entry point
//!
//! Headless driver: replays a scenario file (or the built-in demo) through
//! the tick engine and prints a summary.
//!
//! Usage: `rockfall [scenario.json]`

use rockfall::Scenario;
use rockfall::consts::TICK_HZ;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    log::info!("Rockfall (headless) starting at {} Hz...", TICK_HZ);

    let scenario = match std::env::args().nth(1) {
        Some(path) => match Scenario::load_from(&path) {
            Ok(scenario) => {
                log::info!("Loaded scenario from {}", path);
                scenario
            }
            Err(e) => {
                log::error!("Failed to load scenario {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            log::info!("No scenario given, running built-in demo");
            Scenario::demo()
        }
    };

    let summary = scenario.replay();
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}
