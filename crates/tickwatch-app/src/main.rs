mod clock_app;
mod config;

use anyhow::Context as _;
use tickwatch_engine::logging::{init_logging, LoggingConfig};
use tickwatch_ui::Application;

use crate::clock_app::{ClockApp, BACKGROUND};
use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    // Printed before the runtime switches to the alternate screen.
    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║              TICKWATCH v0.1            ║");
    println!("  ║   wall clock  ·  stopwatch             ║");
    println!("  ╠════════════════════════════════════════╣");
    println!("  ║  space/s  start/stop     r  reset      ║");
    println!("  ║  q / esc  quit                         ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    // The logger comes up first so config warnings are not dropped.
    let log_file = config::log_file_from(|key| std::env::var(key).ok());
    init_logging(LoggingConfig { log_file, ..LoggingConfig::default() });

    let config = AppConfig::from_env();
    log::info!("starting with {config:?}");

    Application::new()
        .title("Tickwatch")
        .frame_rate(config.frame_rate)
        .background(BACKGROUND)
        .run(ClockApp::new().reset_policy(config.reset_policy))
        .context("tickwatch runtime failed")
}
