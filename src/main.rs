use crate::app_config::AppConfig;
use crate::console::ConsoleInput;
use crate::domain::device::{Light, Thermostat};
use crate::session::Session;
use std::io;
use tracing::{error, info};

mod app_config;
mod console;
mod domain;
mod session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_max_level(config.core().log_level()?)
        .with_writer(io::stderr)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let light = Light::new(config.light().name());
    let thermostat = Thermostat::new(config.thermostat().name());
    let mut session = Session::new(&light, &thermostat);

    let mut input = ConsoleInput::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    if let Err(err) = session.run(&mut input, &mut out) {
        error!("❌ Session aborted: {}", err);
        return Err(err.into());
    }

    Ok(())
}
