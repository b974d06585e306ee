#![warn(clippy::pedantic)]
// hide the cmd when opening the exe on windows, see: https://github.com/emilk/egui/issues/116
#![windows_subsystem = "windows"]

mod animation;
mod assets;
mod catalog;
mod config;
mod destination;
mod message;
mod presenter;
mod view;

use config::AppConfig;
use view::View;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load();
    log::info!("starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    View::new_and_start(config)
}
