pub use log::*;

pub use simplelog::{Config, LevelFilter, SimpleLogger};

/// Install the global logger for the run.
pub fn init() {
    SimpleLogger::init(LevelFilter::Info, Config::default()).expect("logger already initialized");
}
