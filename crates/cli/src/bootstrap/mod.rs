mod config;
mod logging;

pub use config::{load_config, unregister};
pub use logging::init_logging;
