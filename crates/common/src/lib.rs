pub mod config;
pub mod logging;

pub use config::{Environment, env_parse};
pub use logging::setup_logging;
