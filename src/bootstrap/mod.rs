pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_if_present, ClientSettings, EnvOverrides};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire_controller, WiringError};
