//! Render configuration
//!
//! Defaults, then an optional versioned YAML file, then command-line
//! overrides applied by the binary.

pub mod error;
pub mod io;
mod render_config;

pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use render_config::RenderConfig;
