pub mod config;
pub mod error;
pub mod render;

pub use config::Config;
pub use error::ConfigError;
pub use render::RenderConfig;
