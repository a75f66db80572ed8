//! Viewer configuration
/// `.tm-viewer.json` loading
mod loader;
/// Configuration types and settings
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use types::{
    ConfigError,
    ValidationError,
    ViewerSettings,
};
