pub mod append_config;
pub use self::append_config::{AppendConfig, FamilyLayout, OutputTarget};
mod config_loader;
pub use self::config_loader::ConfigLoader;
pub mod error;
pub mod export_format;
pub use self::export_format::ExportFormat;
