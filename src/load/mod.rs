pub mod error;
pub mod excel_loader;
pub use excel_loader::ExcelLoader;
pub mod loader_factory;
pub use loader_factory::LoaderFactory;
pub mod traits;
pub mod tsv_loader;
pub use tsv_loader::TsvLoader;
mod utils;
