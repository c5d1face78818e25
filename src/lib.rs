pub mod cli;
pub mod config;
mod constants;
pub mod error;
pub mod extract;
pub mod load;
pub mod omim_append;
pub use omim_append::{OmimAppend, RunSummary};
pub mod pipeline;
pub use pipeline::Pipeline;
pub mod transform;
pub(crate) mod utils;
mod validation;
