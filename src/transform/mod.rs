pub mod error;
pub mod link_annotator;
pub mod omim_joiner;
pub mod schema_normalizer;
pub mod traits;
pub mod transform_module;

pub use link_annotator::LinkAnnotator;
pub use omim_joiner::{JoinReport, OmimJoiner};
pub use schema_normalizer::SchemaNormalizer;
pub use transform_module::TransformerModule;
