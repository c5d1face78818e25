pub mod report_frame;
pub use report_frame::ReportFrame;
pub mod omim_table;
pub use omim_table::OmimTable;
pub mod omim_data_source;
pub use omim_data_source::OmimDataSource;
pub mod report_data_source;
pub use report_data_source::ReportDataSource;

pub mod error;
mod excel_range_reader;
pub mod traits;
mod utils;
