pub(crate) mod config_validation;
pub(crate) mod report_frame_validation;
