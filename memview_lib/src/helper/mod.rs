pub mod range_helper;
pub mod display_helper;
