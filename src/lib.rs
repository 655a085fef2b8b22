//! Batch conversion of sequentially numbered image files via external
//! command-line tools.

pub mod converters;
pub mod file_processor;
pub mod logger;
pub mod profile;
pub mod utils;
