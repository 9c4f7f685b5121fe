pub mod buffer;
pub mod calculator;
pub mod format;
pub mod model;
