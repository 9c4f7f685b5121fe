pub mod app;
pub mod screen;
