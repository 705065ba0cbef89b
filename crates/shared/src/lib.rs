pub mod api;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod model;
pub mod notice;
pub mod render;
pub mod state;
pub mod utils;
