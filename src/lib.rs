pub mod core;
pub mod models;
pub mod render;
pub mod services;
