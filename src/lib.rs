pub mod app;
pub mod cli;
pub mod config;
pub mod observability;

pub use app::App;
