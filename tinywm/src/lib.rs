mod config;
pub mod utils;

pub use config::Config;
