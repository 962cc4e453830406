pub mod cli;
pub mod config;

pub use cli::{Args, Command};
pub use config::Config;
