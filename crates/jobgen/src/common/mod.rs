pub mod cli;
pub mod env;
pub mod error;
pub mod manager;
pub mod preferences;
pub mod setup;
pub mod utils;
