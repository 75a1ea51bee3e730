/// TOML configuration for the terminal front end.
pub mod config;
