mod client_config;

pub use client_config::{ClientConfig, config_manager_for, get_config_manager};
