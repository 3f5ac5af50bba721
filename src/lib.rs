pub mod client;
pub mod config;
pub mod lint;
pub mod models;
pub mod snippet;
