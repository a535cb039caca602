pub mod auth;
pub mod config;
pub mod paths;
pub mod quote;
pub mod stats;
pub mod store;
