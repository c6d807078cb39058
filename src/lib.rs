pub mod atlas;
pub mod catalog;
pub mod config;
pub mod credentials;
pub mod error;
pub mod global;
pub mod types;
