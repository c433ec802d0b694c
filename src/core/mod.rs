//! Core slug engine module

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod sanitizer;
pub mod settings;
pub mod strategy;
