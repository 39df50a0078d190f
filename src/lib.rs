pub mod config;
pub mod constants;
pub mod error;
pub mod geocode;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod types;
pub mod years;

// Application ports and the adapters that satisfy them
pub mod app;
pub mod infra;
