pub mod address;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod otp;
pub mod phone;
pub mod quote;
pub mod server;

// Layered boundaries: application use cases and outbound adapters
pub mod app;
pub mod infra;
