//! Email backend implementations
//!
//! - **SMTP**: deliver via an SMTP relay (production)
//! - **Console**: log messages instead of sending them (development)

pub mod console;
pub mod smtp;
