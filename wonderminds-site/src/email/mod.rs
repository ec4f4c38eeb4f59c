//! Outbound email: message builder, sender trait and delivery backends
//!
//! The site never talks to a mail provider directly. Handlers build an
//! [`Email`], usually from one of the askama notification templates, and
//! hand it to whatever [`EmailSender`] was injected at startup:
//!
//! - [`SmtpBackend`] delivers through an SMTP relay (production)
//! - [`ConsoleBackend`] logs the message instead (development)
//!
//! # Example
//!
//! ```rust,no_run
//! use wonderminds_site::email::{ConsoleBackend, Email, EmailSender};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = ConsoleBackend::new();
//!
//! let email = Email::new()
//!     .to("info@wonderminds.edu")
//!     .from("WonderMinds Website <website@wonderminds.edu>")
//!     .subject("Hello")
//!     .html("<p>Hello</p>");
//!
//! let message_id = backend.send(email).await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod builder;
mod error;
mod sender;
mod template;

pub use backend::{
    console::ConsoleBackend,
    smtp::{SmtpBackend, SmtpConfig, SmtpTls},
};
pub use builder::{message_id_for, Email};
pub use error::EmailError;
pub use sender::EmailSender;
pub use template::{EmailTemplate, SimpleEmailTemplate};

#[cfg(test)]
pub use sender::MockEmailSender;
