//! # payrun-rs
//!
//! A Rust client library for the PayRun.io payroll API.
//!
//! Every request is signed with the application's consumer key and secret
//! using the API's one-legged OAuth 1.0 scheme; there is no token exchange
//! or per-user authorization step. Request bodies are built from the typed
//! wire models in [`models`], while responses come back as untyped
//! [`serde_json::Value`] documents exactly as the API returned them.
//!
//! ## Usage
//!
//! ```no_run
//! use payrun_rs::{Client, Credentials};
//! use payrun_rs::models::{Address, BankAccount, Employer};
//!
//! # async fn run() -> payrun_rs::Result<()> {
//! // true selects the sandbox at https://api.test.payrun.io
//! let client = Client::new(Credentials::new("KEY", "SECRET"), true)?;
//!
//! let employer = Employer::new()
//!     .with_name("Acme Ltd")
//!     .with_region("England")
//!     .with_address(Address::new().with_address1("1 High Street"))
//!     .with_bank_account(BankAccount::new().with_account_number("12345678"));
//!
//! let created = client.employers().create(&employer.format()?).await?;
//! let employer_doc = client.employers().get("ER001").await?;
//! # Ok(())
//! # }
//! ```
//!
//! The library performs no retries, caching or pagination; every call is a
//! single signed request whose outcome is returned to the caller as-is.

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate tracing;

pub mod api;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod oauth;
pub mod utils;

pub use client::Client;
pub use error::{Error, Result};
pub use oauth::Credentials;

// Re-export SpanTrace for users wiring errors into tracing-aware reporters
pub use tracing_error::SpanTrace;
