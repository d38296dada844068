//! # Restmail Client
//! Asynchronous wrapper around the restmail.net disposable email REST API, providing simple methods to read and clear test mailboxes from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who need throwaway mailboxes in integration tests, demos, or automation scripts without running mail infrastructure: pick any account name, deliver mail to `<account>@restmail.net`, read it back with [`Client::get_messages`], then wipe the mailbox with [`Client::delete_account`] when done. Accounts need no registration; any name is a live mailbox.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Out of scope
//! Not a general-purpose mail client or SMTP sender. It only proxies the restmail.net service and inherits its availability and retention limits. The service does not authenticate reads, so never send anything sensitive to it.
//!
//! ## Errors
//! Network and request-construction failures surface as [`Error::Transport`]; a response body that does not decode as a JSON message array becomes [`Error::Decode`]. HTTP status codes are not inspected, matching the service's informal contract: the body is decoded whatever the status. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use restmail_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), restmail_client::Error> {
//!     let client = Client::new()?;
//!
//!     let messages = client.get_messages("my-test-account").await?;
//!     for msg in messages {
//!         println!("Subject: {}", msg.subject);
//!     }
//!
//!     client.delete_account("my-test-account").await?;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod models;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use models::Message;

/// Result type alias for restmail operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
