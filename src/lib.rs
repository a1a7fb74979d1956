//! Typed Rust client for the Forward Email alias API.
//!
//! The crate has three layers: a domain layer of strong types, a transport
//! layer for wire-format quirks (form fields, fields that arrive as either an
//! id or an embedded object), and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use forwardemail::{AliasName, AliasParameters, Auth, DomainName, ForwardEmailClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), forwardemail::ForwardEmailError> {
//!     let client = ForwardEmailClient::new(Auth::api_key("...")?);
//!     let domain = DomainName::new("example.com")?;
//!     let parameters = AliasParameters {
//!         recipients: Some(vec!["me@example.org".to_owned()]),
//!         is_enabled: Some(true),
//!         ..Default::default()
//!     };
//!     let alias = client
//!         .create_alias(&domain, &AliasName::new("sales")?, &parameters)
//!         .await?;
//!     println!("created {} owned by {}", alias.id, alias.user.id());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Auth, ForwardEmailClient, ForwardEmailClientBuilder, ForwardEmailError};
pub use domain::{
    Account, Alias, AliasName, AliasParameters, ApiKey, Domain, DomainName,
    GeneratePasswordParameters, GeneratedPassword, Identified, Reference, ValidationError,
};
pub use transport::TransportError;
