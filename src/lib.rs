//! Typed client for the Nordnet nExt REST API, version 1.
//!
//! One method per remote endpoint: session handling, account and portfolio
//! queries, order entry, instrument lookup, and market reference data. All
//! calls share a single request path that attaches the session credential,
//! serializes [`Params`] into the query string, and decodes the JSON reply.
//!
//! ```no_run
//! use nordnet_api::{Client, Params};
//!
//! # async fn run() -> Result<(), nordnet_api::Error> {
//! let mut client = Client::test()?.credentials("ENCRYPTED_BLOB");
//! client.login().await?;
//!
//! let accounts = client.get_accounts().await?;
//! let hits = client
//!     .get_instruments(&Params::new().with("query", "ERI").with("country", "SE"))
//!     .await?;
//! # let _ = (accounts, hits);
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod params;
pub mod types;
pub use self::client::{Client, BASE_URL, TEST_BASE_URL};
pub use self::errors::Error;
pub use self::params::Params;
