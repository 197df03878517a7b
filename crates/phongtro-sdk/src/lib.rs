//! Public SDK for the PhongTro marketplace API.
//!
//! Connect once, then work through entity handles:
//!
//! ```no_run
//! use phongtro_sdk::Client;
//!
//! # fn main() -> Result<(), phongtro_sdk::Error> {
//! let client = Client::connect("https://api.phongtro.vn", "token")?;
//! for request in client.rentals().pending()? {
//!     println!("{} - {}", request.id, request.tenant.full_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The rental and withdrawal handles also implement the operation traits
//! from `phongtro-core`, so the core controllers run against the real
//! backend exactly as they run against the scripted test mocks.

mod client;
mod error;
mod ops;

pub use client::{AgreementsHandle, Client, RentalsHandle, WithdrawalsHandle};
pub use error::{Error, Result};
