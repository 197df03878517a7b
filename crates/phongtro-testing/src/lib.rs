//! Testing infrastructure for phongtro tests.
//!
//! - `fixtures`: sample rental/withdrawal entities with fixed timestamps
//! - `mock`: scripted in-memory collaborators with a call log
//! - `world`: isolated config environments for CLI integration tests

pub mod fixtures;
pub mod mock;
pub mod world;

pub use mock::{MockRentalOps, MockWithdrawalOps};
pub use world::TestWorld;
