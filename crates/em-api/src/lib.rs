//! Event query API — library crate for the extraction REST server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `em-e2e-tests`) can access internal types like `AppState`,
//! `build_router`, and the `Oracle` trait.

pub mod config;
pub mod error;
pub mod oracle;
pub mod routes;
pub mod state;
