//! End-to-end test suite over a mock Linkhaven instance.
//!
//! Run with:
//!   cargo test --test integration

#[path = "integration/client.rs"]
mod client;
#[path = "integration/rest.rs"]
mod rest;
