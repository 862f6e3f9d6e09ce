//! Integration test crate for the Lienzo artwork registry.
//!
//! This crate has no library code — it only contains integration tests
//! that exercise end-to-end registry flows across the workspace crates.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p lienzo-integration-tests
//! ```
