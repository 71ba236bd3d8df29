//! # Academic-Title Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Shared ledger/identity builders
//! └── integration/      # Cross-crate flows and property tests
//!     ├── flows.rs      # Issue → verify → query scenarios
//!     └── properties.rs # proptest properties over the contract
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p at-tests
//! cargo test -p at-tests integration::properties::
//! ```

pub mod fixtures;
