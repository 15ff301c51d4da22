//! # Signet Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks for the transfer path
//! └── src/integration/  # Cross-subsystem flows
//!     ├── flows.rs        # Wallet → authorizer → ledger scenarios
//!     ├── adversarial.rs  # Forged, tampered and malleated requests
//!     └── concurrency.rs  # Racing transfers, conservation, snapshots
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sg-tests
//!
//! # By category
//! cargo test -p sg-tests integration::concurrency::
//!
//! # Benchmarks
//! cargo bench -p sg-tests
//! ```

pub mod integration;
