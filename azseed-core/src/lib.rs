// azseed-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Credential provider and query executor contracts.
pub mod ports;

// 2. Domain
// Token/session, statement splitting, run report.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// Azure CLI subprocess, REST SQL endpoint, config files, filesystem.
pub mod infrastructure;

// 4. Application (Use Cases)
// Authenticate -> connectivity test -> seed file -> statements -> report.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::SeedError;
