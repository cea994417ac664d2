//! Claims Engine
//!
//! Owns every policyholder, policy, and claim record and enforces the
//! cross-entity rules the individual domain crates cannot see on their own:
//! referential integrity, age at policy start, claim amounts against
//! coverage, and cascading deletes.
//!
//! # Atomicity
//!
//! Every operation either applies completely or leaves the store untouched.
//! Updates are staged onto a candidate copy of the record, the candidate is
//! validated as a whole, and only then does it replace the stored record.
//!
//! # Concurrency
//!
//! `ClaimsEngine` is a plain single-owner value; mutations take `&mut self`.
//! Callers sharing it across tasks wrap it in a reader-writer lock and hold
//! the write guard for the full duration of each mutating call.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use claims_engine::ClaimsEngine;
//! use domain_party::Policyholder;
//!
//! let mut engine = ClaimsEngine::new();
//! let holder = Policyholder::new(
//!     "PH001",
//!     "John Doe",
//!     "+1234567890",
//!     "john@example.com",
//!     NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
//! );
//! engine.create_policyholder(holder).unwrap();
//! assert!(engine.get_policyholder(&"PH001".into()).is_some());
//! ```

pub mod engine;
pub mod summary;

pub use engine::ClaimsEngine;
pub use summary::{DeletionSummary, EngineStats};
