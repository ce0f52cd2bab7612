//! Domain model for restaurant guide entries.
//!
//! # Responsibility
//! - Define the single record type persisted by the guide.
//! - Keep field validation next to the data it protects.
//!
//! # Invariants
//! - Records are append-only once saved; there is no edit or delete path.

pub mod restaurant;
