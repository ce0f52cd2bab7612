//! In-memory queries over loaded restaurant lists.
//!
//! # Responsibility
//! - Sort and filter caller-owned copies of store data.
//!
//! # Invariants
//! - Queries never touch the backing file.

pub mod find;
pub mod list;
