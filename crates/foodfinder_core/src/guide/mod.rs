//! Interactive guide: command parsing, table output and the command loop.
//!
//! # Responsibility
//! - Turn terminal lines into typed commands.
//! - Render query results as fixed-width tables.
//! - Drive the read-dispatch loop until `quit` or end of input.
//!
//! # Invariants
//! - A failing command never ends the loop; only `quit`, end of input, or a
//!   broken terminal stream do.

pub mod command;
pub mod session;
pub mod table;

/// Actions advertised to the user, in display order.
pub const ACTIONS: &[&str] = &["list", "find", "add", "quit"];
