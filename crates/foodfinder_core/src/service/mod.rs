//! Guide use-case services.
//!
//! # Responsibility
//! - Orchestrate store reads/writes and in-memory queries.
//! - Keep the command loop decoupled from storage details.

pub mod guide_service;
