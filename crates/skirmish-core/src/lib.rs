//! Core types and definitions for the SKIRMISH simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the vector type, steering modes, error taxonomy, tuning constants,
//! and the report handed to the rendering collaborator. It has no
//! dependency on any runtime framework.

pub mod constants;
pub mod enums;
pub mod error;
pub mod report;
pub mod types;

#[cfg(test)]
mod tests;
