//! Mission management core module.
//!
//! This module provides the domain types for control missions and their
//! attached remarks, sanctions and findings, together with the in-memory
//! `MissionStore` that owns the mission collection. All mutation of mission
//! state goes through the store.

/// Submodule for mission data structures and input drafts.
pub mod types;
/// Submodule for the in-memory mission store implementation.
pub mod mission_store;

#[cfg(test)]
mod tests;
