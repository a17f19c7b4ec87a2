//! Error types shared across the console.
//!
//! Nothing in this system is fatal after startup: store errors surface as
//! console messages and the session continues.

pub mod types;
