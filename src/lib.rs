pub mod configuration;
pub use configuration::*;

pub mod console;
pub use console::*;

pub mod error_handling;

pub mod mission_management;

pub mod query;

pub mod reporting;

pub mod seed;
