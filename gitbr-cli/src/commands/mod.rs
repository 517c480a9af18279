//! CLI command implementations

pub mod list;

pub use list::ListArgs;
