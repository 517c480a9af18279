//! gitbr Core - Core library for listing local git branches
//!
//! This crate runs `git branch` through an injectable [`CommandRunner`] and
//! extracts a clean, ordered list of branch names from its output.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod git;

pub use config::{Config, GitConfig};
pub use diagnostics::{Diagnostics, SilentDiagnostics, TracingDiagnostics};
pub use error::{Error, Result};
pub use git::{
    extract, BranchList, BranchLister, BranchName, CommandRunner, MarkerPolicy, ProcessRunner,
};
