//! Git operations for gitbr
//!
//! This module runs `git branch` and turns its output into a branch list.

mod extract;
mod lister;
mod runner;

pub use extract::{
    extract, BranchList, BranchName, MarkerPolicy, ACTIVE_BRANCH_MARKER, WORKTREE_BRANCH_MARKER,
};
pub use lister::{BranchLister, LIST_BRANCHES_ARGS, NO_BRANCHES_NOTICE};
pub use runner::{CommandRunner, ProcessRunner};
