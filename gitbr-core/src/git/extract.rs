//! Extraction of branch names from `git branch` output
//!
//! `git branch` prints one branch per line, indented by two columns, with the
//! checked-out branch prefixed by `*` and branches checked out in a linked
//! worktree prefixed by `+`. Extraction turns that text into a [`BranchList`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::Error;

/// Marker `git branch` puts before the checked-out branch
pub const ACTIVE_BRANCH_MARKER: char = '*';

/// Marker `git branch` puts before a branch checked out in another worktree
pub const WORKTREE_BRANCH_MARKER: char = '+';

/// How leading branch markers are treated during extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerPolicy {
    /// Remove a `*` or `+` printed in the marker column
    #[default]
    Strip,
    /// Remove whitespace only, leaving the marker fused to the name
    Keep,
}

impl MarkerPolicy {
    /// Get the name of the policy as used in config files and flags
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strip => "strip",
            Self::Keep => "keep",
        }
    }
}

impl fmt::Display for MarkerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkerPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strip" => Ok(Self::Strip),
            "keep" => Ok(Self::Keep),
            other => Err(Error::Config(format!(
                "Unknown marker policy '{}'. Expected 'strip' or 'keep'",
                other
            ))),
        }
    }
}

// Parsed through `FromStr` so config files accept what flags accept
impl<'de> Deserialize<'de> for MarkerPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A single branch name, never empty and free of whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BranchName(String);

impl BranchName {
    /// Clean one line of output into a branch name
    ///
    /// Returns `None` when nothing is left after cleaning.
    /// Markers only count in the first column; names indented by git keep
    /// any leading `*` or `+` of their own.
    pub fn from_line(line: &str, policy: MarkerPolicy) -> Option<Self> {
        let rest = match policy {
            MarkerPolicy::Keep => line,
            MarkerPolicy::Strip => line
                .strip_prefix(&[ACTIVE_BRANCH_MARKER, WORKTREE_BRANCH_MARKER][..])
                .unwrap_or(line),
        };

        let token: String = rest.chars().filter(|c| !c.is_whitespace()).collect();

        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name, returning the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for BranchName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered list of branch names, in the order `git branch` printed them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BranchList(Vec<BranchName>);

impl BranchList {
    /// Number of branches
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no branches were found
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the branch names in order
    pub fn iter(&self) -> std::slice::Iter<'_, BranchName> {
        self.0.iter()
    }

    /// Borrow the branch names as a slice
    pub fn as_slice(&self) -> &[BranchName] {
        &self.0
    }

    /// Convert into plain strings
    pub fn into_strings(self) -> Vec<String> {
        self.0.into_iter().map(BranchName::into_string).collect()
    }
}

impl IntoIterator for BranchList {
    type Item = BranchName;
    type IntoIter = std::vec::IntoIter<BranchName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BranchList {
    type Item = &'a BranchName;
    type IntoIter = std::slice::Iter<'a, BranchName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Extract branch names from raw `git branch` output
///
/// A marker in the first column of each line is handled according to
/// `policy`, then every whitespace character is removed and lines left empty
/// are dropped. Never fails.
pub fn extract(raw: &str, policy: MarkerPolicy) -> BranchList {
    BranchList(
        raw.split('\n')
            .filter_map(|line| BranchName::from_line(line, policy))
            .collect(),
    )
}
