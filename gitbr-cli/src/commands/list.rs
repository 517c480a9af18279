//! List command - Print local branches

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use gitbr_core::{BranchList, BranchLister, Config, Diagnostics, SilentDiagnostics};

/// Prints notices to stderr so stdout carries only branch names
struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn notice(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Arguments for the list command
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Repository directory to run git in (defaults to current directory)
    #[arg(short = 'C', long)]
    pub repo: Option<PathBuf>,

    /// Print the branches as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Do not print a notice when no branches are found
    #[arg(short, long)]
    pub quiet: bool,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        if verbose {
            tracing::info!(
                repo = ?self.repo,
                json = self.json,
                quiet = self.quiet,
                "Listing branches"
            );
        }

        let lister = BranchLister::from_config(config, self.repo.as_deref());
        self.run(&lister, &mut std::io::stdout()).await
    }

    /// List branches with `lister` and write them to `out`
    async fn run<W: Write>(&self, lister: &BranchLister, out: &mut W) -> anyhow::Result<()> {
        let branches = lister
            .clone()
            .with_diagnostics(self.diagnostics())
            .list_branches()
            .await?;

        self.write_branches(&branches, out)
    }

    fn diagnostics(&self) -> Arc<dyn Diagnostics> {
        if self.quiet {
            Arc::new(SilentDiagnostics)
        } else {
            Arc::new(StderrDiagnostics)
        }
    }

    fn write_branches<W: Write>(&self, branches: &BranchList, out: &mut W) -> anyhow::Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(branches)?)?;
        } else {
            for branch in branches {
                writeln!(out, "{}", branch)?;
            }
        }

        Ok(())
    }
}
