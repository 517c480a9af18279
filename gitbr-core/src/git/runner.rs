//! Process execution for git commands

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::{Error, Result};

/// Trait for running an external command and capturing its stdout
///
/// Any spawn failure or unsuccessful exit is reported as a single
/// [`Error::Execution`]; callers never look at exit codes or stderr.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and return its standard output
    async fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    /// Directory to run in (defaults to the current directory)
    workdir: Option<PathBuf>,
    /// Upper bound on how long a command may take
    timeout: Option<Duration>,
}

impl ProcessRunner {
    /// Create a runner using the current directory and no timeout
    pub fn new() -> Self {
        Self::default()
    }

    /// Run commands in the given directory
    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(workdir.into());
        self
    }

    /// Fail commands that run longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the configured working directory
    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    fn build_command(&self, program: &str, args: &[&str]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(ref dir) = self.workdir {
            cmd.current_dir(dir);
        }

        cmd
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        if let Some(ref dir) = self.workdir {
            if !dir.is_dir() {
                return Err(Error::execution(
                    program,
                    args,
                    format!("Working directory does not exist: {}", dir.display()),
                ));
            }
        }

        let mut cmd = self.build_command(program, args);
        let output = cmd.output();

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, output).await.map_err(|_| {
                Error::execution(program, args, format!("timed out after {:?}", limit))
            })?,
            None => output.await,
        };

        let output = output.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::execution(
                    program,
                    args,
                    format!("executable not found at '{}'. Is git installed?", program),
                )
            } else {
                Error::execution(program, args, e.to_string())
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, stderr)
            };
            return Err(Error::execution(program, args, message));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
