//! Listing local branches through the git CLI

use std::sync::Arc;

use super::extract::{extract, BranchList, MarkerPolicy};
use super::runner::{CommandRunner, ProcessRunner};
use crate::config::Config;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::Result;

/// Arguments passed to git to list local branches
pub const LIST_BRANCHES_ARGS: &[&str] = &["branch"];

/// Notice emitted when a listing succeeds but finds nothing
pub const NO_BRANCHES_NOTICE: &str = "No local branches were found.";

/// Lists local branches by running `git branch` and extracting its output
#[derive(Clone)]
pub struct BranchLister {
    runner: Arc<dyn CommandRunner>,
    diagnostics: Arc<dyn Diagnostics>,
    git_path: String,
    marker: MarkerPolicy,
}

impl std::fmt::Debug for BranchLister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BranchLister")
            .field("git_path", &self.git_path)
            .field("marker", &self.marker)
            .finish_non_exhaustive()
    }
}

impl BranchLister {
    /// Create a lister with the given runner, reporting to `tracing`
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            diagnostics: Arc::new(TracingDiagnostics),
            git_path: "git".to_string(),
            marker: MarkerPolicy::default(),
        }
    }

    /// Create a lister backed by a real git process in `workdir`
    pub fn from_config(config: &Config, workdir: Option<&std::path::Path>) -> Self {
        let mut runner = ProcessRunner::new().with_timeout(config.git.timeout);
        if let Some(dir) = workdir {
            runner = runner.with_workdir(dir);
        }

        Self::new(Arc::new(runner))
            .with_git_path(config.git.git_path.clone())
            .with_marker_policy(config.git.marker)
    }

    /// Send notices to a different sink
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Use a custom git executable
    pub fn with_git_path(mut self, path: impl Into<String>) -> Self {
        self.git_path = path.into();
        self
    }

    /// Set how branch markers are handled
    pub fn with_marker_policy(mut self, marker: MarkerPolicy) -> Self {
        self.marker = marker;
        self
    }

    /// Get the marker policy in use
    pub fn marker_policy(&self) -> MarkerPolicy {
        self.marker
    }

    /// List local branches
    ///
    /// Runner failures are returned unchanged and nothing is extracted.
    /// An empty result is not an error: a notice is emitted and an empty
    /// list is returned.
    pub async fn list_branches(&self) -> Result<BranchList> {
        tracing::debug!(git = %self.git_path, "Listing local branches");

        let stdout = self.runner.run(&self.git_path, LIST_BRANCHES_ARGS).await?;
        let branches = extract(&stdout, self.marker);

        if branches.is_empty() {
            self.diagnostics.notice(NO_BRANCHES_NOTICE);
        } else {
            tracing::debug!(count = branches.len(), "Found local branches");
        }

        Ok(branches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::SilentDiagnostics;
    use crate::Error;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Runner returning canned output and recording its invocations
    struct FakeRunner {
        response: std::result::Result<String, String>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeRunner {
        fn ok(stdout: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(stdout.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Err(message.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(&self, program: &str, args: &[&str]) -> Result<String> {
            let mut line = vec![program];
            line.extend_from_slice(args);
            self.calls.lock().unwrap().push(line.join(" "));

            match &self.response {
                Ok(stdout) => Ok(stdout.clone()),
                Err(message) => Err(Error::execution(program, args, message.clone())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingDiagnostics {
        notices: Mutex<Vec<String>>,
    }

    impl Diagnostics for RecordingDiagnostics {
        fn notice(&self, message: &str) {
            self.notices.lock().unwrap().push(message.to_string());
        }
    }

    fn lister(runner: Arc<FakeRunner>, diagnostics: Arc<RecordingDiagnostics>) -> BranchLister {
        BranchLister::new(runner).with_diagnostics(diagnostics)
    }

    #[tokio::test]
    async fn test_list_branches() {
        let runner = FakeRunner::ok("  main\n* feature/login\n  hotfix\n");
        let diagnostics = Arc::new(RecordingDiagnostics::default());

        let branches = lister(runner.clone(), diagnostics.clone())
            .list_branches()
            .await
            .unwrap();

        assert_eq!(branches.into_strings(), vec!["main", "feature/login", "hotfix"]);
        assert_eq!(runner.calls(), vec!["git branch"]);
        assert!(diagnostics.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_keep_marker_policy() {
        let runner = FakeRunner::ok("* main\n");
        let diagnostics = Arc::new(RecordingDiagnostics::default());

        let branches = lister(runner, diagnostics)
            .with_marker_policy(MarkerPolicy::Keep)
            .list_branches()
            .await
            .unwrap();

        assert_eq!(branches.into_strings(), vec!["*main"]);
    }

    #[tokio::test]
    async fn test_custom_git_path() {
        let runner = FakeRunner::ok("main\n");
        let diagnostics = Arc::new(RecordingDiagnostics::default());

        lister(runner.clone(), diagnostics)
            .with_git_path("/opt/git/bin/git")
            .list_branches()
            .await
            .unwrap();

        assert_eq!(runner.calls(), vec!["/opt/git/bin/git branch"]);
    }

    #[tokio::test]
    async fn test_empty_result_is_success_with_notice() {
        let runner = FakeRunner::ok("\n  \n");
        let diagnostics = Arc::new(RecordingDiagnostics::default());

        let branches = lister(runner, diagnostics.clone())
            .list_branches()
            .await
            .unwrap();

        assert!(branches.is_empty());
        assert_eq!(
            *diagnostics.notices.lock().unwrap(),
            vec![NO_BRANCHES_NOTICE.to_string()]
        );
    }

    #[tokio::test]
    async fn test_runner_failure_propagates() {
        let runner = FakeRunner::failing("fatal: not a git repository");
        let diagnostics = Arc::new(RecordingDiagnostics::default());

        let result = lister(runner.clone(), diagnostics.clone())
            .list_branches()
            .await;

        match result {
            Err(Error::Execution { command, message }) => {
                assert_eq!(command, "git branch");
                assert_eq!(message, "fatal: not a git repository");
            }
            other => panic!("expected execution error, got {:?}", other),
        }
        assert_eq!(runner.calls().len(), 1);
        assert!(diagnostics.notices.lock().unwrap().is_empty());
    }

    fn git(dir: &std::path::Path, args: &[&str]) -> bool {
        std::process::Command::new("git")
            .args(["-c", "user.name=gitbr", "-c", "user.email=gitbr@example.com"])
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(dir)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    #[tokio::test]
    async fn test_list_branches_in_real_repo() {
        let dir = tempfile::tempdir().unwrap();
        if !git(dir.path(), &["init", "-q"]) {
            // git not available
            return;
        }
        assert!(git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/trunk"]));
        assert!(git(dir.path(), &["commit", "-q", "--allow-empty", "-m", "init"]));
        assert!(git(dir.path(), &["branch", "feature/login"]));

        let branches = BranchLister::from_config(&Config::default(), Some(dir.path()))
            .with_diagnostics(Arc::new(RecordingDiagnostics::default()))
            .list_branches()
            .await
            .unwrap();

        assert_eq!(branches.into_strings(), vec!["feature/login", "trunk"]);
    }

    #[tokio::test]
    async fn test_silent_diagnostics_still_returns_empty_list() {
        let branches = BranchLister::new(FakeRunner::ok(""))
            .with_diagnostics(Arc::new(SilentDiagnostics))
            .list_branches()
            .await
            .unwrap();

        assert!(branches.is_empty());
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.git.git_path = "/usr/local/bin/git".to_string();
        config.git.marker = MarkerPolicy::Keep;

        let lister = BranchLister::from_config(&config, None);
        assert_eq!(lister.git_path, "/usr/local/bin/git");
        assert_eq!(lister.marker_policy(), MarkerPolicy::Keep);
    }
}
