//! Command helper methods for Test.

use super::api::SESSION_TOKEN;
use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an inferadb-provider command with a clean environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("inferadb-provider").expect("failed to find inferadb-provider binary");
        cmd.env_remove("INFERADB_ENDPOINT");
        cmd.env_remove("INFERADB_SESSION_TOKEN");
        cmd.env_remove("INFERADB_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Command pointed at a mock API with a valid token.
    pub fn api_cmd(&self, endpoint: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--endpoint", endpoint, "--session-token", SESSION_TOKEN]);
        cmd
    }

    /// Shortcut for `inferadb-provider schema [TYPE]`.
    pub fn schema(&self, type_name: Option<&str>) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("schema");
        if let Some(name) = type_name {
            cmd.arg(name);
        }
        cmd.output().expect("failed to run schema")
    }

    /// Run a command against `endpoint` on a blocking thread.
    ///
    /// The mock server keeps serving on its own runtime while the child
    /// process runs.
    pub async fn run_against(&self, endpoint: &str, args: &[&str]) -> Output {
        let mut cmd = self.api_cmd(endpoint);
        cmd.args(args);
        tokio::task::spawn_blocking(move || cmd.output().expect("failed to run command"))
            .await
            .expect("command thread panicked")
    }
}
