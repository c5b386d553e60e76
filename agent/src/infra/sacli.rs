//! Infrastructure adapter implementing the `AccessServer` port over the
//! sacli administration CLI.
//!
//! `SacliCli<R>` routes every sacli invocation through a `CommandRunner`,
//! generic so that tests can inject a recording runner without spawning
//! real processes. The argument vocabulary below is the Access Server's
//! fixed CLI contract and must not be reworded.

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{AccessServer, CommandOutcome, CommandRunner};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::AgentConfig;

pub struct SacliCli<R: CommandRunner> {
    runner: R,
    sacli_path: String,
    elevate: bool,
}

impl<R: CommandRunner> SacliCli<R> {
    #[must_use]
    pub fn new(runner: R, sacli_path: impl Into<String>, elevate: bool) -> Self {
        Self {
            runner,
            sacli_path: sacli_path.into(),
            elevate,
        }
    }

    /// Run one sacli command, folding every expected failure mode into a
    /// [`CommandOutcome`]. Success is determined solely by exit status zero.
    ///
    /// The full argument vector is logged verbatim before invocation, which
    /// means `SetLocalPassword` logs the password in plaintext. Known
    /// limitation, preserved from the tool's original operational behaviour.
    async fn run_sacli(&self, args: &[&str], elevate: bool) -> CommandOutcome {
        let mut argv: Vec<&str> = Vec::with_capacity(args.len() + 1);
        let program = if elevate {
            argv.push(self.sacli_path.as_str());
            "sudo"
        } else {
            self.sacli_path.as_str()
        };
        argv.extend_from_slice(args);

        tracing::info!(program, args = %argv.join(" "), "executing sacli command");

        match self.runner.run(program, &argv).await {
            Ok(out) if out.status.success() => {
                tracing::info!("sacli command succeeded");
                CommandOutcome::ok(String::from_utf8_lossy(&out.stdout).trim())
            }
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
                tracing::error!(stderr = %stderr, "sacli command failed");
                CommandOutcome::failed(stderr)
            }
            Err(err) => {
                tracing::error!(error = %err, "sacli command error");
                CommandOutcome::failed(err.to_string())
            }
        }
    }
}

impl SacliCli<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(
            TokioCommandRunner::new(Duration::from_secs(config.command_timeout_secs)),
            config.sacli_path.clone(),
            config.use_sudo,
        )
    }
}

#[async_trait]
impl<R: CommandRunner> AccessServer for SacliCli<R> {
    async fn ensure_connect_user(&self, username: &str) -> CommandOutcome {
        self.run_sacli(
            &["--user", username, "UserPropPut", "type", "user_connect"],
            self.elevate,
        )
        .await
    }

    async fn set_local_password(&self, username: &str, password: &str) -> CommandOutcome {
        self.run_sacli(
            &["--user", username, "--new_pass", password, "SetLocalPassword"],
            self.elevate,
        )
        .await
    }

    async fn add_profile_token(&self, username: &str) -> CommandOutcome {
        self.run_sacli(&["--user", username, "AddProfileToken"], self.elevate)
            .await
    }

    async fn get_user_login(&self, username: &str) -> CommandOutcome {
        self.run_sacli(&["--user", username, "GetUserlogin"], self.elevate)
            .await
    }
}
