//! External tool invocation.
//!
//! Every subprocess the dispatcher runs goes through the [`ToolRunner`]
//! trait so that command sequences can be exercised without touching the
//! operating system. The production implementation streams child stdout to
//! the console and applies a configurable failure policy.

use std::path::PathBuf;
use std::process::Stdio;

use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;

use crate::cli::OutputManager;
use crate::error::ToolError;

/// A fully described external tool invocation: program, ordered arguments,
/// and an optional stdin payload (used for `docker login --password-stdin`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Program to execute
    pub program: PathBuf,
    /// Arguments, in order
    pub args: Vec<String>,
    /// Payload written to the child's stdin, if any. Never logged.
    pub stdin: Option<String>,
}

impl ToolInvocation {
    /// Start building an invocation of `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the stdin payload.
    pub fn stdin(mut self, payload: impl Into<String>) -> Self {
        self.stdin = Some(payload.into());
        self
    }

    /// Rendering of the command line for diagnostics. Excludes stdin.
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Exit information from a completed tool invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code; `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ToolOutput {
    /// Whether the tool exited zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// What to do when an external tool exits nonzero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Turn the nonzero exit into an error and stop the run
    #[default]
    Abort,
    /// Log a warning and keep going (fire-and-forget)
    Continue,
}

/// Seam between the dispatcher and the operating system.
pub trait ToolRunner {
    /// Run one invocation to completion.
    fn run(
        &mut self,
        invocation: ToolInvocation,
    ) -> impl Future<Output = Result<ToolOutput, ToolError>>;
}

/// Production runner backed by `tokio::process`.
///
/// Stdout is streamed line-by-line through the output manager; stderr is
/// inherited so tool diagnostics land on the console unmodified.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    policy: FailurePolicy,
    output: OutputManager,
}

impl ProcessRunner {
    /// Create a runner with the given failure policy.
    pub fn new(policy: FailurePolicy, output: OutputManager) -> Self {
        Self { policy, output }
    }
}

impl ToolRunner for ProcessRunner {
    async fn run(&mut self, invocation: ToolInvocation) -> Result<ToolOutput, ToolError> {
        let command_line = invocation.command_line();
        log::debug!("running: {command_line}");

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        command.stdout(Stdio::piped());
        command.stdin(if invocation.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });

        let mut child = command.spawn().map_err(|source| ToolError::Spawn {
            command: command_line.clone(),
            source,
        })?;

        if let Some(payload) = &invocation.stdin
            && let Some(mut stdin) = child.stdin.take()
        {
            stdin
                .write_all(payload.as_bytes())
                .await
                .map_err(|source| ToolError::Stdin {
                    command: command_line.clone(),
                    source,
                })?;
            // Dropping the handle closes the pipe so the child sees EOF.
        }

        if let Some(stdout) = child.stdout.take() {
            let reader = BufReader::new(stdout);
            let mut lines = reader.lines();
            while let Ok(Some(line)) = lines.next_line().await {
                self.output.indent(&line);
            }
        }

        let status = child.wait().await.map_err(|source| ToolError::Spawn {
            command: command_line.clone(),
            source,
        })?;

        let output = ToolOutput {
            code: status.code(),
        };
        if !output.success() {
            let code = output.code.unwrap_or(-1);
            match self.policy {
                FailurePolicy::Abort => {
                    return Err(ToolError::Failed {
                        command: command_line,
                        code,
                    });
                }
                FailurePolicy::Continue => {
                    self.output
                        .warn(&format!("{command_line} exited with status {code}, continuing"));
                }
            }
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_runner(policy: FailurePolicy) -> ProcessRunner {
        ProcessRunner::new(policy, OutputManager::new(false, true))
    }

    #[tokio::test]
    async fn successful_exit_reports_code_zero() {
        let mut runner = quiet_runner(FailurePolicy::Abort);
        let output = runner
            .run(ToolInvocation::new("sh").args(["-c", "exit 0"]))
            .await
            .unwrap();
        assert!(output.success());
    }

    #[tokio::test]
    async fn nonzero_exit_aborts_by_default() {
        let mut runner = quiet_runner(FailurePolicy::Abort);
        let err = runner
            .run(ToolInvocation::new("sh").args(["-c", "exit 7"]))
            .await
            .unwrap_err();
        match err {
            ToolError::Failed { code, .. } => assert_eq!(code, 7),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn nonzero_exit_is_surfaced_under_continue() {
        let mut runner = quiet_runner(FailurePolicy::Continue);
        let output = runner
            .run(ToolInvocation::new("sh").args(["-c", "exit 7"]))
            .await
            .unwrap();
        assert_eq!(output.code, Some(7));
        assert!(!output.success());
    }

    #[tokio::test]
    async fn stdin_payload_reaches_the_child() {
        // `grep -q` exits 0 only if the payload arrived on stdin.
        let mut runner = quiet_runner(FailurePolicy::Abort);
        let output = runner
            .run(
                ToolInvocation::new("grep")
                    .args(["-q", "sesame"])
                    .stdin("open sesame\n"),
            )
            .await
            .unwrap();
        assert!(output.success());
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let mut runner = quiet_runner(FailurePolicy::Continue);
        let err = runner
            .run(ToolInvocation::new("/nonexistent/tool-xyz"))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Spawn { .. }));
    }

    #[test]
    fn command_line_excludes_stdin() {
        let invocation = ToolInvocation::new("docker")
            .args(["login", "--username", "AWS", "--password-stdin"])
            .stdin("hunter2");
        let line = invocation.command_line();
        assert_eq!(line, "docker login --username AWS --password-stdin");
        assert!(!line.contains("hunter2"));
    }
}
