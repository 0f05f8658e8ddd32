use std::process::{Command, Stdio};
use log::{debug, warn};
use crate::config::ports::ToolkitConfig;
use crate::models::error::ConvertError;
use crate::models::execution::ExecutionOutcome;
use crate::service::toolkit::compose_search_path;
use crate::service::traits::i_service::ExecutorServiceTrait;

/// Runs command lines through a shell with the toolkit search path applied.
pub struct ShellExecutor {
    shell: String,
    shell_args: Vec<String>,
    search_path: String,
    strict_exit_status: bool,
}

impl ShellExecutor {
    /// Composes `PATH` from the configured candidates and the current environment.
    pub fn new(config: &ToolkitConfig) -> Self {
        let inherited = std::env::var("PATH").ok();
        let home = std::env::var("HOME").ok();
        let search_path = compose_search_path(&config.search_paths, inherited.as_deref(), home.as_deref());
        ShellExecutor {
            shell: config.shell.clone(),
            shell_args: config.shell_args.clone(),
            search_path,
            strict_exit_status: config.strict_exit_status,
        }
    }

    pub fn search_path(&self) -> &str {
        &self.search_path
    }
}

impl ExecutorServiceTrait for ShellExecutor {
    fn run(&self, command: &str) -> Result<ExecutionOutcome, ConvertError> {
        debug!("Running: {}", command);
        // stdout and stderr are drained together, so a chatty tool cannot stall on a full pipe
        let output = Command::new(&self.shell)
            .args(&self.shell_args)
            .arg(command)
            .env("PATH", &self.search_path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ConvertError::LaunchFailed(format!("{}: {}", self.shell, e)))?;

        let outcome = ExecutionOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            status: output.status.code(),
        };

        if !output.status.success() {
            if !outcome.stderr.is_empty() {
                return Err(ConvertError::ExecutionFailed(outcome.stderr));
            }
            if self.strict_exit_status {
                return Err(ConvertError::ExecutionFailed(format!(
                    "'{}' exited with {} and no error output",
                    command, output.status
                )));
            }
            warn!("'{}' exited with {} but wrote nothing to stderr, continuing", command, output.status);
        }
        Ok(outcome)
    }
}
