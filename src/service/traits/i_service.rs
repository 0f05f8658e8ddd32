use crate::models::error::ConvertError;
use crate::models::execution::ExecutionOutcome;

// Executor port, the only place external processes are started
pub trait ExecutorServiceTrait: Send + Sync {
    /// Runs a complete command line through the shell and waits for it to exit.
    /// # Errors
    /// - `LaunchFailed` when the shell cannot be started
    /// - `ExecutionFailed` when the command exits non-zero and wrote to stderr
    fn run(&self, command: &str) -> Result<ExecutionOutcome, ConvertError>;
}
