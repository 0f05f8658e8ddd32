// Captured result of one external command
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
}

impl ExecutionOutcome {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}
