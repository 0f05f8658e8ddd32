use std::path::PathBuf;
use std::sync::LazyLock;
use regex::Regex;
use crate::models::error::ConvertError;
use crate::models::shader::ShaderKind;

pub const DEFAULT_ENTRY_POINT: &str = "main";

static ENTRY_POINT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("entry point pattern is valid"));

// One conversion, built by the front end and consumed by the facade
#[derive(Clone, Debug)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub kind: ShaderKind,
    pub old_entry_point: String,
    pub new_entry_point: String,
}

impl ConversionRequest {
    /// Builds a request renaming `main` to `new_entry_point`.
    pub fn new(input_path: impl Into<PathBuf>, kind: ShaderKind, new_entry_point: &str) -> Result<Self, ConvertError> {
        Self::with_entry_points(input_path, kind, DEFAULT_ENTRY_POINT, new_entry_point)
    }

    pub fn with_entry_points(
        input_path: impl Into<PathBuf>,
        kind: ShaderKind,
        old_entry_point: &str,
        new_entry_point: &str,
    ) -> Result<Self, ConvertError> {
        let old_entry_point = old_entry_point.trim();
        let new_entry_point = new_entry_point.trim();
        if new_entry_point.is_empty() {
            return Err(ConvertError::InvalidRequest("new entry point name is required".to_string()));
        }
        validate_entry_point(old_entry_point)?;
        validate_entry_point(new_entry_point)?;
        Ok(ConversionRequest {
            input_path: input_path.into(),
            kind,
            old_entry_point: old_entry_point.to_string(),
            new_entry_point: new_entry_point.to_string(),
        })
    }

    pub fn file_name(&self) -> Result<String, ConvertError> {
        self.input_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| ConvertError::InvalidRequest(format!("'{}' has no file name", self.input_path.display())))
    }
}

/// Entry points are spliced into a shell command, so only C identifiers pass.
pub fn validate_entry_point(name: &str) -> Result<(), ConvertError> {
    if !ENTRY_POINT_PATTERN.is_match(name) {
        return Err(ConvertError::InvalidRequest(format!(
            "'{}' is not a valid entry point name",
            name
        )));
    }
    Ok(())
}

// Outcome handed back to the caller for display or export
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionResult {
    Success { code: String, logs: String },
    Failure { error: ConvertError, logs: String },
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success { .. })
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ConversionResult::Success { code, .. } => Some(code),
            ConversionResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ConvertError> {
        match self {
            ConversionResult::Success { .. } => None,
            ConversionResult::Failure { error, .. } => Some(error),
        }
    }

    pub fn logs(&self) -> &str {
        match self {
            ConversionResult::Success { logs, .. } | ConversionResult::Failure { logs, .. } => logs,
        }
    }
}
