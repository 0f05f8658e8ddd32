use std::fmt;
use std::io;

/// Every way a conversion can stop early.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConvertError {
    RuntimeUnavailable(String),
    ImageNotFound(String),
    ExecutionFailed(String),
    LaunchFailed(String),
    Io(String),
    EmptyOutput,
    InvalidRequest(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::RuntimeUnavailable(runtime) => write!(
                f,
                "Container runtime '{}' is not available. Please install Docker or OrbStack.",
                runtime
            ),
            ConvertError::ImageNotFound(image) => {
                write!(f, "{} image not found. Please build it first.", image)
            }
            ConvertError::ExecutionFailed(msg) => write!(f, "Command failed: {}", msg),
            ConvertError::LaunchFailed(reason) => write!(f, "Failed to launch shell: {}", reason),
            ConvertError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConvertError::EmptyOutput => write!(f, "Invalid output from the cross-compiler (no Metal code produced)"),
            ConvertError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<io::Error> for ConvertError {
    fn from(e: io::Error) -> Self {
        ConvertError::Io(e.to_string())
    }
}

impl From<ConvertError> for io::Error {
    fn from(e: ConvertError) -> Self {
        let kind = match e {
            ConvertError::InvalidRequest(_) => io::ErrorKind::InvalidInput,
            ConvertError::RuntimeUnavailable(_) | ConvertError::ImageNotFound(_) => io::ErrorKind::NotFound,
            _ => io::ErrorKind::Other,
        };
        io::Error::new(kind, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_displays_the_plain_message() {
        let err = io::Error::from(ConvertError::ImageNotFound("shader_converter_toolkit".to_string()));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "shader_converter_toolkit image not found. Please build it first."
        );
        assert!(!err.to_string().contains("Custom"));
    }

    #[test]
    fn invalid_request_maps_to_invalid_input() {
        let err = io::Error::from(ConvertError::InvalidRequest("bad".to_string()));
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "Invalid request: bad");
    }
}
