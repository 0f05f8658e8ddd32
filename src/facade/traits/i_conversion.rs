use crate::models::conversion::{ConversionRequest, ConversionResult};

// Facade port coordinating one GLSL to Metal conversion
pub trait ConversionFacadeTrait: Send + Sync {
    /// Runs preflight checks, both compiler stages and cleanup for `request`.
    /// # Returns
    /// - `Success` with the Metal source and stage logs
    /// - `Failure` with the error and every log line gathered before it
    fn convert(&self, request: &ConversionRequest) -> ConversionResult;
}
