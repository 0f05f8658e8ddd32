use log::{info, warn};
use regex::RegexSet;
use crate::config::ports::ToolkitConfig;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionRequest, ConversionResult};
use crate::models::error::ConvertError;
use crate::models::execution::ExecutionOutcome;
use crate::service::toolkit::{
    container_command, cross_compile_command, glsl_compile_command, image_query_command,
    runtime_query_command, spirv_artifact_name,
};
use crate::service::traits::i_service::ExecutorServiceTrait;
use crate::service::workspace::Workspace;
use crate::utils::utils::{create_filter_set, filter_noise};

const GLSL_SECTION: &str = "=== GLSL to SPIR-V Conversion ===";
const MSL_SECTION: &str = "=== SPIR-V to Metal Conversion ===";

pub struct ConversionFacade {
    config: ToolkitConfig,
    executor: Box<dyn ExecutorServiceTrait>,
    filter_set: RegexSet,
}

impl ConversionFacade {
    pub fn with_config(config: ToolkitConfig, executor: Box<dyn ExecutorServiceTrait>) -> Self {
        let filter_set = create_filter_set(&config.noise_filters);
        ConversionFacade {
            config,
            executor,
            filter_set,
        }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        info!(
            "Converting {} ({}), entry point {} -> {}",
            request.input_path.display(),
            request.kind,
            request.old_entry_point,
            request.new_entry_point
        );
        let mut logs = String::new();
        match self.run_pipeline(request, &mut logs) {
            Ok(code) => {
                info!("Conversion succeeded, {} bytes of Metal source", code.len());
                ConversionResult::Success { code, logs }
            }
            Err(error) => {
                warn!("Conversion failed: {}", error);
                ConversionResult::Failure { error, logs }
            }
        }
    }
}

impl ConversionFacade {
    fn run_pipeline(&self, request: &ConversionRequest, logs: &mut String) -> Result<String, ConvertError> {
        self.check_runtime()?;
        self.check_image()?;

        let input_name = request.file_name()?;
        let mut workspace = Workspace::create(&self.config.workspace_root)?;
        let result = self.run_stages(&workspace, request, &input_name, logs);
        if let Err(e) = workspace.cleanup() {
            warn!("Failed to remove workspace {}: {}", workspace.path().display(), e);
        }
        result
    }

    fn check_runtime(&self) -> Result<(), ConvertError> {
        let missing = || ConvertError::RuntimeUnavailable(self.config.runtime_binary.clone());
        match self.executor.run(&runtime_query_command(&self.config)) {
            Ok(outcome) if !outcome.stdout.trim().is_empty() => Ok(()),
            Ok(_) | Err(ConvertError::ExecutionFailed(_)) => Err(missing()),
            Err(e) => Err(e),
        }
    }

    fn check_image(&self) -> Result<(), ConvertError> {
        let outcome = self.executor.run(&image_query_command(&self.config))?;
        if outcome.stdout.trim().is_empty() {
            return Err(ConvertError::ImageNotFound(self.config.image_name.clone()));
        }
        Ok(())
    }

    fn run_stages(
        &self,
        workspace: &Workspace,
        request: &ConversionRequest,
        input_name: &str,
        logs: &mut String,
    ) -> Result<String, ConvertError> {
        workspace.stage(&request.input_path)?;
        let spirv_name = spirv_artifact_name(input_name);

        info!("Stage 1: {} -> {}", input_name, spirv_name);
        logs.push_str(GLSL_SECTION);
        logs.push('\n');
        let glsl = glsl_compile_command(&self.config, input_name, &spirv_name);
        let outcome = self.run_in_container(workspace, &glsl, logs)?;
        logs.push_str(&format!("Output: {}\n\n", outcome.stdout));

        info!("Stage 2: {} -> Metal ({})", spirv_name, request.kind.stage_tag());
        logs.push_str(MSL_SECTION);
        logs.push('\n');
        let cross = cross_compile_command(
            &self.config,
            &spirv_name,
            &request.old_entry_point,
            &request.new_entry_point,
            request.kind,
        );
        let outcome = self.run_in_container(workspace, &cross, logs)?;

        let code = filter_noise(&outcome.stdout, &self.filter_set);
        if code.is_empty() {
            return Err(ConvertError::EmptyOutput);
        }
        Ok(code)
    }

    /// Runs `inner` in the toolkit container and records its stderr in `logs`,
    /// including the stderr of a failed run.
    fn run_in_container(
        &self,
        workspace: &Workspace,
        inner: &str,
        logs: &mut String,
    ) -> Result<ExecutionOutcome, ConvertError> {
        let command = container_command(&self.config, workspace.path(), inner);
        match self.executor.run(&command) {
            Ok(outcome) => {
                if !outcome.stderr.is_empty() {
                    logs.push_str(&format!("Warnings/Errors:\n{}\n", outcome.stderr));
                }
                Ok(outcome)
            }
            Err(ConvertError::ExecutionFailed(stderr)) => {
                logs.push_str(&format!("Warnings/Errors:\n{}\n", stderr));
                Err(ConvertError::ExecutionFailed(stderr))
            }
            Err(e) => Err(e),
        }
    }
}
