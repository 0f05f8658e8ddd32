use std::io;
use std::path::PathBuf;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{resolve_shader_kind, validate_input_path, Cli};
use crate::config::ports::{ConfigPort, ToolkitConfig};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionRequest, ConversionResult};
use crate::service::config_service::ConfigService;
use crate::service::executor::ShellExecutor;
use crate::utils::utils::{default_output_path, save_metal_shader, setup_logging, ProgressManager};

pub fn process_args(args: Vec<String>) -> io::Result<String> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<String> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let input_path = validate_input_path(&cli.input)?;
    let kind = resolve_shader_kind(cli.kind, input_path)?;
    let request = ConversionRequest::with_entry_points(input_path, kind, &cli.old_entry, &cli.new_entry)?;

    let config = ConfigService::new(Box::new(CliConfigAdapter::new(cli.clone()))).get_config()?;
    let no_progress = config.no_progress || cli.print;
    let executor = ShellExecutor::new(&config);
    let facade: Box<dyn ConversionFacadeTrait> = Box::new(ConversionFacade::with_config(config, Box::new(executor)));

    let progress = ProgressManager::new(&format!("Converting {}", cli.input), no_progress);
    let result = facade.convert(&request);
    progress.finish(result.is_success());

    match result {
        ConversionResult::Success { code, logs } => {
            log::debug!("Conversion logs:\n{}", logs);
            if cli.print {
                println!("{}", code);
                return Ok("stdout".to_string());
            }
            let destination = cli
                .output
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(|| default_output_path(input_path));
            let saved = save_metal_shader(&code, &destination)?;
            Ok(saved.display().to_string())
        }
        ConversionResult::Failure { error, logs } => {
            report_logs(&logs);
            Err(error.into())
        }
    }
}

/// Logs gathered before a failure; `main` prints the error itself.
pub fn report_logs(logs: &str) {
    if !logs.trim().is_empty() {
        eprintln!("--- Logs ---");
        eprintln!("{}", logs.trim_end());
    }
}

// CLI configuration adapter, flags layered over the defaults
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<ToolkitConfig> {
        let defaults = ToolkitConfig::default();
        let mut noise_filters = defaults.noise_filters.clone();
        if let Some(extra) = &self.cli.filter {
            noise_filters.extend(extra.iter().filter(|f| !f.is_empty()).cloned());
        }
        Ok(ToolkitConfig {
            runtime_binary: self.cli.runtime.clone().unwrap_or(defaults.runtime_binary),
            image_name: self.cli.image.clone().unwrap_or(defaults.image_name),
            mount_point: self.cli.mount_point.clone().unwrap_or(defaults.mount_point),
            glsl_compiler: self.cli.glslc.clone().unwrap_or(defaults.glsl_compiler),
            cross_compiler: self.cli.spirv_cross.clone().unwrap_or(defaults.cross_compiler),
            search_paths: self.cli.search_path.clone().unwrap_or(defaults.search_paths),
            shell: self.cli.shell.clone().unwrap_or(defaults.shell),
            shell_args: defaults.shell_args,
            noise_filters,
            strict_exit_status: self.cli.strict_exit,
            workspace_root: defaults.workspace_root,
            no_progress: self.cli.no_progress,
        })
    }
}
