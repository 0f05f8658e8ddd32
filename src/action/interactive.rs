use dialoguer::{Confirm, Input, Select};
use std::io;
use std::path::{Path, PathBuf};
use crate::action::cli::report_logs;
use crate::config::ports::{ConfigPort, ToolkitConfig};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{validate_entry_point, ConversionRequest, ConversionResult, DEFAULT_ENTRY_POINT};
use crate::models::shader::ShaderKind;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::service::executor::ShellExecutor;
use crate::utils::utils::{default_output_path, save_metal_shader, setup_logging, ProgressManager};

pub fn process_interactive_mode() -> io::Result<String> {
    setup_logging("warn")?;
    println!("=== GLSL to Metal converter ===");
    let use_default_config = get_default_config_option()?;
    let config_port: Box<dyn ConfigPort> = if use_default_config {
        Box::new(DefaultConfigAdapter::new())
    } else {
        Box::new(InteractiveConfigAdapter::new())
    };
    let config = ConfigService::new(config_port).get_config()?;

    let input = get_input_path()?;
    let input_path = Path::new(&input);
    let kind = get_shader_kind(ShaderKind::from_path(input_path))?;
    let old_entry = get_entry_point("Old entry point name", Some(DEFAULT_ENTRY_POINT))?;
    let new_entry = get_entry_point("New entry point name", None)?;
    let request = ConversionRequest::with_entry_points(input_path, kind, &old_entry, &new_entry)?;

    let executor = ShellExecutor::new(&config);
    let no_progress = config.no_progress;
    let facade: Box<dyn ConversionFacadeTrait> = Box::new(ConversionFacade::with_config(config, Box::new(executor)));
    let progress = ProgressManager::new(&format!("Converting {}", input), no_progress);
    let result = facade.convert(&request);
    progress.finish(result.is_success());

    match result {
        ConversionResult::Success { code, logs } => {
            println!("--- Logs ---\n{}", logs.trim_end());
            println!("--- Metal ---\n{}", code);
            if !get_save_option()? {
                return Ok("not saved".to_string());
            }
            let destination = get_output_path(input_path)?;
            let saved = save_metal_shader(&code, &destination)?;
            Ok(saved.display().to_string())
        }
        ConversionResult::Failure { error, logs } => {
            report_logs(&logs);
            Err(error.into())
        }
    }
}

pub fn get_default_config_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("Use the default toolkit configuration? (docker, shader_converter_toolkit, /src)")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("configuration choice failed: {}", e)))
}

pub fn get_input_path() -> io::Result<String> {
    Input::new()
        .with_prompt("GLSL shader file (e.g. ./triangle.frag)")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_file() { Ok(()) } else { Err(format!("'{}' is not a file", input)) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_shader_kind(guess: Option<ShaderKind>) -> io::Result<ShaderKind> {
    let items: Vec<&str> = ShaderKind::ALL.iter().map(|k| k.display_name()).collect();
    let default = ShaderKind::ALL
        .iter()
        .position(|k| Some(*k) == guess)
        .unwrap_or(1);
    let index = Select::new()
        .with_prompt("Shader stage")
        .items(&items)
        .default(default)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("stage selection failed: {}", e)))?;
    Ok(ShaderKind::ALL[index])
}

pub fn get_entry_point(prompt: &str, default: Option<&str>) -> io::Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    input
        .validate_with(|name: &String| -> Result<(), String> {
            validate_entry_point(name.trim()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_save_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("Save the Metal shader?")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("save choice failed: {}", e)))
}

pub fn get_output_path(input: &Path) -> io::Result<PathBuf> {
    let suggested = default_output_path(input).display().to_string();
    Input::<String>::new()
        .with_prompt("Save as")
        .default(suggested)
        .interact_text()
        .map(PathBuf::from)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_strict_exit_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("Fail a stage on a non-zero exit status even when it prints no errors?")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("exit policy choice failed: {}", e)))
}

// Interactive configuration adapter
pub struct InteractiveConfigAdapter;

impl InteractiveConfigAdapter {
    pub fn new() -> Self {
        InteractiveConfigAdapter
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<ToolkitConfig> {
        let defaults = ToolkitConfig::default();
        let runtime_binary = prompt_with_default("Container runtime", &defaults.runtime_binary)?;
        let image_name = prompt_with_default("Toolkit image", &defaults.image_name)?;
        let mount_point = prompt_with_default("Container mount point", &defaults.mount_point)?;
        let strict_exit_status = get_strict_exit_option()?;
        Ok(ToolkitConfig {
            runtime_binary,
            image_name,
            mount_point,
            strict_exit_status,
            ..defaults
        })
    }
}

fn prompt_with_default(prompt: &str, default: &str) -> io::Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}
