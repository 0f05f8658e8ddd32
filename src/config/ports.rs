use std::io;
use std::path::PathBuf;

pub const DEFAULT_RUNTIME: &str = "docker";
pub const DEFAULT_IMAGE: &str = "shader_converter_toolkit";
pub const DEFAULT_MOUNT_POINT: &str = "/src";
pub const DEFAULT_GLSL_COMPILER: &str = "glslc";
pub const DEFAULT_CROSS_COMPILER: &str = "spirv-cross";
pub const PLATFORM_WARNING: &str = "WARNING: The requested image's platform";

pub fn default_search_paths() -> Vec<String> {
    vec![
        "/usr/local/bin".to_string(),
        "/opt/homebrew/bin".to_string(),
        "/usr/bin".to_string(),
        "~/.orbstack/bin".to_string(),
    ]
}

// Everything the executor and the facade need to know about the toolkit
#[derive(Debug, Clone, PartialEq)]
pub struct ToolkitConfig {
    pub runtime_binary: String,
    pub image_name: String,
    pub mount_point: String,
    pub glsl_compiler: String,
    pub cross_compiler: String,
    /// Prepended to the inherited `PATH`, in order.
    pub search_paths: Vec<String>,
    pub shell: String,
    pub shell_args: Vec<String>,
    /// Lines of stage 2 output containing any of these are dropped.
    pub noise_filters: Vec<String>,
    /// Fail a command on non-zero exit even when stderr is empty.
    pub strict_exit_status: bool,
    pub workspace_root: PathBuf,
    pub no_progress: bool,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        ToolkitConfig {
            runtime_binary: DEFAULT_RUNTIME.to_string(),
            image_name: DEFAULT_IMAGE.to_string(),
            mount_point: DEFAULT_MOUNT_POINT.to_string(),
            glsl_compiler: DEFAULT_GLSL_COMPILER.to_string(),
            cross_compiler: DEFAULT_CROSS_COMPILER.to_string(),
            search_paths: default_search_paths(),
            shell: "/bin/sh".to_string(),
            shell_args: vec!["-c".to_string()],
            noise_filters: vec![PLATFORM_WARNING.to_string()],
            strict_exit_status: false,
            workspace_root: std::env::temp_dir(),
            no_progress: false,
        }
    }
}

// Configuration source port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<ToolkitConfig>;
}
