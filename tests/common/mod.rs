//! Shared helpers: a scripted executor that records every command line.

#![allow(dead_code)]

use glsl_to_metal::{ConvertError, ExecutionOutcome, ExecutorServiceTrait, ToolkitConfig};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub type Responder = Box<dyn Fn(&str) -> Result<ExecutionOutcome, ConvertError> + Send + Sync>;

pub struct FakeExecutor {
    calls: Arc<Mutex<Vec<String>>>,
    responder: Responder,
}

impl FakeExecutor {
    pub fn new(responder: Responder) -> (Self, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            FakeExecutor {
                calls: Arc::clone(&calls),
                responder,
            },
            calls,
        )
    }
}

impl ExecutorServiceTrait for FakeExecutor {
    fn run(&self, command: &str) -> Result<ExecutionOutcome, ConvertError> {
        self.calls.lock().unwrap().push(command.to_string());
        (self.responder)(command)
    }
}

pub fn ok(stdout: &str) -> Result<ExecutionOutcome, ConvertError> {
    Ok(ExecutionOutcome {
        stdout: stdout.to_string(),
        stderr: String::new(),
        status: Some(0),
    })
}

pub fn ok_with_stderr(stdout: &str, stderr: &str) -> Result<ExecutionOutcome, ConvertError> {
    Ok(ExecutionOutcome {
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
        status: Some(0),
    })
}

pub const PLATFORM_NOISE: &str =
    "WARNING: The requested image's platform (linux/amd64) does not match the detected host platform (linux/arm64/v8)";

pub fn metal_source(entry: &str) -> String {
    format!(
        "#include <metal_stdlib>\nusing namespace metal;\n\nfragment float4 {}(float4 gl_FragCoord [[position]])\n{{\n    return float4(1.0);\n}}\n",
        entry
    )
}

/// Runtime and image present; stage 1 silent; stage 2 prints `stage2_stdout`.
pub fn toolkit_responder(stage2_stdout: String) -> Responder {
    Box::new(move |command: &str| {
        if command.starts_with("command -v") {
            ok("/usr/local/bin/docker\n")
        } else if command.contains(" images -q ") {
            ok("3f2a9c1b7d4e\n")
        } else if command.contains("spirv-cross") {
            ok(&stage2_stdout)
        } else if command.contains("glslc") {
            ok("")
        } else {
            panic!("unexpected command: {}", command)
        }
    })
}

pub fn test_config(name: &str) -> ToolkitConfig {
    let workspace_root = std::env::temp_dir().join(format!("glsl_to_metal_it_{}", name));
    let _ = std::fs::remove_dir_all(&workspace_root);
    ToolkitConfig {
        workspace_root,
        no_progress: true,
        ..ToolkitConfig::default()
    }
}

pub fn write_shader(config: &ToolkitConfig, name: &str, source: &[u8]) -> PathBuf {
    let dir = config.workspace_root.with_extension("inputs");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, source).unwrap();
    path
}

/// Host side of the bind mount in a container command.
pub fn mounted_workspace(command: &str) -> Option<PathBuf> {
    let start = command.find("src=")? + "src=".len();
    let end = command[start..].find(",target=")? + start;
    Some(PathBuf::from(&command[start..end]))
}

pub fn container_calls(calls: &[String]) -> Vec<String> {
    calls.iter().filter(|c| c.contains(" run --rm ")).cloned().collect()
}

pub const TRIANGLE_FRAG: &[u8] = b"#version 450\nlayout(location = 0) out vec4 outColor;\nvoid main() {\n    outColor = vec4(1.0);\n}\n";
