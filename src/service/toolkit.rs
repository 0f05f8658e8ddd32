use std::path::Path;
use crate::config::ports::ToolkitConfig;
use crate::models::shader::ShaderKind;

/// Quotes `value` for a POSIX shell. Plain words are left alone.
pub fn shell_quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./=,:+@%".contains(c));
    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

/// `command -v <runtime>`; non-empty output means the runtime is on the search path.
pub fn runtime_query_command(config: &ToolkitConfig) -> String {
    format!("command -v {}", shell_quote(&config.runtime_binary))
}

/// Lists image ids matching the toolkit image; non-empty output means present.
pub fn image_query_command(config: &ToolkitConfig) -> String {
    format!(
        "{} images -q {}",
        shell_quote(&config.runtime_binary),
        shell_quote(&config.image_name)
    )
}

/// Wraps `inner` so it runs inside the toolkit image with `workspace` bind-mounted.
pub fn container_command(config: &ToolkitConfig, workspace: &Path, inner: &str) -> String {
    let mount = format!(
        "type=bind,src={},target={}",
        workspace.display(),
        config.mount_point
    );
    format!(
        "{} run --rm --mount {} --workdir {} {} {}",
        shell_quote(&config.runtime_binary),
        shell_quote(&mount),
        shell_quote(&config.mount_point),
        shell_quote(&config.image_name),
        inner
    )
}

pub fn glsl_compile_command(config: &ToolkitConfig, input_name: &str, output_name: &str) -> String {
    format!(
        "{} {} -o {}",
        shell_quote(&config.glsl_compiler),
        shell_quote(input_name),
        shell_quote(output_name)
    )
}

pub fn cross_compile_command(
    config: &ToolkitConfig,
    spirv_name: &str,
    old_entry: &str,
    new_entry: &str,
    kind: ShaderKind,
) -> String {
    format!(
        "{} --msl {} --rename-entry-point {} {} {}",
        shell_quote(&config.cross_compiler),
        shell_quote(spirv_name),
        shell_quote(old_entry),
        shell_quote(new_entry),
        kind.stage_tag()
    )
}

/// `triangle.frag` -> `triangle.spv`
pub fn spirv_artifact_name(input_name: &str) -> String {
    let stem = Path::new(input_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| input_name.to_string());
    format!("{}.spv", stem)
}

pub fn expand_home(path: &str, home: Option<&str>) -> String {
    match (path.strip_prefix('~'), home) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => format!("{}{}", home, rest),
        _ => path.to_string(),
    }
}

/// Candidate directories first, then the inherited `PATH`.
pub fn compose_search_path(candidates: &[String], inherited: Option<&str>, home: Option<&str>) -> String {
    let mut parts: Vec<String> = candidates.iter().map(|p| expand_home(p, home)).collect();
    if let Some(inherited) = inherited.filter(|p| !p.is_empty()) {
        parts.push(inherited.to_string());
    }
    parts.join(":")
}
