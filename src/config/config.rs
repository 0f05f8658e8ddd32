use clap::{Parser, ValueEnum};
use std::io;
use std::path::Path;
use crate::models::shader::ShaderKind;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "glsl_to_metal",
    about = "Convert GLSL shaders to Metal Shading Language",
    long_about = "Converts a GLSL vertex or fragment shader to Metal by running glslc and spirv-cross inside a container image.\nThe image (default: shader_converter_toolkit) must already be built. Run without arguments for interactive mode.",
    arg_required_else_help = true
)]
pub struct Cli {
    pub input: String,
    /// Shader stage; guessed from a .vert/.frag extension when omitted
    #[arg(short, long)]
    pub kind: Option<ShaderKindArg>,
    #[arg(long, default_value = "main")]
    pub old_entry: String,
    #[arg(short, long)]
    pub new_entry: String,
    /// Destination file; defaults to <basename>.metal next to the input
    #[arg(short, long)]
    pub output: Option<String>,
    /// Print the Metal source to stdout instead of writing a file
    #[arg(long, default_value_t = false)]
    pub print: bool,
    #[arg(long)]
    pub runtime: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub mount_point: Option<String>,
    #[arg(long)]
    pub glslc: Option<String>,
    #[arg(long)]
    pub spirv_cross: Option<String>,
    /// Directories searched before the inherited PATH
    #[arg(long, value_delimiter = ',')]
    pub search_path: Option<Vec<String>>,
    #[arg(long)]
    pub shell: Option<String>,
    /// Extra substrings whose lines are dropped from the Metal output
    #[arg(long, value_delimiter = ',')]
    pub filter: Option<Vec<String>>,
    /// Treat any non-zero exit status as a failure, even without stderr output
    #[arg(long, default_value_t = false)]
    pub strict_exit: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum ShaderKindArg {
    Vertex,
    Fragment,
}

impl From<ShaderKindArg> for ShaderKind {
    fn from(arg: ShaderKindArg) -> Self {
        match arg {
            ShaderKindArg::Vertex => ShaderKind::Vertex,
            ShaderKindArg::Fragment => ShaderKind::Fragment,
        }
    }
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.is_file() {
        log::error!("Input file does not exist: {}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("input file '{}' does not exist", input),
        ));
    }
    Ok(path)
}

/// glslc picks the stage from the file extension, so an explicit kind that
/// disagrees with it compiles one stage and cross-compiles another.
pub fn conflicting_extension(explicit: ShaderKind, path: &Path) -> Option<ShaderKind> {
    ShaderKind::from_path(path).filter(|inferred| *inferred != explicit)
}

pub fn resolve_shader_kind(explicit: Option<ShaderKindArg>, path: &Path) -> io::Result<ShaderKind> {
    if let Some(kind) = explicit {
        let kind: ShaderKind = kind.into();
        if let Some(inferred) = conflicting_extension(kind, path) {
            log::warn!(
                "--kind {} disagrees with the extension of '{}' ({}); glslc compiles by extension",
                kind.stage_tag(),
                path.display(),
                inferred.stage_tag()
            );
        }
        return Ok(kind);
    }
    ShaderKind::from_path(path).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cannot tell the shader stage of '{}', pass --kind vertex|fragment", path.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_arguments() {
        let cli = Cli::try_parse_from(["glsl_to_metal", "triangle.frag", "--new-entry", "fragment_main"]).unwrap();
        assert_eq!(cli.input, "triangle.frag");
        assert_eq!(cli.old_entry, "main");
        assert_eq!(cli.new_entry, "fragment_main");
        assert_eq!(cli.kind, None);
        assert!(!cli.strict_exit);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn parses_toolkit_overrides() {
        let cli = Cli::try_parse_from([
            "glsl_to_metal",
            "quad.vert",
            "-n",
            "vertex_main",
            "--kind",
            "vertex",
            "--image",
            "my_toolkit",
            "--search-path",
            "/a/bin,/b/bin",
            "--strict-exit",
        ])
        .unwrap();
        assert_eq!(cli.kind, Some(ShaderKindArg::Vertex));
        assert_eq!(cli.image.as_deref(), Some("my_toolkit"));
        assert_eq!(cli.search_path, Some(vec!["/a/bin".to_string(), "/b/bin".to_string()]));
        assert!(cli.strict_exit);
    }

    #[test]
    fn new_entry_is_required() {
        assert!(Cli::try_parse_from(["glsl_to_metal", "triangle.frag"]).is_err());
    }

    #[test]
    fn kind_resolution() {
        assert_eq!(
            resolve_shader_kind(None, Path::new("triangle.frag")).unwrap(),
            ShaderKind::Fragment
        );
        assert_eq!(
            resolve_shader_kind(Some(ShaderKindArg::Vertex), Path::new("triangle.frag")).unwrap(),
            ShaderKind::Vertex
        );
        assert!(resolve_shader_kind(None, Path::new("shader.glsl")).is_err());
    }

    #[test]
    fn explicit_kind_against_extension() {
        assert_eq!(
            conflicting_extension(ShaderKind::Vertex, Path::new("triangle.frag")),
            Some(ShaderKind::Fragment)
        );
        assert_eq!(conflicting_extension(ShaderKind::Fragment, Path::new("triangle.frag")), None);
        assert_eq!(conflicting_extension(ShaderKind::Vertex, Path::new("shader.glsl")), None);
    }
}
