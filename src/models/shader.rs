use std::fmt;
use std::path::Path;

// Shader stage selected per conversion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    pub const ALL: [ShaderKind; 2] = [ShaderKind::Vertex, ShaderKind::Fragment];

    /// Stage tag understood by the cross-compiler.
    pub fn stage_tag(&self) -> &'static str {
        match self {
            ShaderKind::Vertex => "vert",
            ShaderKind::Fragment => "frag",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            ShaderKind::Vertex => ".vert",
            ShaderKind::Fragment => ".frag",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShaderKind::Vertex => "Vertex Shader",
            ShaderKind::Fragment => "Fragment Shader",
        }
    }

    /// Guesses the stage from a `.vert` / `.frag` extension.
    pub fn from_path(path: &Path) -> Option<ShaderKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        ShaderKind::ALL
            .into_iter()
            .find(|kind| kind.stage_tag() == ext)
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
