use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use rand::distr::Alphanumeric;
use rand::Rng;

const WORKSPACE_PREFIX: &str = "shader_converter_";
const MAX_NAME_ATTEMPTS: usize = 8;

/// Temporary directory owned by one conversion; removed when dropped.
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
    removed: bool,
}

impl Workspace {
    /// Creates a fresh directory under `root` with a random name.
    pub fn create(root: &Path) -> io::Result<Self> {
        fs::create_dir_all(root)?;
        for _ in 0..MAX_NAME_ATTEMPTS {
            let path = root.join(format!("{}{}", WORKSPACE_PREFIX, random_id(16)));
            // create_dir refuses an existing directory, so two conversions never share one
            match fs::create_dir(&path) {
                Ok(()) => {
                    let path = fs::canonicalize(&path).unwrap_or(path);
                    debug!("Created workspace {}", path.display());
                    return Ok(Workspace { path, removed: false });
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("could not find a free workspace name under {}", root.display()),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copies `source` into the workspace byte for byte, keeping its file name.
    pub fn stage(&self, source: &Path) -> io::Result<PathBuf> {
        let name = source.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' has no file name", source.display()),
            )
        })?;
        let target = self.path.join(name);
        let copied = fs::copy(source, &target)?;
        debug!("Staged {} ({} bytes) into {}", source.display(), copied, self.path.display());
        Ok(target)
    }

    /// Removes the directory and everything in it. Safe to call more than once.
    pub fn cleanup(&mut self) -> io::Result<()> {
        if self.removed {
            return Ok(());
        }
        match fs::remove_dir_all(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        self.removed = true;
        debug!("Removed workspace {}", self.path.display());
        Ok(())
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            warn!("Failed to remove workspace {}: {}", self.path.display(), e);
        }
    }
}

fn random_id(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_root(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("glsl_to_metal_ws_test_{}", name))
    }

    #[test]
    fn workspace_is_removed_on_drop() {
        let root = test_root("drop");
        let path = {
            let ws = Workspace::create(&root).unwrap();
            assert!(ws.path().is_dir());
            ws.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn cleanup_twice_is_safe() {
        let root = test_root("twice");
        let mut ws = Workspace::create(&root).unwrap();
        fs::write(ws.path().join("a.spv"), b"\x03\x02\x23\x07").unwrap();
        ws.cleanup().unwrap();
        assert!(!ws.path().exists());
        ws.cleanup().unwrap();
    }

    #[test]
    fn names_are_unique() {
        let root = test_root("unique");
        let a = Workspace::create(&root).unwrap();
        let b = Workspace::create(&root).unwrap();
        assert_ne!(a.path(), b.path());
        let name = a.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with(WORKSPACE_PREFIX));
    }

    #[test]
    fn staged_copy_is_byte_identical() {
        let root = test_root("stage");
        fs::create_dir_all(&root).unwrap();
        let source = root.join("input.frag");
        let bytes = b"#version 450\r\nvoid main() {}\n\xff\x00".to_vec();
        fs::write(&source, &bytes).unwrap();

        let ws = Workspace::create(&root).unwrap();
        let staged = ws.stage(&source).unwrap();
        assert_eq!(staged.file_name().unwrap(), "input.frag");
        assert_eq!(fs::read(&staged).unwrap(), bytes);
    }

    #[test]
    fn staging_a_missing_file_fails() {
        let ws = Workspace::create(&test_root("missing")).unwrap();
        let err = ws.stage(Path::new("/definitely/not/here.frag")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
