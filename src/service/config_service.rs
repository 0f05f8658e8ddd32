use std::io;
use crate::config::ports::{ConfigPort, ToolkitConfig};

// Picks up configuration from whichever adapter the front end chose
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<ToolkitConfig> {
        let config = self.config_port.get_config()?;
        validate_config(&config)?;
        log::debug!("Using configuration: {:?}", config);
        Ok(config)
    }
}

pub fn validate_config(config: &ToolkitConfig) -> io::Result<()> {
    let required = [
        ("runtime", &config.runtime_binary),
        ("image", &config.image_name),
        ("mount point", &config.mount_point),
        ("glsl compiler", &config.glsl_compiler),
        ("cross compiler", &config.cross_compiler),
        ("shell", &config.shell),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} must not be empty", name),
            ));
        }
    }
    // `--mount` takes a comma separated option list, so a comma would split `src=`
    if config.workspace_root.to_string_lossy().contains(',') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "workspace root '{}' must not contain ','",
                config.workspace_root.display()
            ),
        ));
    }
    if config.mount_point.contains(',') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("mount point '{}' must not contain ','", config.mount_point),
        ));
    }
    if !config.mount_point.starts_with('/') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("mount point '{}' must be an absolute container path", config.mount_point),
        ));
    }
    Ok(())
}

// Built-in defaults
pub struct DefaultConfigAdapter;

impl DefaultConfigAdapter {
    pub fn new() -> Self {
        DefaultConfigAdapter
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<ToolkitConfig> {
        Ok(ToolkitConfig::default())
    }
}
