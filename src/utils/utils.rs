use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use regex::RegexSet;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("logger setup failed: {}", e)))
}

// Spinner shown while a blocking conversion runs
pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(message: &str, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]") {
                pb.set_style(style);
            }
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        };
        pb.set_message(message.to_string());
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn finish(&self, succeeded: bool) {
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        let msg = if succeeded {
            format!("Conversion finished in {:.1}s", elapsed)
        } else {
            format!("Conversion failed after {:.1}s", elapsed)
        };
        self.pb.finish_with_message(msg);
    }
}

/// Builds a matcher for lines that are container noise rather than shader output.
pub fn create_filter_set(filters: &[String]) -> RegexSet {
    let patterns: Vec<String> = filters
        .iter()
        .filter(|f| !f.is_empty())
        .map(|f| regex::escape(f))
        .collect();
    RegexSet::new(&patterns).unwrap_or_else(|e| {
        log::warn!("Invalid output filter: {}, filtering disabled", e);
        RegexSet::empty()
    })
}

/// Drops every line matched by `filter_set` and trims the rest.
pub fn filter_noise(text: &str, filter_set: &RegexSet) -> String {
    text.lines()
        .filter(|line| !filter_set.is_match(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// `shaders/triangle.frag` -> `triangle.metal`
pub fn suggested_output_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "shader".to_string());
    format!("{}.metal", stem)
}

/// Default destination: the suggested name next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = suggested_output_name(input);
    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

pub fn save_metal_shader(content: &str, destination: &Path) -> io::Result<PathBuf> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(destination, content)?;
    let shown = std::env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(destination, cwd))
        .unwrap_or_else(|| destination.to_path_buf());
    log::info!("Saved Metal shader to {} ({} bytes)", shown.display(), content.len());
    Ok(destination.to_path_buf())
}
