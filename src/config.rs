//! Generator configuration.
//!
//! Defaults reproduce the fixed layout the tool was first written for:
//! `mie/`, `examples/` and `tests/` scanned for `.odin` files, written to
//! `docs/api.md`.

use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_SOURCE_DIRS: [&str; 3] = ["mie", "examples", "tests"];
pub const DEFAULT_EXTENSION: &str = "odin";
pub const DEFAULT_OUTPUT: &str = "docs/api.md";

/// What to do with byte sequences that are not valid UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InvalidUtf8 {
    /// Discard invalid sequences
    #[default]
    Drop,
    /// Substitute U+FFFD for each invalid sequence
    Replace,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    /// Scanned in this order, resolved against `root`
    pub source_dirs: Vec<PathBuf>,
    /// Without the leading dot
    pub extension: String,
    /// Code fence label for signatures
    pub language: String,
    /// Resolved against `root` when relative
    pub output: PathBuf,
    pub invalid_utf8: InvalidUtf8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source_dirs: DEFAULT_SOURCE_DIRS.iter().map(PathBuf::from).collect(),
            extension: DEFAULT_EXTENSION.to_string(),
            language: DEFAULT_EXTENSION.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            invalid_utf8: InvalidUtf8::default(),
        }
    }
}

impl Config {
    /// Destination path with `root` applied.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }
}

/// Strip a leading `.` so `--extension .odin` and `--extension odin` agree.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_layout() {
        let config = Config::default();
        assert_eq!(
            config.source_dirs,
            vec![
                PathBuf::from("mie"),
                PathBuf::from("examples"),
                PathBuf::from("tests")
            ]
        );
        assert_eq!(config.extension, "odin");
        assert_eq!(config.output_path(), PathBuf::from("./docs/api.md"));
    }

    #[test]
    fn extension_dot_is_optional() {
        assert_eq!(normalize_extension(".odin"), "odin");
        assert_eq!(normalize_extension("odin"), "odin");
    }

    #[test]
    fn absolute_output_ignores_root() {
        let config = Config {
            root: PathBuf::from("/repo"),
            output: PathBuf::from("/tmp/api.md"),
            ..Default::default()
        };
        assert_eq!(config.output_path(), PathBuf::from("/tmp/api.md"));
    }
}
