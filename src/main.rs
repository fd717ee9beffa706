//! apidoc — generate a Markdown API reference from `///` doc comments.
//!
//! Scans a fixed list of source directories (non-recursively) for files with
//! one extension, pairs every `///` block with the signature line that
//! follows it, and writes one aggregated document:
//!
//! ```text
//! apidoc                       # mie/ examples/ tests/ *.odin -> docs/api.md
//! apidoc -r ../lib -d src -e go -o API.md
//! ```

mod collect;
mod config;
mod decode;
mod extract;
mod model;
mod render;
mod source;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, InvalidUtf8};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "apidoc",
    about = "Generate a Markdown API reference from /// doc comments"
)]
struct Cli {
    /// Repository root; source directories and the output resolve against it
    #[arg(short = 'r', long, default_value = ".")]
    root: PathBuf,

    /// Source directory to scan, in output order (repeatable)
    #[arg(short = 'd', long = "dir", default_values = config::DEFAULT_SOURCE_DIRS)]
    dirs: Vec<PathBuf>,

    /// File extension to scan for
    #[arg(short = 'e', long, default_value = config::DEFAULT_EXTENSION)]
    extension: String,

    /// Code fence label for signatures (defaults to the extension)
    #[arg(short = 'l', long)]
    lang: Option<String>,

    /// Output file
    #[arg(short = 'o', long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// How to handle bytes that are not valid UTF-8
    #[arg(long, value_enum, default_value_t = InvalidUtf8::Drop)]
    invalid_utf8: InvalidUtf8,

    /// Log every scanned directory and file
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let extension = config::normalize_extension(&cli.extension);
        Config {
            root: cli.root,
            source_dirs: cli.dirs,
            language: cli.lang.unwrap_or_else(|| extension.clone()),
            extension,
            output: cli.output,
            invalid_utf8: cli.invalid_utf8,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::from(cli);
    let out_path = run(&config)?;
    println!("Wrote {}", out_path.display());
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "apidoc=debug" } else { "apidoc=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Collect, render and write the reference. Returns the path written.
fn run(config: &Config) -> Result<PathBuf> {
    let reference = collect::collect(&source::FsTree, config)?;
    tracing::debug!(
        "{} block(s) across {} director(ies)",
        reference.block_count(),
        reference.dirs.len()
    );

    let document = render::render(&reference, &config.language);
    let out_path = config.output_path();
    write_output(&out_path, &document)?;
    Ok(out_path)
}

/// Replace `path` with `content` atomically.
///
/// The parent directory must already exist. On failure the previous file,
/// if any, is left untouched.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to create output in {}", parent.display()))?;
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    // Temp files are created owner-only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }
    tmp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
