//! Logging setup.
//!
//! Everything goes to a daily-rolling JSON file under the data directory.
//! [`init_tui`] omits the stdout layer because ratatui owns the terminal;
//! [`init`] adds a pretty stdout layer for headless runs.
//! `log` macros are bridged into `tracing` by the subscriber's `init()`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "dashtui.log";

/// Initialize logging with both the file layer and a stdout layer.
///
/// The returned guard must be kept alive so buffered lines are flushed on
/// shutdown.
pub fn init(log_dir: &Path) -> WorkerGuard {
    prepare_dir(log_dir);

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(default_filter());

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .pretty()
        .with_filter(default_filter());

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .init();

    finish_init(log_dir);
    guard
}

/// Initialize logging for TUI mode: file layer only.
pub fn init_tui(log_dir: &Path) -> WorkerGuard {
    prepare_dir(log_dir);

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(default_filter());

    // No stdout layer: ratatui owns the terminal
    tracing_subscriber::registry().with(file_layer).init();

    finish_init(log_dir);
    guard
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
}

fn prepare_dir(log_dir: &Path) {
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(log_dir) {
            eprintln!("Failed to create logs directory {}: {e}", log_dir.display());
        }
    }
}

/// Runs after the subscriber is installed. `init()` has already bridged
/// `log` records into `tracing`.
fn finish_init(log_dir: &Path) {
    let dir = log_dir.to_path_buf();
    std::thread::spawn(move || compress_old_logs(&dir));

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_NAME)
    );
}

/// Whether `name` is a rotated log from a day other than `today` that has
/// not been compressed yet.
fn is_stale_log(name: &str, today: &str) -> bool {
    let prefix = format!("{LOG_FILE_NAME}.");
    name.starts_with(&prefix) && !name.ends_with(today) && !name.ends_with(".gz")
}

/// Gzip every rotated log except today's.
pub fn compress_old_logs(log_dir: &Path) {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !is_stale_log(name, &today) {
            continue;
        }
        match compress_file(&path) {
            Ok(()) => log::info!("Compressed old log: {:?}", path),
            Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
        }
    }
}

fn compress_file(path: &Path) -> io::Result<()> {
    let mut gz_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_name.push(".gz");
    let gz_path: PathBuf = path.with_file_name(gz_name);

    if gz_path.exists() {
        return Ok(());
    }

    let mut reader = io::BufReader::new(fs::File::open(path)?);
    let mut encoder = GzEncoder::new(fs::File::create(&gz_path)?, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)
}
