//! Logging init: stderr by default, or an opt-in log file.
//!
//! Both binaries print their real output on stdout, so nothing is logged there.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const FILE_FILTER: &str = "info,gitnorm=debug";
const STDERR_FILTER: &str = "warn";

/// Names a file to append logs to instead of stderr.
pub const LOG_FILE_ENV: &str = "GITNORM_LOG_FILE";

/// Writer that is either the log file or stderr (used when the file clone fails).
enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize structured logging appended to `log_file_path`.
/// On failure (e.g. file unwritable) returns Err so the caller can fall back to stderr.
pub fn init_logging(log_file_path: &Path) -> Result<()> {
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let writer = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(FILE_FILTER))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::debug!("gitnorm logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(STDERR_FILTER))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

/// Log to the file named by `GITNORM_LOG_FILE` when set, otherwise to stderr.
///
/// Nothing is written to disk unless the caller asks for it.
pub fn init() {
    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        init_logging_stderr();
        return;
    };
    let path = PathBuf::from(path);
    if let Err(err) = init_logging(&path) {
        init_logging_stderr();
        tracing::warn!("cannot log to {}, using stderr: {:#}", path.display(), err);
    }
}
