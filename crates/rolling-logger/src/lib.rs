//! Rolling File Logger
//!
//! Installs a `tracing` subscriber that writes to stderr and to a size-capped
//! log file. When the active file grows past `max_bytes` it is shifted to
//! `<name>.1.log`, older files move up by one, and the oldest beyond
//! `max_files` is dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Size and retention limits for the rolling file
#[derive(Debug, Clone, Copy)]
pub struct RollingConfig {
    /// Rotate once the active file would exceed this many bytes
    pub max_bytes: u64,
    /// Number of rotated files kept next to the active one
    pub max_files: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            max_files: 5,
        }
    }
}

/// Install the global subscriber with default limits.
///
/// Log level comes from `RUST_LOG`, falling back to `info`.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    init_logger_with(log_dir, app_name, RollingConfig::default())
}

pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    config: RollingConfig,
) -> Result<(), String> {
    let writer = RollingFileWriter::open(log_dir.as_ref(), app_name, config)
        .map_err(|e| format!("Failed to open log file: {}", e))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_timer(LocalTimer))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_timer(LocalTimer),
        )
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))
}

/// Local wall-clock timestamps with millisecond precision
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Cloneable handle to a rolling log file, usable as a `MakeWriter`
#[derive(Clone)]
pub struct RollingFileWriter {
    inner: Arc<Mutex<RollingFile>>,
}

impl RollingFileWriter {
    pub fn open(dir: &Path, app_name: &str, config: RollingConfig) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let file = RollingFile::open(dir.to_path_buf(), app_name.to_string(), config)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(file)),
        })
    }

    /// Path of the file currently being written
    pub fn active_path(&self) -> PathBuf {
        match self.inner.lock() {
            Ok(file) => file.active_path(),
            Err(poisoned) => poisoned.into_inner().active_path(),
        }
    }
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFileWriter {
    type Writer = RollingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

struct RollingFile {
    dir: PathBuf,
    name: String,
    config: RollingConfig,
    file: File,
    written: u64,
}

impl RollingFile {
    fn open(dir: PathBuf, name: String, config: RollingConfig) -> io::Result<Self> {
        let path = dir.join(format!("{}.log", name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir,
            name,
            config,
            file,
            written,
        })
    }

    fn active_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.name))
    }

    fn rotated_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.{}.log", self.name, index))
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.config.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        let max = self.config.max_files;
        if max > 0 {
            let oldest = self.rotated_path(max);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..max).rev() {
                let from = self.rotated_path(index);
                if from.exists() {
                    fs::rename(&from, self.rotated_path(index + 1))?;
                }
            }
            fs::rename(self.active_path(), self.rotated_path(1))?;
        }

        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.active_path())?;
        self.written = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(max_files: usize) -> RollingConfig {
        RollingConfig {
            max_bytes: 16,
            max_files,
        }
    }

    #[test]
    fn test_writes_to_active_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingFileWriter::open(dir.path(), "app", RollingConfig::default()).unwrap();

        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();

        let content = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert_eq!(content, "hello\n");
        assert_eq!(writer.active_path(), dir.path().join("app.log"));
    }

    #[test]
    fn test_rotates_when_cap_exceeded() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingFileWriter::open(dir.path(), "app", small(3)).unwrap();

        writer.write_all(b"first line 0123\n").unwrap();
        writer.write_all(b"second line\n").unwrap();
        writer.flush().unwrap();

        let rotated = fs::read_to_string(dir.path().join("app.1.log")).unwrap();
        let active = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert_eq!(rotated, "first line 0123\n");
        assert_eq!(active, "second line\n");
    }

    #[test]
    fn test_oldest_file_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingFileWriter::open(dir.path(), "app", small(2)).unwrap();

        for line in ["aaaaaaaaaaaa\n", "bbbbbbbbbbbb\n", "cccccccccccc\n", "dddddddddddd\n"] {
            writer.write_all(line.as_bytes()).unwrap();
        }
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "dddddddddddd\n");
        assert_eq!(fs::read_to_string(dir.path().join("app.1.log")).unwrap(), "cccccccccccc\n");
        assert_eq!(fs::read_to_string(dir.path().join("app.2.log")).unwrap(), "bbbbbbbbbbbb\n");
        assert!(!dir.path().join("app.3.log").exists());
    }

    #[test]
    fn test_zero_retention_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingFileWriter::open(dir.path(), "app", small(0)).unwrap();

        writer.write_all(b"old entry 012345\n").unwrap();
        writer.write_all(b"new\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "new\n");
        assert!(!dir.path().join("app.1.log").exists());
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut writer = RollingFileWriter::open(dir.path(), "app", RollingConfig::default()).unwrap();
            writer.write_all(b"one\n").unwrap();
        }
        let mut writer = RollingFileWriter::open(dir.path(), "app", RollingConfig::default()).unwrap();
        writer.write_all(b"two\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("app.log")).unwrap(), "one\ntwo\n");
    }
}
