//! Debug logging for profile-editor.
//!
//! Routes every `log::info!()` etc. to a session log file:
//! `/tmp/profile_editor_debug.log` on Unix/macOS,
//! `%TEMP%\profile_editor_debug.log` on Windows.
//! The file is truncated at the start of each session.
//!
//! Level precedence: CLI `--log-level`, then `RUST_LOG`, then the config
//! `log_level` (applied once the config is loaded). When `RUST_LOG` names a
//! level, records are mirrored to stderr as well.

use parking_lot::Mutex;
use profile_editor_config::LogLevel;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set once a level has come from the CLI or `RUST_LOG`; config then defers.
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// `log::Log` implementation writing to the debug log file
struct LogBridge {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl LogBridge {
    fn open(mirror_stderr: bool) -> Self {
        let log_path = log_path();
        let file = match OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&log_path)
        {
            Ok(mut f) => {
                let _ = writeln!(
                    f,
                    "{}\nprofile-editor debug session started at {}\n{}",
                    "=".repeat(80),
                    timestamp(),
                    "=".repeat(80)
                );
                Some(f)
            }
            // Without a file the bridge still mirrors to stderr when asked to.
            Err(_) => None,
        };
        Self {
            file: Mutex::new(file),
            mirror_stderr,
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = self.file.lock().as_mut() {
            let _ = writeln!(file, "{line}");
        }
        if self.mirror_stderr {
            eprintln!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

/// Path of the session debug log
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/profile_editor_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("profile_editor_debug.log")
    }
}

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S%.6f").to_string()
}

/// Level requested through `RUST_LOG`, if it names one
fn env_level() -> Option<LogLevel> {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| parse_rust_log(&value))
}

/// Level named by a `RUST_LOG` value.
///
/// Accepts a plain level (`debug`) or target directives
/// (`profile_editor=debug`, `wgpu=warn,profile_editor=trace`). The last
/// directive decides, since the bridge has a single global level.
fn parse_rust_log(value: &str) -> Option<LogLevel> {
    let directive = value.rsplit(',').find(|d| !d.trim().is_empty())?;
    let level = directive.rsplit('=').next()?;
    LogLevel::from_name(level)
}

/// Install the log bridge as the global logger.
///
/// `cli_level` wins over `RUST_LOG`; with neither, logging stays off until
/// [`apply_config_log_level`] runs. Calling this twice is harmless.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let env = env_level();
    let mirror_stderr = env.is_some();
    let level = cli_level.or(env);

    let bridge = BRIDGE.get_or_init(|| LogBridge::open(mirror_stderr));
    if log::set_logger(bridge).is_err() {
        return;
    }

    if let Some(level) = level {
        LEVEL_PINNED.store(true, Ordering::Relaxed);
        log::set_max_level(level.to_level_filter());
    } else {
        log::set_max_level(log::LevelFilter::Off);
    }
}

/// Apply the config's `log_level` unless the CLI or `RUST_LOG` pinned one
pub fn apply_config_log_level(level: LogLevel) {
    if LEVEL_PINNED.load(Ordering::Relaxed) {
        return;
    }
    log::set_max_level(level.to_level_filter());
    if level != LogLevel::Off {
        log::info!("Log level set from config: {}", level.display_name());
    }
}
