use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{Builder, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Where and how a binary logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Filter used when `RUST_LOG` is unset, e.g. `"info"` or `"bucket=debug"`.
    pub base_level: String,
    /// Log file name prefix; files are named `<prefix>.<date>.log`.
    pub file_prefix: String,
    pub directory: PathBuf,
    /// Rotated files kept on disk.
    pub max_files: usize,
}

impl LogOptions {
    pub fn new(file_prefix: impl Into<String>) -> Self {
        Self {
            base_level: "info".to_string(),
            file_prefix: file_prefix.into(),
            directory: PathBuf::from("logs"),
            max_files: 5,
        }
    }

    pub fn with_base_level(mut self, base_level: impl Into<String>) -> Self {
        self.base_level = base_level.into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.base_level))
            .unwrap_or_else(|e| panic!("Invalid log filter '{}': {}", self.base_level, e))
    }
}

/// Installs a console layer (warnings also go to stderr) and a daily rolling
/// file layer. `RUST_LOG` takes precedence over `options.base_level`.
///
/// # Panics
/// Panics if the log directory cannot be created or logging is already set up.
pub fn setup_logging(options: &LogOptions) {
    let env_filter = options.env_filter();

    std::fs::create_dir_all(&options.directory).unwrap_or_else(|e| {
        panic!(
            "Failed to create log directory {}: {}",
            options.directory.display(),
            e
        )
    });

    let file_appender = Builder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix(&options.file_prefix)
        .filename_suffix("log")
        .max_log_files(options.max_files)
        .build(&options.directory)
        .unwrap_or_else(|e| panic!("Failed to create log file appender: {}", e));

    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    LOG_GUARD.set(guard).expect("Logging already initialized");

    let console_writer = std::io::stdout.and(std::io::stderr.with_min_level(Level::WARN));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(console_writer);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false)
        .with_writer(file_writer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .unwrap_or_else(|e| panic!("Logger initialization failed: {}", e));
}
