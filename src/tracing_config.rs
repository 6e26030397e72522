use std::{env, error::Error, fs, io};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{GeneralConfig, LogFormat};

/// Environment variable overriding the configured log format.
pub const LOG_FORMAT_ENV: &str = "NVRAM_TASK_LOG_FORMAT";

const DAYS_TO_KEEP: usize = 7;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize tracing for the application
///
/// Logs are written to stderr, keeping stdout free for task output. Uses the
/// `RUST_LOG` environment variable if set, otherwise the configured level.
/// The format comes from `NVRAM_TASK_LOG_FORMAT` or the configuration.
///
/// When `log_dir` is configured, logs are also written to a daily rotated
/// file. The returned guard flushes that file on drop and must be held for
/// the lifetime of the program.
///
/// # Errors
/// Returns error if the log directory cannot be created or the subscriber
/// is already initialized
pub fn init(general: &GeneralConfig) -> Result<Option<WorkerGuard>, Box<dyn Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(general.log_level.to_string()));

    let format = env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|name| LogFormat::from_name(&name))
        .unwrap_or(general.log_format);

    let mut layers: Vec<BoxedLayer> = vec![stderr_layer(format)];
    let mut guard = None;

    if let Some(log_dir) = &general.log_dir {
        fs::create_dir_all(log_dir)?;

        let file_appender = tracing_appender::rolling::Builder::new()
            .rotation(tracing_appender::rolling::Rotation::DAILY)
            .max_log_files(DAYS_TO_KEEP)
            .filename_prefix("nvram-task")
            .filename_suffix("log")
            .build(log_dir)?;
        let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = match format {
            LogFormat::Json => fmt::layer()
                .json()
                .with_target(true)
                .with_writer(non_blocking)
                .with_ansi(false)
                .boxed(),
            LogFormat::Pretty | LogFormat::Compact => fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(non_blocking)
                .with_ansi(false)
                .boxed(),
        };
        layers.push(file_layer);
        guard = Some(file_guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;

    Ok(guard)
}

fn stderr_layer(format: LogFormat) -> BoxedLayer {
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_level(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .with_level(true)
            .with_writer(io::stderr)
            .boxed(),
    }
}
