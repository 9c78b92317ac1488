use std::fs::File;
use std::path::PathBuf;
use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "tickwatch_engine=debug,tickwatch_ui=trace").
///
/// `log_file` redirects output to a file. The runtime owns the terminal while
/// it runs, so anything written to stderr lands on top of the rendered frame.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            log_file: None,
        }
    }
}

impl LoggingConfig {
    /// Level used when neither `env_filter` nor `RUST_LOG` is set.
    pub fn default_level(&self) -> log::LevelFilter {
        if self.log_file.is_some() {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`, before the runtime takes the terminal.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level());
        }

        let mut file_error = None;
        match &config.log_file {
            Some(path) => match File::create(path) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                    builder.write_style(env_logger::WriteStyle::Never);
                }
                Err(e) => {
                    file_error = Some((path.clone(), e));
                    builder.write_style(config.write_style);
                }
            },
            None => {
                builder.write_style(config.write_style);
            }
        }

        builder.init();

        if let Some((path, e)) = file_error {
            log::warn!("cannot open log file {}: {e}; logging to stderr", path.display());
        }
        log::debug!("logging initialized");
    });
}
