use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Crates whose events a bare level such as `debug` applies to; everything else stays at `warn`.
const OWN_TARGETS: [&str; 2] = ["mindscope", "mindscope_cli"];

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter { directive: String, source: ParseError },
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { directive, .. } => write!(
                f,
                "APP_LOG_LEVEL '{}' is not a valid level or tracing filter",
                directive
            ),
            TelemetryError::AlreadyInstalled(err) => {
                write!(f, "mindscope log subscriber could not be installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

/// Expands a bare level into per-crate directives; full filter expressions pass through.
fn directives_for(log_level: &str) -> String {
    let log_level = log_level.trim();
    if log_level.contains('=') || log_level.contains(',') {
        return log_level.to_string();
    }

    let mut directives = vec!["warn".to_string()];
    directives.extend(
        OWN_TARGETS
            .iter()
            .map(|target| format!("{target}={log_level}")),
    );
    directives.join(",")
}

/// `RUST_LOG` wins when set; otherwise the configured level is expanded.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = directives_for(&config.log_level);
    EnvFilter::try_new(&directive).map_err(|source| TelemetryError::InvalidFilter {
        directive: config.log_level.clone(),
        source,
    })
}

/// Installs the global subscriber on stderr, leaving stdout to rendered reports and JSON.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}
