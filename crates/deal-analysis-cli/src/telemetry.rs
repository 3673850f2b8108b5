use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    InvalidLevel { value: String, source: ParseError },
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidLevel { value, .. } => {
                write!(f, "invalid log level '{value}' (try error, warn, info, debug or trace)")
            }
            TelemetryError::AlreadyInstalled(err) => write!(f, "could not install logger: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidLevel { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

/// Filter for dealx logs. `RUST_LOG` wins; otherwise `log_level` applies to
/// the CLI and the deal engine only, keeping dependency noise out.
fn deal_filter(log_level: &str, rust_log: Option<&str>) -> Result<EnvFilter, TelemetryError> {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return Ok(filter);
        }
    }

    let level = log_level.trim().to_ascii_lowercase();
    let directives = format!("warn,dealx={level},deal_analysis_core={level}");
    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::InvalidLevel {
        value: log_level.to_string(),
        source,
    })
}

/// Install the compact stderr logger so stdout stays machine-readable.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = deal_filter(log_level, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_scoped_to_deal_crates() {
        let filter = deal_filter("Debug", None).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("dealx=debug"));
        assert!(rendered.contains("deal_analysis_core=debug"));
    }

    #[test]
    fn test_rust_log_takes_precedence() {
        let filter = deal_filter("info", Some("trace")).unwrap();
        assert_eq!(filter.to_string(), "trace");
    }

    #[test]
    fn test_bad_level_rejected() {
        match deal_filter("loud!!", None) {
            Err(TelemetryError::InvalidLevel { value, .. }) => assert_eq!(value, "loud!!"),
            other => panic!("Expected InvalidLevel, got {other:?}"),
        }
    }
}
