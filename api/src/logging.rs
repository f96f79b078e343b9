//! `env_logger` setup driven by [`LoggingConfig`]
//!
//! `RUST_LOG` still wins over the configured level when it is set.

use chrono::{SecondsFormat, Utc};
use env_logger::{fmt::TimestampPrecision, Builder, Env};
use log::Record;
use serde_json::{json, Value};
use std::io::Write;

use amb_shared::config::{LogFormat, LoggingConfig};

/// Logger builder for `config`, not yet installed
pub fn logger_builder(config: &LoggingConfig) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(config.level.as_str()));
    let precision = config.timestamp.then_some(TimestampPrecision::Millis);

    match config.format {
        LogFormat::Pretty => {
            builder.format_timestamp(precision);
        }
        LogFormat::Compact => {
            builder
                .format_timestamp(precision)
                .format_module_path(false)
                .format_target(false);
        }
        LogFormat::Json => {
            let timestamp = config.timestamp;
            builder.format(move |buf, record| writeln!(buf, "{}", json_record(record, timestamp)));
        }
    }

    builder
}

/// Install the global logger
pub fn init(config: &LoggingConfig) {
    logger_builder(config).init();
}

/// One log line as a JSON object
pub fn json_record(record: &Record<'_>, timestamp: bool) -> Value {
    let mut line = json!({
        "level": record.level().as_str(),
        "target": record.target(),
        "message": record.args().to_string(),
    });
    if timestamp {
        line["timestamp"] = json!(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter};

    fn config(level: &str, format: LogFormat, timestamp: bool) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            format,
            timestamp,
        }
    }

    #[test]
    fn test_json_record_fields() {
        let record = Record::builder()
            .args(format_args!("Verification code issued"))
            .level(Level::Info)
            .target("amb_core::services::verification")
            .build();

        let line = json_record(&record, true);
        assert_eq!(line["level"], "INFO");
        assert_eq!(line["target"], "amb_core::services::verification");
        assert_eq!(line["message"], "Verification code issued");
        assert!(line["timestamp"].as_str().is_some_and(|t| t.ends_with('Z')));
    }

    #[test]
    fn test_json_record_without_timestamp() {
        let record = Record::builder()
            .args(format_args!("bye"))
            .level(Level::Warn)
            .build();

        let line = json_record(&record, false);
        assert_eq!(line["level"], "WARN");
        assert!(line.get("timestamp").is_none());
    }

    #[test]
    fn test_configured_level_applies_without_rust_log() {
        temp_env::with_var_unset("RUST_LOG", || {
            for format in [LogFormat::Json, LogFormat::Pretty, LogFormat::Compact] {
                let logger = logger_builder(&config("warn", format, false)).build();
                assert_eq!(logger.filter(), LevelFilter::Warn);
            }
        });
    }

    #[test]
    fn test_rust_log_overrides_configured_level() {
        temp_env::with_var("RUST_LOG", Some("trace"), || {
            let logger = logger_builder(&config("warn", LogFormat::Json, true)).build();
            assert_eq!(logger.filter(), LevelFilter::Trace);
        });
    }
}
