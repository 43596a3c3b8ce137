//! Level conversions between the domain and external crates.

use bridge_domain::Level;

pub fn from_log_level(level: log::Level) -> Level {
    match level {
        log::Level::Trace => Level::Trace,
        log::Level::Debug => Level::Debug,
        log::Level::Info => Level::Info,
        log::Level::Warn => Level::Warn,
        log::Level::Error => Level::Error,
    }
}

pub fn to_log_level(level: Level) -> log::Level {
    match level {
        Level::Trace => log::Level::Trace,
        Level::Debug => log::Level::Debug,
        Level::Info => log::Level::Info,
        Level::Warn => log::Level::Warn,
        Level::Error => log::Level::Error,
    }
}

/// Most verbose `log` filter that still lets `level` through
pub fn to_log_filter(level: Level) -> log::LevelFilter {
    match level {
        Level::Trace => log::LevelFilter::Trace,
        Level::Debug => log::LevelFilter::Debug,
        Level::Info => log::LevelFilter::Info,
        Level::Warn => log::LevelFilter::Warn,
        Level::Error => log::LevelFilter::Error,
    }
}

pub fn to_tracing_level(level: Level) -> tracing::Level {
    match level {
        Level::Trace => tracing::Level::TRACE,
        Level::Debug => tracing::Level::DEBUG,
        Level::Info => tracing::Level::INFO,
        Level::Warn => tracing::Level::WARN,
        Level::Error => tracing::Level::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_round_trip_preserves_order() {
        let levels: Vec<Level> = [
            log::Level::Trace,
            log::Level::Debug,
            log::Level::Info,
            log::Level::Warn,
            log::Level::Error,
        ]
        .into_iter()
        .map(from_log_level)
        .collect();
        assert_eq!(levels, Level::ALL.to_vec());
    }

    #[test]
    fn test_to_log_level_inverts_from_log_level() {
        for level in Level::ALL {
            assert_eq!(from_log_level(to_log_level(level)), level);
        }
    }

    #[test]
    fn test_log_filter_admits_level() {
        for level in Level::ALL {
            let filter = to_log_filter(level);
            assert_eq!(filter.to_level().map(from_log_level), Some(level));
        }
    }

    #[test]
    fn test_tracing_level_mapping() {
        assert_eq!(to_tracing_level(Level::Warn), tracing::Level::WARN);
        assert_eq!(to_tracing_level(Level::Trace), tracing::Level::TRACE);
    }
}
