//! Diagnostic logging for `--verbose` runs.

use tracing_subscriber::EnvFilter;

/// Filter applied for `-v` when `RUST_LOG` is not set.
const VERBOSE_FILTER: &str = "assetgen_core=debug,assetgen_cli=debug";

/// Filter applied for `-vv` and above when `RUST_LOG` is not set.
const TRACE_FILTER: &str = "assetgen_core=trace,assetgen_cli=trace";

/// Pick the filter directives for a verbosity level. `None` means logging stays off.
pub fn filter_for(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some(VERBOSE_FILTER),
        _ => Some(TRACE_FILTER),
    }
}

/// Install a stderr subscriber when verbosity is at least 1.
///
/// `RUST_LOG` takes precedence over the verbosity-derived filter.
pub fn init(verbosity: u8) {
    let Some(directives) = filter_for(verbosity) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_levels() {
        assert_eq!(filter_for(0), None);
        assert_eq!(filter_for(1), Some(VERBOSE_FILTER));
        assert_eq!(filter_for(2), Some(TRACE_FILTER));
        assert_eq!(filter_for(7), Some(TRACE_FILTER));
    }

    #[test]
    fn test_init_is_repeatable() {
        init(0);
        init(1);
        init(2);
    }
}
