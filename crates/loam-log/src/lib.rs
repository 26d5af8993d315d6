//! Leveled console logging for loam applications.
//!
//! A minimal backend for the `log` facade. Level state is explicit
//! configuration handed to [`init`] — there is no hidden mutable
//! global beyond the facade's own logger slot. Per-target overrides
//! use longest-prefix matching, so `LogConfig::new(LevelFilter::Warn)
//! .directive("loam_arena", LevelFilter::Debug)` silences everything
//! except arena internals.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::env;
use std::io::Write;

use indexmap::IndexMap;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable consulted by [`LogConfig::from_env`].
pub const ENV_VAR: &str = "LOAM_LOG";

/// Explicit logging configuration.
///
/// Holds the default maximum level plus ordered per-target overrides.
/// Immutable once handed to [`init`].
#[derive(Clone, Debug)]
pub struct LogConfig {
    level: LevelFilter,
    directives: IndexMap<String, LevelFilter>,
}

impl LogConfig {
    /// Default maximum level when none is configured.
    pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

    /// Create a config with the given default level and no overrides.
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            directives: IndexMap::new(),
        }
    }

    /// Add a per-target override.
    ///
    /// `target` matches any log target it is a prefix of; the longest
    /// matching prefix wins.
    pub fn directive(mut self, target: &str, level: LevelFilter) -> Self {
        self.directives.insert(target.to_owned(), level);
        self
    }

    /// Build a config from the `LOAM_LOG` environment variable.
    ///
    /// Accepts the level names understood by the `log` crate
    /// (`off`, `error`, `warn`, `info`, `debug`, `trace`, any case).
    /// Unset or unparseable values fall back to
    /// [`LogConfig::DEFAULT_LEVEL`].
    pub fn from_env() -> Self {
        let level = env::var(ENV_VAR)
            .ok()
            .and_then(|value| parse_level(&value))
            .unwrap_or(Self::DEFAULT_LEVEL);
        Self::new(level)
    }

    /// The effective maximum level for `target`.
    pub fn level_for(&self, target: &str) -> LevelFilter {
        let mut best: Option<(&str, LevelFilter)> = None;
        for (prefix, &level) in &self.directives {
            if target.starts_with(prefix.as_str()) {
                match best {
                    Some((current, _)) if current.len() >= prefix.len() => {}
                    _ => best = Some((prefix, level)),
                }
            }
        }
        best.map(|(_, level)| level).unwrap_or(self.level)
    }

    /// The most verbose level any target can reach — what the facade's
    /// global gate is set to.
    fn max_level(&self) -> LevelFilter {
        self.directives
            .values()
            .copied()
            .fold(self.level, |a, b| a.max(b))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEVEL)
    }
}

/// Parse a level name the way the `log` crate spells them.
fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse::<LevelFilter>().ok()
}

/// Console backend writing one line per record to stderr.
pub struct ConsoleLogger {
    config: LogConfig,
}

impl ConsoleLogger {
    /// Create a logger with the given configuration.
    pub fn new(config: LogConfig) -> Self {
        Self { config }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.config.level_for(metadata.target())
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        // A failed write to stderr has no recovery path worth taking.
        let _ = writeln!(
            stderr,
            "[{:<5}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().lock().flush();
    }
}

/// Install a [`ConsoleLogger`] as the process-wide logger.
///
/// Fails if a logger is already installed (the `log` facade allows
/// exactly one per process).
pub fn init(config: LogConfig) -> Result<(), SetLoggerError> {
    log::set_max_level(config.max_level());
    log::set_boxed_logger(Box::new(ConsoleLogger::new(config)))
}
