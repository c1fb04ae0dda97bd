//! Solver configuration types.

/// Configuration options for solver behavior.
///
/// All fields default to `None`, meaning the backend's own default.
/// Backends differ in what they can honor; [`SolverConfig::set_option_names`]
/// lets a backend enumerate the explicitly set options so it can log the
/// ones it ignores.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Time limit in seconds. `None` means no limit.
    pub time_limit: Option<f64>,
    /// Verbosity level. `None` uses solver default.
    pub verbosity: Option<u32>,
    /// Feasibility tolerance. `None` uses solver default.
    pub tolerance: Option<f64>,
    /// Log solver output to console. `None` uses solver default.
    pub log_to_console: Option<bool>,
}

impl SolverConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time limit in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    /// Set the verbosity level.
    pub fn with_verbosity(mut self, level: u32) -> Self {
        self.verbosity = Some(level);
        self
    }

    /// Set the feasibility tolerance.
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = Some(tol);
        self
    }

    /// Enable or disable console logging.
    pub fn with_log_to_console(mut self, enabled: bool) -> Self {
        self.log_to_console = Some(enabled);
        self
    }

    /// Names of the options that were explicitly set.
    pub fn set_option_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.time_limit.is_some() {
            names.push("time_limit");
        }
        if self.verbosity.is_some() {
            names.push("verbosity");
        }
        if self.tolerance.is_some() {
            names.push("tolerance");
        }
        if self.log_to_console.is_some() {
            names.push("log_to_console");
        }
        names
    }

    /// Check if this configuration is completely empty (all defaults).
    pub fn is_empty(&self) -> bool {
        self.set_option_names().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_is_empty() {
        let config = SolverConfig::new();
        assert!(config.is_empty());
        assert!(config.set_option_names().is_empty());
    }

    #[test]
    fn builder_pattern_sets_fields() {
        let config = SolverConfig::new()
            .with_time_limit(60.0)
            .with_verbosity(1)
            .with_tolerance(1e-6)
            .with_log_to_console(false);

        assert!(!config.is_empty());
        assert_eq!(config.time_limit, Some(60.0));
        assert_eq!(config.verbosity, Some(1));
        assert_eq!(config.tolerance, Some(1e-6));
        assert_eq!(config.log_to_console, Some(false));
    }

    #[test]
    fn set_option_names_lists_only_set_fields() {
        let config = SolverConfig::new().with_time_limit(30.0).with_verbosity(2);
        assert_eq!(config.set_option_names(), vec!["time_limit", "verbosity"]);
    }
}
