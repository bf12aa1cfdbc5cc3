//! crates/logging/src/config.rs
//! Verbosity configuration and its filter directives.

use crate::levels::{Component, LogLevel};

/// Per-component levels together with the level for everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// Level for targets outside the known components.
    pub base: LogLevel,
    /// Level for `fieldmask` events.
    pub parse: LogLevel,
    /// Level for `structcopy` events.
    pub copy: LogLevel,
    /// Raw directives that replace the computed ones when set, in the
    /// `RUST_LOG` syntax (`info,structcopy=trace`).
    pub directives: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_verbose_level(0)
    }
}

impl LogConfig {
    /// Maps the number of `-v` flags to levels.
    ///
    /// | `-v` count | base  | components |
    /// |------------|-------|------------|
    /// | 0          | warn  | warn       |
    /// | 1          | info  | info       |
    /// | 2          | info  | debug      |
    /// | 3 or more  | debug | trace      |
    #[must_use]
    pub fn from_verbose_level(level: u8) -> Self {
        let (base, components) = match level {
            0 => (LogLevel::Warn, LogLevel::Warn),
            1 => (LogLevel::Info, LogLevel::Info),
            2 => (LogLevel::Info, LogLevel::Debug),
            _ => (LogLevel::Debug, LogLevel::Trace),
        };
        Self {
            base,
            parse: components,
            copy: components,
            directives: None,
        }
    }

    /// Replaces the computed directives with `directives`. Blank input is
    /// ignored.
    #[must_use]
    pub fn with_directives(mut self, directives: impl Into<String>) -> Self {
        let directives = directives.into();
        if !directives.trim().is_empty() {
            self.directives = Some(directives);
        }
        self
    }

    /// Sets the level of one component.
    pub fn apply_component(&mut self, component: Component, level: LogLevel) {
        match component {
            Component::Parse => self.parse = level,
            Component::Copy => self.copy = level,
        }
    }

    /// Level in effect for `component`.
    #[must_use]
    pub const fn level_for(&self, component: Component) -> LogLevel {
        match component {
            Component::Parse => self.parse,
            Component::Copy => self.copy,
        }
    }

    /// Level in effect for an event target.
    #[must_use]
    pub fn level_for_target(&self, target: &str) -> LogLevel {
        Component::from_target(target).map_or(self.base, |component| self.level_for(component))
    }

    /// Filter directives for this configuration.
    ///
    /// Component entries equal to the base level are omitted.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        if let Some(directives) = &self.directives {
            return directives.clone();
        }
        let mut out = String::from(self.base.as_str());
        for component in Component::ALL {
            let level = self.level_for(component);
            if level != self.base {
                out.push(',');
                out.push_str(component.target());
                out.push('=');
                out.push_str(level.as_str());
            }
        }
        out
    }
}
