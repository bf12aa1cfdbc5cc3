use crate::naming::NameStyle;

/// Default limit on the number of nested levels a parsed mask may have.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Settings applied while a mask is built from text or paths.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    /// Maximum number of nested levels; deeper input is rejected with
    /// [`FormatError::DepthExceeded`](crate::FormatError::DepthExceeded).
    pub max_depth: usize,
    /// Convention applied to each segment of a dotted path.
    pub naming: NameStyle,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            naming: NameStyle::Identity,
        }
    }
}

impl ParseOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the naming convention used by the path-list parser.
    #[must_use]
    pub const fn with_naming(mut self, naming: NameStyle) -> Self {
        self.naming = naming;
        self
    }
}
