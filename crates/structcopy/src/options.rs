use serde::{Deserialize, Serialize};

/// Default limit on how many record levels a copy descends through.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for a [`Copier`](crate::Copier).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyOptions {
    /// Maximum number of record levels, counting the top-level record as one.
    /// Deeper data fails with
    /// [`CopyError::DepthExceeded`](crate::CopyError::DepthExceeded).
    pub max_depth: usize,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CopyOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the depth limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
