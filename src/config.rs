//! Construction-time configuration shared by all strategies.

/// Optional configuration accepted by every strategy constructor.
///
/// Only [`block_size`] influences core behavior (it overrides the automatic sqrt(n)
/// block sizing of the block decomposition). The three boolean flags are advisory
/// hints reserved for external collaborators such as benchmarking harnesses; they
/// have no effect on correctness.
///
/// # Example
/// ```rust
/// use rangemin::RmqConfig;
///
/// let config = RmqConfig::new().with_block_size(64).with_statistics(true);
/// assert_eq!(config.block_size, Some(64));
/// ```
///
/// [`block_size`]: RmqConfig::block_size
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RmqConfig {
    /// Block length for the block decomposition. `None` (or `Some(0)`) selects the
    /// automatic floor(sqrt(n)) + 1 sizing.
    pub block_size: Option<usize>,

    /// Advisory flag: enable query result caching in collaborators.
    pub enable_caching: bool,

    /// Advisory flag: enable parallel preprocessing in collaborators.
    pub enable_parallel: bool,

    /// Advisory flag: track detailed statistics in collaborators.
    pub track_statistics: bool,
}

impl RmqConfig {
    /// Creates a configuration with all defaults (automatic block sizing, all flags off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the automatic block sizing of the block decomposition.
    #[must_use]
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Sets the advisory caching flag.
    #[must_use]
    pub fn with_caching(mut self, enable: bool) -> Self {
        self.enable_caching = enable;
        self
    }

    /// Sets the advisory parallel-preprocessing flag.
    #[must_use]
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.enable_parallel = enable;
        self
    }

    /// Sets the advisory statistics flag.
    #[must_use]
    pub fn with_statistics(mut self, enable: bool) -> Self {
        self.track_statistics = enable;
        self
    }
}
