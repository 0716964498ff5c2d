use core::fmt;
use core::num::NonZeroUsize;
use core::str::FromStr;

use crate::error::ConfigError;

/// How the merge drives its sources.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Call [`Source::pop`][crate::Source::pop] on one source at a time.
    #[default]
    Sequential,
    /// Call [`Source::pop_async`][crate::Source::pop_async]. Priming awaits
    /// the first pops of every source together; refills are awaited one at a
    /// time.
    Concurrent,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Sequential => "sequential",
            Mode::Concurrent => "concurrent",
        })
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "sync" => Ok(Mode::Sequential),
            "concurrent" | "async" => Ok(Mode::Concurrent),
            _ => Err(ConfigError::UnknownMode(s.to_owned())),
        }
    }
}

/// Settings for one merge.
///
/// # Examples
///
/// ```
/// use timeline_merge::{MergeConfig, Mode};
///
/// let config = MergeConfig::concurrent().batch_width(4);
/// assert_eq!(config.get_mode(), Mode::Concurrent);
/// assert_eq!(config.get_batch_width().get(), 4);
///
/// let parsed = MergeConfig::from_parts("sequential", "1").unwrap();
/// assert_eq!(parsed, MergeConfig::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeConfig {
    mode: Mode,
    batch_width: NonZeroUsize,
}

impl MergeConfig {
    /// Sequential mode with a batch width of one.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Sequential,
            batch_width: NonZeroUsize::MIN,
        }
    }

    /// Shorthand for `MergeConfig::new().mode(Mode::Sequential)`.
    pub const fn sequential() -> Self {
        Self::new()
    }

    /// Shorthand for `MergeConfig::new().mode(Mode::Concurrent)`.
    pub const fn concurrent() -> Self {
        Self::new().mode(Mode::Concurrent)
    }

    /// Set the scheduling mode.
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set how many records are pulled from a source each time it needs
    /// refilling. Zero is clamped to one.
    ///
    /// The heap holds at most `sources × width` records, so a width of one
    /// gives the tightest memory bound.
    pub const fn batch_width(mut self, width: usize) -> Self {
        self.batch_width = match NonZeroUsize::new(width) {
            Some(width) => width,
            None => NonZeroUsize::MIN,
        };
        self
    }

    /// Parse a mode and a batch width, e.g. from command-line arguments or
    /// environment variables.
    pub fn from_parts(mode: &str, batch_width: &str) -> Result<Self, ConfigError> {
        let width = batch_width
            .trim()
            .parse::<NonZeroUsize>()
            .map_err(|_| ConfigError::InvalidBatchWidth(batch_width.to_owned()))?;
        Ok(Self {
            mode: mode.parse()?,
            batch_width: width,
        })
    }

    /// The configured scheduling mode.
    pub const fn get_mode(&self) -> Mode {
        self.mode
    }

    /// The configured batch width.
    pub const fn get_batch_width(&self) -> NonZeroUsize {
        self.batch_width
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self::new()
    }
}
