//! Logging statistics from simulation runs
mod chunk;
mod chunk_by_time;
mod display;

pub use chunk::{ChunkLogger, ChunkSummary, Chunker, SummaryWriter};
pub use chunk_by_time::ByTime;
pub use display::{DisplayBackend, DisplayLogger};

use std::borrow::Cow;
use thiserror::Error;

/// Identifier of a logged value.
pub type Id = Cow<'static, str>;

/// A value that can be logged.
#[derive(Debug, Clone, PartialEq)]
pub enum Loggable {
    /// Increment a counter.
    CounterIncrement(u64),
    /// A scalar value. Aggregate by taking means.
    Scalar(f64),
    /// A sample from a distribution over `0 .. size`
    Index { value: usize, size: usize },
    /// A message. Aggregate by counting distinct messages.
    Message(Cow<'static, str>),
}

impl Loggable {
    /// The name of this variant
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::CounterIncrement(_) => "CounterIncrement",
            Self::Scalar(_) => "Scalar",
            Self::Index { .. } => "Index",
            Self::Message(_) => "Message",
        }
    }
}

impl From<f64> for Loggable {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<String> for Loggable {
    fn from(value: String) -> Self {
        Self::Message(value.into())
    }
}

impl From<&'static str> for Loggable {
    fn from(value: &'static str) -> Self {
        Self::Message(value.into())
    }
}

/// Error logging a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LogError {
    #[error("incompatible value type; previously {prev} now {now}")]
    IncompatibleValue {
        prev: &'static str,
        now: &'static str,
    },
    #[error("incompatible index size; previously {prev} now {now}")]
    IncompatibleIndexSize { prev: usize, now: usize },
    #[error("index {value} out of range for size {size}")]
    IndexOutOfRange { value: usize, size: usize },
}

/// Log time series statistics.
///
/// Values are logged in groups; a group is never split across two summary chunks.
pub trait StatsLogger: Send {
    /// Start a group of logs.
    fn group_start(&mut self);

    /// Log a value within a group.
    ///
    /// # Returns
    /// An error if the value is structurally incompatible with
    /// previous values logged under the same id.
    fn group_log(&mut self, id: Id, value: Loggable) -> Result<(), LogError>;

    /// End the current group.
    fn group_end(&mut self);

    /// Write out any summarized values that have not yet been written.
    fn flush(&mut self);

    /// Log a single value as its own group.
    fn log(&mut self, id: Id, value: Loggable) -> Result<(), LogError> {
        self.group_start();
        let result = self.group_log(id, value);
        self.group_end();
        result
    }
}

/// Logger that does nothing
impl StatsLogger for () {
    #[inline]
    fn group_start(&mut self) {}
    #[inline]
    fn group_log(&mut self, _: Id, _: Loggable) -> Result<(), LogError> {
        Ok(())
    }
    #[inline]
    fn group_end(&mut self) {}
    #[inline]
    fn flush(&mut self) {}
}

impl<T: StatsLogger + ?Sized> StatsLogger for &'_ mut T {
    #[inline]
    fn group_start(&mut self) {
        T::group_start(self)
    }
    #[inline]
    fn group_log(&mut self, id: Id, value: Loggable) -> Result<(), LogError> {
        T::group_log(self, id, value)
    }
    #[inline]
    fn group_end(&mut self) {
        T::group_end(self)
    }
    #[inline]
    fn flush(&mut self) {
        T::flush(self)
    }
}
