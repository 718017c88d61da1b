use super::{Id, LogError, Loggable, StatsLogger};
use crate::utils::stats::OnlineMeanVariance;
use std::borrow::Cow;
use std::collections::{btree_map::Entry, BTreeMap};
use std::convert::TryFrom;
use std::ops::Drop;
use std::time::{Duration, Instant};

/// Control the aggregation of logs into summaries and summaries into chunks.
pub trait Chunker: Send {
    /// Start a new log group and decide whether to flush first.
    #[inline]
    fn flush_group_start(&mut self) -> bool {
        false
    }
    /// End the current group and decide whether to flush.
    #[inline]
    fn flush_group_end(&mut self) -> bool {
        false
    }
    /// Indicate that the current chunk has been flushed
    fn note_flush(&mut self);
}

/// Never flush except on request.
impl Chunker for () {
    fn note_flush(&mut self) {}
}

/// Write out summaries to a backend.
pub trait SummaryWriter: Send {
    fn write_summaries<'a, I>(&mut self, summaries: I, elapsed: Duration)
    where
        I: Iterator<Item = (&'a Id, &'a ChunkSummary)>;
}

/// Logs time series statistics by breaking the time series into chunks and summarizing each chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkLogger<C: Chunker, W: SummaryWriter> {
    chunker: C,
    writer: W,

    // A binary tree is used so that keys are retrieved in sorted order
    summaries: BTreeMap<Id, Node>,

    // Start time of the current chunk.
    chunk_start: Instant,
}

impl<C: Chunker, W: SummaryWriter> ChunkLogger<C, W> {
    pub fn new(chunker: C, writer: W) -> Self {
        Self {
            chunker,
            writer,
            summaries: BTreeMap::new(),
            chunk_start: Instant::now(),
        }
    }

    /// The summary writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }
}

impl<C: Chunker + Default, W: SummaryWriter + Default> Default for ChunkLogger<C, W> {
    fn default() -> Self {
        Self::new(C::default(), W::default())
    }
}

impl<C: Chunker, W: SummaryWriter> StatsLogger for ChunkLogger<C, W> {
    fn group_start(&mut self) {
        if self.chunker.flush_group_start() {
            self.flush();
        }
    }

    fn group_log(&mut self, id: Id, value: Loggable) -> Result<(), LogError> {
        match self.summaries.entry(id) {
            Entry::Vacant(e) => {
                e.insert(Node::new(ChunkSummary::try_from(value)?));
            }
            Entry::Occupied(e) => e.into_mut().push(value)?,
        };
        Ok(())
    }

    fn group_end(&mut self) {
        if self.chunker.flush_group_end() {
            self.flush()
        }
    }

    fn flush(&mut self) {
        if self.summaries.values().any(|node| node.dirty) {
            self.writer.write_summaries(
                self.summaries
                    .iter()
                    .filter(|(_, node)| node.dirty)
                    .map(|(id, node)| (id, &node.summary)),
                self.chunk_start.elapsed(),
            );
        }

        for node in self.summaries.values_mut() {
            node.reset();
        }
        self.chunk_start = Instant::now();
        self.chunker.note_flush();
    }
}

/// Flush when dropped
impl<C: Chunker, W: SummaryWriter> Drop for ChunkLogger<C, W> {
    fn drop(&mut self) {
        self.flush();
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Node {
    /// Variable chunk summary
    summary: ChunkSummary,
    /// Whether the summary has been updated in this chunk
    dirty: bool,
}

impl Node {
    const fn new(summary: ChunkSummary) -> Self {
        Self {
            summary,
            dirty: true,
        }
    }

    fn push(&mut self, value: Loggable) -> Result<(), LogError> {
        self.summary.push(value)?;
        self.dirty = true;
        Ok(())
    }

    fn reset(&mut self) {
        self.dirty = false;
        self.summary.reset()
    }
}

/// Summary of the values logged under one id within a chunk.
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkSummary {
    Counter {
        increment: u64,
        initial_value: u64,
    },
    Scalar {
        stats: OnlineMeanVariance<f64>,
    },
    Index {
        counts: Vec<usize>,
    },
    Message {
        counts: BTreeMap<Cow<'static, str>, usize>,
    },
}

impl TryFrom<Loggable> for ChunkSummary {
    type Error = LogError;

    fn try_from(value: Loggable) -> Result<Self, Self::Error> {
        Ok(match value {
            Loggable::CounterIncrement(i) => Self::Counter {
                increment: i,
                initial_value: 0,
            },
            Loggable::Scalar(v) => {
                let mut stats = OnlineMeanVariance::new();
                stats.push(v);
                Self::Scalar { stats }
            }
            Loggable::Index { value: v, size } => {
                let mut counts = vec![0; size];
                increment_index(&mut counts, v)?;
                Self::Index { counts }
            }
            Loggable::Message(s) => {
                let mut counts = BTreeMap::new();
                counts.insert(s, 1);
                Self::Message { counts }
            }
        })
    }
}

fn increment_index(counts: &mut [usize], value: usize) -> Result<(), LogError> {
    let size = counts.len();
    let count = counts
        .get_mut(value)
        .ok_or(LogError::IndexOutOfRange { value, size })?;
    *count += 1;
    Ok(())
}

impl ChunkSummary {
    /// Add a value to the summary
    ///
    /// Returns an error and does not insert the value if it is incompatible with the current
    /// summary (a different loggable variant or an index of a different size)
    /// or if an index value is not less than its size.
    fn push(&mut self, value: Loggable) -> Result<(), LogError> {
        match (self, value) {
            (Self::Counter { increment, .. }, Loggable::CounterIncrement(i)) => {
                *increment += i;
            }
            (Self::Scalar { stats }, Loggable::Scalar(v)) => stats.push(v),
            (Self::Index { counts }, Loggable::Index { value: v, size }) => {
                if counts.len() != size {
                    return Err(LogError::IncompatibleIndexSize {
                        prev: counts.len(),
                        now: size,
                    });
                }
                increment_index(counts, v)?;
            }
            (Self::Message { counts }, Loggable::Message(s)) => {
                *counts.entry(s).or_insert(0) += 1;
            }
            (summary, value) => {
                return Err(LogError::IncompatibleValue {
                    prev: summary.loggable_variant_name(),
                    now: value.variant_name(),
                })
            }
        };
        Ok(())
    }

    /// Reset for the start of the next chunk.
    fn reset(&mut self) {
        match self {
            Self::Counter {
                increment,
                initial_value,
            } => {
                *initial_value += *increment;
                *increment = 0
            }
            Self::Scalar { stats } => *stats = OnlineMeanVariance::new(),
            Self::Index { counts } => counts.iter_mut().for_each(|c| *c = 0),
            Self::Message { counts } => counts.clear(),
        }
    }

    /// The name of the associated loggable variant
    const fn loggable_variant_name(&self) -> &'static str {
        match self {
            Self::Counter { .. } => "CounterIncrement",
            Self::Scalar { .. } => "Scalar",
            Self::Index { .. } => "Index",
            Self::Message { .. } => "Message",
        }
    }
}
