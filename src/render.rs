//! Rendering reward curves
use crate::simulation::RewardCurve;
use std::io;
use thiserror::Error;
use yansi::Paint;

/// Consumer of the finished reward curves of an experiment.
pub trait CurveSink {
    /// Render a set of curves, one per agent, in presentation order.
    fn render(&mut self, curves: &[RewardCurve]) -> Result<(), RenderError>;
}

/// Discard the curves.
impl CurveSink for () {
    fn render(&mut self, _: &[RewardCurve]) -> Result<(), RenderError> {
        Ok(())
    }
}

impl<T: CurveSink + ?Sized> CurveSink for &'_ mut T {
    fn render(&mut self, curves: &[RewardCurve]) -> Result<(), RenderError> {
        T::render(self, curves)
    }
}

/// Error rendering curves.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write chart")]
    Io(#[from] io::Error),
    #[error("chart must be at least 2x2 cells; got {width}x{height}")]
    TooSmall { width: usize, height: usize },
}

/// Keeps a copy of every set of rendered curves.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CurveCollector {
    pub curves: Vec<RewardCurve>,
}

impl CurveSink for CurveCollector {
    fn render(&mut self, curves: &[RewardCurve]) -> Result<(), RenderError> {
        self.curves.extend_from_slice(curves);
        Ok(())
    }
}

const GLYPHS: [char; 6] = ['*', '+', 'o', 'x', '#', '%'];
const COLORS: [u8; 6] = [196, 40, 33, 214, 201, 51];

/// Text line chart of average reward against time step.
///
/// Values are clipped to the y-axis bounds, `[0, 2]` by default.
/// The legend is drawn in the upper-left corner of the plot area.
#[derive(Debug)]
pub struct TextChart<W> {
    writer: W,
    /// Plot area width in characters.
    pub width: usize,
    /// Plot area height in lines.
    pub height: usize,
    /// Lower and upper y-axis bounds.
    pub y_bounds: [f64; 2],
}

impl<W: io::Write> TextChart<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            width: 72,
            height: 20,
            y_bounds: [0.0, 2.0],
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Plot row of a value; row 0 is the top.
    fn row(&self, value: f64) -> usize {
        let [lo, hi] = self.y_bounds;
        let clipped = value.max(lo).min(hi);
        let from_top = (hi - clipped) / (hi - lo);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let row = (from_top * (self.height - 1) as f64).round() as usize;
        row
    }

    fn grid(&self, curves: &[RewardCurve]) -> Vec<Vec<Option<(char, usize)>>> {
        let mut grid = vec![vec![None; self.width]; self.height];

        for (i, curve) in curves.iter().enumerate() {
            let glyph = GLYPHS[i % GLYPHS.len()];
            let points: Vec<_> = curve.points().collect();
            let n = curve.num_steps();
            for col in 0..self.width {
                // Average the points whose 1-based time step falls in this column
                let start = col * n / self.width + 1;
                let end = ((col + 1) * n / self.width + 1).max(start + 1);
                let lo = points.partition_point(|&(t, _)| t < start);
                let hi = points.partition_point(|&(t, _)| t < end);
                let bucket = &points[lo..hi];
                if bucket.is_empty() {
                    continue;
                }
                let value = bucket.iter().map(|&(_, r)| r).sum::<f64>() / bucket.len() as f64;
                grid[self.row(value)][col] = Some((glyph, i));
            }
        }

        for (i, curve) in curves.iter().enumerate().take(self.height) {
            let label = format!("{} {}", GLYPHS[i % GLYPHS.len()], curve.name);
            for (cell, c) in grid[i].iter_mut().skip(1).zip(label.chars()) {
                *cell = Some((c, i));
            }
        }
        grid
    }
}

impl<W: io::Write> CurveSink for TextChart<W> {
    fn render(&mut self, curves: &[RewardCurve]) -> Result<(), RenderError> {
        if self.width < 2 || self.height < 2 {
            return Err(RenderError::TooSmall {
                width: self.width,
                height: self.height,
            });
        }
        let [lo, hi] = self.y_bounds;
        let mid_row = (self.height - 1) / 2;
        let mid = hi - (hi - lo) * mid_row as f64 / (self.height - 1) as f64;
        let grid = self.grid(curves);

        writeln!(self.writer, "{:>7} Average reward", "")?;
        for (r, row) in grid.iter().enumerate() {
            if r == 0 {
                write!(self.writer, "{:>7.2} |", hi)?;
            } else if r == self.height - 1 {
                write!(self.writer, "{:>7.2} |", lo)?;
            } else if r == mid_row {
                write!(self.writer, "{:>7.2} |", mid)?;
            } else {
                write!(self.writer, "{:>7} |", "")?;
            }
            for cell in row {
                match cell {
                    Some((c, i)) => {
                        write!(self.writer, "{}", Paint::fixed(COLORS[i % COLORS.len()], c))?
                    }
                    None => write!(self.writer, " ")?,
                }
            }
            writeln!(self.writer)?;
        }

        let num_steps = curves.iter().map(RewardCurve::num_steps).max().unwrap_or(0);
        writeln!(self.writer, "{:>7} +{}", "", "-".repeat(self.width))?;
        writeln!(
            self.writer,
            "{:>8} 1{:>width$}",
            "",
            num_steps,
            width = self.width - 1
        )?;
        writeln!(self.writer, "{:>8} Steps", "")?;
        self.writer.flush()?;
        Ok(())
    }
}
