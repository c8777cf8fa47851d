//! Canvas grid/domain layout engine.
//!
//! Assigns every canvas in a window a unique pair of axis indices and a
//! normalized `[0, 1]` domain interval per dimension. Overlay canvases share
//! their base's X axis but receive a distinct Y axis, and the base's X
//! domain is narrowed to make room for the extra Y axes on the right.

use log::warn;
use perfchart_model::Window;

use crate::error::CompileError;

/// Pixel width reserved between adjacent canvases.
const BUFFER_PIXELS: f64 = 50.0;

/// Buffer fraction used when the window's pixel dimensions are degenerate.
const FALLBACK_BUFFER: f64 = 0.06;

/// Domain fraction reserved per overlay Y axis.
const OVERLAY_AXIS_WIDTH: f64 = 0.05;

/// Axis indices assigned to one canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisIndices {
    pub x: usize,
    pub y: usize,
}

/// A normalized `[start, end] ⊆ [0, 1]` domain interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainInterval {
    pub start: f64,
    pub end: f64,
}

/// Per-window layout engine over a borrowed canvas grid.
pub struct GridLayout<'a> {
    window: &'a Window,
    offset: usize,
}

impl<'a> GridLayout<'a> {
    pub fn new(window: &'a Window) -> Self {
        Self::with_offset(window, 1)
    }

    /// Start axis numbering at `offset` instead of 1.
    pub fn with_offset(window: &'a Window, offset: usize) -> Self {
        Self { window, offset }
    }

    /// Assign axis indices to the canvas at arena index `target`.
    ///
    /// Traversal is row-major over the grid, visiting each base's overlays
    /// in order. A base receives the same index for X and Y; an overlay
    /// shares the base's X index and receives the next free Y index.
    /// Numbering continues past an overlay group and never resets, so every
    /// canvas in the window ends up with a distinct Y index.
    pub fn axis_indices(&self, target: usize) -> Result<AxisIndices, CompileError> {
        let mut base_count = self.offset;
        let mut overlay_count = 0;

        for index in self.window.grid_indices() {
            if index == target {
                return Ok(AxisIndices {
                    x: base_count,
                    y: base_count,
                });
            }
            let canvas = self
                .window
                .canvas(index)
                .map_err(|_| CompileError::CanvasOutOfRange(index))?;
            for &overlay in &canvas.overlays {
                overlay_count += 1;
                if overlay == target {
                    return Ok(AxisIndices {
                        x: base_count,
                        y: base_count + overlay_count,
                    });
                }
            }
            base_count += 1 + overlay_count;
            overlay_count = 0;
        }

        Err(CompileError::CanvasNotInGrid(target))
    }

    /// The X domain of the canvas at arena index `target`.
    ///
    /// Overlays use their base's grid position. A base with N overlays gives
    /// up `N × 0.05` at its right edge for the extra Y axes, unless doing so
    /// would invert the interval.
    pub fn x_domain(&self, target: usize) -> Result<DomainInterval, CompileError> {
        let canvas = self.resolve_base(target)?;
        let count = self
            .window
            .rows
            .get(canvas.row)
            .map(Vec::len)
            .unwrap_or(1)
            .max(1);
        let mut interval = domain(canvas.col, count, self.window.width);

        let reserved = canvas.overlays.len() as f64 * OVERLAY_AXIS_WIDTH;
        if reserved > 0.0 {
            let reduced = interval.end - reserved;
            if reduced > interval.start {
                interval.end = reduced;
            }
        }
        Ok(interval)
    }

    /// The Y domain of the canvas at arena index `target`.
    ///
    /// Uses the bottom-up row position, since the renderer numbers rows
    /// upward while the grid counts downward.
    pub fn y_domain(&self, target: usize) -> Result<DomainInterval, CompileError> {
        let canvas = self.resolve_base(target)?;
        let count = self.window.row_count().max(1);
        Ok(domain(canvas.row_inverted, count, self.window.height))
    }

    fn resolve_base(&self, target: usize) -> Result<&'a perfchart_model::Canvas, CompileError> {
        let canvas = self
            .window
            .canvas(target)
            .map_err(|_| CompileError::CanvasOutOfRange(target))?;
        match canvas.base {
            Some(base) => self
                .window
                .canvas(base)
                .map_err(|_| CompileError::DanglingBase {
                    overlay: target,
                    base,
                }),
            None => Ok(canvas),
        }
    }
}

/// Partition `[0, 1]` into `count` slots and return slot `step`.
///
/// Every slot except the last gives up a trailing buffer so adjacent
/// canvases do not touch; the last slot always extends to exactly 1.0.
fn domain(step: usize, count: usize, axis_pixels: u32) -> DomainInterval {
    let size = 1.0 / count as f64;
    let start = step as f64 * size;
    if step + 1 >= count {
        return DomainInterval { start, end: 1.0 };
    }

    let mut buffer = BUFFER_PIXELS / axis_pixels as f64;
    if !buffer.is_finite() || buffer <= 0.0 {
        warn!(
            "degenerate axis length {} px, using fallback domain buffer",
            axis_pixels
        );
        buffer = FALLBACK_BUFFER;
    }

    let mut end = start + size;
    // Only buffer when the slot is wide enough; never invert the interval.
    if size > buffer {
        end -= buffer;
    }
    DomainInterval { start, end }
}
