//! Canvases: sub-plot regions within a window.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::color::Rgb;
use crate::trace::Trace;

/// Configuration of one axis (X, Y, or Z) of a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub label: String,
    /// Title/tick color; black when unset.
    pub color: Option<Rgb>,
    pub log_scale: bool,
    pub autoscale: bool,
    /// Explicit range bounds; `None` means unbounded.
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Tick label decimal places.
    pub precision: Option<u32>,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            color: None,
            log_scale: false,
            autoscale: true,
            min: None,
            max: None,
            precision: None,
        }
    }
}

impl AxisConfig {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// One sub-plot region within a window.
///
/// Canvases live in an arena owned by the window and refer to each other by
/// index: a base canvas lists its overlays in `overlays`, and an overlay
/// records its base in `base`. The relation is acyclic and one-directional;
/// an overlay never owns overlays of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Grid position, top-down row-major.
    pub row: usize,
    pub col: usize,
    /// Row position counted bottom-up, as the renderer numbers rows.
    pub row_inverted: usize,
    pub x: AxisConfig,
    pub y: AxisConfig,
    pub z: AxisConfig,
    pub show_grid: bool,
    pub show_zero_line: bool,
    pub traces: Vec<Trace>,
    /// Arena indices of canvases overlaying this one.
    pub overlays: SmallVec<[usize; 2]>,
    /// Arena index of the base canvas, if this canvas is an overlay.
    pub base: Option<usize>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            row_inverted: 0,
            x: AxisConfig::default(),
            y: AxisConfig::default(),
            z: AxisConfig::default(),
            show_grid: true,
            show_zero_line: true,
            traces: Vec::new(),
            overlays: SmallVec::new(),
            base: None,
        }
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_overlay(&self) -> bool {
        self.base.is_some()
    }

    pub fn add_trace(&mut self, trace: Trace) {
        self.traces.push(trace);
    }
}
