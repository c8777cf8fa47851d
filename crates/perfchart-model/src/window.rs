//! Windows: one complete chart output document.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::ModelError;

/// One chart output document, holding a row-major grid of canvases.
///
/// The window owns the canvas arena. Grid rows hold arena indices of base
/// canvases only; overlays live in the arena but are reachable through their
/// base's overlay list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Pixel dimensions; 0 means unset.
    pub width: u32,
    pub height: u32,
    pub background: Option<Rgb>,
    pub title: String,
    pub show_legend: bool,
    /// Name of the output target (the div the runtime renders into).
    pub target: String,
    pub font: Option<String>,
    /// Row-major grid of base canvas indices.
    pub rows: Vec<Vec<usize>>,
    pub three_dimensional: bool,
    /// True while the arena holds exactly one canvas; maintained by
    /// [`Self::add_canvas`] and [`Self::add_overlay`].
    pub single_canvas: bool,
    canvases: Vec<Canvas>,
}

impl Window {
    pub fn new(title: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            width: 0,
            height: 0,
            background: None,
            title: title.into(),
            show_legend: true,
            target: target.into(),
            font: None,
            rows: Vec::new(),
            three_dimensional: false,
            single_canvas: false,
            canvases: Vec::new(),
        }
    }

    pub fn canvases(&self) -> &[Canvas] {
        &self.canvases
    }

    pub fn canvas(&self, index: usize) -> Result<&Canvas, ModelError> {
        self.canvases
            .get(index)
            .ok_or(ModelError::CanvasOutOfRange(index))
    }

    pub fn canvas_mut(&mut self, index: usize) -> Result<&mut Canvas, ModelError> {
        self.canvases
            .get_mut(index)
            .ok_or(ModelError::CanvasOutOfRange(index))
    }

    /// Add a base canvas at the end of the given grid row, creating rows as
    /// needed. Returns the canvas's arena index.
    pub fn add_canvas(&mut self, row: usize, mut canvas: Canvas) -> usize {
        while self.rows.len() <= row {
            self.rows.push(Vec::new());
        }
        canvas.row = row;
        canvas.col = self.rows[row].len();
        let index = self.canvases.len();
        self.rows[row].push(index);
        self.canvases.push(canvas);
        self.single_canvas = self.canvases.len() == 1;
        self.reindex_rows();
        index
    }

    /// Attach `canvas` as an overlay of the base canvas at `base`.
    ///
    /// The overlay shares the base's plotting area and X axis but owns an
    /// independent Y axis. Returns the overlay's arena index.
    pub fn add_overlay(&mut self, base: usize, mut canvas: Canvas) -> Result<usize, ModelError> {
        let base_canvas = self
            .canvases
            .get(base)
            .ok_or(ModelError::CanvasOutOfRange(base))?;
        if base_canvas.is_overlay() {
            return Err(ModelError::OverlayOfOverlay(base));
        }
        if canvas.is_overlay() || !canvas.overlays.is_empty() {
            return Err(ModelError::InvalidOverlay);
        }
        canvas.row = base_canvas.row;
        canvas.col = base_canvas.col;
        canvas.row_inverted = base_canvas.row_inverted;
        canvas.base = Some(base);
        let index = self.canvases.len();
        self.canvases.push(canvas);
        self.canvases[base].overlays.push(index);
        self.single_canvas = false;
        Ok(index)
    }

    /// Total number of canvases, bases and overlays alike.
    pub fn canvas_count(&self) -> usize {
        self.canvases.len()
    }

    /// Number of grid rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Base canvas indices in row-major order.
    pub fn grid_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Recompute each canvas's bottom-up row number after grid changes.
    fn reindex_rows(&mut self) {
        let rows = self.rows.len();
        for row in 0..rows {
            let inverted = rows - 1 - row;
            for i in 0..self.rows[row].len() {
                let index = self.rows[row][i];
                self.canvases[index].row_inverted = inverted;
                for o in 0..self.canvases[index].overlays.len() {
                    let overlay = self.canvases[index].overlays[o];
                    self.canvases[overlay].row_inverted = inverted;
                }
            }
        }
    }
}
