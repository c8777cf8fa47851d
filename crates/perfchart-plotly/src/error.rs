//! Error types for chart compilation.

use thiserror::Error;

/// Errors that can occur while compiling a window into a chart specification.
///
/// These are contract violations in the input model. Recoverable conditions
/// (malformed numerics, degenerate pixel dimensions, missing optional
/// configuration) never surface here; they are handled locally with
/// documented fallbacks.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("window '{0}' has no canvases")]
    EmptyWindow(String),

    #[error("canvas index {0} is out of range for this window")]
    CanvasOutOfRange(usize),

    #[error("canvas index {0} is not reachable from the window grid")]
    CanvasNotInGrid(usize),

    #[error("overlay canvas {overlay} references missing base {base}")]
    DanglingBase { overlay: usize, base: usize },

    #[error(transparent)]
    Model(#[from] perfchart_model::ModelError),
}
