//! Error types for plot model construction.

use thiserror::Error;

use crate::trace::PlotKind;

/// Errors that can occur while building or validating a plot model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("canvas index {0} is out of range for this window")]
    CanvasOutOfRange(usize),

    #[error("canvas {0} is itself an overlay and cannot own overlays")]
    OverlayOfOverlay(usize),

    #[error("overlay canvas must be a plain canvas without overlays of its own")]
    InvalidOverlay,

    #[error("unknown trace property token '{0}'")]
    UnknownToken(String),

    #[error("token '{token}' does not apply to {kind:?} traces")]
    TokenNotApplicable { token: &'static str, kind: PlotKind },

    #[error("invalid value '{value}' for token '{token}'")]
    InvalidTokenValue {
        token: &'static str,
        value: String,
    },
}
