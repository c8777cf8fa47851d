//! # perfchart-model - Canonical plot model
//!
//! The in-memory description of one chart output: a [`Window`] holding a
//! row-major grid of [`Canvas`]es, each with an ordered list of [`Trace`]s
//! built from [`Point`] samples. The model is produced once per render
//! request by the extraction/derivative layers and consumed read-only by the
//! compiler.
//!
//! Two design points worth knowing:
//! - Canvases form an arena addressed by index. A base canvas lists overlay
//!   indices; an overlay stores its base index. There are no back-pointers.
//! - Trace properties arrive as a flat token → text bag and are converted at
//!   this boundary into the closed [`TraceOptions`] sum; the compiler never
//!   sees the untyped map.

pub mod canvas;
pub mod color;
pub mod error;
pub mod trace;
pub mod window;

pub use canvas::{AxisConfig, Canvas};
pub use color::Rgb;
pub use error::ModelError;
pub use trace::{
    AnchorValueKind, ColorScale, Orientation, PlotKind, Point, ScaleAnchor, ScaleMode, Trace,
    TraceOptions,
};
pub use window::Window;
