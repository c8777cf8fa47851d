//! # perfchart-plotly - Chart layout & rendering compiler
//!
//! Compiles the canonical plot model ([`perfchart_model::Window`]) into a
//! textual, Plotly-compatible chart specification. The compiler is a pure
//! function over the model: no I/O, no shared state, deterministic output.
//! The same window always produces byte-identical documents, so dashboard
//! regressions stay diffable.
//!
//! ## Pipeline
//!
//! The [`WindowCompiler`] drives the whole thing:
//! - the grid/domain [`layout`] engine assigns every canvas a unique axis
//!   index pair and a normalized `[0, 1]` domain rectangle,
//! - the trace compiler builds per-series value arrays, Z grids, hover text
//!   and style blocks, dispatched by plot kind,
//! - the [`colorscale`] builder turns sparse anchors into gradient stops,
//! - and the assembler stitches everything into one script (or a standalone
//!   HTML page).
//!
//! ## Concurrency
//!
//! One compilation per window, one `WindowCompiler` per job. There are no
//! suspension points and no retries; a call either returns a complete
//! document or a [`CompileError`].

pub mod colorscale;
pub mod error;
pub mod layout;
pub mod num;
pub mod symbols;

mod script;
mod trace;
mod window;

pub use colorscale::{ColorStop, DISCRETE_EPSILON};
pub use error::CompileError;
pub use layout::{AxisIndices, DomainInterval, GridLayout};
pub use window::WindowCompiler;
