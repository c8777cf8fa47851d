//! Window assembler.
//!
//! Combines all canvases and traces of one window into one output document:
//! picks a base template, fills in shared properties (title, legend,
//! background, font, sizing), delegates per-canvas geometry to the layout
//! engine and per-series data blocks to the trace compiler.

use log::debug;
use perfchart_model::{AxisConfig, Canvas, Rgb, Window};

use crate::error::CompileError;
use crate::layout::{AxisIndices, GridLayout};
use crate::script::{quote, wrap_html, ScriptWriter};
use crate::trace::{emit_trace, TraceContext};

/// Fixed ratio used to estimate the rendered pixel width of a title.
const PIXELS_PER_CHAR: f64 = 8.0;

/// View dimensions used when the window leaves its size unset.
const DEFAULT_VIEW_WIDTH: u32 = 1500;
const DEFAULT_VIEW_HEIGHT: u32 = 700;

/// Margin shaved off default view dimensions so the page never grows a
/// scrollbar.
const SCROLLBAR_MARGIN: u32 = 20;

/// Domain fraction occupied by each extra overlay Y axis.
const OVERLAY_AXIS_WIDTH: f64 = 0.05;

const DEFAULT_FONT: &str = "verdana";

/// Compiles windows into chart-specification documents.
///
/// The compiler is pure: it holds no state across calls, so one instance per
/// render job is cheap and concurrent compilations need no synchronization.
#[derive(Debug, Default)]
pub struct WindowCompiler;

impl WindowCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Compile a window into a bare chart script (embedded mode).
    pub fn compile(&self, window: &Window) -> Result<String, CompileError> {
        if window.canvas_count() == 0 {
            return Err(CompileError::EmptyWindow(window.title.clone()));
        }

        let layout = GridLayout::new(window);
        let mut w = ScriptWriter::new();
        // Fallback-name counter, scoped to this compilation only.
        let mut unnamed = 0usize;

        w.open("var data = [");
        for index in window.grid_indices() {
            let canvas = window.canvas(index)?;
            self.emit_canvas_traces(&mut w, window, &layout, index, canvas, &mut unnamed)?;
            for &overlay in &canvas.overlays {
                let overlay_canvas = window.canvas(overlay)?;
                self.emit_canvas_traces(
                    &mut w,
                    window,
                    &layout,
                    overlay,
                    overlay_canvas,
                    &mut unnamed,
                )?;
            }
        }
        w.close("];");

        self.emit_layout(&mut w, window, &layout)?;
        w.line(format!("Plotly.newPlot({}, data, layout);", quote(&window.target)));
        Ok(w.finish())
    }

    /// Compile a window into a standalone HTML page.
    pub fn compile_html(&self, window: &Window) -> Result<String, CompileError> {
        let script = self.compile(window)?;
        let (width, height) = view_dimensions(window);
        Ok(wrap_html(&script, &window.target, width, height))
    }

    fn emit_canvas_traces(
        &self,
        w: &mut ScriptWriter,
        window: &Window,
        layout: &GridLayout<'_>,
        index: usize,
        canvas: &Canvas,
        unnamed: &mut usize,
    ) -> Result<(), CompileError> {
        let axes = if window.three_dimensional {
            AxisIndices { x: 1, y: 1 }
        } else {
            layout.axis_indices(index)?
        };
        for trace in &canvas.traces {
            let name = if trace.id.is_empty() {
                *unnamed += 1;
                format!("trace-{unnamed}")
            } else {
                trace.label()
            };
            let ctx = TraceContext {
                axes,
                name,
                axis_labels: [&canvas.x.label, &canvas.y.label, &canvas.z.label],
            };
            emit_trace(w, trace, &ctx);
        }
        Ok(())
    }

    fn emit_layout(
        &self,
        w: &mut ScriptWriter,
        window: &Window,
        layout: &GridLayout<'_>,
    ) -> Result<(), CompileError> {
        let (width, height) = view_dimensions(window);

        w.open("var layout = {");
        w.open("title: {");
        w.line(format!(
            "text: {},",
            quote(&truncate_title(&window.title, width))
        ));
        w.close("},");
        w.line(format!("showlegend: {},", window.show_legend));
        let background = window.background.unwrap_or(Rgb::WHITE).to_css();
        w.line(format!("paper_bgcolor: {},", quote(&background)));
        w.line(format!("plot_bgcolor: {},", quote(&background)));
        w.open("font: {");
        let font = window
            .font
            .as_deref()
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| DEFAULT_FONT.to_string());
        w.line(format!("family: {},", quote(&font)));
        w.close("},");
        w.line(format!("width: {width},"));
        w.line(format!("height: {height},"));

        if window.three_dimensional {
            debug!("window '{}': 3-D scene template", window.title);
            self.emit_scene(w, window)?;
        } else if is_matrix_template(window) {
            debug!("window '{}': table/heatmap template", window.title);
            self.emit_matrix_axes(w, window)?;
        } else {
            debug!("window '{}': multi-axis grid template", window.title);
            for index in window.grid_indices() {
                let canvas = window.canvas(index)?;
                let axes = layout.axis_indices(index)?;
                let x_domain = layout.x_domain(index)?;
                let y_domain = layout.y_domain(index)?;

                emit_axis(
                    w,
                    &axis_key("xaxis", axes.x),
                    &canvas.x,
                    canvas.show_grid,
                    canvas.show_zero_line,
                    Some((x_domain.start, x_domain.end)),
                    0.0,
                    None,
                );
                emit_axis(
                    w,
                    &axis_key("yaxis", axes.y),
                    &canvas.y,
                    canvas.show_grid,
                    canvas.show_zero_line,
                    Some((y_domain.start, y_domain.end)),
                    0.0,
                    None,
                );

                // Overlay canvases add free-floating Y axes on the right of
                // the base's (already narrowed) plotting area.
                for (slot, &overlay) in canvas.overlays.iter().enumerate() {
                    let overlay_canvas = window.canvas(overlay)?;
                    let overlay_axes = layout.axis_indices(overlay)?;
                    let position = x_domain.end + slot as f64 * OVERLAY_AXIS_WIDTH;
                    emit_axis(
                        w,
                        &axis_key("yaxis", overlay_axes.y),
                        &overlay_canvas.y,
                        overlay_canvas.show_grid,
                        overlay_canvas.show_zero_line,
                        None,
                        position,
                        Some(axes.y),
                    );
                }
            }
        }
        w.close("};");
        Ok(())
    }

    fn emit_scene(&self, w: &mut ScriptWriter, window: &Window) -> Result<(), CompileError> {
        let first = window
            .grid_indices()
            .next()
            .ok_or_else(|| CompileError::EmptyWindow(window.title.clone()))?;
        let canvas = window.canvas(first)?;
        w.open("scene: {");
        for (key, axis) in [
            ("xaxis", &canvas.x),
            ("yaxis", &canvas.y),
            ("zaxis", &canvas.z),
        ] {
            w.open(format!("{key}: {{"));
            w.line(format!("title: {},", quote(&axis.label)));
            w.line(format!("type: {},", quote(axis_type(axis))));
            w.close("},");
        }
        w.close("},");
        Ok(())
    }

    /// The table/heatmap template: one full-area axis pair, no grid domains.
    fn emit_matrix_axes(&self, w: &mut ScriptWriter, window: &Window) -> Result<(), CompileError> {
        let first = window
            .grid_indices()
            .next()
            .ok_or_else(|| CompileError::EmptyWindow(window.title.clone()))?;
        let canvas = window.canvas(first)?;
        for (key, axis) in [("xaxis", &canvas.x), ("yaxis", &canvas.y)] {
            w.open(format!("{key}: {{"));
            w.line(format!("title: {},", quote(&axis.label)));
            w.line(format!("type: {},", quote(axis_type(axis))));
            w.close("},");
        }
        Ok(())
    }
}

/// True when the window qualifies for the table/heatmap template: a
/// single-canvas window holding exactly one matrix-kind trace.
fn is_matrix_template(window: &Window) -> bool {
    if !window.single_canvas {
        return false;
    }
    let Some(first) = window.grid_indices().next() else {
        return false;
    };
    let Ok(canvas) = window.canvas(first) else {
        return false;
    };
    canvas.traces.len() == 1 && canvas.traces[0].kind.is_matrix()
}

#[allow(clippy::too_many_arguments)]
fn emit_axis(
    w: &mut ScriptWriter,
    key: &str,
    axis: &AxisConfig,
    show_grid: bool,
    show_zero_line: bool,
    domain: Option<(f64, f64)>,
    position: f64,
    overlaying: Option<usize>,
) {
    w.open(format!("{key}: {{"));
    w.line(format!("title: {},", quote(&axis.label)));
    w.line(format!("type: {},", quote(axis_type(axis))));
    w.line(format!("position: {position},"));
    if let Some((start, end)) = domain {
        w.line(format!("domain: [{start}, {end}],"));
    }
    if axis.autoscale || axis.min.is_none() || axis.max.is_none() {
        w.line("autorange: true,");
    } else {
        w.line("autorange: false,");
        w.line(format!(
            "range: [{}, {}],",
            axis.min.unwrap_or_default(),
            axis.max.unwrap_or_default()
        ));
    }
    if let Some(precision) = axis.precision {
        w.line(format!("tickformat: '.{precision}f',"));
    }
    if let Some(base) = overlaying {
        let base_ref = if base > 1 {
            format!("y{base}")
        } else {
            "y".to_string()
        };
        w.line(format!("overlaying: {},", quote(&base_ref)));
        w.line("side: 'right',");
        w.line("anchor: 'free',");
    }
    w.line(format!("showgrid: {show_grid},"));
    w.line(format!("zeroline: {show_zero_line},"));
    let color = axis.color.unwrap_or(Rgb::BLACK).to_css();
    w.open("titlefont: {");
    w.line(format!("color: {},", quote(&color)));
    w.close("},");
    w.open("tickfont: {");
    w.line(format!("color: {},", quote(&color)));
    w.close("},");
    w.close("},");
}

fn axis_key(prefix: &str, index: usize) -> String {
    if index > 1 {
        format!("{prefix}{index}")
    } else {
        prefix.to_string()
    }
}

fn axis_type(axis: &AxisConfig) -> &'static str {
    if axis.log_scale {
        "log"
    } else {
        ""
    }
}

/// View dimensions, falling back to defaults reduced by the scrollbar margin.
fn view_dimensions(window: &Window) -> (u32, u32) {
    let width = if window.width > 0 {
        window.width
    } else {
        DEFAULT_VIEW_WIDTH - SCROLLBAR_MARGIN
    };
    let height = if window.height > 0 {
        window.height
    } else {
        DEFAULT_VIEW_HEIGHT - SCROLLBAR_MARGIN
    };
    (width, height)
}

/// Truncate a title whose estimated pixel width exceeds the window width,
/// keeping the trailing end behind a leading ellipsis.
fn truncate_title(title: &str, window_width: u32) -> String {
    let estimated = title.chars().count() as f64 * PIXELS_PER_CHAR;
    if estimated <= window_width as f64 {
        return title.to_string();
    }
    let budget = (window_width as f64 / PIXELS_PER_CHAR) as usize;
    let keep = budget.saturating_sub(3);
    let chars: Vec<char> = title.chars().collect();
    let tail: String = chars[chars.len() - keep.min(chars.len())..].iter().collect();
    debug!("title truncated to {} chars", keep);
    format!("...{tail}")
}
