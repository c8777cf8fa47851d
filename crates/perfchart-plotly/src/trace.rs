//! Trace (series) compiler.
//!
//! Builds the per-series data block of the output document: axis value
//! arrays, the dense Z grid for matrix kinds, hover text, and marker/line
//! style blocks, dispatched by plot kind.

use perfchart_model::{Orientation, PlotKind, Point, Trace, TraceOptions};

use crate::colorscale::{self, ColorStop};
use crate::layout::AxisIndices;
use crate::num;
use crate::script::{quote, ScriptWriter};
use crate::symbols;

/// Default histogram bin count, used when precision is unset or negative.
const DEFAULT_BIN_COUNT: i32 = 10;

/// Per-trace compilation context supplied by the window assembler.
pub(crate) struct TraceContext<'a> {
    pub axes: AxisIndices,
    /// Resolved display name (fallback already applied).
    pub name: String,
    /// Canvas axis labels for X, Y, Z, used by dimension-style kinds.
    pub axis_labels: [&'a str; 3],
}

/// Emit one trace object into the data array.
pub(crate) fn emit_trace(w: &mut ScriptWriter, trace: &Trace, ctx: &TraceContext<'_>) {
    w.open("{");
    match trace.kind {
        PlotKind::Scatter | PlotKind::Area | PlotKind::CategoryScatter => {
            emit_scatter(w, trace, ctx)
        }
        PlotKind::Scatter3d => emit_scatter_3d(w, trace, ctx),
        PlotKind::Surface | PlotKind::Heatmap | PlotKind::Heatmap3d | PlotKind::Contour => {
            emit_matrix(w, trace, ctx)
        }
        PlotKind::Box => emit_box(w, trace, ctx),
        PlotKind::Histogram => emit_histogram(w, trace, ctx),
        PlotKind::Bar | PlotKind::CategoryBar => emit_bar(w, trace, ctx),
        PlotKind::ParallelCoordinates => emit_parcoords(w, trace, ctx),
        PlotKind::TreeMap => emit_treemap(w, trace, ctx),
    }
    w.close("},");
}

// ============================================================================
// Per-kind emission
// ============================================================================

fn emit_scatter(w: &mut ScriptWriter, trace: &Trace, ctx: &TraceContext<'_>) {
    let (draw_lines, error_values) = match &trace.options {
        TraceOptions::Scatter {
            draw_lines,
            error_values,
        } => (*draw_lines, error_values.as_deref()),
        _ => (false, None),
    };
    // Category kinds always treat the independent axis as text labels.
    let force_text = trace.kind == PlotKind::CategoryScatter;

    w.line("type: 'scatter',");
    w.line(format!("name: {},", quote(&ctx.name)));
    emit_axis_refs(w, ctx.axes);
    emit_values(w, "x", trace.points.iter().map(|p| p.x.as_str()), force_text);
    emit_values(w, "y", trace.points.iter().map(|p| p.y.as_str()), false);
    if trace.kind == PlotKind::Area {
        w.line("fill: 'tozeroy',");
    }
    w.line(format!("mode: '{}',", mode_for(draw_lines, trace.shape.as_deref())));
    // Scatter points usually carry no Z; the dependent axis drives the scale.
    let color_values: Vec<&str> = if trace.points.iter().any(|p| p.z.is_some()) {
        z_values(&trace.points).collect()
    } else {
        trace.points.iter().map(|p| p.y.as_str()).collect()
    };
    let stops = scale_stops(trace, color_values.iter().copied(), None);
    emit_marker(w, trace, &stops, &color_values);
    if draw_lines {
        w.open("line: {");
        w.line(format!("color: {},", quote(&trace.color.to_css())));
        w.close("},");
    }
    if let Some(errors) = error_values {
        w.open("error_y: {");
        w.line("type: 'data',");
        emit_values(w, "array", errors.iter().map(String::as_str), false);
        w.line("visible: true,");
        w.close("},");
    }
    emit_hover(w, &trace.points);
}

fn emit_scatter_3d(w: &mut ScriptWriter, trace: &Trace, ctx: &TraceContext<'_>) {
    let show_scale = match trace.options {
        TraceOptions::Scatter3d { show_scale } => show_scale,
        _ => true,
    };

    w.line("type: 'scatter3d',");
    w.line(format!("name: {},", quote(&ctx.name)));
    emit_values(w, "x", trace.points.iter().map(|p| p.x.as_str()), false);
    emit_values(w, "y", trace.points.iter().map(|p| p.y.as_str()), false);
    emit_values(w, "z", z_values(&trace.points), false);
    w.line("mode: 'markers',");

    let stops = scale_stops(trace, z_values(&trace.points), None);
    w.open("marker: {");
    if stops.is_empty() {
        w.line(format!("color: {},", quote(&trace.color.to_css())));
    } else {
        // Color markers by their Z value through the scale.
        emit_values(w, "color", z_values(&trace.points), false);
        w.line(format!("colorscale: {},", scale_literal(&stops)));
        w.line(format!("showscale: {},", show_scale));
    }
    w.line(format!(
        "symbol: '{}',",
        symbols::lookup_or_default(trace.shape.as_deref())
    ));
    w.close("},");
    emit_hover(w, &trace.points);
}

fn emit_matrix(w: &mut ScriptWriter, trace: &Trace, ctx: &TraceContext<'_>) {
    let (precision, bounds) = match trace.options {
        TraceOptions::Matrix { precision, bounds } => (precision, bounds),
        _ => (None, None),
    };

    let type_name = match trace.kind {
        PlotKind::Heatmap => "heatmap",
        PlotKind::Contour => "contour",
        // Heatmap3d renders through the surface pipeline.
        _ => "surface",
    };

    let mut xs = num::dedup_first_seen(&collect(trace.points.iter().map(|p| p.x.clone())));
    let mut ys = num::dedup_first_seen(&collect(trace.points.iter().map(|p| p.y.clone())));
    if trace.kind == PlotKind::Surface {
        num::sort_intelligent(&mut xs);
        num::sort_intelligent(&mut ys);
    }

    w.line(format!("type: '{type_name}',"));
    w.line(format!("name: {},", quote(&ctx.name)));
    if !trace.kind.is_three_dimensional() {
        emit_axis_refs(w, ctx.axes);
    }
    emit_values(w, "x", xs.iter().map(String::as_str), false);
    emit_values(w, "y", ys.iter().map(String::as_str), false);

    // Heatmap3d samples arrive column-major; everything else is row-major.
    let transpose = trace.kind == PlotKind::Heatmap3d;
    let grid = z_grid(&trace.points, xs.len(), ys.len(), precision, transpose);
    let rows: Vec<String> = grid
        .iter()
        .map(|row| format!("[{}]", row.join(", ")))
        .collect();
    w.line(format!("z: [{}],", rows.join(", ")));

    if trace.kind == PlotKind::Contour {
        w.line("autocontour: true,");
    }

    let stops = scale_stops(trace, z_values(&trace.points), bounds);
    let stops = if stops.is_empty() {
        colorscale::fallback(&[trace.color])
    } else {
        stops
    };
    w.line(format!("colorscale: {},", scale_literal(&stops)));
    w.line("showscale: true,");
}

fn emit_box(w: &mut ScriptWriter, trace: &Trace, ctx: &TraceContext<'_>) {
    w.line("type: 'box',");
    w.line(format!("name: {},", quote(&ctx.name)));
    emit_axis_refs(w, ctx.axes);
    emit_values(w, "y", trace.points.iter().map(|p| p.y.as_str()), false);
    w.open("marker: {");
    w.line(format!("color: {},", quote(&trace.color.to_css())));
    w.close("},");
}

fn emit_histogram(w: &mut ScriptWriter, trace: &Trace, ctx: &TraceContext<'_>) {
    let (orientation, cumulative, bin_count) = match trace.options {
        TraceOptions::Histogram {
            orientation,
            cumulative,
            bin_count,
        } => (orientation, cumulative, bin_count),
        _ => (Orientation::Vertical, false, -1),
    };
    let bins = if bin_count >= 0 {
        bin_count
    } else {
        DEFAULT_BIN_COUNT
    };

    w.line("type: 'histogram',");
    w.line(format!("name: {},", quote(&ctx.name)));
    emit_axis_refs(w, ctx.axes);
    // Orientation decides which physical axis carries the samples.
    match orientation {
        Orientation::Vertical => {
            emit_values(w, "x", trace.points.iter().map(|p| p.y.as_str()), false);
            w.line(format!("nbinsx: {bins},"));
        }
        Orientation::Horizontal => {
            emit_values(w, "y", trace.points.iter().map(|p| p.y.as_str()), false);
            w.line(format!("nbinsy: {bins},"));
        }
    }
    if cumulative {
        w.open("cumulative: {");
        w.line("enabled: true,");
        w.close("},");
    }
    w.open("marker: {");
    w.line(format!("color: {},", quote(&trace.color.to_css())));
    w.close("},");
}

fn emit_bar(w: &mut ScriptWriter, trace: &Trace, ctx: &TraceContext<'_>) {
    let orientation = match trace.options {
        TraceOptions::Bar { orientation } => orientation,
        _ => Orientation::Vertical,
    };
    let force_text = trace.kind == PlotKind::CategoryBar;

    w.line("type: 'bar',");
    w.line(format!("name: {},", quote(&ctx.name)));
    emit_axis_refs(w, ctx.axes);
    match orientation {
        Orientation::Vertical => {
            emit_values(w, "x", trace.points.iter().map(|p| p.x.as_str()), force_text);
            emit_values(w, "y", trace.points.iter().map(|p| p.y.as_str()), false);
        }
        Orientation::Horizontal => {
            emit_values(w, "x", trace.points.iter().map(|p| p.y.as_str()), false);
            emit_values(w, "y", trace.points.iter().map(|p| p.x.as_str()), force_text);
            w.line("orientation: 'h',");
        }
    }
    w.open("marker: {");
    w.line(format!("color: {},", quote(&trace.color.to_css())));
    w.close("},");
    emit_hover(w, &trace.points);
}

fn emit_parcoords(w: &mut ScriptWriter, trace: &Trace, ctx: &TraceContext<'_>) {
    w.line("type: 'parcoords',");
    w.line(format!("name: {},", quote(&ctx.name)));
    w.open("line: {");
    w.line(format!("color: {},", quote(&trace.color.to_css())));
    w.close("},");
    w.open("dimensions: [");
    let axes: [(&str, Box<dyn Iterator<Item = &str> + '_>); 2] = [
        (
            ctx.axis_labels[0],
            Box::new(trace.points.iter().map(|p| p.x.as_str())),
        ),
        (
            ctx.axis_labels[1],
            Box::new(trace.points.iter().map(|p| p.y.as_str())),
        ),
    ];
    for (label, values) in axes {
        w.open("{");
        w.line(format!("label: {},", quote(label)));
        emit_values(w, "values", values, false);
        w.close("},");
    }
    if trace.points.iter().any(|p| p.z.is_some()) {
        w.open("{");
        w.line(format!("label: {},", quote(ctx.axis_labels[2])));
        emit_values(w, "values", z_values(&trace.points), false);
        w.close("},");
    }
    w.close("],");
}

fn emit_treemap(w: &mut ScriptWriter, trace: &Trace, ctx: &TraceContext<'_>) {
    w.line("type: 'treemap',");
    w.line(format!("name: {},", quote(&ctx.name)));
    emit_values(w, "labels", trace.points.iter().map(|p| p.x.as_str()), true);
    emit_values(w, "values", trace.points.iter().map(|p| p.y.as_str()), false);
    let parents = vec!["''"; trace.points.len()];
    w.line(format!("parents: [{}],", parents.join(", ")));
    w.open("marker: {");
    w.line(format!(
        "colors: [{}],",
        trace
            .points
            .iter()
            .map(|_| quote(&trace.color.to_css()))
            .collect::<Vec<_>>()
            .join(", ")
    ));
    w.close("},");
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Build the dense Z grid for matrix kinds.
///
/// Cell `(row, col)` takes the Z value at linear point position
/// `row·W + col` (`col·H + row` when transposed). Missing or non-numeric
/// cells become quoted text; numeric cells become bare literals, truncated
/// to `precision` decimals when configured.
pub(crate) fn z_grid(
    points: &[Point],
    width: usize,
    height: usize,
    precision: Option<u32>,
    transpose: bool,
) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(height);
    for row in 0..height {
        let mut cells = Vec::with_capacity(width);
        for col in 0..width {
            let linear = if transpose {
                col * height + row
            } else {
                row * width + col
            };
            let raw = points
                .get(linear)
                .and_then(|p| p.z.as_deref())
                .unwrap_or("");
            if num::is_numeric(raw) {
                match precision {
                    Some(p) => cells.push(num::truncate_precision(raw, p)),
                    None => cells.push(raw.to_string()),
                }
            } else {
                cells.push(quote(raw));
            }
        }
        grid.push(cells);
    }
    grid
}

/// Emit a value array line: bare literals when every value is numeric,
/// quoted text otherwise.
fn emit_values<'a, I>(w: &mut ScriptWriter, key: &str, values: I, force_text: bool)
where
    I: Iterator<Item = &'a str>,
{
    let values: Vec<&str> = values.collect();
    let tokens: Vec<String> = if !force_text && num::all_numeric(values.iter().copied()) {
        values.iter().map(|v| v.to_string()).collect()
    } else {
        values.iter().map(|v| quote(v)).collect()
    };
    w.line(format!("{key}: [{}],", tokens.join(", ")));
}

/// `xaxis: 'x2', yaxis: 'y2'` references; index 1 uses the runtime default.
fn emit_axis_refs(w: &mut ScriptWriter, axes: AxisIndices) {
    if axes.x > 1 {
        w.line(format!("xaxis: 'x{}',", axes.x));
    }
    if axes.y > 1 {
        w.line(format!("yaxis: 'y{}',", axes.y));
    }
}

/// Marker block: a plain color when no scale applies, otherwise a per-point
/// value array mapped through the compiled gradient.
fn emit_marker(w: &mut ScriptWriter, trace: &Trace, stops: &[ColorStop], color_values: &[&str]) {
    w.open("marker: {");
    if stops.is_empty() {
        w.line(format!("color: {},", quote(&trace.color.to_css())));
    } else {
        emit_values(w, "color", color_values.iter().copied(), false);
        w.line(format!("colorscale: {},", scale_literal(stops)));
    }
    w.line(format!(
        "symbol: '{}',",
        symbols::lookup_or_default(trace.shape.as_deref())
    ));
    w.close("},");
}

/// Hover text: metadata pairs joined with a line break, empty when absent.
fn emit_hover(w: &mut ScriptWriter, points: &[Point]) {
    w.line("hovertemplate: '%{text}',");
    let texts: Vec<String> = points
        .iter()
        .map(|p| {
            let joined = p
                .meta
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("<br>");
            quote(&joined)
        })
        .collect();
    w.line(format!("text: [{}],", texts.join(", ")));
}

/// Compile the trace's color scale against its data bounds, if configured.
fn scale_stops<'a, I>(trace: &Trace, values: I, bounds: Option<(f64, f64)>) -> Vec<ColorStop>
where
    I: Iterator<Item = &'a str>,
{
    let Some(scale) = &trace.scale else {
        return Vec::new();
    };
    let (min, max) = match bounds.or_else(|| num::min_max(values)) {
        Some(range) => range,
        None => return Vec::new(),
    };
    colorscale::build(scale, min, max)
}

/// Render stops as `[[position, 'rgb(...)'], ...]`.
fn scale_literal(stops: &[ColorStop]) -> String {
    let entries: Vec<String> = stops
        .iter()
        .map(|s| format!("[{}, {}]", s.position, quote(&s.color.to_css())))
        .collect();
    format!("[{}]", entries.join(", "))
}

fn mode_for(draw_lines: bool, shape: Option<&str>) -> &'static str {
    match (draw_lines, shape.is_some()) {
        (true, true) => "lines+markers",
        (true, false) => "lines",
        (false, _) => "markers",
    }
}

fn z_values(points: &[Point]) -> impl Iterator<Item = &str> {
    points.iter().filter_map(|p| p.z.as_deref())
}

fn collect<I: Iterator<Item = String>>(values: I) -> Vec<String> {
    values.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfchart_model::{
        AnchorValueKind, ColorScale, PlotKind, Point, Rgb, ScaleAnchor, ScaleMode, Trace,
    };

    fn context() -> TraceContext<'static> {
        TraceContext {
            axes: AxisIndices { x: 1, y: 1 },
            name: "series".to_string(),
            axis_labels: ["time", "value", "depth"],
        }
    }

    fn render(trace: &Trace) -> String {
        let mut w = ScriptWriter::new();
        emit_trace(&mut w, trace, &context());
        w.finish()
    }

    #[test]
    fn scatter_timestamp_points() {
        let mut trace = Trace::new("t", PlotKind::Scatter);
        trace.points.push(Point::new("2021-04-05T22:21:21", "1.0"));
        let out = render(&trace);
        assert!(out.contains("x: ['2021-04-05T22:21:21'],"), "{out}");
        assert!(out.contains("y: [1.0],"), "{out}");
        assert!(out.contains("mode: 'markers',"));
    }

    #[test]
    fn scatter_numeric_x_stays_bare() {
        let mut trace = Trace::new("t", PlotKind::Scatter);
        trace.points.push(Point::new("1", "2.5"));
        trace.points.push(Point::new("2", "3.5"));
        let out = render(&trace);
        assert!(out.contains("x: [1, 2],"), "{out}");
        assert!(out.contains("y: [2.5, 3.5],"), "{out}");
    }

    #[test]
    fn scatter_draw_lines_mode() {
        let mut trace = Trace::new("t", PlotKind::Scatter);
        trace.options = TraceOptions::Scatter {
            draw_lines: true,
            error_values: None,
        };
        let out = render(&trace);
        assert!(out.contains("mode: 'lines',"), "{out}");
        assert!(out.contains("line: {"), "{out}");

        trace.shape = Some("open circle".to_string());
        let out = render(&trace);
        assert!(out.contains("mode: 'lines+markers',"), "{out}");
        assert!(out.contains("symbol: 'circle-open',"), "{out}");
    }

    #[test]
    fn scatter_colorscale_from_dependent_axis() {
        let mut trace = Trace::new("t", PlotKind::Scatter);
        trace.points.push(Point::new("1", "10"));
        trace.points.push(Point::new("2", "20"));
        trace.scale = Some(ColorScale {
            anchors: vec![
                ScaleAnchor::new(10.0, Rgb::new(0, 0, 255)),
                ScaleAnchor::new(20.0, Rgb::new(255, 0, 0)),
            ],
            mode: ScaleMode::Continuous,
            value_kind: AnchorValueKind::Absolute,
        });
        let out = render(&trace);
        // Y values feed the scale when no point carries a Z.
        assert!(out.contains("color: [10, 20],"), "{out}");
        assert!(
            out.contains("colorscale: [[0, 'rgb(0, 0, 255)'], [1, 'rgb(255, 0, 0)']],"),
            "{out}"
        );
        assert!(!out.contains("color: 'rgb("), "{out}");
    }

    #[test]
    fn scatter_with_z_feeds_the_scale_from_z() {
        let mut trace = Trace::new("t", PlotKind::Scatter);
        trace.points.push(Point::with_z("1", "10", "0"));
        trace.points.push(Point::with_z("2", "20", "100"));
        trace.scale = Some(ColorScale {
            anchors: vec![
                ScaleAnchor::new(0.0, Rgb::BLACK),
                ScaleAnchor::new(100.0, Rgb::WHITE),
            ],
            mode: ScaleMode::Continuous,
            value_kind: AnchorValueKind::Absolute,
        });
        let out = render(&trace);
        assert!(out.contains("color: [0, 100],"), "{out}");
    }

    #[test]
    fn scatter_error_bars() {
        let mut trace = Trace::new("t", PlotKind::Scatter);
        trace.points.push(Point::new("1", "2"));
        trace.options = TraceOptions::Scatter {
            draw_lines: false,
            error_values: Some(vec!["0.5".to_string()]),
        };
        let out = render(&trace);
        assert!(out.contains("error_y: {"), "{out}");
        assert!(out.contains("array: [0.5],"), "{out}");
    }

    #[test]
    fn histogram_horizontal_default_bins() {
        let mut trace = Trace::new("t", PlotKind::Histogram);
        trace.options = TraceOptions::from_bag(
            PlotKind::Histogram,
            [("orientation", "horizontal"), ("precision", "-1")],
        )
        .unwrap();
        trace.points.push(Point::new("a", "3"));
        let out = render(&trace);
        assert!(out.contains("nbinsy: 10,"), "{out}");
        assert!(out.contains("y: [3],"), "{out}");
        assert!(!out.contains("nbinsx"), "{out}");
    }

    #[test]
    fn histogram_vertical_configured_bins() {
        let mut trace = Trace::new("t", PlotKind::Histogram);
        trace.options = TraceOptions::Histogram {
            orientation: Orientation::Vertical,
            cumulative: true,
            bin_count: 25,
        };
        let out = render(&trace);
        assert!(out.contains("nbinsx: 25,"), "{out}");
        assert!(out.contains("cumulative: {"), "{out}");
    }

    #[test]
    fn bar_horizontal_swaps_axes() {
        let mut trace = Trace::new("t", PlotKind::Bar);
        trace.options = TraceOptions::Bar {
            orientation: Orientation::Horizontal,
        };
        trace.points.push(Point::new("build", "12.5"));
        let out = render(&trace);
        assert!(out.contains("x: [12.5],"), "{out}");
        assert!(out.contains("y: ['build'],"), "{out}");
        assert!(out.contains("orientation: 'h',"), "{out}");
    }

    #[test]
    fn z_grid_round_trip() {
        // 2 rows x 3 cols of samples in row-major order.
        let mut points = Vec::new();
        for y in 0..2 {
            for x in 0..3 {
                points.push(Point::with_z(
                    x.to_string(),
                    y.to_string(),
                    format!("{}", y * 10 + x),
                ));
            }
        }
        let grid = z_grid(&points, 3, 2, None, false);
        assert_eq!(grid[0], ["0", "1", "2"]);
        assert_eq!(grid[1], ["10", "11", "12"]);
    }

    #[test]
    fn z_grid_transpose() {
        // Column-major samples: linear order walks columns first.
        let points = vec![
            Point::with_z("0", "0", "1"),
            Point::with_z("0", "1", "2"),
            Point::with_z("1", "0", "3"),
            Point::with_z("1", "1", "4"),
        ];
        let grid = z_grid(&points, 2, 2, None, true);
        assert_eq!(grid[0], ["1", "3"]);
        assert_eq!(grid[1], ["2", "4"]);
    }

    #[test]
    fn z_grid_missing_cells_are_quoted() {
        let points = vec![Point::with_z("0", "0", "1.5")];
        let grid = z_grid(&points, 2, 1, None, false);
        assert_eq!(grid[0], ["1.5", "''"]);
    }

    #[test]
    fn z_grid_applies_precision() {
        let points = vec![Point::with_z("0", "0", "1.23456")];
        let grid = z_grid(&points, 1, 1, Some(2), false);
        assert_eq!(grid[0], ["1.23"]);
    }

    #[test]
    fn surface_sorts_axes_heatmap_preserves_order() {
        let points = vec![
            Point::with_z("10", "b", "1"),
            Point::with_z("2", "a", "2"),
            Point::with_z("1", "b", "3"),
        ];

        let mut surface = Trace::new("s", PlotKind::Surface);
        surface.points = points.clone();
        let out = render(&surface);
        assert!(out.contains("x: [1, 2, 10],"), "{out}");
        assert!(out.contains("y: ['a', 'b'],"), "{out}");

        let mut heatmap = Trace::new("h", PlotKind::Heatmap);
        heatmap.points = points;
        let out = render(&heatmap);
        assert!(out.contains("x: [10, 2, 1],"), "{out}");
        assert!(out.contains("y: ['b', 'a'],"), "{out}");
    }

    #[test]
    fn hover_text_from_metadata() {
        let mut trace = Trace::new("t", PlotKind::Scatter);
        let mut point = Point::new("1", "2");
        point.add_meta("commit", "abc123");
        point.add_meta("branch", "main");
        trace.points.push(point);
        trace.points.push(Point::new("2", "3"));
        let out = render(&trace);
        assert!(
            out.contains("text: ['commit: abc123<br>branch: main', ''],"),
            "{out}"
        );
    }

    #[test]
    fn axis_refs_skip_first_index() {
        let mut trace = Trace::new("t", PlotKind::Scatter);
        trace.points.push(Point::new("1", "2"));
        let mut w = ScriptWriter::new();
        let ctx = TraceContext {
            axes: AxisIndices { x: 1, y: 3 },
            name: "series".to_string(),
            axis_labels: ["", "", ""],
        };
        emit_trace(&mut w, &trace, &ctx);
        let out = w.finish();
        assert!(!out.contains("xaxis:"), "{out}");
        assert!(out.contains("yaxis: 'y3',"), "{out}");
    }

    #[test]
    fn treemap_labels_and_values() {
        let mut trace = Trace::new("t", PlotKind::TreeMap);
        trace.points.push(Point::new("parse", "40"));
        trace.points.push(Point::new("compile", "60"));
        let out = render(&trace);
        assert!(out.contains("labels: ['parse', 'compile'],"), "{out}");
        assert!(out.contains("values: [40, 60],"), "{out}");
        assert!(out.contains("parents: ['', ''],"), "{out}");
    }

    #[test]
    fn parcoords_dimensions_use_axis_labels() {
        let mut trace = Trace::new("t", PlotKind::ParallelCoordinates);
        trace.points.push(Point::with_z("1", "2", "3"));
        let out = render(&trace);
        assert!(out.contains("type: 'parcoords',"), "{out}");
        assert!(out.contains("label: 'time',"), "{out}");
        assert!(out.contains("label: 'depth',"), "{out}");
    }

    #[test]
    fn category_scatter_quotes_numeric_labels() {
        let mut trace = Trace::new("t", PlotKind::CategoryScatter);
        trace.points.push(Point::new("1", "2"));
        let out = render(&trace);
        assert!(out.contains("x: ['1'],"), "{out}");
        assert!(out.contains("y: [2],"), "{out}");
    }
}
