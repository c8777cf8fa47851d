//! Color scale builder.
//!
//! Turns sparse (value, color) anchors plus the trace's actual data bounds
//! into a renderer-ready gradient: a list of `(position ∈ [0,1], color)`
//! stops sorted ascending by position. Continuous scales interpolate between
//! anchors; discrete scales emit flat shelves on the runtime's
//! continuous-gradient API.

use perfchart_model::{AnchorValueKind, ColorScale, Rgb, ScaleAnchor, ScaleMode};

use crate::num::normalize;

/// Offset used to fake a step function on a continuous-gradient API: each
/// discrete boundary is emitted twice, at `p` and `p - EPSILON`. A runtime
/// with native step scales would bypass [`shelf_positions`] entirely.
pub const DISCRETE_EPSILON: f64 = 0.0001;

/// One stop of a compiled gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgb,
}

/// Compile a color scale against the trace's actual data bounds.
///
/// Returns an empty list when the scale has no anchors; the caller falls
/// back to [`fallback`] with the trace's plain colors.
pub fn build(scale: &ColorScale, min: f64, max: f64) -> Vec<ColorStop> {
    if scale.anchors.is_empty() {
        return Vec::new();
    }

    // Convert relative-percentage anchor values to absolute data values.
    let range = max - min;
    let mut converted: Vec<ScaleAnchor> = scale
        .anchors
        .iter()
        .map(|a| match scale.value_kind {
            AnchorValueKind::Absolute => *a,
            AnchorValueKind::RelativePercent => {
                ScaleAnchor::new(min + range * a.value / 100.0, a.color)
            }
        })
        .collect();
    converted.sort_by(|a, b| a.value.total_cmp(&b.value));

    // A zero-width data range collapses the whole scale to one color.
    if range <= 0.0 {
        let color = color_at(&converted, min);
        return vec![
            ColorStop {
                position: 0.0,
                color,
            },
            ColorStop {
                position: 1.0,
                color,
            },
        ];
    }

    // Anchor values: in-range anchors plus the data bounds themselves.
    let mut values: Vec<f64> = converted
        .iter()
        .map(|a| a.value)
        .filter(|v| *v >= min && *v <= max)
        .collect();
    values.push(min);
    values.push(max);
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup();

    match scale.mode {
        ScaleMode::Continuous => values
            .iter()
            .map(|&v| ColorStop {
                position: normalize(v, min, max),
                color: color_at(&converted, v),
            })
            .collect(),
        ScaleMode::Discrete => {
            let shelves: Vec<(f64, Rgb)> = values
                .iter()
                .map(|&v| (normalize(v, min, max), nearest_color(&converted, v)))
                .collect();
            shelf_positions(&shelves)
        }
    }
}

/// Evenly distribute a plain color list across `[0, 1]` by index.
///
/// Used when a trace wants a gradient but defines no anchors.
pub fn fallback(colors: &[Rgb]) -> Vec<ColorStop> {
    match colors.len() {
        0 => Vec::new(),
        1 => vec![
            ColorStop {
                position: 0.0,
                color: colors[0],
            },
            ColorStop {
                position: 1.0,
                color: colors[0],
            },
        ],
        n => colors
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop {
                position: i as f64 / (n - 1) as f64,
                color,
            })
            .collect(),
    }
}

/// Color at `value` by per-channel linear interpolation between the two
/// nearest anchors bounding it, clamped to the end colors outside the span.
///
/// `anchors` must be sorted by value and non-empty.
pub(crate) fn color_at(anchors: &[ScaleAnchor], value: f64) -> Rgb {
    let first = anchors[0];
    let last = anchors[anchors.len() - 1];
    if value <= first.value {
        return first.color;
    }
    if value >= last.value {
        return last.color;
    }
    for pair in anchors.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if value <= hi.value {
            let span = hi.value - lo.value;
            if span <= 0.0 {
                return lo.color;
            }
            let t = (value - lo.value) / span;
            return lerp(lo.color, hi.color, t);
        }
    }
    last.color
}

/// Nearest-neighbor anchor color, ties going to the upper anchor.
///
/// `anchors` must be sorted by value and non-empty.
fn nearest_color(anchors: &[ScaleAnchor], value: f64) -> Rgb {
    let mut best = anchors[0];
    let mut best_dist = (value - best.value).abs();
    for &anchor in &anchors[1..] {
        let dist = (value - anchor.value).abs();
        if dist <= best_dist {
            best = anchor;
            best_dist = dist;
        }
    }
    best.color
}

/// Expand discrete shelves into a double-stop list: each boundary after the
/// first is emitted at `p - ε` with the previous color and at `p` with its
/// own color, producing a flat run up to the boundary and a jump at it.
fn shelf_positions(shelves: &[(f64, Rgb)]) -> Vec<ColorStop> {
    let mut stops = Vec::with_capacity(shelves.len() * 2);
    for (i, &(position, color)) in shelves.iter().enumerate() {
        if i > 0 {
            let previous = shelves[i - 1];
            // Keep positions non-decreasing even when boundaries sit closer
            // together than the epsilon.
            let shelf_end = (position - DISCRETE_EPSILON).max(previous.0);
            stops.push(ColorStop {
                position: shelf_end,
                color: previous.1,
            });
        }
        stops.push(ColorStop { position, color });
    }
    stops
}

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let channel = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    Rgb::new(
        channel(a.r, b.r),
        channel(a.g, b.g),
        channel(a.b, b.b),
    )
}
