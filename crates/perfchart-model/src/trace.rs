//! Traces (data series), points, and per-kind trace options.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::ModelError;

/// One (X, Y, optional Z) sample.
///
/// Values are kept as their original textual representation: the extraction
/// layer hands over numbers and timestamps alike, and the compiler decides
/// per list whether to emit bare numeric literals or quoted text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: String,
    pub y: String,
    pub z: Option<String>,
    /// Ordered key → text metadata, rendered as hover text.
    pub meta: Vec<(String, String)>,
}

impl Point {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: None,
            meta: Vec::new(),
        }
    }

    pub fn with_z(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: Some(z.into()),
            meta: Vec::new(),
        }
    }

    pub fn add_meta(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.meta.push((key.into(), value.into()));
    }
}

/// The kind of plot a trace renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotKind {
    Scatter,
    Scatter3d,
    Surface,
    Box,
    Histogram,
    Bar,
    CategoryBar,
    Heatmap,
    Heatmap3d,
    Contour,
    ParallelCoordinates,
    TreeMap,
    Area,
    CategoryScatter,
}

impl PlotKind {
    /// Matrix-shaped kinds build a dense Z grid from deduplicated axes.
    pub fn is_matrix(self) -> bool {
        matches!(
            self,
            PlotKind::Surface | PlotKind::Heatmap | PlotKind::Heatmap3d | PlotKind::Contour
        )
    }

    /// Kinds rendered in a 3-D scene rather than a 2-D axis grid.
    pub fn is_three_dimensional(self) -> bool {
        matches!(
            self,
            PlotKind::Scatter3d | PlotKind::Surface | PlotKind::Heatmap3d
        )
    }
}

/// Whether the dependent values run along the vertical or horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// How a color-scale anchor value is interpreted against the data range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnchorValueKind {
    /// The anchor value is an absolute data value.
    #[default]
    Absolute,
    /// The anchor value is a percentage of the data range.
    RelativePercent,
}

/// Continuous gradient vs. discrete stepped scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleMode {
    #[default]
    Continuous,
    Discrete,
}

/// A (value, color) control point of a color scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleAnchor {
    pub value: f64,
    pub color: Rgb,
}

impl ScaleAnchor {
    pub fn new(value: f64, color: Rgb) -> Self {
        Self { value, color }
    }
}

/// Sparse color-scale definition attached to a trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub anchors: Vec<ScaleAnchor>,
    pub mode: ScaleMode,
    pub value_kind: AnchorValueKind,
}

/// Per-kind trace options.
///
/// The extraction layer configures traces through a flat token → text bag
/// (properties vary widely by plot kind). That bag is converted here, once,
/// at the system edge; the compiler only ever sees this closed sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraceOptions {
    Scatter {
        draw_lines: bool,
        /// Symmetric error-bar magnitudes, one per point.
        error_values: Option<Vec<String>>,
    },
    Scatter3d {
        show_scale: bool,
    },
    Histogram {
        orientation: Orientation,
        cumulative: bool,
        /// Bin count; negative means "use the default".
        bin_count: i32,
    },
    Bar {
        orientation: Orientation,
    },
    Matrix {
        /// Decimal places applied to Z cells before emission.
        precision: Option<u32>,
        /// Explicit color-range bounds overriding the data min/max.
        bounds: Option<(f64, f64)>,
    },
    /// Kinds with no configurable options.
    Plain,
}

impl TraceOptions {
    /// The default options for a plot kind.
    pub fn default_for(kind: PlotKind) -> Self {
        match kind {
            PlotKind::Scatter | PlotKind::Area | PlotKind::CategoryScatter => {
                TraceOptions::Scatter {
                    draw_lines: false,
                    error_values: None,
                }
            }
            PlotKind::Scatter3d => TraceOptions::Scatter3d { show_scale: true },
            PlotKind::Histogram => TraceOptions::Histogram {
                orientation: Orientation::Vertical,
                cumulative: false,
                bin_count: -1,
            },
            PlotKind::Bar | PlotKind::CategoryBar => TraceOptions::Bar {
                orientation: Orientation::Vertical,
            },
            k if k.is_matrix() => TraceOptions::Matrix {
                precision: None,
                bounds: None,
            },
            _ => TraceOptions::Plain,
        }
    }

    /// Convert a generic token → text bag into typed options for `kind`.
    ///
    /// Tokens a kind cannot use and tokens with unparsable values are hard
    /// errors: a silently dropped property would corrupt a dashboard without
    /// any visible symptom.
    pub fn from_bag<'a, I>(kind: PlotKind, bag: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default_for(kind);
        for (token, value) in bag {
            match token {
                "orientation" => {
                    let parsed = parse_orientation(value)?;
                    match &mut options {
                        TraceOptions::Histogram { orientation, .. }
                        | TraceOptions::Bar { orientation } => *orientation = parsed,
                        _ => {
                            return Err(ModelError::TokenNotApplicable {
                                token: "orientation",
                                kind,
                            })
                        }
                    }
                }
                "draw-lines" => match &mut options {
                    TraceOptions::Scatter { draw_lines, .. } => {
                        *draw_lines = parse_flag("draw-lines", value)?;
                    }
                    _ => {
                        return Err(ModelError::TokenNotApplicable {
                            token: "draw-lines",
                            kind,
                        })
                    }
                },
                "draw-color-scale" => match &mut options {
                    TraceOptions::Scatter3d { show_scale } => {
                        *show_scale = parse_flag("draw-color-scale", value)?;
                    }
                    _ => {
                        return Err(ModelError::TokenNotApplicable {
                            token: "draw-color-scale",
                            kind,
                        })
                    }
                },
                "cumulative" => match &mut options {
                    TraceOptions::Histogram { cumulative, .. } => {
                        *cumulative = parse_flag("cumulative", value)?;
                    }
                    _ => {
                        return Err(ModelError::TokenNotApplicable {
                            token: "cumulative",
                            kind,
                        })
                    }
                },
                "precision" => {
                    let parsed: i32 =
                        value
                            .trim()
                            .parse()
                            .map_err(|_| ModelError::InvalidTokenValue {
                                token: "precision",
                                value: value.to_string(),
                            })?;
                    match &mut options {
                        TraceOptions::Histogram { bin_count, .. } => *bin_count = parsed,
                        TraceOptions::Matrix { precision, .. } => {
                            *precision = u32::try_from(parsed).ok();
                        }
                        _ => {
                            return Err(ModelError::TokenNotApplicable {
                                token: "precision",
                                kind,
                            })
                        }
                    }
                }
                "bounds" => match &mut options {
                    TraceOptions::Matrix { bounds, .. } => {
                        *bounds = Some(parse_bounds(value)?);
                    }
                    _ => {
                        return Err(ModelError::TokenNotApplicable {
                            token: "bounds",
                            kind,
                        })
                    }
                },
                "error-values" => match &mut options {
                    TraceOptions::Scatter { error_values, .. } => {
                        *error_values =
                            Some(value.split(',').map(|v| v.trim().to_string()).collect());
                    }
                    _ => {
                        return Err(ModelError::TokenNotApplicable {
                            token: "error-values",
                            kind,
                        })
                    }
                },
                other => return Err(ModelError::UnknownToken(other.to_string())),
            }
        }
        Ok(options)
    }
}

fn parse_orientation(value: &str) -> Result<Orientation, ModelError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "vertical" => Ok(Orientation::Vertical),
        "horizontal" => Ok(Orientation::Horizontal),
        _ => Err(ModelError::InvalidTokenValue {
            token: "orientation",
            value: value.to_string(),
        }),
    }
}

fn parse_flag(token: &'static str, value: &str) -> Result<bool, ModelError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ModelError::InvalidTokenValue {
            token,
            value: value.to_string(),
        }),
    }
}

fn parse_bounds(value: &str) -> Result<(f64, f64), ModelError> {
    let invalid = || ModelError::InvalidTokenValue {
        token: "bounds",
        value: value.to_string(),
    };
    let (lo, hi) = value.split_once(',').ok_or_else(invalid)?;
    let lo: f64 = lo.trim().parse().map_err(|_| invalid())?;
    let hi: f64 = hi.trim().parse().map_err(|_| invalid())?;
    Ok((lo, hi))
}

/// One data series plotted within a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Stable identifier; empty means the compiler assigns a fallback name.
    pub id: String,
    /// Display name shown in the legend.
    pub name: String,
    /// Derivative-series suffix, e.g. "Average".
    pub suffix: Option<String>,
    pub kind: PlotKind,
    pub color: Rgb,
    /// Human-readable marker description, resolved via the symbol registry.
    pub shape: Option<String>,
    pub points: Vec<Point>,
    pub scale: Option<ColorScale>,
    pub options: TraceOptions,
}

impl Trace {
    pub fn new(id: impl Into<String>, kind: PlotKind) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            suffix: None,
            kind,
            color: Rgb::BLACK,
            shape: None,
            points: Vec::new(),
            scale: None,
            options: TraceOptions::default_for(kind),
        }
    }

    /// The legend label: display name plus the derivative suffix, if any.
    pub fn label(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{} {}", self.name, suffix),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bag_histogram_horizontal() {
        let options = TraceOptions::from_bag(
            PlotKind::Histogram,
            [("orientation", "horizontal"), ("precision", "-1")],
        )
        .unwrap();
        assert_eq!(
            options,
            TraceOptions::Histogram {
                orientation: Orientation::Horizontal,
                cumulative: false,
                bin_count: -1,
            }
        );
    }

    #[test]
    fn bag_scatter_lines_and_errors() {
        let options = TraceOptions::from_bag(
            PlotKind::Scatter,
            [("draw-lines", "true"), ("error-values", "0.1, 0.2")],
        )
        .unwrap();
        assert_eq!(
            options,
            TraceOptions::Scatter {
                draw_lines: true,
                error_values: Some(vec!["0.1".to_string(), "0.2".to_string()]),
            }
        );
    }

    #[test]
    fn bag_matrix_precision_and_bounds() {
        let options = TraceOptions::from_bag(
            PlotKind::Heatmap,
            [("precision", "2"), ("bounds", "0.0, 100.0")],
        )
        .unwrap();
        assert_eq!(
            options,
            TraceOptions::Matrix {
                precision: Some(2),
                bounds: Some((0.0, 100.0)),
            }
        );
    }

    #[test]
    fn bag_rejects_unknown_token() {
        let err = TraceOptions::from_bag(PlotKind::Scatter, [("no-such-token", "x")]);
        assert!(matches!(err, Err(ModelError::UnknownToken(t)) if t == "no-such-token"));
    }

    #[test]
    fn bag_rejects_inapplicable_token() {
        let err = TraceOptions::from_bag(PlotKind::Box, [("cumulative", "true")]);
        assert!(matches!(
            err,
            Err(ModelError::TokenNotApplicable { token: "cumulative", .. })
        ));
    }

    #[test]
    fn bag_rejects_bad_value() {
        let err = TraceOptions::from_bag(PlotKind::Histogram, [("orientation", "sideways")]);
        assert!(matches!(
            err,
            Err(ModelError::InvalidTokenValue { token: "orientation", .. })
        ));
    }

    #[test]
    fn label_includes_suffix() {
        let mut trace = Trace::new("build-time", PlotKind::Scatter);
        trace.suffix = Some("Average".to_string());
        assert_eq!(trace.label(), "build-time Average");
    }

    #[test]
    fn matrix_kinds() {
        assert!(PlotKind::Surface.is_matrix());
        assert!(PlotKind::Heatmap.is_matrix());
        assert!(!PlotKind::Scatter.is_matrix());
    }
}
