//! RGB color type with optional alpha.

use serde::{Deserialize, Serialize};

/// An RGB color with 8-bit channels and an optional alpha in `[0, 1]`.
///
/// Alpha is normalized rather than 8-bit because the chart runtime consumes
/// `rgba(r, g, b, a)` literals with a fractional alpha component.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: Option<f64>,
}

impl Rgb {
    /// Create an opaque color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Create a color with an explicit alpha, clamped to `[0, 1]`.
    pub fn with_alpha(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(alpha.clamp(0.0, 1.0)),
        }
    }

    /// Render as a runtime color literal: `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn to_css(self) -> String {
        match self.alpha {
            Some(a) => format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, a),
            None => format!("rgb({}, {}, {})", self.r, self.g, self.b),
        }
    }

    // Common colors
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_css() {
        assert_eq!(Rgb::new(31, 119, 180).to_css(), "rgb(31, 119, 180)");
    }

    #[test]
    fn alpha_css() {
        assert_eq!(
            Rgb::with_alpha(0, 0, 0, 0.5).to_css(),
            "rgba(0, 0, 0, 0.5)"
        );
    }

    #[test]
    fn alpha_clamped() {
        assert_eq!(Rgb::with_alpha(1, 2, 3, 1.5).alpha, Some(1.0));
        assert_eq!(Rgb::with_alpha(1, 2, 3, -0.2).alpha, Some(0.0));
    }
}
