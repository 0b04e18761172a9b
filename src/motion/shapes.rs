//! Decorative shape generators: section dividers, accent lines, leaves
//! and orbit layouts.

use serde::{Deserialize, Serialize};

// ============================================================================
// Section dividers
// ============================================================================

/// Shape of the SVG band drawn between two sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DividerVariant {
    DiagonalUp,
    DiagonalDown,
    Wave,
    Curve,
    CurveReverse,
    CornerLeft,
    CornerRight,
}

impl DividerVariant {
    pub const ALL: [DividerVariant; 7] = [
        DividerVariant::DiagonalUp,
        DividerVariant::DiagonalDown,
        DividerVariant::Wave,
        DividerVariant::Curve,
        DividerVariant::CurveReverse,
        DividerVariant::CornerLeft,
        DividerVariant::CornerRight,
    ];

    /// Path in a `0 0 1440 100` viewBox, stretched to the band height.
    pub fn svg_path(&self) -> &'static str {
        match self {
            DividerVariant::DiagonalUp => "M0,100 L1440,0 L1440,100 L0,100 Z",
            DividerVariant::DiagonalDown => "M0,0 L1440,100 L1440,100 L0,100 Z",
            DividerVariant::Wave => {
                "M0,50 C360,100 720,0 1080,50 C1260,75 1350,100 1440,80 L1440,100 L0,100 Z"
            }
            DividerVariant::Curve => "M0,100 Q720,0 1440,100 L1440,100 L0,100 Z",
            DividerVariant::CurveReverse => "M0,0 Q720,100 1440,0 L1440,100 L0,100 Z",
            DividerVariant::CornerLeft => "M0,0 L0,100 L1440,100 L1440,0 Q1200,0 1000,100 L0,100 Z",
            DividerVariant::CornerRight => "M0,0 L1440,0 L1440,100 L0,100 Q240,0 440,100 Z",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            DividerVariant::DiagonalUp => "divider-diagonal-up",
            DividerVariant::DiagonalDown => "divider-diagonal-down",
            DividerVariant::Wave => "divider-wave",
            DividerVariant::Curve => "divider-curve",
            DividerVariant::CurveReverse => "divider-curve-reverse",
            DividerVariant::CornerLeft => "divider-corner-left",
            DividerVariant::CornerRight => "divider-corner-right",
        }
    }
}

/// Named fills used by dividers and section backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    Background,
    Cream,
}

impl Surface {
    pub fn css_var(&self) -> &'static str {
        match self {
            Surface::Background => "var(--background)",
            Surface::Cream => "var(--cream)",
        }
    }
}

/// A divider band: shape, fill of the section below, height in px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Divider {
    pub variant: DividerVariant,
    pub fill: Surface,
    pub height: u32,
}

impl Divider {
    pub const fn new(variant: DividerVariant, fill: Surface, height: u32) -> Self {
        Self { variant, fill, height }
    }

    /// Inline SVG markup for the band.
    pub fn svg(&self) -> String {
        format!(
            r#"<div class="section-divider {}" style="height:{}px" aria-hidden="true"><svg viewBox="0 0 1440 100" preserveAspectRatio="none" width="100%" height="100%"><path d="{}" fill="{}"/></svg></div>"#,
            self.variant.css_class(),
            self.height,
            self.variant.svg_path(),
            self.fill.css_var()
        )
    }
}

// ============================================================================
// Accent lines
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinePosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl LinePosition {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, LinePosition::Top | LinePosition::Bottom)
    }

    fn name(&self) -> &'static str {
        match self {
            LinePosition::Top => "top",
            LinePosition::Bottom => "bottom",
            LinePosition::Left => "left",
            LinePosition::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Straight,
    Diagonal,
    Curved,
}

/// Thin coloured rule decorating the edge of a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccentLine {
    pub position: LinePosition,
    pub style: LineStyle,
    /// CSS colour, usually one of the accent variables.
    pub color: String,
    pub thickness: u32,
}

impl AccentLine {
    pub fn new(position: LinePosition, style: LineStyle, color: impl Into<String>) -> Self {
        Self {
            position,
            style,
            color: color.into(),
            thickness: 2,
        }
    }

    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Rotation in degrees applied to diagonal lines.
    pub fn rotation_deg(&self) -> f64 {
        match (self.style, self.position.is_horizontal()) {
            (LineStyle::Diagonal, true) => -2.0,
            (LineStyle::Diagonal, false) => 2.0,
            _ => 0.0,
        }
    }

    pub fn html(&self) -> String {
        let class = format!("accent-line accent-line-{}", self.position.name());
        match self.style {
            LineStyle::Curved => {
                let (view_box, path) = if self.position.is_horizontal() {
                    ("0 0 1440 20", "M0,10 Q360,0 720,10 T1440,10")
                } else {
                    ("0 0 20 100", "M10,0 Q0,25 10,50 T10,100")
                };
                format!(
                    r#"<div class="{}" aria-hidden="true"><svg viewBox="{}" preserveAspectRatio="none" width="100%" height="100%"><path d="{}" stroke="{}" stroke-width="{}" fill="none"/></svg></div>"#,
                    class, view_box, path, self.color, self.thickness
                )
            }
            LineStyle::Straight | LineStyle::Diagonal => {
                let size = if self.position.is_horizontal() {
                    format!("height:{}px", self.thickness)
                } else {
                    format!("width:{}px", self.thickness)
                };
                format!(
                    r#"<div class="{}" style="{};background:{};transform:rotate({}deg)" aria-hidden="true"></div>"#,
                    class,
                    size,
                    self.color,
                    self.rotation_deg()
                )
            }
        }
    }
}

// ============================================================================
// Leaves and orbits
// ============================================================================

/// Outline of the leaf motif, in a 100×150 box.
pub const LEAF_PATH: &str =
    "M50 10 C20 30, 10 70, 30 110 C40 130, 50 140, 50 140 C50 140, 60 130, 70 110 C90 70, 80 30, 50 10";

/// One drifting leaf in the hero background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatingLeaf {
    /// Horizontal position in % of the container.
    pub left_pct: f64,
    pub delay: f64,
    pub duration: f64,
}

pub fn floating_leaves(count: usize) -> Vec<FloatingLeaf> {
    (0..count)
        .map(|i| FloatingLeaf {
            left_pct: 20.0 + i as f64 * 20.0,
            delay: i as f64 * 2.0,
            duration: 15.0 + i as f64 * 5.0,
        })
        .collect()
}

/// A point on a circle around the centre of a square box, in %.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitPoint {
    pub left_pct: f64,
    pub top_pct: f64,
}

/// `count` evenly spaced points, the first at -45° (upper right).
pub fn orbit_positions(count: usize, radius_pct: f64) -> Vec<OrbitPoint> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f64;
    (0..count)
        .map(|i| {
            let angle = (i as f64 * step - 45.0).to_radians();
            OrbitPoint {
                left_pct: 50.0 + radius_pct * angle.cos(),
                top_pct: 50.0 + radius_pct * angle.sin(),
            }
        })
        .collect()
}
