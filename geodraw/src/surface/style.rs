use crate::Color;

/// Shape of the line ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Half circle around the end point.
    Round,
    /// Line ends exactly at the end point.
    #[default]
    Butt,
}

/// Shape of the corners where two line segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Rounded corner.
    Round,
    /// Sharp corner.
    #[default]
    Miter,
}

/// Renders a sequence of points as a line of fixed width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Color of the line.
    pub color: Color,
    /// Width of the line in pixels.
    pub width: f64,
    /// Shape of the line ends.
    pub line_cap: LineCap,
    /// Shape of the corners.
    pub line_join: LineJoin,
}

impl LineStyle {
    /// Creates a new instance with butt caps and miter joins.
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
        }
    }

    /// Creates a new instance from a copy of the current, but with round caps and joins.
    pub fn rounded(&self) -> Self {
        Self {
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..*self
        }
    }
}

/// Renders a ring as a filled polygon with an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonStyle {
    /// Color of the inner area of the polygon. Fill opacity is the alpha channel of the color.
    pub fill_color: Color,
    /// Color of the outline.
    pub stroke_color: Color,
    /// Width of the outline in pixels.
    pub stroke_width: f64,
}

impl PolygonStyle {
    /// Creates a new instance without an outline.
    pub fn new(fill_color: Color) -> Self {
        Self {
            fill_color,
            stroke_color: Color::TRANSPARENT,
            stroke_width: 0.0,
        }
    }

    /// Creates a new instance from a copy of the current, but with the given stroke color.
    pub fn with_stroke_color(&self, stroke_color: Color) -> Self {
        Self {
            stroke_color,
            ..*self
        }
    }

    /// Creates a new instance from a copy of the current, but with the given stroke width.
    pub fn with_stroke_width(&self, stroke_width: f64) -> Self {
        Self {
            stroke_width,
            ..*self
        }
    }
}
