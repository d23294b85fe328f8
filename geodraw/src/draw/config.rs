use geodraw_types::geo::GeoBounds;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::surface::{LineStyle, PolygonStyle};
use crate::Color;

const DEFAULT_CLOSURE_TOLERANCE: f64 = 10.0;
const DEFAULT_FILL_OPACITY: f64 = 0.5;
const DEFAULT_OUTLINE_WIDTH: f64 = 1.5;
const DEFAULT_TEMP_LINE_WIDTH: f64 = 2.0;
const DEFAULT_TEMP_FILL_OPACITY: f64 = 0.3;

/// Configuration of an [`EditSession`](super::EditSession).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DrawingConfiguration {
    bounds: GeoBounds,
    closure_tolerance: f64,
    fill_opacity: f64,
    outline_width: f64,
    temp_line_color: Color,
    temp_line_width: f64,
    temp_fill_color: Color,
    draggable_markers: bool,
}

impl Default for DrawingConfiguration {
    fn default() -> Self {
        Self {
            bounds: GeoBounds::WORLD,
            closure_tolerance: DEFAULT_CLOSURE_TOLERANCE,
            fill_opacity: DEFAULT_FILL_OPACITY,
            outline_width: DEFAULT_OUTLINE_WIDTH,
            temp_line_color: Color::RED,
            temp_line_width: DEFAULT_TEMP_LINE_WIDTH,
            temp_fill_color: Color::RED.with_opacity(DEFAULT_TEMP_FILL_OPACITY),
            draggable_markers: true,
        }
    }
}

impl DrawingConfiguration {
    /// Region where points can be placed and markers dropped.
    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }

    /// Sets region where points can be placed and markers dropped.
    pub fn with_bounds(mut self, bounds: GeoBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets region where points can be placed and markers dropped.
    pub fn set_bounds(&mut self, bounds: GeoBounds) {
        self.bounds = bounds;
    }

    /// Distance in screen pixels from the first point of the working ring within which a click
    /// closes the ring.
    ///
    /// The distance is measured on the screen rather than on the ground, so closing feels the
    /// same at any zoom level.
    pub fn closure_tolerance(&self) -> f64 {
        self.closure_tolerance
    }

    /// Sets closure distance in screen pixels.
    pub fn with_closure_tolerance(mut self, tolerance: f64) -> Self {
        self.closure_tolerance = tolerance;
        self
    }

    /// Sets closure distance in screen pixels.
    pub fn set_closure_tolerance(&mut self, tolerance: f64) {
        self.closure_tolerance = tolerance;
    }

    /// Opacity of saved polygon fills, `0.0..=1.0`.
    pub fn fill_opacity(&self) -> f64 {
        self.fill_opacity
    }

    /// Sets opacity of saved polygon fills.
    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity;
        self
    }

    /// Sets opacity of saved polygon fills.
    pub fn set_fill_opacity(&mut self, opacity: f64) {
        self.fill_opacity = opacity;
    }

    /// Outline width of saved polygons in pixels.
    pub fn outline_width(&self) -> f64 {
        self.outline_width
    }

    /// Sets outline width of saved polygons in pixels.
    pub fn with_outline_width(mut self, width: f64) -> Self {
        self.outline_width = width;
        self
    }

    /// Sets outline width of saved polygons in pixels.
    pub fn set_outline_width(&mut self, width: f64) {
        self.outline_width = width;
    }

    /// Color of the working ring line.
    pub fn temp_line_color(&self) -> Color {
        self.temp_line_color
    }

    /// Sets color of the working ring line.
    pub fn with_temp_line_color(mut self, color: Color) -> Self {
        self.temp_line_color = color;
        self
    }

    /// Sets color of the working ring line.
    pub fn set_temp_line_color(&mut self, color: Color) {
        self.temp_line_color = color;
    }

    /// Width of the working ring line in pixels.
    pub fn temp_line_width(&self) -> f64 {
        self.temp_line_width
    }

    /// Sets width of the working ring line in pixels.
    pub fn with_temp_line_width(mut self, width: f64) -> Self {
        self.temp_line_width = width;
        self
    }

    /// Sets width of the working ring line in pixels.
    pub fn set_temp_line_width(&mut self, width: f64) {
        self.temp_line_width = width;
    }

    /// Fill color of the working ring preview polygon.
    pub fn temp_fill_color(&self) -> Color {
        self.temp_fill_color
    }

    /// Sets fill color of the working ring preview polygon.
    pub fn with_temp_fill_color(mut self, color: Color) -> Self {
        self.temp_fill_color = color;
        self
    }

    /// Sets fill color of the working ring preview polygon.
    pub fn set_temp_fill_color(&mut self, color: Color) {
        self.temp_fill_color = color;
    }

    /// Whether markers of the working ring can be dragged.
    pub fn draggable_markers(&self) -> bool {
        self.draggable_markers
    }

    /// Sets whether markers of the working ring can be dragged.
    pub fn with_draggable_markers(mut self, draggable: bool) -> Self {
        self.draggable_markers = draggable;
        self
    }

    /// Sets whether markers of the working ring can be dragged.
    pub fn set_draggable_markers(&mut self, draggable: bool) {
        self.draggable_markers = draggable;
    }

    pub(crate) fn temp_line_style(&self) -> LineStyle {
        LineStyle::new(self.temp_line_color, self.temp_line_width).rounded()
    }

    pub(crate) fn temp_polygon_style(&self) -> PolygonStyle {
        PolygonStyle::new(self.temp_fill_color)
            .with_stroke_color(self.temp_line_color)
            .with_stroke_width(self.temp_line_width)
    }
}
