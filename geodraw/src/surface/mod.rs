//! Interface of the map surface the drawing session renders to.
//!
//! The surface is an external collaborator: it pans and zooms, renders vector layers, projects
//! geographic coordinates to the screen and emits input events. The drawing core never talks to
//! it directly while processing events. Instead every operation produces a list of
//! [`RenderEffect`]s that the owner of the surface applies with [`apply_all`] (or lets the
//! [`SurfaceEventHandler`](crate::control::SurfaceEventHandler) implementation do so).

use geodraw_types::cartesian::Point2d;
use geodraw_types::geo::GeoPoint2d;
use maybe_sync::MaybeSend;

use crate::error::GeodrawError;

mod effect;
mod style;

pub use effect::{apply_all, LayerGeometry, RenderEffect};
pub use style::{LineCap, LineJoin, LineStyle, PolygonStyle};

/// Layer id of the working ring line.
pub const TEMP_LINE_ID: &str = "linea-temporal";
/// Layer id of the working ring rendered as a filled polygon (closure preview and editing).
pub const TEMP_POLYGON_ID: &str = "polygon-temp";

/// Identifier of a marker bound to a point of the working ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerId(pub(crate) u64);

impl MarkerId {
    /// Numeric value of the id. Unique within one drawing session.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Conversion from geographic coordinates to screen pixels.
pub trait ScreenProjection {
    /// Projects the point to the screen, with `(0, 0)` at the top-left corner of the surface.
    ///
    /// Returns `None` if the point cannot be projected with the current view.
    fn project(&self, point: &GeoPoint2d) -> Option<Point2d>;
}

/// Map surface that draws layers and markers.
///
/// A layer is created together with its data source and both share the same id, so
/// [`MapSurface::add_or_replace_layer`] replaces any source and layer previously registered
/// under that id.
pub trait MapSurface: ScreenProjection + MaybeSend {
    /// Adds a source with the given geometry and a layer displaying it, replacing both if they
    /// already exist.
    fn add_or_replace_layer(&mut self, id: &str, geometry: &LayerGeometry, style: &LayerStyle);
    /// Removes the layer with the given id.
    fn remove_layer(&mut self, id: &str);
    /// Removes the data source with the given id.
    fn remove_source(&mut self, id: &str);
    /// Returns true if a source with the given id is registered.
    fn has_source(&self, id: &str) -> bool;

    /// Places a new marker.
    fn create_marker(&mut self, marker: MarkerId, position: GeoPoint2d, draggable: bool);
    /// Moves an existing marker.
    fn set_marker_position(&mut self, marker: MarkerId, position: GeoPoint2d);
    /// Removes the marker from the surface.
    fn remove_marker(&mut self, marker: MarkerId);

    /// Shows a user-visible message about a rejected action.
    fn notify_rejection(&mut self, error: &GeodrawError) {
        log::warn!("{error}");
    }
}

/// Style of a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerStyle {
    /// Stroked line.
    Line(LineStyle),
    /// Filled polygon with an outline.
    Polygon(PolygonStyle),
}
