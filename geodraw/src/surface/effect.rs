use geodraw_types::geo::GeoPoint2d;

use crate::surface::{LayerStyle, MapSurface, MarkerId};

/// Geometry of a layer source.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerGeometry {
    /// Open line through the points in order.
    Line(Vec<GeoPoint2d>),
    /// Polygon with a single ring. The ring is expected to be closed.
    Polygon(Vec<GeoPoint2d>),
}

impl LayerGeometry {
    /// Points of the geometry.
    pub fn points(&self) -> &[GeoPoint2d] {
        match self {
            LayerGeometry::Line(points) | LayerGeometry::Polygon(points) => points,
        }
    }
}

/// Instruction for the map surface produced by the drawing core.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEffect {
    /// Add or replace the layer (and its source) with the given id.
    RenderLayer {
        /// Layer and source id.
        id: String,
        /// Geometry to display.
        geometry: LayerGeometry,
        /// How to display it.
        style: LayerStyle,
    },
    /// Remove the layer and its source if they exist.
    RemoveLayer {
        /// Layer and source id.
        id: String,
    },
    /// Place a new marker.
    CreateMarker {
        /// Marker id.
        marker: MarkerId,
        /// Marker position.
        position: GeoPoint2d,
        /// Whether the user can drag the marker.
        draggable: bool,
    },
    /// Move a marker.
    MoveMarker {
        /// Marker id.
        marker: MarkerId,
        /// New position.
        position: GeoPoint2d,
    },
    /// Remove a marker.
    RemoveMarker {
        /// Marker id.
        marker: MarkerId,
    },
}

impl RenderEffect {
    /// Executes the instruction on the surface.
    pub fn apply(&self, surface: &mut (impl MapSurface + ?Sized)) {
        match self {
            RenderEffect::RenderLayer {
                id,
                geometry,
                style,
            } => surface.add_or_replace_layer(id, geometry, style),
            RenderEffect::RemoveLayer { id } => {
                if surface.has_source(id) {
                    surface.remove_layer(id);
                    surface.remove_source(id);
                }
            }
            RenderEffect::CreateMarker {
                marker,
                position,
                draggable,
            } => surface.create_marker(*marker, *position, *draggable),
            RenderEffect::MoveMarker { marker, position } => {
                surface.set_marker_position(*marker, *position)
            }
            RenderEffect::RemoveMarker { marker } => surface.remove_marker(*marker),
        }
    }
}

/// Executes all the instructions on the surface in order.
pub fn apply_all(effects: &[RenderEffect], surface: &mut (impl MapSurface + ?Sized)) {
    log::trace!("Applying {} render effects", effects.len());
    for effect in effects {
        effect.apply(surface);
    }
}
