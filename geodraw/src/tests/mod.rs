//! Test fixtures: a map surface that records what it is asked to display.

use std::collections::BTreeMap;

use geodraw_types::cartesian::Point2d;
use geodraw_types::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};

use crate::control::MapEvent;
use crate::error::GeodrawError;
use crate::surface::{LayerGeometry, LayerStyle, MapSurface, MarkerId, ScreenProjection};

/// Equirectangular projection with a fixed scale, north up.
#[derive(Debug, Clone, Copy)]
pub struct LinearProjection {
    pub top_left: GeoPoint2d,
    pub pixels_per_degree: f64,
}

impl Default for LinearProjection {
    fn default() -> Self {
        Self {
            top_left: GeoPoint2d::lonlat(-10.0, 10.0),
            pixels_per_degree: 100.0,
        }
    }
}

impl ScreenProjection for LinearProjection {
    fn project(&self, point: &GeoPoint2d) -> Option<Point2d> {
        Some(Point2d::new(
            (point.lon() - self.top_left.lon()) * self.pixels_per_degree,
            (self.top_left.lat() - point.lat()) * self.pixels_per_degree,
        ))
    }
}

impl LinearProjection {
    /// Click event at the given point.
    pub fn click(&self, lon: f64, lat: f64) -> MapEvent {
        let position = GeoPoint2d::lonlat(lon, lat);
        MapEvent::Click {
            position,
            screen_position: self
                .project(&position)
                .expect("linear projection is defined everywhere"),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub projection: LinearProjection,
    pub layers: BTreeMap<String, (LayerGeometry, LayerStyle)>,
    pub markers: BTreeMap<MarkerId, (GeoPoint2d, bool)>,
    pub rejections: Vec<GeodrawError>,
}

impl RecordingSurface {
    pub fn layer_points(&self, id: &str) -> Option<&[GeoPoint2d]> {
        self.layers.get(id).map(|(geometry, _)| geometry.points())
    }

    pub fn marker_positions(&self) -> Vec<GeoPoint2d> {
        self.markers.values().map(|(position, _)| *position).collect()
    }
}

impl ScreenProjection for RecordingSurface {
    fn project(&self, point: &GeoPoint2d) -> Option<Point2d> {
        self.projection.project(point)
    }
}

impl MapSurface for RecordingSurface {
    fn add_or_replace_layer(&mut self, id: &str, geometry: &LayerGeometry, style: &LayerStyle) {
        self.layers
            .insert(id.to_string(), (geometry.clone(), *style));
    }

    fn remove_layer(&mut self, id: &str) {
        assert!(self.layers.contains_key(id), "layer {id} does not exist");
    }

    fn remove_source(&mut self, id: &str) {
        assert!(self.layers.remove(id).is_some(), "source {id} does not exist");
    }

    fn has_source(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }

    fn create_marker(&mut self, marker: MarkerId, position: GeoPoint2d, draggable: bool) {
        assert!(
            self.markers.insert(marker, (position, draggable)).is_none(),
            "marker {marker:?} already exists"
        );
    }

    fn set_marker_position(&mut self, marker: MarkerId, position: GeoPoint2d) {
        let entry = self.markers.get_mut(&marker);
        assert!(entry.is_some(), "marker {marker:?} does not exist");
        if let Some((current, _)) = entry {
            *current = position;
        }
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        assert!(
            self.markers.remove(&marker).is_some(),
            "marker {marker:?} does not exist"
        );
    }

    fn notify_rejection(&mut self, error: &GeodrawError) {
        self.rejections.push(error.clone());
    }
}
