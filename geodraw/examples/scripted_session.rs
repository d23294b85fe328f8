//! Drives an edit session with a scripted sequence of user actions, logging everything the
//! session asks the map to do.
//!
//! Run with `RUST_LOG=debug cargo run --example scripted_session` to see state transitions.

use std::collections::HashSet;
use std::sync::Arc;

use geodraw::control::{EventDispatcher, Key, MapEvent};
use geodraw::draw::{DrawingConfiguration, EditSession, PolygonId};
use geodraw::geodraw_types::cartesian::Point2d;
use geodraw::geodraw_types::geo::{GeoBounds, GeoPoint, GeoPoint2d, NewGeoPoint};
use geodraw::surface::{apply_all, LayerGeometry, LayerStyle, MapSurface, MarkerId, ScreenProjection};
use geodraw::GeodrawError;
use parking_lot::Mutex;

/// Surface that prints the requested changes instead of drawing them.
struct LoggingSurface {
    center: GeoPoint2d,
    pixels_per_degree: f64,
    sources: HashSet<String>,
}

impl LoggingSurface {
    fn new(center: GeoPoint2d) -> Self {
        Self {
            center,
            pixels_per_degree: 200.0,
            sources: HashSet::new(),
        }
    }

    fn click(&self, lat: f64, lon: f64) -> MapEvent {
        let position = GeoPoint2d::latlon(lat, lon);
        MapEvent::Click {
            position,
            screen_position: self
                .project(&position)
                .unwrap_or_else(|| Point2d::new(f64::NAN, f64::NAN)),
        }
    }
}

impl ScreenProjection for LoggingSurface {
    fn project(&self, point: &GeoPoint2d) -> Option<Point2d> {
        Some(Point2d::new(
            400.0 + (point.lon() - self.center.lon()) * self.pixels_per_degree,
            300.0 - (point.lat() - self.center.lat()) * self.pixels_per_degree,
        ))
    }
}

impl MapSurface for LoggingSurface {
    fn add_or_replace_layer(&mut self, id: &str, geometry: &LayerGeometry, style: &LayerStyle) {
        self.sources.insert(id.to_string());
        log::info!(
            "layer {id}: {} points, {style:?}",
            geometry.points().len()
        );
    }

    fn remove_layer(&mut self, id: &str) {
        log::info!("remove layer {id}");
    }

    fn remove_source(&mut self, id: &str) {
        self.sources.remove(id);
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains(id)
    }

    fn create_marker(&mut self, marker: MarkerId, position: GeoPoint2d, draggable: bool) {
        log::info!(
            "marker {} at ({:.4}, {:.4}), draggable: {draggable}",
            marker.as_u64(),
            position.lat(),
            position.lon()
        );
    }

    fn set_marker_position(&mut self, marker: MarkerId, position: GeoPoint2d) {
        log::info!(
            "marker {} moved to ({:.4}, {:.4})",
            marker.as_u64(),
            position.lat(),
            position.lon()
        );
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        log::info!("remove marker {}", marker.as_u64());
    }

    fn notify_rejection(&mut self, error: &GeodrawError) {
        println!("Rejected: {error}");
    }
}

fn main() -> Result<(), GeodrawError> {
    env_logger::init();

    let bounds = GeoBounds::BOLIVIA;
    let mut surface = LoggingSurface::new(bounds.center());

    let confirmed = Arc::new(Mutex::new(vec![]));
    let mut session = EditSession::open(DrawingConfiguration::default().with_bounds(bounds));
    {
        let confirmed = confirmed.clone();
        session.on_closure_confirmation_needed(move |ring: &[GeoPoint2d]| {
            confirmed.lock().push(ring.len());
            true
        });
    }

    // La Paz, Oruro, Cochabamba, a misplaced click, and a click in Chile.
    let mut script = vec![
        surface.click(-16.5, -68.15),
        surface.click(-17.97, -67.11),
        surface.click(-17.39, -66.16),
        surface.click(-16.0, -65.0),
        surface.click(-23.65, -70.4),
        MapEvent::KeyDown(Key::Escape),
    ];
    // Close near La Paz.
    script.push(surface.click(-16.51, -68.16));

    for event in &script {
        let outcome = session.process(event, &surface);
        apply_all(&outcome.effects, &mut surface);
        if let Some(rejection) = &outcome.rejection {
            surface.notify_rejection(rejection);
        }
    }

    println!("Confirmed rings: {:?}", confirmed.lock());
    for polygon in session.list_polygons() {
        println!(
            "{}: {} vertices, fill {}",
            polygon.id(),
            polygon.ring().len(),
            polygon.fill_color().to_hex()
        );
    }

    let id: PolygonId = "polygon-1".parse()?;
    apply_all(&session.edit_polygon(id)?, &mut surface);
    let moved = session
        .markers()
        .nth(1)
        .ok_or(GeodrawError::NotFound(id))?;
    let drag = MapEvent::MarkerDragEnd {
        marker: moved,
        position: GeoPoint2d::latlon(-18.2, -67.3),
    };

    // From here on the session is driven through a dispatcher, the way a map widget would do it.
    let mut dispatcher = EventDispatcher::new();
    let session = Arc::new(Mutex::new(session));
    {
        let session = session.clone();
        dispatcher.add_handler(move |event: &MapEvent, surface: &mut dyn MapSurface| {
            use geodraw::control::SurfaceEventHandler;
            session.lock().handle(event, surface)
        });
    }
    dispatcher.dispatch(&drag, &mut surface);

    let mut session = session.lock();
    apply_all(&session.commit_edit()?, &mut surface);
    if let Some(polygon) = session.polygon(id) {
        println!("{id} after edit: {:?}", polygon.ring());
    }

    apply_all(&session.delete_polygon(id)?, &mut surface);
    println!("Polygons left: {}", session.list_polygons().count());

    Ok(())
}
