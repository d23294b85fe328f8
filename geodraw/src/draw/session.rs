use geodraw_types::cartesian::Point2d;
use geodraw_types::geo::GeoPoint2d;
use geodraw_types::ring;
use maybe_sync::MaybeSend;

use crate::control::{EventPropagation, Key, MapEvent, SurfaceEventHandler};
use crate::draw::config::DrawingConfiguration;
use crate::draw::palette::{ColorStrategy, RandomColors};
use crate::draw::point_buffer::PointBuffer;
use crate::draw::polygon_store::{Polygon, PolygonId, PolygonStore};
use crate::draw::proximity::ProximityDetector;
use crate::error::GeodrawError;
use crate::surface::{
    apply_all, LayerGeometry, LayerStyle, MapSurface, MarkerId, RenderEffect, ScreenProjection,
    TEMP_POLYGON_ID,
};

/// State of an [`EditSession`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No working ring. A click starts a new one.
    #[default]
    Idle,
    /// A new ring is being drawn.
    Drawing,
    /// The working ring was closed and waits for the user to save or discard it.
    ClosurePending,
    /// A saved polygon is loaded into the working ring.
    Editing(PolygonId),
}

/// Answer to a closure confirmation request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClosureDecision {
    /// Store the closed ring as a new polygon.
    Save,
    /// Drop the closed ring.
    Discard,
}

impl From<bool> for ClosureDecision {
    fn from(save: bool) -> Self {
        if save {
            Self::Save
        } else {
            Self::Discard
        }
    }
}

/// Handler asked whether a closed ring should be saved.
///
/// The handler is called synchronously while the closing click is processed. If no handler is
/// installed the session stays in [`SessionState::ClosurePending`] until
/// [`EditSession::resolve_closure`] is called.
pub trait ClosureConfirmation: MaybeSend {
    /// Returns true to save the ring.
    fn confirm(&mut self, ring: &[GeoPoint2d]) -> bool;
}

impl<T> ClosureConfirmation for T
where
    T: FnMut(&[GeoPoint2d]) -> bool,
    T: MaybeSend,
{
    fn confirm(&mut self, ring: &[GeoPoint2d]) -> bool {
        self(ring)
    }
}

/// Result of processing a single map event.
#[derive(Debug, Default)]
pub struct EventOutcome {
    /// Instructions for the map surface, in the order they must be applied.
    pub effects: Vec<RenderEffect>,
    /// Reason the event was rejected, if it was.
    pub rejection: Option<GeodrawError>,
    /// Whether the event should be passed to the next handler.
    pub propagation: EventPropagation,
}

/// Interactive polygon capture and editing session bound to one map surface.
///
/// The session owns the working ring and the saved polygons. It never talks to the surface
/// directly: every command and every processed event returns the [`RenderEffect`]s that bring
/// the surface in sync with the session. When the session is registered as a
/// [`SurfaceEventHandler`], effects of map events are applied automatically.
///
/// ```
/// use geodraw::draw::{DrawingConfiguration, EditSession, SessionState};
///
/// let mut session = EditSession::open(DrawingConfiguration::default());
/// assert_eq!(session.state(), SessionState::Idle);
///
/// let effects = session.start_drawing().expect("idle session can start drawing");
/// assert!(effects.is_empty());
/// assert_eq!(session.state(), SessionState::Drawing);
/// ```
pub struct EditSession {
    config: DrawingConfiguration,
    state: SessionState,
    buffer: PointBuffer,
    store: PolygonStore,
    proximity: ProximityDetector,
    confirmation: Option<Box<dyn ClosureConfirmation>>,
}

impl EditSession {
    /// Opens a session with random fill colors for new polygons.
    pub fn open(config: DrawingConfiguration) -> Self {
        Self::open_with_color_strategy(config, RandomColors::new())
    }

    /// Opens a session taking fill colors of new polygons from `colors`.
    pub fn open_with_color_strategy(
        config: DrawingConfiguration,
        colors: impl ColorStrategy + 'static,
    ) -> Self {
        log::debug!("Opening edit session with {config:?}");

        Self {
            buffer: PointBuffer::new(
                config.bounds(),
                config.temp_line_style(),
                config.draggable_markers(),
            ),
            store: PolygonStore::with_color_strategy(
                config.fill_opacity(),
                config.outline_width(),
                colors,
            ),
            proximity: ProximityDetector::new(config.closure_tolerance()),
            state: SessionState::Idle,
            confirmation: None,
            config,
        }
    }

    /// Closes the session, returning the effects that remove everything it put on the surface.
    pub fn close(mut self) -> Vec<RenderEffect> {
        let mut effects = vec![];
        self.discard_working_ring(&mut effects);
        effects.extend(self.store.list().map(|polygon| RenderEffect::RemoveLayer {
            id: polygon.id().to_string(),
        }));

        log::debug!("Closed edit session with {} polygons", self.store.len());
        effects
    }

    /// Configuration the session was opened with.
    pub fn config(&self) -> &DrawingConfiguration {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Points of the working ring.
    pub fn working_ring(&self) -> Vec<GeoPoint2d> {
        self.buffer.snapshot()
    }

    /// Markers of the working ring, in the order of the points.
    pub fn markers(&self) -> impl Iterator<Item = MarkerId> + '_ {
        self.buffer.markers()
    }

    /// Saved polygon with the given id.
    pub fn polygon(&self, id: PolygonId) -> Option<&Polygon> {
        self.store.get(id)
    }

    /// Saved polygons in the order they were created.
    pub fn list_polygons(&self) -> impl Iterator<Item = &Polygon> + '_ {
        self.store.list()
    }

    /// Effects that render all saved polygons. Used to restore the surface after it lost its
    /// layers, e.g. when the base map style was changed.
    pub fn render_polygons(&self) -> Vec<RenderEffect> {
        self.store.render_all()
    }

    /// Installs the handler asked to confirm every closed ring, replacing the previous one.
    pub fn on_closure_confirmation_needed(&mut self, handler: impl ClosureConfirmation + 'static) {
        self.confirmation = Some(Box::new(handler));
    }

    /// Removes the closure confirmation handler.
    pub fn clear_closure_confirmation(&mut self) {
        self.confirmation = None;
    }

    /// Starts drawing a new ring.
    pub fn start_drawing(&mut self) -> Result<Vec<RenderEffect>, GeodrawError> {
        match self.state {
            SessionState::Idle => self.transition(SessionState::Drawing),
            SessionState::Drawing => {}
            SessionState::ClosurePending | SessionState::Editing(_) => {
                return Err(GeodrawError::SessionBusy)
            }
        }

        Ok(vec![])
    }

    /// Loads a saved polygon into the working ring for editing.
    ///
    /// A ring being drawn or another edit in progress is dropped.
    pub fn edit_polygon(&mut self, id: PolygonId) -> Result<Vec<RenderEffect>, GeodrawError> {
        if self.state == SessionState::ClosurePending {
            return Err(GeodrawError::SessionBusy);
        }

        let ring = self
            .store
            .get(id)
            .ok_or(GeodrawError::NotFound(id))?
            .ring()
            .to_vec();

        if self.state != SessionState::Idle {
            log::debug!(
                "Dropping working ring of {} points to edit {id}",
                self.buffer.len()
            );
        }

        let mut effects = vec![];
        self.buffer.load(&ring, &mut effects);
        self.render_working_polygon(&mut effects);
        self.transition(SessionState::Editing(id));

        Ok(effects)
    }

    /// Stores the working ring as the new ring of the edited polygon.
    ///
    /// An open working ring is closed first. If the ring is not valid, the session keeps
    /// editing with the working ring unchanged.
    pub fn commit_edit(&mut self) -> Result<Vec<RenderEffect>, GeodrawError> {
        let SessionState::Editing(id) = self.state else {
            return Err(GeodrawError::NotEditing);
        };

        let mut ring = self.buffer.snapshot();
        ring::close(&mut ring);

        let mut effects = vec![];
        self.store.update(id, ring, &mut effects)?;
        self.discard_working_ring(&mut effects);

        Ok(effects)
    }

    /// Drops the working ring and returns to [`SessionState::Idle`].
    ///
    /// Saved polygons are not changed. A pending closure is discarded.
    pub fn cancel_edit(&mut self) -> Vec<RenderEffect> {
        let mut effects = vec![];
        if self.state != SessionState::Idle {
            self.discard_working_ring(&mut effects);
        }

        effects
    }

    /// Deletes a saved polygon. If the polygon is being edited, the edit is cancelled first.
    pub fn delete_polygon(&mut self, id: PolygonId) -> Result<Vec<RenderEffect>, GeodrawError> {
        if self.store.get(id).is_none() {
            return Err(GeodrawError::NotFound(id));
        }

        let mut effects = vec![];
        if self.state == SessionState::Editing(id) {
            log::debug!("Cancelling edit of deleted polygon {id}");
            self.discard_working_ring(&mut effects);
        }

        self.store.delete(id, &mut effects)?;
        Ok(effects)
    }

    /// Resolves a pending closure.
    pub fn resolve_closure(
        &mut self,
        decision: ClosureDecision,
    ) -> Result<Vec<RenderEffect>, GeodrawError> {
        let mut effects = vec![];
        self.resolve(decision, &mut effects)?;
        Ok(effects)
    }

    /// Discards a pending closure.
    pub fn cancel_closure(&mut self) -> Result<Vec<RenderEffect>, GeodrawError> {
        self.resolve_closure(ClosureDecision::Discard)
    }

    /// Processes a map event.
    ///
    /// The effects of the event are returned together with the rejection reason, if the event
    /// was rejected. A rejected event never changes the state of the session, but it can
    /// produce effects (e.g. a dragged marker is returned to its point).
    pub fn process<P>(&mut self, event: &MapEvent, projection: &P) -> EventOutcome
    where
        P: ScreenProjection + ?Sized,
    {
        let mut outcome = EventOutcome::default();
        let result = match event {
            MapEvent::Click {
                position,
                screen_position,
            } => self.on_click(*position, screen_position, projection, &mut outcome.effects),
            MapEvent::KeyDown(Key::Escape) => self.on_escape(&mut outcome.effects),
            MapEvent::KeyDown(_) => Ok(EventPropagation::Propagate),
            MapEvent::MarkerDragEnd { marker, position } => {
                self.on_marker_drag(*marker, *position, &mut outcome.effects)
            }
        };

        match result {
            Ok(propagation) => outcome.propagation = propagation,
            Err(err) => {
                log::warn!("Rejected {event:?} in {:?} state: {err}", self.state);
                outcome.rejection = Some(err);
                outcome.propagation = EventPropagation::Stop;
            }
        }

        if !outcome.effects.is_empty() {
            log::debug!("{event:?} produced {} effects", outcome.effects.len());
        }

        outcome
    }

    fn on_click<P>(
        &mut self,
        position: GeoPoint2d,
        screen_position: &Point2d,
        projection: &P,
        effects: &mut Vec<RenderEffect>,
    ) -> Result<EventPropagation, GeodrawError>
    where
        P: ScreenProjection + ?Sized,
    {
        match self.state {
            SessionState::ClosurePending => Err(GeodrawError::SessionBusy),
            SessionState::Editing(_) => {
                if ring::is_closed(&self.buffer.snapshot()) {
                    let closing = self.buffer.len() - 1;
                    self.buffer.insert_point(closing, position, effects)?;
                } else {
                    self.buffer.add_point(position, effects)?;
                }

                self.render_working_polygon(effects);
                Ok(EventPropagation::Stop)
            }
            SessionState::Drawing
                if self.buffer.len() >= ring::MIN_DISTINCT_VERTICES
                    && self.is_near_first(screen_position, projection) =>
            {
                self.close_working_ring(effects)?;
                Ok(EventPropagation::Stop)
            }
            SessionState::Idle | SessionState::Drawing => {
                self.buffer.add_point(position, effects)?;
                if self.state == SessionState::Idle {
                    self.transition(SessionState::Drawing);
                }

                Ok(EventPropagation::Stop)
            }
        }
    }

    fn on_escape(
        &mut self,
        effects: &mut Vec<RenderEffect>,
    ) -> Result<EventPropagation, GeodrawError> {
        match self.state {
            SessionState::Idle => return Ok(EventPropagation::Propagate),
            SessionState::ClosurePending => self.resolve(ClosureDecision::Discard, effects)?,
            SessionState::Drawing => {
                self.buffer.remove_last(effects);
            }
            SessionState::Editing(_) => {
                if self.buffer.remove_last(effects).is_some() {
                    self.render_working_polygon(effects);
                }
            }
        }

        Ok(EventPropagation::Stop)
    }

    fn on_marker_drag(
        &mut self,
        marker: MarkerId,
        position: GeoPoint2d,
        effects: &mut Vec<RenderEffect>,
    ) -> Result<EventPropagation, GeodrawError> {
        match self.state {
            SessionState::Idle => Err(GeodrawError::UnknownMarker(marker)),
            SessionState::ClosurePending => {
                let index = self
                    .buffer
                    .position_of(marker)
                    .ok_or(GeodrawError::UnknownMarker(marker))?;
                if let Some(current) = self.buffer.get(index) {
                    effects.push(RenderEffect::MoveMarker {
                        marker,
                        position: current,
                    });
                }

                Err(GeodrawError::SessionBusy)
            }
            SessionState::Drawing => {
                self.buffer.move_point(marker, position, effects)?;
                Ok(EventPropagation::Stop)
            }
            SessionState::Editing(_) => {
                let was_closed = ring::is_closed(&self.buffer.snapshot());
                let index = self.buffer.move_point(marker, position, effects)?;

                if was_closed {
                    let last = self.buffer.len() - 1;
                    let twin = match index {
                        0 => Some(last),
                        i if i == last => Some(0),
                        _ => None,
                    };

                    if let Some(twin) = twin {
                        self.buffer.set_point(twin, position, effects);
                    }
                }

                self.render_working_polygon(effects);
                Ok(EventPropagation::Stop)
            }
        }
    }

    fn is_near_first<P>(&self, screen_position: &Point2d, projection: &P) -> bool
    where
        P: ScreenProjection + ?Sized,
    {
        let Some(first) = self.buffer.first() else {
            return false;
        };

        match projection.project(&first) {
            Some(first_on_screen) => self.proximity.is_near(screen_position, &first_on_screen),
            None => {
                log::debug!("First point {first:?} is not visible on the surface");
                false
            }
        }
    }

    fn close_working_ring(&mut self, effects: &mut Vec<RenderEffect>) -> Result<(), GeodrawError> {
        let mut closed = self.buffer.snapshot();
        if let Some(first) = closed.first().copied() {
            closed.push(first);
        }
        ring::validate(&closed)?;

        self.buffer.push_closing_point(effects);
        effects.push(self.temp_polygon(closed.clone()));
        self.transition(SessionState::ClosurePending);

        let answer = self
            .confirmation
            .as_mut()
            .map(|confirmation| confirmation.confirm(&closed));
        match answer {
            Some(save) => self.resolve(save.into(), effects),
            None => {
                log::debug!("Waiting for closure to be resolved");
                Ok(())
            }
        }
    }

    fn resolve(
        &mut self,
        decision: ClosureDecision,
        effects: &mut Vec<RenderEffect>,
    ) -> Result<(), GeodrawError> {
        if self.state != SessionState::ClosurePending {
            return Err(GeodrawError::NoPendingClosure);
        }

        match decision {
            ClosureDecision::Save => {
                self.store.save(self.buffer.snapshot(), effects)?;
            }
            ClosureDecision::Discard => log::debug!("Discarding closed ring"),
        }

        self.discard_working_ring(effects);
        Ok(())
    }

    fn render_working_polygon(&self, effects: &mut Vec<RenderEffect>) {
        if self.buffer.len() < ring::MIN_DISTINCT_VERTICES {
            effects.push(RenderEffect::RemoveLayer {
                id: TEMP_POLYGON_ID.into(),
            });
            return;
        }

        let mut points = self.buffer.snapshot();
        ring::close(&mut points);
        effects.push(self.temp_polygon(points));
    }

    fn temp_polygon(&self, points: Vec<GeoPoint2d>) -> RenderEffect {
        RenderEffect::RenderLayer {
            id: TEMP_POLYGON_ID.into(),
            geometry: LayerGeometry::Polygon(points),
            style: LayerStyle::Polygon(self.config.temp_polygon_style()),
        }
    }

    fn discard_working_ring(&mut self, effects: &mut Vec<RenderEffect>) {
        self.buffer.clear(effects);
        self.transition(SessionState::Idle);
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            log::debug!("Edit session state {:?} -> {next:?}", self.state);
            self.state = next;
        }
    }
}

impl SurfaceEventHandler for EditSession {
    fn handle(&mut self, event: &MapEvent, surface: &mut dyn MapSurface) -> EventPropagation {
        let outcome = self.process(event, &*surface);
        apply_all(&outcome.effects, surface);
        if let Some(rejection) = &outcome.rejection {
            surface.notify_rejection(rejection);
        }

        outcome.propagation
    }
}
