//! Input events of the map surface and the handlers that react to them.
//!
//! Event handling is done in two steps:
//! 1. The application converts pointer, keyboard and marker events of its map surface into
//!    [`MapEvent`]s. Click events carry both the geographic position and the screen position of
//!    the pointer.
//! 2. The events are given to an [`EventDispatcher`], which passes them to its list of
//!    [`SurfaceEventHandler`]s in order until one of them stops the propagation.
//!
//! [`EditSession`](crate::draw::EditSession) implements `SurfaceEventHandler`, so the simplest
//! setup is a dispatcher with a single session in it.

use geodraw_types::cartesian::Point2d;
use geodraw_types::geo::GeoPoint2d;
use maybe_sync::MaybeSend;

use crate::surface::{MapSurface, MarkerId};

mod event_dispatcher;

pub use event_dispatcher::EventDispatcher;

/// Input handler.
pub trait SurfaceEventHandler: MaybeSend {
    /// Handle the event, rendering results to the surface.
    fn handle(&mut self, event: &MapEvent, surface: &mut dyn MapSurface) -> EventPropagation;
}

impl<T> SurfaceEventHandler for T
where
    T: FnMut(&MapEvent, &mut dyn MapSurface) -> EventPropagation + MaybeSend,
{
    fn handle(&mut self, event: &MapEvent, surface: &mut dyn MapSurface) -> EventPropagation {
        self(event, surface)
    }
}

/// Input event emitted by the map surface.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// The map was clicked.
    Click {
        /// Geographic position under the pointer.
        position: GeoPoint2d,
        /// Pointer position on the screen in pixels from the top-left corner.
        screen_position: Point2d,
    },
    /// A key was pressed.
    KeyDown(Key),
    /// User finished dragging a marker.
    MarkerDragEnd {
        /// The dragged marker.
        marker: MarkerId,
        /// Geographic position the marker was dropped at.
        position: GeoPoint2d,
    },
}

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The `Escape` key.
    Escape,
    /// A key producing a character.
    Character(char),
    /// Any other key.
    Other,
}

/// Value returned by a [`SurfaceEventHandler`] to indicate the status of the event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EventPropagation {
    /// Event should be propagated to the next handler.
    #[default]
    Propagate,
    /// Event should not be propagated to the next handler.
    Stop,
}
