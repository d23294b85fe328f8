use crate::control::{EventPropagation, MapEvent, SurfaceEventHandler};
use crate::surface::MapSurface;

/// Passes map events to the list of handlers.
///
/// Handlers are called in the order they were added. As soon as a handler returns
/// [`EventPropagation::Stop`], the rest of the handlers do not see the event.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Box<dyn SurfaceEventHandler>>,
}

impl EventDispatcher {
    /// Creates a dispatcher without handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler to the end of the list.
    pub fn add_handler(&mut self, handler: impl SurfaceEventHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Gives the event to the handlers.
    ///
    /// Returns [`EventPropagation::Stop`] if one of the handlers stopped the event.
    pub fn dispatch(&mut self, event: &MapEvent, surface: &mut dyn MapSurface) -> EventPropagation {
        for (index, handler) in self.handlers.iter_mut().enumerate() {
            if handler.handle(event, surface) == EventPropagation::Stop {
                log::trace!("Event {event:?} stopped by handler {index}");
                return EventPropagation::Stop;
            }
        }

        EventPropagation::Propagate
    }
}
