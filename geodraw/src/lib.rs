//! Geodraw captures and edits geographic polygons on an interactive map.
//!
//! The user draws a polygon by clicking its vertices on the map. Each vertex gets a draggable
//! marker and the vertices are connected with a temporary line. Clicking near the first vertex
//! closes the ring and asks whether to keep it. Kept polygons are rendered with a fill color of
//! their own and can later be loaded back for editing or deleted.
//!
//! The crate does not render anything itself. The map is represented by the [`MapSurface`]
//! trait, implemented by the application for whatever map widget it uses. An [`EditSession`]
//! processes [`MapEvent`]s and produces [`RenderEffect`]s, plain data describing layer and marker
//! changes, which are then applied to the surface.
//!
//! # Quick start
//!
//! ```
//! use geodraw::control::EventDispatcher;
//! use geodraw::draw::{DrawingConfiguration, EditSession};
//! use geodraw::geodraw_types::geo::{GeoBounds, GeoPoint2d};
//!
//! let config = DrawingConfiguration::default().with_bounds(GeoBounds::BOLIVIA);
//! let mut session = EditSession::open(config);
//! session.on_closure_confirmation_needed(|ring: &[GeoPoint2d]| ring.len() > 4);
//!
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.add_handler(session);
//! ```
//!
//! After that, every event of the map surface is passed to
//! [`EventDispatcher::dispatch`](control::EventDispatcher::dispatch).
//!
//! [`MapSurface`]: surface::MapSurface
//! [`EditSession`]: draw::EditSession
//! [`MapEvent`]: control::MapEvent
//! [`RenderEffect`]: surface::RenderEffect

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod color;
pub mod control;
pub mod draw;
pub mod error;
pub mod surface;

#[cfg(test)]
pub(crate) mod tests;

pub use color::Color;
pub use error::GeodrawError;

// Reexport geodraw_types
pub use geodraw_types;
