//! Capture and editing of polygons.
//!
//! The entry point is [`EditSession`], a state machine that turns map events into changes of the
//! working ring and of the saved polygons. The rest of the module is the parts it is built from:
//!
//! * [`PointBuffer`] holds the points of the working ring and their markers,
//! * [`PolygonStore`] holds finalized polygons,
//! * [`ProximityDetector`] decides if a click closes the ring,
//! * [`ColorStrategy`] picks fill colors of new polygons.

mod config;
mod palette;
mod point_buffer;
mod polygon_store;
mod proximity;
mod session;

pub use config::DrawingConfiguration;
pub use palette::{ColorCycle, ColorStrategy, RandomColors};
pub use point_buffer::PointBuffer;
pub use polygon_store::{Polygon, PolygonId, PolygonStore};
pub use proximity::ProximityDetector;
pub use session::{ClosureConfirmation, ClosureDecision, EditSession, EventOutcome, SessionState};
