use geodraw_types::geo::{GeoBounds, GeoPoint, GeoPoint2d};

use crate::error::GeodrawError;
use crate::surface::{
    LayerGeometry, LayerStyle, LineStyle, MarkerId, RenderEffect, TEMP_LINE_ID, TEMP_POLYGON_ID,
};

#[derive(Debug, Clone, Copy)]
struct BufferEntry {
    point: GeoPoint2d,
    marker: Option<MarkerId>,
}

/// Points of the working ring together with the markers bound to them.
///
/// Every point has exactly one marker, except the closing point appended by
/// [`PointBuffer::push_closing_point`], which shares the marker of the first point. Markers are
/// identified by ids that are never reused during the lifetime of the buffer, so a late drag
/// event of a removed marker cannot move a newer point.
///
/// All the methods that change the buffer push the instructions needed to keep the map surface
/// in sync into the `effects` list.
#[derive(Debug)]
pub struct PointBuffer {
    entries: Vec<BufferEntry>,
    next_marker: u64,
    bounds: GeoBounds,
    line_style: LineStyle,
    draggable: bool,
}

impl PointBuffer {
    /// Creates an empty buffer accepting points within `bounds`.
    pub fn new(bounds: GeoBounds, line_style: LineStyle, draggable: bool) -> Self {
        Self {
            entries: vec![],
            next_marker: 1,
            bounds,
            line_style,
            draggable,
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First point of the working ring.
    pub fn first(&self) -> Option<GeoPoint2d> {
        self.entries.first().map(|entry| entry.point)
    }

    /// Markers in the order of the points they are bound to.
    pub fn markers(&self) -> impl Iterator<Item = MarkerId> + '_ {
        self.entries.iter().filter_map(|entry| entry.marker)
    }

    /// Index of the point the marker is bound to.
    pub fn position_of(&self, marker: MarkerId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.marker == Some(marker))
    }

    /// Point at the given index.
    pub fn get(&self, index: usize) -> Option<GeoPoint2d> {
        self.entries.get(index).map(|entry| entry.point)
    }

    /// Copy of the points.
    pub fn snapshot(&self) -> Vec<GeoPoint2d> {
        self.entries.iter().map(|entry| entry.point).collect()
    }

    /// Appends a point and places a marker at it.
    ///
    /// A point outside of the bounds is rejected and the buffer stays unchanged.
    pub fn add_point(
        &mut self,
        point: GeoPoint2d,
        effects: &mut Vec<RenderEffect>,
    ) -> Result<MarkerId, GeodrawError> {
        self.check_bounds(&point)?;

        let marker = self.push(point, effects);
        if self.len() > 1 {
            self.render_line(effects);
        }

        Ok(marker)
    }

    /// Inserts a point before the point at `index` and places a marker at it.
    ///
    /// An index past the end appends the point. A point outside of the bounds is rejected and
    /// the buffer stays unchanged.
    pub fn insert_point(
        &mut self,
        index: usize,
        point: GeoPoint2d,
        effects: &mut Vec<RenderEffect>,
    ) -> Result<MarkerId, GeodrawError> {
        self.check_bounds(&point)?;

        let marker = self.next_marker_id();
        let index = index.min(self.len());
        self.entries.insert(
            index,
            BufferEntry {
                point,
                marker: Some(marker),
            },
        );
        effects.push(RenderEffect::CreateMarker {
            marker,
            position: point,
            draggable: self.draggable,
        });
        if self.len() > 1 {
            self.render_line(effects);
        }

        Ok(marker)
    }

    /// Moves the point bound to the marker.
    ///
    /// If the new position is outside of the bounds, the marker is returned to the position of
    /// its point and an error is returned. On success returns the index of the moved point.
    pub fn move_point(
        &mut self,
        marker: MarkerId,
        position: GeoPoint2d,
        effects: &mut Vec<RenderEffect>,
    ) -> Result<usize, GeodrawError> {
        let index = self
            .position_of(marker)
            .ok_or(GeodrawError::UnknownMarker(marker))?;

        if let Err(err) = self.check_bounds(&position) {
            effects.push(RenderEffect::MoveMarker {
                marker,
                position: self.entries[index].point,
            });
            return Err(err);
        }

        self.entries[index].point = position;
        self.render_line(effects);

        Ok(index)
    }

    /// Moves the point at `index` together with its marker, without bounds check.
    ///
    /// Used to keep the twin of a moved point of a closed ring in place.
    pub(crate) fn set_point(
        &mut self,
        index: usize,
        position: GeoPoint2d,
        effects: &mut Vec<RenderEffect>,
    ) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.point = position;
            if let Some(marker) = entry.marker {
                effects.push(RenderEffect::MoveMarker { marker, position });
            }
            self.render_line(effects);
        }
    }

    /// Appends a copy of the first point, closing the ring. The closing point gets no marker of
    /// its own.
    ///
    /// Does nothing if the buffer is empty.
    pub(crate) fn push_closing_point(&mut self, effects: &mut Vec<RenderEffect>) {
        if let Some(first) = self.first() {
            self.entries.push(BufferEntry {
                point: first,
                marker: None,
            });
            self.render_line(effects);
        }
    }

    /// Removes the last point and its marker. Does nothing if the buffer is empty.
    pub fn remove_last(&mut self, effects: &mut Vec<RenderEffect>) -> Option<GeoPoint2d> {
        let entry = self.entries.pop()?;
        if let Some(marker) = entry.marker {
            effects.push(RenderEffect::RemoveMarker { marker });
        }

        if self.len() > 1 {
            self.render_line(effects);
        } else {
            effects.push(RenderEffect::RemoveLayer {
                id: TEMP_LINE_ID.into(),
            });
        }

        Some(entry.point)
    }

    /// Removes all points and markers, together with the temporary line and polygon.
    pub fn clear(&mut self, effects: &mut Vec<RenderEffect>) {
        effects.extend(
            self.entries
                .drain(..)
                .filter_map(|entry| entry.marker)
                .map(|marker| RenderEffect::RemoveMarker { marker }),
        );
        effects.push(RenderEffect::RemoveLayer {
            id: TEMP_LINE_ID.into(),
        });
        effects.push(RenderEffect::RemoveLayer {
            id: TEMP_POLYGON_ID.into(),
        });
    }

    /// Replaces the content of the buffer with the given points, placing a marker at each.
    ///
    /// Points are not checked against the bounds: the ring is expected to come from the polygon
    /// store, where it was validated on save.
    pub fn load(&mut self, points: &[GeoPoint2d], effects: &mut Vec<RenderEffect>) {
        self.clear(effects);
        for point in points {
            self.push(*point, effects);
        }

        if self.len() > 1 {
            self.render_line(effects);
        }
    }

    fn push(&mut self, point: GeoPoint2d, effects: &mut Vec<RenderEffect>) -> MarkerId {
        let marker = self.next_marker_id();
        self.entries.push(BufferEntry {
            point,
            marker: Some(marker),
        });
        effects.push(RenderEffect::CreateMarker {
            marker,
            position: point,
            draggable: self.draggable,
        });

        marker
    }

    fn next_marker_id(&mut self) -> MarkerId {
        let marker = MarkerId(self.next_marker);
        self.next_marker += 1;
        marker
    }

    fn check_bounds(&self, point: &GeoPoint2d) -> Result<(), GeodrawError> {
        if self.bounds.contains(point) {
            Ok(())
        } else {
            Err(GeodrawError::OutOfBounds {
                lat: point.lat(),
                lon: point.lon(),
            })
        }
    }

    fn render_line(&self, effects: &mut Vec<RenderEffect>) {
        effects.push(RenderEffect::RenderLayer {
            id: TEMP_LINE_ID.into(),
            geometry: LayerGeometry::Line(self.snapshot()),
            style: LayerStyle::Line(self.line_style),
        });
    }
}
