use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use geodraw_types::geo::GeoPoint2d;
use geodraw_types::ring;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::draw::palette::ColorStrategy;
use crate::error::GeodrawError;
use crate::surface::{LayerGeometry, LayerStyle, PolygonStyle, RenderEffect};
use crate::Color;

const ID_PREFIX: &str = "polygon-";

/// Identifier of a saved polygon. Displayed (and used as the layer id) as `polygon-<n>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct PolygonId(u64);

impl Display for PolygonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{ID_PREFIX}{}", self.0)
    }
}

impl FromStr for PolygonId {
    type Err = GeodrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(ID_PREFIX)
            .and_then(|number| number.parse().ok())
            .map(PolygonId)
            .ok_or_else(|| GeodrawError::UnparsableId(s.to_string()))
    }
}

impl TryFrom<String> for PolygonId {
    type Error = GeodrawError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PolygonId> for String {
    fn from(value: PolygonId) -> Self {
        value.to_string()
    }
}

/// Saved polygon.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    id: PolygonId,
    ring: Vec<GeoPoint2d>,
    fill_color: Color,
    stroke_color: Color,
}

impl Polygon {
    /// Id of the polygon.
    pub fn id(&self) -> PolygonId {
        self.id
    }

    /// Boundary of the polygon. The last point repeats the first one.
    pub fn ring(&self) -> &[GeoPoint2d] {
        &self.ring
    }

    /// Always true for polygons taken from a store.
    pub fn is_closed(&self) -> bool {
        ring::is_closed(&self.ring)
    }

    /// Fill color, including fill opacity as alpha.
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Outline color.
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    fn render(&self, stroke_width: f64) -> RenderEffect {
        RenderEffect::RenderLayer {
            id: self.id.to_string(),
            geometry: LayerGeometry::Polygon(self.ring.clone()),
            style: LayerStyle::Polygon(
                PolygonStyle::new(self.fill_color)
                    .with_stroke_color(self.stroke_color)
                    .with_stroke_width(stroke_width),
            ),
        }
    }
}

/// Finalized polygons, keyed by id.
///
/// Ids come from a counter that starts at 1 and is never decremented, so an id is not reused
/// after its polygon is deleted and iteration order is the order of saving.
pub struct PolygonStore {
    polygons: BTreeMap<PolygonId, Polygon>,
    next_id: u64,
    colors: Box<dyn ColorStrategy>,
    fill_opacity: f64,
    stroke_width: f64,
}

impl PolygonStore {
    /// Creates an empty store taking fill colors from the given strategy.
    pub fn with_color_strategy(
        fill_opacity: f64,
        stroke_width: f64,
        colors: impl ColorStrategy + 'static,
    ) -> Self {
        Self {
            polygons: BTreeMap::new(),
            next_id: 1,
            colors: Box::new(colors),
            fill_opacity,
            stroke_width,
        }
    }

    /// Validates and stores the ring as a new polygon, and renders it.
    pub fn save(
        &mut self,
        ring: Vec<GeoPoint2d>,
        effects: &mut Vec<RenderEffect>,
    ) -> Result<PolygonId, GeodrawError> {
        ring::validate(&ring)?;

        let id = PolygonId(self.next_id);
        self.next_id += 1;

        let fill_color = self.colors.next_color().with_opacity(self.fill_opacity);
        let polygon = Polygon {
            id,
            ring,
            fill_color,
            stroke_color: fill_color.contrasting(),
        };

        effects.push(polygon.render(self.stroke_width));
        self.polygons.insert(id, polygon);

        log::info!("Saved polygon {id}");
        Ok(id)
    }

    /// Replaces the ring of an existing polygon and renders it again with the same colors.
    pub fn update(
        &mut self,
        id: PolygonId,
        ring: Vec<GeoPoint2d>,
        effects: &mut Vec<RenderEffect>,
    ) -> Result<(), GeodrawError> {
        let polygon = self
            .polygons
            .get_mut(&id)
            .ok_or(GeodrawError::NotFound(id))?;
        ring::validate(&ring)?;

        polygon.ring = ring;
        effects.push(polygon.render(self.stroke_width));

        log::info!("Updated polygon {id}");
        Ok(())
    }

    /// Removes the polygon and its layer.
    pub fn delete(
        &mut self,
        id: PolygonId,
        effects: &mut Vec<RenderEffect>,
    ) -> Result<Polygon, GeodrawError> {
        let polygon = self.polygons.remove(&id).ok_or(GeodrawError::NotFound(id))?;
        effects.push(RenderEffect::RemoveLayer { id: id.to_string() });

        log::info!("Deleted polygon {id}");
        Ok(polygon)
    }

    /// Returns the polygon with the given id.
    pub fn get(&self, id: PolygonId) -> Option<&Polygon> {
        self.polygons.get(&id)
    }

    /// Iterates over polygons in the order they were saved.
    pub fn list(&self) -> impl Iterator<Item = &Polygon> + '_ {
        self.polygons.values()
    }

    /// Number of stored polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub(crate) fn render_all(&self) -> Vec<RenderEffect> {
        self.list()
            .map(|polygon| polygon.render(self.stroke_width))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geodraw_types::geo::NewGeoPoint;

    use super::*;
    use crate::draw::palette::ColorCycle;

    fn p(lon: f64, lat: f64) -> GeoPoint2d {
        GeoPoint2d::lonlat(lon, lat)
    }

    fn triangle() -> Vec<GeoPoint2d> {
        vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(0.0, 0.0)]
    }

    fn square() -> Vec<GeoPoint2d> {
        vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0), p(0.0, 0.0)]
    }

    fn store() -> PolygonStore {
        PolygonStore::with_color_strategy(
            0.5,
            1.5,
            ColorCycle::new([Color::rgb(255, 255, 0), Color::rgb(0, 0, 128)]),
        )
    }

    #[test]
    fn id_format() {
        assert_eq!(PolygonId(7).to_string(), "polygon-7");
        assert_eq!("polygon-12".parse::<PolygonId>(), Ok(PolygonId(12)));
        assert_matches!(
            "polygon-".parse::<PolygonId>(),
            Err(GeodrawError::UnparsableId(_))
        );
        assert_matches!(
            "layer-1".parse::<PolygonId>(),
            Err(GeodrawError::UnparsableId(_))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn id_serializes_as_layer_name() {
        assert_eq!(
            serde_json::to_string(&PolygonId(3)).unwrap(),
            "\"polygon-3\""
        );
        assert_eq!(
            serde_json::from_str::<PolygonId>("\"polygon-42\"").unwrap(),
            PolygonId(42)
        );
        assert!(serde_json::from_str::<PolygonId>("\"polygon-x\"").is_err());
        assert!(serde_json::from_str::<PolygonId>("3").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn polygon_serde_keeps_id_ring_and_colors() {
        let mut store = store();
        let id = store.save(square(), &mut vec![]).unwrap();
        let polygon = store.get(id).unwrap();

        let json = serde_json::to_string(polygon).unwrap();
        assert!(json.contains("\"id\":\"polygon-1\""));
        assert!(json.contains("\"fill_color\":\"#FFFF0080\""));

        let restored: Polygon = serde_json::from_str(&json).unwrap();
        assert_eq!(&restored, polygon);
    }

    #[test]
    fn save_then_get_returns_same_ring() {
        let mut store = store();
        let mut effects = vec![];
        let id = store.save(triangle(), &mut effects).unwrap();

        assert_eq!(id.to_string(), "polygon-1");
        let polygon = store.get(id).unwrap();
        assert_eq!(polygon.ring(), triangle().as_slice());
        assert!(polygon.is_closed());
        assert_eq!(polygon.fill_color(), Color::rgba(255, 255, 0, 128));
        assert_eq!(polygon.stroke_color(), Color::BLACK);

        assert_eq!(
            effects,
            vec![RenderEffect::RenderLayer {
                id: "polygon-1".into(),
                geometry: LayerGeometry::Polygon(triangle()),
                style: LayerStyle::Polygon(
                    PolygonStyle::new(Color::rgba(255, 255, 0, 128))
                        .with_stroke_color(Color::BLACK)
                        .with_stroke_width(1.5)
                ),
            }]
        );
    }

    #[test]
    fn save_rejects_invalid_rings() {
        let mut store = store();
        let mut effects = vec![];

        let open = triangle()[..3].to_vec();
        assert_matches!(
            store.save(open, &mut effects),
            Err(GeodrawError::InvalidRing(_))
        );
        let unclosed = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert_matches!(
            store.save(unclosed, &mut effects),
            Err(GeodrawError::InvalidRing(_))
        );

        assert!(store.is_empty());
        assert!(effects.is_empty());
    }

    #[test]
    fn update_preserves_id_and_colors() {
        let mut store = store();
        let mut effects = vec![];
        let id = store.save(triangle(), &mut effects).unwrap();
        let colors = (
            store.get(id).unwrap().fill_color(),
            store.get(id).unwrap().stroke_color(),
        );

        store.update(id, square(), &mut effects).unwrap();
        let polygon = store.get(id).unwrap();
        assert_eq!(polygon.id(), id);
        assert_eq!(polygon.ring(), square().as_slice());
        assert_eq!((polygon.fill_color(), polygon.stroke_color()), colors);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_validates_and_checks_existence() {
        let mut store = store();
        let mut effects = vec![];
        let id = store.save(triangle(), &mut effects).unwrap();

        assert_matches!(
            store.update(PolygonId(9), square(), &mut effects),
            Err(GeodrawError::NotFound(_))
        );
        assert_matches!(
            store.update(id, square()[..4].to_vec(), &mut effects),
            Err(GeodrawError::InvalidRing(_))
        );
        assert_eq!(store.get(id).unwrap().ring(), triangle().as_slice());
    }

    #[test]
    fn delete_missing_polygon_fails() {
        let mut store = store();
        let mut effects = vec![];
        store.save(triangle(), &mut effects).unwrap();

        effects.clear();
        assert_eq!(
            store.delete(PolygonId(9), &mut effects),
            Err(GeodrawError::NotFound(PolygonId(9)))
        );
        assert_eq!(store.len(), 1);
        assert!(effects.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = store();
        let mut effects = vec![];
        let first = store.save(triangle(), &mut effects).unwrap();
        let second = store.save(square(), &mut effects).unwrap();
        store.delete(first, &mut effects).unwrap();
        let third = store.save(triangle(), &mut effects).unwrap();

        assert_eq!(third.to_string(), "polygon-3");
        let ids: Vec<_> = store.list().map(|polygon| polygon.id()).collect();
        assert_eq!(ids, vec![second, third]);
        assert!(effects.contains(&RenderEffect::RemoveLayer {
            id: "polygon-1".into()
        }));
    }

    #[test]
    fn dark_fill_gets_light_outline() {
        let mut store = store();
        let mut effects = vec![];
        store.save(triangle(), &mut effects).unwrap();
        let id = store.save(square(), &mut effects).unwrap();

        assert_eq!(store.get(id).unwrap().stroke_color(), Color::WHITE);
    }
}
