use crate::sdk::geo::GeoPoint;
use serde::Serialize;

/// Points picked on the map, in click order. Never longer than two.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    points: Vec<GeoPoint>,
}

impl Selection {
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.points.len() == 2
    }

    pub fn start(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    /// The destination, only once both points are picked.
    pub fn end(&self) -> Option<GeoPoint> {
        self.points.get(1).copied()
    }

    /// The ordered pair when complete.
    pub fn pair(&self) -> Option<(GeoPoint, GeoPoint)> {
        Some((self.start()?, self.end()?))
    }
}

#[derive(Debug, Default)]
pub struct PointSelector {
    selection: Selection,
}

impl PointSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Adds a click. A third click starts over with only the new point.
    pub fn select(&mut self, click: GeoPoint) -> &Selection {
        if self.selection.is_complete() {
            self.selection.points.clear();
        }
        self.selection.points.push(click);
        &self.selection
    }
}
