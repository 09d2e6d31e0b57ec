//! Point queries over a world snapshot

use crate::entity::Entity;
use crate::shape::ShapeKind;
use crate::world::Engine;
use planar_math::Vec2;

/// An entity under a queried point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    /// Index into [`Engine::entities`]
    pub index: usize,
    /// Shape that was hit
    pub kind: ShapeKind,
}

/// Read-only query interface borrowed from an [`Engine`]
pub struct WorldQuery<'a, D> {
    pub(crate) entities: &'a [Entity<D>],
}

impl<'a, D> WorldQuery<'a, D> {
    /// Every entity whose shape contains `point`, in resolution order.
    ///
    /// Circles use strict containment and rectangles inclusive containment;
    /// lines are never hit.
    pub fn entities_at(&self, point: Vec2) -> Vec<PointHit> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, entity)| entity.shape.contains_point(point))
            .map(|(index, entity)| PointHit {
                index,
                kind: entity.shape.kind(),
            })
            .collect()
    }

    /// Last entity containing `point`, i.e. the one spawned most recently
    pub fn topmost_at(&self, point: Vec2) -> Option<PointHit> {
        self.entities
            .iter()
            .enumerate()
            .rev()
            .find(|(_, entity)| entity.shape.contains_point(point))
            .map(|(index, entity)| PointHit {
                index,
                kind: entity.shape.kind(),
            })
    }
}

impl<D> Engine<D> {
    /// Get a query interface for point hit-testing
    pub fn query(&self) -> WorldQuery<'_, D> {
        WorldQuery {
            entities: self.entities(),
        }
    }
}
