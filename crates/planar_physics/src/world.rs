//! Simulation world - bounds, gravity and the ordered entity list

use crate::config::{EngineConfig, DEFAULT_WORLD_EXTENT};
use crate::entity::Entity;
use crate::error::Result;
use crate::events::{ContactEvent, ContactKind};
use crate::shape::{Line, Shape};
use planar_math::{Rect, Vec2};

/// A world snapshot.
///
/// Entities are resolved in insertion order, so the order of [`spawn`]
/// calls is observable in the outcome of a step.
///
/// [`spawn`]: Engine::spawn
#[derive(Debug, Clone)]
pub struct Engine<D = ()> {
    /// World rectangle used for culling
    bounds: Rect,

    /// Gravity added to every dynamic body's velocity, per unit of elapsed time
    gravity: Vec2,

    /// Entities in resolution order
    entities: Vec<Entity<D>>,

    /// Contacts resolved by the most recent step
    events: Vec<ContactEvent>,
}

impl<D> Engine<D> {
    /// Create an empty world with the default `1000 x 1000` bounds at the origin
    pub fn new(gravity: Vec2) -> Self {
        Self::with_bounds(0.0, 0.0, DEFAULT_WORLD_EXTENT, DEFAULT_WORLD_EXTENT, gravity)
    }

    /// Create an empty world with explicit bounds
    pub fn with_bounds(x: f32, y: f32, width: f32, height: f32, gravity: Vec2) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
            gravity,
            entities: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Create an empty world from a validated configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let bounds = config.bounds();
        Ok(Self::with_bounds(bounds.x, bounds.y, bounds.width, bounds.height, config.gravity()))
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Set gravity
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    // ==================== Entities ====================

    /// Append an entity and return its current index
    pub fn spawn(&mut self, shape: impl Into<Shape>, display: D) -> usize {
        self.entities.push(Entity::new(shape, display));
        self.entities.len() - 1
    }

    pub fn entities(&self) -> &[Entity<D>] {
        &self.entities
    }

    /// Mutable access for scenario setup between steps
    pub fn entities_mut(&mut self) -> &mut Vec<Entity<D>> {
        &mut self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Contacts resolved by the most recent step
    pub fn contact_events(&self) -> &[ContactEvent] {
        &self.events
    }

    // ==================== Simulation ====================

    /// Advance this world in place by one step
    pub fn advance(&mut self, elapsed: f32) {
        self.events.clear();
        self.integrate(elapsed);
        self.cull();
        self.resolve_contacts();
    }

    /// Move every dynamic body by its updated velocity
    fn integrate(&mut self, elapsed: f32) {
        let gravity = self.gravity;
        for entity in &mut self.entities {
            if entity.shape.body().is_static() {
                continue;
            }
            let velocity = entity.shape.body_mut().integrate(gravity, elapsed);
            entity.shape = entity.shape.translate(velocity.x, velocity.y);
        }
    }

    /// Drop entities that have left the world
    fn cull(&mut self) {
        let bounds = self.bounds;
        let before = self.entities.len();
        self.entities.retain(|entity| match &entity.shape {
            Shape::Line(line) => line_in_world(line, &bounds),
            Shape::Circle(_) | Shape::Rectangle(_) => bounds.contains_point(entity.shape.anchor()),
        });

        let removed = before - self.entities.len();
        if removed > 0 {
            log::debug!("Culled {} entities outside world bounds ({} remain)", removed, self.entities.len());
        }
    }

    /// Resolve every handled pair in `(i, j)` order; later pairs see the
    /// results of earlier ones.
    fn resolve_contacts(&mut self) {
        let count = self.entities.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (head, tail) = self.entities.split_at_mut(j);
                let a = &mut head[i].shape;
                let b = &mut tail[0].shape;
                if a.body().is_static() && b.body().is_static() {
                    continue;
                }
                if let Some(kind) = resolve_pair(a, b) {
                    log::trace!("Resolved {:?} contact between entities {} and {}", kind, i, j);
                    self.events.push(ContactEvent { first: i, second: j, kind });
                }
            }
        }
    }
}

impl<D: Clone> Engine<D> {
    /// Return the next snapshot, leaving `self` untouched
    pub fn step(&self, elapsed: f32) -> Self {
        let mut next = self.clone();
        next.advance(elapsed);
        next
    }
}

/// Dispatch a pair to its collision routine with the circle first.
///
/// Pairs without a circle are not handled and pass through each other.
fn resolve_pair(a: &mut Shape, b: &mut Shape) -> Option<ContactKind> {
    let (hit, kind) = match (a, b) {
        (Shape::Circle(a), Shape::Circle(b)) => (a.collide_with_circle(b), ContactKind::CircleCircle),
        (Shape::Circle(c), Shape::Line(l)) | (Shape::Line(l), Shape::Circle(c)) => {
            (c.collide_with_line(l), ContactKind::CircleLine)
        }
        (Shape::Circle(c), Shape::Rectangle(r)) | (Shape::Rectangle(r), Shape::Circle(c)) => {
            (c.collide_with_rectangle(r), ContactKind::CircleRectangle)
        }
        (Shape::Rectangle(_), Shape::Rectangle(_))
        | (Shape::Line(_), Shape::Line(_))
        | (Shape::Rectangle(_), Shape::Line(_))
        | (Shape::Line(_), Shape::Rectangle(_)) => return None,
    };
    hit.then_some(kind)
}

/// Overlap test between a line's endpoint extents and the world.
///
/// Extents come straight from the endpoints so boundary comparisons see the
/// exact coordinates. The vertical comparisons use the line's top against the
/// world's top and its bottom against the world's bottom, so a line is kept
/// only while it lies strictly inside the world vertically.
fn line_in_world(line: &Line, world: &Rect) -> bool {
    let (start, end) = (line.start(), line.end());
    let (left, right) = (start.x.min(end.x), start.x.max(end.x));
    let (top, bottom) = (start.y.min(end.y), start.y.max(end.y));
    world.left() < right
        && left < world.right()
        && world.top() < top
        && bottom < world.bottom()
}
