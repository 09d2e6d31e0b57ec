//! Planar Physics - 2D Rigid-Body Core
//!
//! Advances circles, axis-aligned rectangles and line segments under gravity
//! and per-body acceleration and damping, then resolves pairwise collisions.
//!
//! # Features
//!
//! - Dynamic and static bodies (no rotation)
//! - Circle-circle, circle-line (swept) and circle-rectangle contacts
//! - World-bounds culling
//! - Copy-on-write stepping for replay
//! - Point queries
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   Engine                     │
//! │  ┌──────────┐   ┌────────┐   ┌────────────┐ │
//! │  │ integrate│ → │  cull  │ → │  resolve   │ │
//! │  │ (dynamic)│   │(bounds)│   │ (i<j pairs)│ │
//! │  └──────────┘   └────────┘   └────────────┘ │
//! └──────────────────────────────────────────────┘
//!                        │
//!         ┌──────────────┼──────────────┐
//!         ▼              ▼              ▼
//!    ┌─────────┐   ┌──────────┐   ┌──────────┐
//!    │ Circle  │   │Rectangle │   │   Line   │
//!    └─────────┘   └──────────┘   └──────────┘
//! ```
//!
//! Only pairs that include a circle interact. Rectangles and lines pass
//! through each other and themselves.
//!
//! # Example
//!
//! ```
//! use planar_physics::prelude::*;
//!
//! let mut engine = Engine::new(Vec2::new(0.0, 9.8));
//! engine.spawn(Circle::new(100.0, 100.0, 10.0), "ball");
//! engine.spawn(
//!     Rectangle::new(0.0, 200.0, 400.0, 20.0).with_body(Body::fixed()),
//!     "floor",
//! );
//!
//! let next = engine.step(0.01);
//! assert_eq!(engine.entities()[0].shape.anchor(), Vec2::new(100.0, 100.0));
//! assert!(next.entities()[0].shape.anchor().y > 100.0);
//! ```

pub mod body;
pub mod config;
pub mod entity;
pub mod error;
pub mod events;
pub mod query;
pub mod shape;
pub mod world;

pub mod prelude {
    //! Common imports for physics functionality
    pub use crate::body::{Body, BodyType};
    pub use crate::config::EngineConfig;
    pub use crate::entity::Entity;
    pub use crate::error::{PhysicsError, Result};
    pub use crate::events::{ContactEvent, ContactKind};
    pub use crate::query::{PointHit, WorldQuery};
    pub use crate::shape::{Circle, Line, Rectangle, Shape, ShapeKind};
    pub use crate::world::Engine;
    pub use planar_math::{Rect, Vec2};
}

pub use prelude::*;
