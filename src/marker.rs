//! Overlay markers: the pivots and outline drawn on top of the scene.
//!
//! A marker is a plain value with a transform and a color. It has no behavior
//! of its own; the navigation service mutates its fields directly.

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{Size, Vec2};
use crate::scene::{EntityHandle, EntityId, EntityRole, Rgb, SceneEntity, Transform};

/// A single overlay marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: EntityId,
    pub role: EntityRole,
    pub transform: Transform,
    pub color: Rgb,
}

impl Marker {
    /// Create a marker at the world origin with the given size and color.
    #[must_use]
    pub fn new(role: EntityRole, size: Size, color: Rgb) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            transform: Transform::new(Vec2::zero(), size),
            color,
        }
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// Current size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.transform.size
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
    }

    pub fn set_size(&mut self, size: Size) {
        self.transform.size = size;
    }

    /// Copy position and size from `target`. Scale is not a marker concern.
    pub fn match_transform(&mut self, target: &Transform) {
        self.transform.position = target.position;
        self.transform.size = target.size;
    }

    /// Collapse to `{0, 0}`; the position is left untouched.
    pub fn hide(&mut self) {
        self.transform.size = Size::zero();
    }

    /// Whether the marker has a drawable area.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.transform.size.is_empty()
    }

    /// Handle used when registering the marker into a scene.
    #[must_use]
    pub fn handle(&self) -> EntityHandle {
        EntityHandle { id: self.id, role: self.role }
    }
}

impl SceneEntity for Marker {
    fn id(&self) -> EntityId {
        self.id
    }

    fn transform(&self) -> Option<&Transform> {
        Some(&self.transform)
    }
}
