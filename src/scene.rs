//! Scene model consumed by the navigation service.
//!
//! The host engine owns the real entity/component graph. This module defines
//! only the narrow surface the service needs: a `Transform` component, the
//! `SceneEntity` trait for anything that may carry one, a plain `Entity`
//! implementation for hosts and tests, and the `Scene` registration seam.
//!
//! `SceneRegistry` is the in-crate `Scene`: it records which overlay entities
//! were registered, in order, so a renderer can resolve them by id.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::DEFAULT_SCALE;
use crate::geometry::{Size, Vec2};

/// Stable identity of a scene entity.
pub type EntityId = Uuid;

/// Position, size and optional scale of an entity or camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Centre of the entity in world coordinates.
    pub position: Vec2,
    /// Extent of the entity in world units.
    pub size: Size,
    /// Zoom factor. Only cameras set this; `None` reads as [`DEFAULT_SCALE`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl Transform {
    #[must_use]
    pub fn new(position: Vec2, size: Size) -> Self {
        Self { position, size, scale: None }
    }

    /// The scale, falling back to [`DEFAULT_SCALE`] when unset.
    #[must_use]
    pub fn scale_or_default(&self) -> f64 {
        self.scale.unwrap_or(DEFAULT_SCALE)
    }
}

/// An RGB color used for overlay marker fills and strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Anything that lives in a scene and may carry a transform.
pub trait SceneEntity {
    /// Stable identity of the entity.
    fn id(&self) -> EntityId;

    /// The entity's transform component, if it has one.
    fn transform(&self) -> Option<&Transform>;
}

/// A plain scene entity: an id, a display name and an optional transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub transform: Option<Transform>,
}

impl Entity {
    /// Create an entity with a fresh id and the given transform.
    #[must_use]
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), transform: Some(transform) }
    }

    /// Create an entity that has no transform component.
    #[must_use]
    pub fn without_transform(name: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), transform: None }
    }
}

impl SceneEntity for Entity {
    fn id(&self) -> EntityId {
        self.id
    }

    fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }
}

/// What an overlay entity is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityRole {
    /// Cursor marking where the next entity will be spawned.
    SpawnPivot,
    /// Small marker at the focused entity's origin.
    SelectionOriginPivot,
    /// Outline mirroring the focused entity's bounds.
    SelectionOutline,
    /// The editor's virtual camera.
    EditorCamera,
}

/// Reference to an entity registered into a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityHandle {
    pub id: EntityId,
    pub role: EntityRole,
}

/// Host scene that overlay entities are registered into.
pub trait Scene {
    /// Register an entity so the renderer draws it.
    fn register_entity(&mut self, handle: EntityHandle);
}

/// Ordered record of registered entities.
#[derive(Debug, Clone, Default)]
pub struct SceneRegistry {
    entities: Vec<EntityHandle>,
}

impl SceneRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All registered handles in registration order.
    #[must_use]
    pub fn entities(&self) -> &[EntityHandle] {
        &self.entities
    }

    /// Whether an entity with `id` has been registered.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.entities.iter().any(|h| &h.id == id)
    }

    /// First registered entity with the given role.
    #[must_use]
    pub fn find_role(&self, role: EntityRole) -> Option<&EntityHandle> {
        self.entities.iter().find(|h| h.role == role)
    }

    /// Number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Scene for SceneRegistry {
    fn register_entity(&mut self, handle: EntityHandle) {
        self.entities.push(handle);
    }
}
