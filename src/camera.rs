#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::Serialize;
use uuid::Uuid;

use crate::consts::{MAX_SCALE, MIN_SCALE};
use crate::geometry::{Aabb, Size, Vec2, to_top_left_aabb};
use crate::scene::{EntityHandle, EntityId, EntityRole, SceneEntity, Transform};

/// The editor's virtual camera.
///
/// The transform position is the world-space centre of the viewport and its
/// size the viewport resolution. `scale` is a zoom factor (1.0 = no zoom); the
/// visible world extent is `size / scale`.
///
/// The transform is private so every scale write goes through a clamp: the
/// stored scale is always unset or within `[MIN_SCALE, MAX_SCALE]`.
///
/// The transform is optional: a camera whose component was stripped by the
/// host still exists as an entity but cannot frame anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorCamera {
    pub id: EntityId,
    transform: Option<Transform>,
}

impl Default for EditorCamera {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            transform: Some(Transform::new(Vec2::zero(), Size::zero())),
        }
    }
}

impl EditorCamera {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera with the given transform. A scale outside the hard limits is
    /// clamped; a NaN scale is dropped and reads as the default.
    #[must_use]
    pub fn with_transform(transform: Transform) -> Self {
        let scale = transform
            .scale
            .and_then(|s| clamp_scale(s, MIN_SCALE, MAX_SCALE));
        Self { transform: Some(Transform { scale, ..transform }), ..Self::default() }
    }

    /// Camera whose transform component is missing.
    #[must_use]
    pub fn without_transform() -> Self {
        Self { transform: None, ..Self::default() }
    }

    /// Whether the camera carries a transform.
    #[must_use]
    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    /// Current position, or `None` without a transform.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        self.transform.map(|t| t.position)
    }

    /// Viewport resolution, or `None` without a transform.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.transform.map(|t| t.size)
    }

    /// Current zoom, defaulting to 1 when unset. `None` without a transform.
    #[must_use]
    pub fn scale(&self) -> Option<f64> {
        self.transform.map(|t| t.scale_or_default())
    }

    /// World-space extent currently on screen.
    #[must_use]
    pub fn visible_size(&self) -> Option<Size> {
        self.transform.map(|t| {
            let scale = t.scale_or_default();
            Size::new(t.size.width / scale, t.size.height / scale)
        })
    }

    /// World-space box currently on screen.
    #[must_use]
    pub fn visible_aabb(&self) -> Option<Aabb> {
        let position = self.position()?;
        let visible = self.visible_size()?;
        Some(to_top_left_aabb(position, visible))
    }

    /// Convert a viewport-relative point to world space by offsetting it with
    /// the camera position. Without a transform the offset is zero.
    #[must_use]
    pub fn viewport_to_world(&self, viewport: Vec2) -> Vec2 {
        viewport + self.position().unwrap_or_default()
    }

    /// Inverse of [`Self::viewport_to_world`].
    #[must_use]
    pub fn world_to_viewport(&self, world: Vec2) -> Vec2 {
        world - self.position().unwrap_or_default()
    }

    /// Move the camera. Returns `false` without a transform.
    pub fn set_position(&mut self, position: Vec2) -> bool {
        let Some(transform) = self.transform.as_mut() else {
            return false;
        };
        transform.position = position;
        true
    }

    /// Resize the viewport. Returns `false` without a transform.
    pub fn set_size(&mut self, size: Size) -> bool {
        let Some(transform) = self.transform.as_mut() else {
            return false;
        };
        transform.size = size;
        true
    }

    /// Store `scale` clamped to the hard limits `[MIN_SCALE, MAX_SCALE]`.
    /// See [`Self::set_scale_clamped`] for the return value.
    pub fn set_scale(&mut self, scale: f64) -> Option<f64> {
        self.set_scale_clamped(scale, MIN_SCALE, MAX_SCALE)
    }

    /// Store `scale` clamped to `[min, max]`, which must lie within the hard
    /// limits. Infinities map to the nearest bound. Returns the stored value,
    /// or `None` when `scale` is NaN or there is no transform; in both cases
    /// nothing is written.
    pub fn set_scale_clamped(&mut self, scale: f64, min: f64, max: f64) -> Option<f64> {
        let transform = self.transform.as_mut()?;
        let clamped = clamp_scale(scale, min.max(MIN_SCALE), max.min(MAX_SCALE))?;
        transform.scale = Some(clamped);
        Some(clamped)
    }

    /// Handle used when registering the camera into a scene.
    #[must_use]
    pub fn handle(&self) -> EntityHandle {
        EntityHandle { id: self.id, role: EntityRole::EditorCamera }
    }
}

impl SceneEntity for EditorCamera {
    fn id(&self) -> EntityId {
        self.id
    }

    fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }
}

fn clamp_scale(scale: f64, min: f64, max: f64) -> Option<f64> {
    if scale.is_nan() {
        None
    } else if scale < min {
        Some(min)
    } else if scale > max {
        Some(max)
    } else {
        Some(scale)
    }
}
