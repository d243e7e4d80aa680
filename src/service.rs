//! Viewport navigation: spawn cursor, selection framing and zoom.
//!
//! `ViewportNavigationService` owns the editor's overlay markers and its
//! virtual camera. The editor UI calls into it one input event at a time
//! (click-to-spawn, entity selection, mouse wheel); every operation updates
//! the owned markers in place before returning, and the renderer reads them
//! through [`ViewportNavigationService::overlay`] on the next frame.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::camera::EditorCamera;
use crate::config::{ConfigError, NavigationConfig};
use crate::consts::{ORIGIN_PIVOT_COLOR, OUTLINE_COLOR, SCALE_DECIMALS, SPAWN_PIVOT_COLOR, SPAWN_PIVOT_SIDE};
use crate::geometry::{Size, Vec2, intersects, round_to, to_top_left_aabb};
use crate::marker::Marker;
use crate::scene::{EntityId, EntityRole, Scene, SceneEntity};

/// What `focus_on_entity` did to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusOutcome {
    /// The entity was off screen; the camera jumped to it.
    Recentred,
    /// The entity was already on screen; the camera did not move.
    AlreadyVisible,
    /// The entity or the camera has no transform; framing was skipped.
    Skipped,
}

/// Everything the renderer needs to draw the overlay for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayState {
    pub spawn_pivot: Marker,
    pub selection_origin_pivot: Marker,
    pub selection_outline: Marker,
    pub camera: EditorCamera,
    pub focused: Option<EntityId>,
}

/// Owner of the overlay markers and editor camera.
#[derive(Debug, Clone)]
pub struct ViewportNavigationService {
    spawn_pivot: Marker,
    selection_origin_pivot: Marker,
    selection_outline: Marker,
    camera: EditorCamera,
    config: NavigationConfig,
    focused: Option<EntityId>,
}

impl Default for ViewportNavigationService {
    fn default() -> Self {
        Self::build(NavigationConfig::default())
    }
}

impl ViewportNavigationService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service using `config` for zoom and marker tuning.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`NavigationConfig::validate`]; an
    /// unchecked config could let zoom leave the hard scale limits.
    pub fn with_config(config: NavigationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: NavigationConfig) -> Self {
        Self {
            spawn_pivot: Marker::new(EntityRole::SpawnPivot, Size::square(SPAWN_PIVOT_SIDE), SPAWN_PIVOT_COLOR.into()),
            selection_origin_pivot: Marker::new(EntityRole::SelectionOriginPivot, Size::zero(), ORIGIN_PIVOT_COLOR.into()),
            selection_outline: Marker::new(EntityRole::SelectionOutline, Size::zero(), OUTLINE_COLOR.into()),
            camera: EditorCamera::new(),
            config,
            focused: None,
        }
    }

    // --- Lifecycle ---

    /// Register the overlay markers and the camera into `scene`.
    pub fn start(&self, scene: &mut dyn Scene) {
        scene.register_entity(self.selection_outline.handle());
        scene.register_entity(self.spawn_pivot.handle());
        scene.register_entity(self.selection_origin_pivot.handle());
        scene.register_entity(self.camera.handle());
        debug!(camera_id = %self.camera.id, "overlay entities registered");
    }

    /// Resize the camera to the host canvas resolution.
    pub fn set_viewport_size(&mut self, size: Size) {
        if !self.camera.set_size(size) {
            debug!("viewport resize skipped: camera has no transform");
            return;
        }
        trace!(width = size.width, height = size.height, "viewport resized");
    }

    // --- Spawn cursor ---

    /// Move the spawn pivot to a world-space point.
    pub fn move_spawn_origin(&mut self, position: Vec2) {
        self.spawn_pivot.set_position(position);
        trace!(x = position.x, y = position.y, "spawn origin moved");
    }

    /// Move the spawn pivot to a viewport-relative point, offset by the camera
    /// position to land in world space.
    pub fn move_spawn_origin_in_viewport(&mut self, position: Vec2) {
        let world = self.camera.viewport_to_world(position);
        self.move_spawn_origin(world);
    }

    // --- Focus ---

    /// Show the selection markers on `entity` and bring it on screen if the
    /// camera cannot currently see it.
    pub fn focus_on_entity(&mut self, entity: &dyn SceneEntity) -> FocusOutcome {
        let entity_transform = entity.transform().copied();

        if let Some(target) = entity_transform.as_ref() {
            self.selection_origin_pivot.set_position(target.position);
            self.selection_outline.match_transform(target);
        }
        self.selection_origin_pivot
            .set_size(Size::square(self.config.focus_pivot_side));
        self.focused = Some(entity.id());

        let (Some(target), Some(camera_aabb)) = (entity_transform, self.camera.visible_aabb()) else {
            debug!(entity_id = %entity.id(), "focus framing skipped: missing transform");
            return FocusOutcome::Skipped;
        };

        let entity_aabb = to_top_left_aabb(target.position, target.size);
        if intersects(&entity_aabb, &camera_aabb) {
            trace!(entity_id = %entity.id(), "focused entity already visible");
            return FocusOutcome::AlreadyVisible;
        }

        self.camera.set_position(target.position);
        debug!(
            entity_id = %entity.id(),
            x = target.position.x,
            y = target.position.y,
            "camera recentred on focused entity"
        );
        FocusOutcome::Recentred
    }

    /// Hide the selection markers. Their positions are kept.
    pub fn lose_focus(&mut self) {
        self.selection_origin_pivot.hide();
        self.selection_outline.hide();
        if let Some(id) = self.focused.take() {
            trace!(entity_id = %id, "focus lost");
        }
    }

    // --- Zoom ---

    /// Apply a relative zoom step (positive = in, negative = out).
    ///
    /// The new scale is `scale / (1 + factor * zoom_step)`, rounded to six
    /// decimals and clamped to the configured bounds. Returns the resulting
    /// scale, or `None` when the camera has no transform.
    ///
    /// Non-finite factors leave the scale untouched. Factors that drive the
    /// divisor to zero or below saturate at the maximum scale.
    pub fn zoom_by(&mut self, factor: f64) -> Option<f64> {
        let current = self.camera.scale()?;
        if !factor.is_finite() {
            warn!(factor, "ignoring non-finite zoom factor");
            return Some(current);
        }

        let divisor = 1.0 + factor * self.config.zoom_step;
        let next = if divisor > 0.0 {
            round_to(current / divisor, SCALE_DECIMALS)
        } else {
            warn!(factor, "zoom factor saturates scale");
            self.config.max_scale
        };

        let stored = self
            .camera
            .set_scale_clamped(next, self.config.min_scale, self.config.max_scale)?;
        trace!(factor, scale = stored, "camera zoomed");
        Some(stored)
    }

    // --- Queries ---

    #[must_use]
    pub fn spawn_pivot(&self) -> &Marker {
        &self.spawn_pivot
    }

    #[must_use]
    pub fn selection_origin_pivot(&self) -> &Marker {
        &self.selection_origin_pivot
    }

    #[must_use]
    pub fn selection_outline(&self) -> &Marker {
        &self.selection_outline
    }

    #[must_use]
    pub fn camera(&self) -> &EditorCamera {
        &self.camera
    }

    /// Mutable camera access for hosts that pan or restore a saved view. Scale
    /// writes through it are clamped to the hard limits.
    pub fn camera_mut(&mut self) -> &mut EditorCamera {
        &mut self.camera
    }

    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Id of the focused entity, if any.
    #[must_use]
    pub fn focused_entity(&self) -> Option<EntityId> {
        self.focused
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused.is_some()
    }

    /// Snapshot of the overlay for the renderer.
    #[must_use]
    pub fn overlay(&self) -> OverlayState {
        OverlayState {
            spawn_pivot: self.spawn_pivot.clone(),
            selection_origin_pivot: self.selection_origin_pivot.clone(),
            selection_outline: self.selection_outline.clone(),
            camera: self.camera.clone(),
            focused: self.focused,
        }
    }
}
