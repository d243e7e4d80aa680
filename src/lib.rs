//! Viewport navigation core for the 2D scene editor.
//!
//! The editor UI forwards user input here: clicks place the spawn cursor,
//! selecting an entity frames it with a pivot and outline (jumping the camera
//! if the entity is off screen), and the mouse wheel zooms. All state changes
//! are synchronous; the renderer reads the resulting overlay each frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`service`] | [`service::ViewportNavigationService`], the entry point |
//! | [`camera`] | Editor camera, visible area and viewport/world conversion |
//! | [`marker`] | Pivot and outline overlay markers |
//! | [`scene`] | Transform, entity and scene-registration seams |
//! | [`geometry`] | Vectors, sizes, AABBs and overlap testing |
//! | [`config`] | Zoom and marker tuning, loaded from the environment |
//! | [`consts`] | Shared numeric constants (scale limits, marker sizes, colors) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod geometry;
pub mod marker;
pub mod scene;
pub mod service;

pub use camera::EditorCamera;
pub use config::{ConfigError, NavigationConfig};
pub use geometry::{Aabb, Size, Vec2};
pub use marker::Marker;
pub use scene::{Entity, EntityId, Scene, SceneEntity, SceneRegistry, Transform};
pub use service::{FocusOutcome, OverlayState, ViewportNavigationService};
