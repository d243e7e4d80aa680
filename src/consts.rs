//! Shared numeric constants for the viewport navigation crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest camera scale the editor allows (fully zoomed out).
pub const MIN_SCALE: f64 = 0.000_01;

/// Largest camera scale the editor allows (fully zoomed in).
pub const MAX_SCALE: f64 = 10_000.0;

/// Scale used when a camera transform does not carry one.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Fraction of the scale removed per unit of zoom factor (one wheel notch ≈ 1–5 units).
pub const ZOOM_STEP: f64 = 0.01;

/// Fractional digits kept after every zoom step.
pub const SCALE_DECIMALS: i32 = 6;

// ── Overlay markers ─────────────────────────────────────────────

/// Side length of the selection-origin pivot while an entity is focused.
pub const FOCUS_PIVOT_SIDE: f64 = 10.0;

/// Side length of the spawn pivot.
pub const SPAWN_PIVOT_SIDE: f64 = 10.0;

/// Spawn pivot color (orange).
pub const SPAWN_PIVOT_COLOR: (u8, u8, u8) = (255, 125, 0);

/// Selection-origin pivot color (yellow).
pub const ORIGIN_PIVOT_COLOR: (u8, u8, u8) = (255, 255, 0);

/// Selection outline color (green).
pub const OUTLINE_COLOR: (u8, u8, u8) = (0, 255, 0);
