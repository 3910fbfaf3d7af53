//! Shared numeric constants for the outfit board.

// ── Item geometry ───────────────────────────────────────────────

/// Smallest scale an item may reach.
pub const SCALE_MIN: f64 = 0.5;

/// Largest scale an item may reach.
pub const SCALE_MAX: f64 = 2.0;

/// Scale delta applied per toolbar zoom click.
pub const ZOOM_STEP: f64 = 0.1;

/// Degrees applied per toolbar rotate click.
pub const ROTATE_STEP_DEGREES: f64 = 15.0;

// ── Placement ───────────────────────────────────────────────────

/// Canvas-local x where a newly added item lands.
pub const DEFAULT_ITEM_X: f64 = 50.0;

/// Canvas-local y where a newly added item lands.
pub const DEFAULT_ITEM_Y: f64 = 50.0;

// ── History ─────────────────────────────────────────────────────

/// Maximum number of history snapshots retained; the oldest is dropped first.
pub const MAX_HISTORY: usize = 100;
