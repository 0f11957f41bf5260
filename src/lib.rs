//! Banger Wheel - spin-to-win wheel engine for the daily banger app
//!
//! Core modules:
//! - `wheel`: Pure geometry, spin animation and the spin controller state machine
//! - `config`: Data-driven wheel configuration (JSON)
//! - `content`: Banger catalog and outcome → quote selection
//! - `progress`: Streak, favorites and daily-view bookkeeping

pub mod config;
pub mod content;
pub mod error;
pub mod progress;
pub mod wheel;

pub use config::WheelConfig;
pub use content::{Banger, BangerCatalog, Category};
pub use error::{Error, Result};
pub use progress::Progress;

use glam::DVec2;

/// Wheel configuration constants
pub mod consts {
    /// Fixed host timestep (120 Hz, same cadence as the frame driver in the demo)
    pub const SIM_DT: f64 = 1.0 / 120.0;

    /// Panels on the default wheel
    pub const PANEL_COUNT: usize = 8;
    /// Rim light bulbs on the default wheel
    pub const BULB_COUNT: usize = 14;
    /// Panels that yield a rare banger
    pub const RARE_PANEL_INDEXES: [usize; 1] = [1];

    /// Pointer position in wheel space (0° = right, clockwise positive, so -90° is the top)
    pub const POINTER_ANGLE_DEG: f64 = -90.0;

    /// Spin animation length
    pub const SPIN_DURATION_SECS: f64 = 3.0;
    /// Whole turns added to every committed spin (inclusive range)
    pub const MIN_SPIN_TURNS: u32 = 3;
    pub const MAX_SPIN_TURNS: u32 = 4;

    /// Default wheel dimensions (logical pixels)
    pub const WHEEL_SIZE: f64 = 320.0;
    pub const WHEEL_OUTER_RADIUS: f64 = 150.0;
    pub const WHEEL_INNER_RADIUS: f64 = 36.0;
    /// Pointer sits this far above the wheel rim
    pub const POINTER_OFFSET: f64 = 10.0;
    /// Bulbs are placed this far outside the outer radius
    pub const BULB_RING_INSET: f64 = 6.0;

    /// Degrees → radians. Every conversion in the crate goes through this.
    pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * consts::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad / consts::DEG_TO_RAD
}

/// Normalize an angle in degrees to [0, 360)
///
/// `rem_euclid` can round up to exactly 360.0 for tiny negative inputs, which
/// is folded back to 0.0.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    if a >= 360.0 { 0.0 } else { a }
}

/// Signed shortest angular step for a raw delta, in [-180, 180)
///
/// Used to unwrap touch angles so crossing the ±180° seam doesn't jump the wheel.
#[inline]
pub fn shortest_delta_deg(raw_delta: f64) -> f64 {
    (raw_delta + 540.0).rem_euclid(360.0) - 180.0
}

/// Convert polar (r, angle in degrees) around `center` to cartesian
#[inline]
pub fn polar_to_cartesian(center: DVec2, radius: f64, angle_deg: f64) -> DVec2 {
    let a = deg_to_rad(angle_deg);
    center + DVec2::new(radius * a.cos(), radius * a.sin())
}

/// Convert a cartesian point to polar (r, angle in degrees) around `center`
#[inline]
pub fn cartesian_to_polar(center: DVec2, point: DVec2) -> (f64, f64) {
    let d = point - center;
    (d.length(), rad_to_deg(d.y.atan2(d.x)))
}
