//! Timed spin animation
//!
//! A fixed-duration interpolation from a start angle to a target angle,
//! shaped by an easing curve and advanced by the host's frame timestep.
//! The final sample is exactly the target so outcome resolution sees the
//! committed angle with no float drift.

use serde::{Deserialize, Serialize};

/// Easing curves available for the spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Fast start, long slow settle. Reads like a real wheel losing momentum.
    #[default]
    EaseOutCubic,
    EaseInOutQuad,
}

impl Easing {
    /// Map progress `t` in [0, 1] to eased progress in [0, 1]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOutCubic => "ease_out_cubic",
            Easing::EaseInOutQuad => "ease_in_out_quad",
        }
    }
}

/// In-flight rotation from `from` to `to`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinAnimation {
    pub from: f64,
    pub to: f64,
    /// Total length (seconds)
    pub duration: f64,
    /// Time advanced so far (seconds)
    pub elapsed: f64,
    pub easing: Easing,
}

impl SpinAnimation {
    pub fn new(from: f64, to: f64, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt` seconds and return the new angle
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
        self.value()
    }

    /// Normalized progress in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Current angle. Exactly `to` once complete.
    pub fn value(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Time left (seconds)
    pub fn remaining(&self) -> f64 {
        (self.duration - self.elapsed).max(0.0)
    }
}
