//! Spin controller
//!
//! Owns the wheel rotation and the busy flag, turns gestures and button
//! presses into committed spins, drives the spin animation and reports one
//! outcome per completed spin.
//!
//! Exactly one phase holds at a time:
//! - `Idle`: at rest, accepts spins and gestures
//! - `InteractiveRotate`: finger on the wheel, rotation follows the gesture
//! - `Animating`: a committed spin is in flight, busy; everything else is ignored
//!
//! Randomness is only consumed at commit. Resolution is a pure function of
//! the settled angle, which always lands on the panel picked at commit.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animation::{Easing, SpinAnimation};
use super::geometry::{panel_index_from_angle, spin_target_angle};
use super::panel::PanelTable;
use crate::config::WheelConfig;
use crate::{Result, cartesian_to_polar, shortest_delta_deg};

/// Source of the two random choices made at commit
pub trait SpinRandom {
    /// Uniform panel index in `[0, panel_count)`
    fn pick_panel(&mut self, panel_count: usize) -> usize;
    /// Uniform whole-turn count in `[min_turns, max_turns]`
    fn pick_turns(&mut self, min_turns: u32, max_turns: u32) -> u32;
}

/// Seeded PCG source used outside of tests
#[derive(Debug, Clone)]
pub struct PcgSpinRandom {
    rng: Pcg32,
}

impl PcgSpinRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the thread RNG (non-reproducible runs)
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl SpinRandom for PcgSpinRandom {
    fn pick_panel(&mut self, panel_count: usize) -> usize {
        self.rng.random_range(0..panel_count.max(1))
    }

    fn pick_turns(&mut self, min_turns: u32, max_turns: u32) -> u32 {
        self.rng.random_range(min_turns..=max_turns.max(min_turns))
    }
}

/// Result of a completed spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Panel the wheel stopped on
    pub panel: usize,
    pub rare: bool,
}

/// Notifications for the presentation layer, in emission order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinEvent {
    /// A spin was committed (fired synchronously at commit)
    Started { target_panel: usize, target_angle: f64 },
    /// Tactile pulse at resolution, always right before `Completed`
    Haptic,
    Completed(SpinOutcome),
    /// Animation was interrupted; busy cleared, no outcome
    Aborted,
}

/// Callback-style consumer of spin events
pub trait SpinObserver {
    fn on_spin_start(&mut self, _target_panel: usize) {}
    fn on_haptic(&mut self) {}
    fn on_spin_complete(&mut self, outcome: SpinOutcome);
    fn on_spin_aborted(&mut self) {}
}

/// Raw gesture callbacks from the platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// One finger down at `point` (wheel view coordinates)
    PanStart { point: DVec2 },
    PanUpdate { point: DVec2 },
    /// Two-finger rotate began
    RotateStart,
    /// Cumulative rotation since `RotateStart` (degrees, clockwise positive)
    RotateUpdate { rotation_deg: f64 },
    /// Gesture finished; `success == false` means it was cancelled
    End { success: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureKind {
    Pan,
    Rotate,
}

/// Interactive rotation bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureTrack {
    pub kind: GestureKind,
    /// Rotation captured at gesture start
    pub baseline: f64,
    /// Last touch angle around the wheel center (pan only)
    pub last_touch_deg: Option<f64>,
    /// Unwrapped rotation applied on top of the baseline
    pub delta: f64,
}

/// A committed spin in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveSpin {
    pub target_panel: usize,
    pub animation: SpinAnimation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SpinPhase {
    Idle,
    InteractiveRotate(GestureTrack),
    Animating(ActiveSpin),
}

pub struct SpinController<R: SpinRandom = PcgSpinRandom> {
    table: PanelTable,
    center: DVec2,
    duration: f64,
    easing: Easing,
    min_turns: u32,
    max_turns: u32,
    /// Unbounded; wrapped only when interpreted
    rotation: f64,
    phase: SpinPhase,
    random: R,
    events: Vec<SpinEvent>,
    spins_completed: u64,
}

impl SpinController<PcgSpinRandom> {
    /// Controller with a seeded PCG source
    pub fn seeded(config: &WheelConfig, seed: u64) -> Result<Self> {
        Self::new(config, PcgSpinRandom::new(seed))
    }
}

impl<R: SpinRandom> SpinController<R> {
    pub fn new(config: &WheelConfig, random: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            table: config.panel_table(),
            center: config.center(),
            duration: config.spin_duration_secs,
            easing: config.easing,
            min_turns: config.min_turns,
            max_turns: config.max_turns,
            rotation: 0.0,
            phase: SpinPhase::Idle,
            random,
            events: Vec::new(),
            spins_completed: 0,
        })
    }

    /// Current rotation (degrees, unwrapped). For rendering only.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, SpinPhase::Animating(_))
    }

    pub fn panel_table(&self) -> &PanelTable {
        &self.table
    }

    pub fn random(&self) -> &R {
        &self.random
    }

    pub fn spins_completed(&self) -> u64 {
        self.spins_completed
    }

    /// Panel currently under the pointer (live highlight while rotating)
    pub fn panel_under_pointer(&self) -> usize {
        panel_index_from_angle(self.rotation, self.table.len())
    }

    /// Button-triggered spin. Returns false (and does nothing) while busy.
    ///
    /// Also commits from `InteractiveRotate`, abandoning the gesture.
    pub fn start_spin(&mut self) -> bool {
        if self.is_busy() {
            log::debug!("Spin request ignored: wheel busy");
            return false;
        }
        self.commit();
        true
    }

    /// Feed one gesture callback. All callbacks are no-ops while busy.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        if self.is_busy() {
            log::debug!("Gesture ignored while spinning: {:?}", event);
            return;
        }

        match event {
            GestureEvent::PanStart { point } => {
                let (_, touch_deg) = cartesian_to_polar(self.center, point);
                self.begin_gesture(GestureKind::Pan, Some(touch_deg));
            }
            GestureEvent::RotateStart => self.begin_gesture(GestureKind::Rotate, None),
            GestureEvent::PanUpdate { point } => {
                if let SpinPhase::InteractiveRotate(track) = &mut self.phase {
                    if track.kind != GestureKind::Pan {
                        return;
                    }
                    let (_, touch_deg) = cartesian_to_polar(self.center, point);
                    if let Some(last) = track.last_touch_deg {
                        track.delta += shortest_delta_deg(touch_deg - last);
                    }
                    track.last_touch_deg = Some(touch_deg);
                    self.rotation = track.baseline + track.delta;
                }
            }
            GestureEvent::RotateUpdate { rotation_deg } => {
                if let SpinPhase::InteractiveRotate(track) = &mut self.phase {
                    if track.kind != GestureKind::Rotate {
                        return;
                    }
                    track.delta = rotation_deg;
                    self.rotation = track.baseline + track.delta;
                }
            }
            GestureEvent::End { success } => {
                if !matches!(self.phase, SpinPhase::InteractiveRotate(_)) {
                    return;
                }
                if success {
                    self.commit();
                } else {
                    log::debug!("Gesture cancelled at {:.1}°", self.rotation);
                    self.phase = SpinPhase::Idle;
                }
            }
        }
    }

    /// Advance the in-flight animation by `dt` seconds
    ///
    /// Resolves the spin on the tick that reaches the end of the animation.
    pub fn tick(&mut self, dt: f64) -> Option<SpinOutcome> {
        let complete = match &mut self.phase {
            SpinPhase::Animating(spin) => {
                self.rotation = spin.animation.advance(dt);
                spin.animation.is_complete()
            }
            _ => return None,
        };

        if complete {
            self.on_animation_finished(true, None)
        } else {
            None
        }
    }

    /// Animation-finished signal, from `tick` or from a platform animator
    ///
    /// `settled_angle` is where the animator actually left the wheel; `None`
    /// means the committed target. The outcome is resolved from that angle,
    /// so it always names the panel the wheel visibly stopped on.
    ///
    /// `finished == false` is an interrupted animation: busy clears, the
    /// rotation stays where it was left and no outcome is reported. Calls
    /// outside `Animating` are ignored, so a spin resolves at most once.
    pub fn on_animation_finished(
        &mut self,
        finished: bool,
        settled_angle: Option<f64>,
    ) -> Option<SpinOutcome> {
        let spin = match std::mem::replace(&mut self.phase, SpinPhase::Idle) {
            SpinPhase::Animating(spin) => spin,
            other => {
                self.phase = other;
                return None;
            }
        };

        if let Some(angle) = settled_angle {
            self.rotation = angle;
        }

        if !finished {
            log::debug!("Spin aborted at {:.1}°", self.rotation);
            self.events.push(SpinEvent::Aborted);
            return None;
        }

        if settled_angle.is_none() {
            self.rotation = spin.animation.to;
        }
        let panel = panel_index_from_angle(self.rotation, self.table.len());
        if panel != spin.target_panel {
            log::warn!(
                "Wheel settled at {:.1}° on panel {}, committed panel was {}",
                self.rotation,
                panel,
                spin.target_panel
            );
        }

        let outcome = SpinOutcome {
            panel,
            rare: self.table.is_rare_panel(panel),
        };
        self.spins_completed += 1;
        self.events.push(SpinEvent::Haptic);
        self.events.push(SpinEvent::Completed(outcome));
        log::info!(
            "Spin #{} landed on panel {} (rare: {})",
            self.spins_completed,
            outcome.panel,
            outcome.rare
        );
        Some(outcome)
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<SpinEvent> {
        std::mem::take(&mut self.events)
    }

    /// Deliver pending events to an observer
    pub fn dispatch<O: SpinObserver + ?Sized>(&mut self, observer: &mut O) {
        for event in self.drain_events() {
            match event {
                SpinEvent::Started { target_panel, .. } => observer.on_spin_start(target_panel),
                SpinEvent::Haptic => observer.on_haptic(),
                SpinEvent::Completed(outcome) => observer.on_spin_complete(outcome),
                SpinEvent::Aborted => observer.on_spin_aborted(),
            }
        }
    }

    fn begin_gesture(&mut self, kind: GestureKind, touch_deg: Option<f64>) {
        self.phase = SpinPhase::InteractiveRotate(GestureTrack {
            kind,
            baseline: self.rotation,
            last_touch_deg: touch_deg,
            delta: 0.0,
        });
    }

    fn commit(&mut self) {
        let count = self.table.len();
        let target_panel = self.random.pick_panel(count) % count;
        let turns = self.random.pick_turns(self.min_turns, self.max_turns);
        let target_angle = spin_target_angle(self.rotation, target_panel, turns, count);

        log::debug!(
            "Spin committed: panel {} with {} turns, {:.1}° → {:.1}°",
            target_panel,
            turns,
            self.rotation,
            target_angle
        );

        self.phase = SpinPhase::Animating(ActiveSpin {
            target_panel,
            animation: SpinAnimation::new(self.rotation, target_angle, self.duration, self.easing),
        });
        self.events.push(SpinEvent::Started {
            target_panel,
            target_angle,
        });
    }
}
