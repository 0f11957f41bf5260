//! Spin wheel engine
//!
//! Geometry and resolution are pure. The controller is the only stateful
//! piece and it never reads the clock or a global RNG:
//! - Time arrives as `tick(dt)` or a platform animation-finished signal
//! - Randomness arrives through `SpinRandom`
//! - Outcomes are derived from the settled angle only

pub mod animation;
pub mod controller;
pub mod face;
pub mod geometry;
pub mod panel;

pub use animation::{Easing, SpinAnimation};
pub use controller::{
    GestureEvent, GestureKind, PcgSpinRandom, SpinController, SpinEvent, SpinObserver,
    SpinOutcome, SpinPhase, SpinRandom,
};
pub use face::{PanelShape, WheelFace};
pub use geometry::{
    PathCommand, SegmentPath, build_segment_path, panel_index_from_angle, rest_angle_for_panel,
    spin_target_angle,
};
pub use panel::{Panel, PanelTable, angle_for_panel};
