//! Angle → outcome resolution and sector path geometry
//!
//! Convention: 0° points right, angles grow clockwise (screen y points down),
//! the pointer is fixed at `POINTER_ANGLE_DEG` (-90°, the top). Rotating the
//! wheel by `R` moves wheel-local angle `θ` to screen angle `θ + R`, so the
//! local angle under the pointer is `POINTER_ANGLE_DEG - R`.
//!
//! `panel_index_from_angle` and `spin_target_angle` are exact inverses; the
//! controller relies on that to report the panel the wheel visually stops on.

use std::fmt;

use glam::DVec2;

use super::panel::{angle_for_panel, panel_span};
use crate::consts::POINTER_ANGLE_DEG;
use crate::{normalize_degrees, polar_to_cartesian};

/// Sector-space tolerance for snapping onto a panel boundary
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Wheel-local angle currently under the pointer, in [0, 360)
#[inline]
pub fn pointer_local_angle(rotation_deg: f64) -> f64 {
    normalize_degrees(POINTER_ANGLE_DEG - rotation_deg)
}

/// Panel under the pointer for a wheel rotated by `final_angle_deg`
///
/// Works for any real angle (negative, multi-turn). Panel ownership is
/// half-open: a boundary belongs to the panel that starts there.
///
/// Panics if `panel_count` is zero.
pub fn panel_index_from_angle(final_angle_deg: f64, panel_count: usize) -> usize {
    assert!(panel_count > 0, "wheel needs at least one panel");
    let local = pointer_local_angle(final_angle_deg);
    let mut sector = local * panel_count as f64 / 360.0;
    // A boundary that rounded to just below its integer still belongs to the next panel
    let next = sector.ceil();
    if next - sector < BOUNDARY_EPSILON {
        sector = next;
    }
    sector.floor() as usize % panel_count
}

/// Rotation in [0, 360) that centers panel `index` under the pointer
pub fn rest_angle_for_panel(index: usize, panel_count: usize) -> f64 {
    let span = panel_span(panel_count);
    let center = (index % panel_count) as f64 * span + span / 2.0;
    normalize_degrees(POINTER_ANGLE_DEG - center)
}

/// Commit-time target: spin forward from `current` by `whole_turns` full
/// rotations plus whatever is needed to land panel `index` under the pointer
///
/// The result is always `>= current + whole_turns * 360` and strictly less
/// than one extra turn beyond that.
pub fn spin_target_angle(current: f64, index: usize, whole_turns: u32, panel_count: usize) -> f64 {
    let rest = rest_angle_for_panel(index, panel_count);
    let align = (rest - current).rem_euclid(360.0);
    current + whole_turns as f64 * 360.0 + align
}

/// One step of a vector path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    /// Circular arc (SVG `A` with equal radii and no x-rotation)
    Arc {
        radius: f64,
        large_arc: bool,
        /// true = clockwise in screen space
        sweep: bool,
        to: DVec2,
    },
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
            PathCommand::Arc {
                radius,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "A {} {} 0 {} {} {} {}",
                radius, radius, large_arc as u8, sweep as u8, to.x, to.y
            ),
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// Closed outline of an annular sector
///
/// `Display` renders it as an SVG path string.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPath {
    pub commands: Vec<PathCommand>,
}

impl SegmentPath {
    /// Endpoints of the outer arc (start, end)
    pub fn outer_endpoints(&self) -> Option<(DVec2, DVec2)> {
        match self.commands.as_slice() {
            [PathCommand::MoveTo(start), PathCommand::Arc { to, .. }, ..] => Some((*start, *to)),
            _ => None,
        }
    }
}

impl fmt::Display for SegmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}

/// Build the outline of an annular sector between two angles (degrees)
///
/// Outer arc clockwise from start to end, radial line in, inner arc back
/// counter-clockwise, close.
pub fn build_segment_path(
    center: DVec2,
    inner_radius: f64,
    outer_radius: f64,
    start_angle_deg: f64,
    end_angle_deg: f64,
) -> SegmentPath {
    let start_outer = polar_to_cartesian(center, outer_radius, start_angle_deg);
    let end_outer = polar_to_cartesian(center, outer_radius, end_angle_deg);
    let end_inner = polar_to_cartesian(center, inner_radius, end_angle_deg);
    let start_inner = polar_to_cartesian(center, inner_radius, start_angle_deg);

    let large_arc = end_angle_deg - start_angle_deg > 180.0;

    SegmentPath {
        commands: vec![
            PathCommand::MoveTo(start_outer),
            PathCommand::Arc {
                radius: outer_radius,
                large_arc,
                sweep: true,
                to: end_outer,
            },
            PathCommand::LineTo(end_inner),
            PathCommand::Arc {
                radius: inner_radius,
                large_arc,
                sweep: false,
                to: start_inner,
            },
            PathCommand::Close,
        ],
    }
}

/// Evenly spaced points on a ring, first one at the pointer
pub fn ring_points(center: DVec2, radius: f64, count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let angle = POINTER_ANGLE_DEG + 360.0 * i as f64 / count as f64;
            polar_to_cartesian(center, radius, angle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_panel_at_rest() {
        // Unrotated wheel: local angle under the pointer is 270°, panel 6 of 8
        assert_eq!(panel_index_from_angle(0.0, 8), 6);
        assert_eq!(panel_index_from_angle(360.0, 8), 6);
        assert_eq!(panel_index_from_angle(-360.0, 8), 6);
    }

    #[test]
    fn test_boundary_belongs_to_starting_panel() {
        // Rotation that puts the start of panel k exactly under the pointer,
        // including counts where 360/N is not exact in floating point
        for count in 1usize..=32 {
            for k in 0..count {
                let angle = POINTER_ANGLE_DEG - angle_for_panel(k, count);
                for turns in [0.0, 360.0, -360.0, 720.0] {
                    assert_eq!(
                        panel_index_from_angle(angle + turns, count),
                        k,
                        "count={count} k={k} turns={turns}"
                    );
                }
            }
            // Just before panel 0's start is still the last panel
            assert_eq!(panel_index_from_angle(POINTER_ANGLE_DEG + 1e-3, count), count - 1);
        }
        // Explicit wrap checks on the 8-panel wheel
        assert_eq!(panel_index_from_angle(-90.0, 8), 0);
        assert_eq!(panel_index_from_angle(270.0, 8), 0);
        assert_eq!(panel_index_from_angle(-405.0, 8), 7);
        assert_eq!(panel_index_from_angle(-45.0, 8), 7);
    }

    #[test]
    fn test_single_panel_wheel() {
        assert_eq!(panel_index_from_angle(123.4, 1), 0);
        assert_eq!(panel_index_from_angle(-987.6, 1), 0);
    }

    #[test]
    #[should_panic]
    fn test_zero_panels_panics() {
        panel_index_from_angle(10.0, 0);
    }

    #[test]
    fn test_rare_scenario_target_angle() {
        // 8 panels, target panel 1, 3 turns from rest
        let target = spin_target_angle(0.0, 1, 3, 8);
        assert!(target >= 3.0 * 360.0);
        assert!(target < 4.0 * 360.0);
        assert_eq!(panel_index_from_angle(target, 8), 1);
        // Panel 1 center (67.5° local) sits under the pointer
        assert!((pointer_local_angle(target) - 67.5).abs() < 1e-9);
    }

    #[test]
    fn test_target_moves_forward_from_current() {
        let current = 1234.5;
        let target = spin_target_angle(current, 4, 0, 8);
        assert!(target >= current && target < current + 360.0);
        assert_eq!(panel_index_from_angle(target, 8), 4);
    }

    #[test]
    fn test_segment_path_outer_endpoints() {
        let center = DVec2::new(160.0, 160.0);
        let path = build_segment_path(center, 36.0, 150.0, 0.0, 45.0);
        let (start, end) = path.outer_endpoints().unwrap();
        assert!(close(start, polar_to_cartesian(center, 150.0, 0.0)));
        assert!(close(end, polar_to_cartesian(center, 150.0, 45.0)));

        match path.commands[2] {
            PathCommand::LineTo(p) => assert!(close(p, polar_to_cartesian(center, 36.0, 45.0))),
            other => panic!("expected radial line, got {other:?}"),
        }
        match path.commands[3] {
            PathCommand::Arc { radius, sweep, to, .. } => {
                assert_eq!(radius, 36.0);
                assert!(!sweep);
                assert!(close(to, polar_to_cartesian(center, 36.0, 0.0)));
            }
            other => panic!("expected inner arc, got {other:?}"),
        }
        assert_eq!(path.commands[4], PathCommand::Close);
    }

    #[test]
    fn test_segment_path_large_arc_flag() {
        let c = DVec2::ZERO;
        let small = build_segment_path(c, 10.0, 20.0, 0.0, 180.0);
        let large = build_segment_path(c, 10.0, 20.0, 0.0, 240.0);
        assert!(matches!(small.commands[1], PathCommand::Arc { large_arc: false, .. }));
        assert!(matches!(large.commands[1], PathCommand::Arc { large_arc: true, .. }));
        assert!(matches!(large.commands[3], PathCommand::Arc { large_arc: true, .. }));
    }

    #[test]
    fn test_segment_path_svg_string() {
        let path = build_segment_path(DVec2::ZERO, 1.0, 2.0, 0.0, 90.0);
        let svg = path.to_string();
        assert!(svg.starts_with("M 2 0 A 2 2 0 0 1 "));
        assert!(svg.ends_with(" Z"));
        assert_eq!(svg.matches('A').count(), 2);
    }

    #[test]
    fn test_ring_points_start_at_pointer() {
        let pts = ring_points(DVec2::ZERO, 10.0, 14);
        assert_eq!(pts.len(), 14);
        assert!(close(pts[0], DVec2::new(0.0, -10.0)));
        assert!(pts.iter().all(|p| (p.length() - 10.0).abs() < EPS));
    }

    proptest! {
        #[test]
        fn prop_index_in_range(angle in -1.0e6f64..1.0e6, count in 1usize..=32) {
            prop_assert!(panel_index_from_angle(angle, count) < count);
        }

        #[test]
        fn prop_index_is_periodic(angle in -1.0e4f64..1.0e4, count in 1usize..=32, k in -20i32..=20) {
            let shifted = angle + 360.0 * k as f64;
            prop_assert_eq!(
                panel_index_from_angle(angle, count),
                panel_index_from_angle(shifted, count)
            );
        }

        #[test]
        fn prop_target_lands_on_chosen_panel(
            current in -1.0e4f64..1.0e4,
            count in 1usize..=32,
            pick in 0usize..32,
            turns in 0u32..=8,
        ) {
            let index = pick % count;
            let target = spin_target_angle(current, index, turns, count);
            prop_assert_eq!(panel_index_from_angle(target, count), index);
            prop_assert!(target >= current + turns as f64 * 360.0);
        }
    }
}
