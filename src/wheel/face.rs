//! Renderable description of the wheel
//!
//! Everything a view needs to draw the wheel at rest: one annular segment
//! per panel, label anchors, rim bulbs and the pointer tip. The view applies
//! `SpinController::rotation` as a transform around `center`; nothing here
//! depends on rotation.

use glam::DVec2;

use super::geometry::{SegmentPath, build_segment_path, ring_points};
use super::panel::Panel;
use crate::config::WheelConfig;
use crate::consts::{BULB_RING_INSET, POINTER_ANGLE_DEG};
use crate::polar_to_cartesian;

#[derive(Debug, Clone)]
pub struct PanelShape {
    pub panel: Panel,
    pub path: SegmentPath,
    /// Mid-angle point halfway across the band
    pub label_anchor: DVec2,
}

#[derive(Debug, Clone)]
pub struct WheelFace {
    pub center: DVec2,
    pub panels: Vec<PanelShape>,
    pub bulbs: Vec<DVec2>,
    /// Tip of the fixed pointer, above the rim
    pub pointer_tip: DVec2,
}

impl WheelFace {
    pub fn new(config: &WheelConfig) -> Self {
        let center = config.center();
        let label_radius = (config.inner_radius + config.outer_radius) / 2.0;

        let panels = config
            .panel_table()
            .panels()
            .iter()
            .map(|panel| PanelShape {
                panel: *panel,
                path: build_segment_path(
                    center,
                    config.inner_radius,
                    config.outer_radius,
                    panel.start_angle,
                    panel.end_angle,
                ),
                label_anchor: polar_to_cartesian(center, label_radius, panel.center_angle()),
            })
            .collect();

        let bulbs = ring_points(
            center,
            config.outer_radius + BULB_RING_INSET,
            config.bulb_count,
        );

        let pointer_tip = polar_to_cartesian(
            center,
            config.outer_radius + config.pointer_offset,
            POINTER_ANGLE_DEG,
        );

        Self {
            center,
            panels,
            bulbs,
            pointer_tip,
        }
    }

    /// SVG path strings, one per panel, in panel order
    pub fn svg_paths(&self) -> Vec<String> {
        self.panels.iter().map(|p| p.path.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_face() {
        let config = WheelConfig::default();
        let face = WheelFace::new(&config);
        assert_eq!(face.panels.len(), 8);
        assert_eq!(face.bulbs.len(), 14);
        assert!(face.panels[1].panel.is_rare);
        assert_eq!(face.svg_paths().len(), 8);

        // Pointer tip straight above the center
        assert!((face.pointer_tip.x - 160.0).abs() < 1e-9);
        assert!(face.pointer_tip.y.abs() < 1e-9);
    }

    #[test]
    fn test_segments_share_edges() {
        let face = WheelFace::new(&WheelConfig::default());
        for pair in face.panels.windows(2) {
            let (_, end_a) = pair[0].path.outer_endpoints().unwrap();
            let (start_b, _) = pair[1].path.outer_endpoints().unwrap();
            assert!((end_a - start_b).length() < 1e-9);
        }
    }

    #[test]
    fn test_label_anchor_inside_band() {
        let config = WheelConfig::default();
        let face = WheelFace::new(&config);
        for shape in &face.panels {
            let r = (shape.label_anchor - face.center).length();
            assert!(r > config.inner_radius && r < config.outer_radius);
        }
    }
}
