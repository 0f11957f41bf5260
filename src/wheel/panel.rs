//! Panel layout of the wheel
//!
//! The wheel is divided into N equal sectors. Panel `i` covers wheel-local
//! angles `[i * 360/N, (i + 1) * 360/N)` with 0° pointing right and angles
//! growing clockwise. The layout never changes after construction; only the
//! rotation applied to the whole wheel does.

use serde::{Deserialize, Serialize};

/// Start angle (degrees, wheel-local) of a panel
///
/// Panics if `count` is zero.
#[inline]
pub fn angle_for_panel(index: usize, count: usize) -> f64 {
    assert!(count > 0, "wheel needs at least one panel");
    360.0 * (index as f64 / count as f64)
}

/// Angular width of one panel (degrees)
#[inline]
pub fn panel_span(count: usize) -> f64 {
    assert!(count > 0, "wheel needs at least one panel");
    360.0 / count as f64
}

/// A single wheel sector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub index: usize,
    pub is_rare: bool,
    /// Wheel-local start angle (degrees)
    pub start_angle: f64,
    /// Wheel-local end angle (degrees, exclusive)
    pub end_angle: f64,
}

impl Panel {
    /// Mid angle, where labels go
    pub fn center_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Half-open containment test on a wheel-local angle in [0, 360)
    pub fn contains_angle(&self, local_deg: f64) -> bool {
        local_deg >= self.start_angle && local_deg < self.end_angle
    }
}

/// Fixed table of panels plus the rare subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelTable {
    panels: Vec<Panel>,
}

impl PanelTable {
    /// Build a table of `count` panels. Rare indexes outside the wheel are ignored.
    ///
    /// Panics if `count` is zero; configs are validated before reaching here.
    pub fn new(count: usize, rare_indexes: &[usize]) -> Self {
        let span = panel_span(count);
        let panels = (0..count)
            .map(|index| Panel {
                index,
                is_rare: rare_indexes.contains(&index),
                start_angle: angle_for_panel(index, count),
                end_angle: angle_for_panel(index, count) + span,
            })
            .collect();
        Self { panels }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn get(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    /// Whether the panel yields a rare banger. Unknown indexes are never rare.
    pub fn is_rare_panel(&self, index: usize) -> bool {
        self.panels.get(index).is_some_and(|p| p.is_rare)
    }

    /// Indexes of every rare panel, ascending
    pub fn rare_indexes(&self) -> Vec<usize> {
        self.panels
            .iter()
            .filter(|p| p.is_rare)
            .map(|p| p.index)
            .collect()
    }
}

impl Default for PanelTable {
    fn default() -> Self {
        use crate::consts::{PANEL_COUNT, RARE_PANEL_INDEXES};
        Self::new(PANEL_COUNT, &RARE_PANEL_INDEXES)
    }
}
