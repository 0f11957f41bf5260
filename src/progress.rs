//! Streaks, favorites and daily-view tracking
//!
//! Days are plain day numbers (days since the Unix epoch) supplied by the
//! caller, so everything here is deterministic and timezone-free. Converting
//! wall-clock time to a local day is the host's job.

use serde::{Deserialize, Serialize};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Day number for a Unix timestamp in milliseconds (UTC)
pub fn day_number_from_unix_ms(timestamp_ms: f64) -> i64 {
    (timestamp_ms / MS_PER_DAY).floor() as i64
}

/// Persistent per-user progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Progress {
    /// Consecutive days with a viewed banger
    pub current_streak: u32,
    pub last_viewed_day: Option<i64>,
    pub total_bangers_viewed: u64,
    /// Banger ids, in the order they were favorited
    pub favorite_bangers: Vec<String>,
    pub daily_banger_viewed: bool,
    pub last_daily_banger_day: Option<i64>,
    /// Day the streak modal was last shown (show at most once a day)
    pub last_streak_shown_day: Option<i64>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count today toward the streak
    ///
    /// Same-day calls are no-ops, yesterday extends the streak, anything
    /// older restarts it at 1. Returns the resulting streak.
    pub fn increment_streak(&mut self, today: i64) -> u32 {
        match self.last_viewed_day {
            Some(day) if day == today => return self.current_streak,
            Some(day) if day == today - 1 => self.current_streak += 1,
            _ => self.current_streak = 1,
        }
        self.last_viewed_day = Some(today);
        log::debug!("Streak now {} (day {})", self.current_streak, today);
        self.current_streak
    }

    pub fn reset_streak(&mut self) {
        self.current_streak = 0;
        self.last_viewed_day = None;
    }

    /// A streak exists but a full day was skipped
    pub fn streak_lost(&self, today: i64) -> bool {
        self.current_streak > 0 && self.last_viewed_day.is_some_and(|day| day < today - 1)
    }

    /// Add a favorite. Returns false if it was already there.
    pub fn add_favorite(&mut self, banger_id: &str) -> bool {
        if self.is_favorite(banger_id) {
            return false;
        }
        self.favorite_bangers.push(banger_id.to_string());
        true
    }

    /// Remove a favorite. Returns false if it wasn't there.
    pub fn remove_favorite(&mut self, banger_id: &str) -> bool {
        let before = self.favorite_bangers.len();
        self.favorite_bangers.retain(|id| id != banger_id);
        self.favorite_bangers.len() != before
    }

    pub fn is_favorite(&self, banger_id: &str) -> bool {
        self.favorite_bangers.iter().any(|id| id == banger_id)
    }

    pub fn mark_daily_banger_viewed(&mut self, today: i64) {
        self.daily_banger_viewed = true;
        self.last_daily_banger_day = Some(today);
    }

    /// Whether today's daily banger was already opened
    pub fn daily_banger_viewed_on(&self, today: i64) -> bool {
        self.daily_banger_viewed && self.last_daily_banger_day == Some(today)
    }

    pub fn increment_total_viewed(&mut self) -> u64 {
        self.total_bangers_viewed += 1;
        self.total_bangers_viewed
    }

    pub fn mark_streak_shown(&mut self, today: i64) {
        self.last_streak_shown_day = Some(today);
    }

    pub fn streak_shown_on(&self, today: i64) -> bool {
        self.last_streak_shown_day == Some(today)
    }
}

/// One cell of the streak week strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDay {
    pub label: char,
    pub filled: bool,
}

const WEEK_LABELS: [char; 7] = ['S', 'M', 'T', 'W', 'T', 'F', 'S'];

/// Sunday-first week strip with the last `min(streak, 7)` days filled,
/// ending at `today_idx` (0 = Sunday) and wrapping backwards
pub fn build_week_row(streak: u32, today_idx: usize) -> [WeekDay; 7] {
    let mut row = WEEK_LABELS.map(|label| WeekDay {
        label,
        filled: false,
    });
    let today_idx = today_idx % 7;
    let fill = streak.min(7) as usize;
    for i in 0..fill {
        row[(today_idx + 7 - i) % 7].filled = true;
    }
    row
}

/// `HH:MM:SS` for a remaining duration, clamped at zero
pub fn format_countdown(ms_remaining: f64) -> String {
    let total = (ms_remaining.max(0.0) / 1000.0).floor() as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Label for the next-daily countdown
pub fn next_unlock_label(ms_remaining: f64) -> String {
    if ms_remaining <= 0.0 {
        "New banger unlocked 🎉".to_string()
    } else {
        format!("Next daily in {}", format_countdown(ms_remaining))
    }
}
