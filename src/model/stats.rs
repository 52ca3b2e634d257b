use serde::{Deserialize, Serialize};
use std::fmt;

use super::score::ScoreCategory;

/// Where a round is in its lifecycle. Only ever moves forward, because holes
/// are recorded or overwritten but never removed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    Empty,
    InProgress,
    Complete,
}

impl RoundPhase {
    #[must_use]
    pub fn from_holes_played(holes_played: usize) -> Self {
        match holes_played {
            0 => Self::Empty,
            n if n < usize::from(super::HOLES_PER_ROUND) => Self::InProgress,
            _ => Self::Complete,
        }
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Empty => "not started",
            Self::InProgress => "in progress",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NineTotals {
    pub strokes: i32,
    pub putts: i32,
    /// Par of all nine holes, recorded or not.
    pub par: i32,
    /// Par of the recorded holes only.
    pub played_par: i32,
    pub holes_played: u8,
}

impl NineTotals {
    #[must_use]
    pub fn to_par(&self) -> i32 {
        self.strokes - self.played_par
    }
}

/// Whole-round statistics. Always recomputed from the hole map and the
/// course; never edited directly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RoundStatistics {
    pub total_strokes: i32,
    pub total_putts: i32,
    pub total_penalties: i32,
    /// Par of the full 18-hole course.
    pub total_par: i32,
    /// `total_strokes - total_par`.
    pub to_par: i32,
    pub holes_played: u8,
    pub fairways_hit: u32,
    pub fairways_recorded: u32,
    pub greens_in_regulation: u32,
    pub greens_recorded: u32,
    pub up_and_downs: u32,
    pub sand_save_attempts: u32,
    pub sand_saves: u32,
    pub eagles: u32,
    pub birdies: u32,
    pub pars: u32,
    pub bogeys: u32,
    pub double_bogeys_or_worse: u32,
    pub front_nine: NineTotals,
    pub back_nine: NineTotals,
    pub strokes_gained: f64,
    pub complete: bool,
    pub projected_final_score: Option<i32>,
}

impl RoundStatistics {
    #[must_use]
    pub fn category_count(&self, category: ScoreCategory) -> u32 {
        match category {
            ScoreCategory::Eagle => self.eagles,
            ScoreCategory::Birdie => self.birdies,
            ScoreCategory::Par => self.pars,
            ScoreCategory::Bogey => self.bogeys,
            ScoreCategory::DoubleBogeyPlus => self.double_bogeys_or_worse,
        }
    }

    pub(crate) fn bump_category(&mut self, category: ScoreCategory) {
        let slot = match category {
            ScoreCategory::Eagle => &mut self.eagles,
            ScoreCategory::Birdie => &mut self.birdies,
            ScoreCategory::Par => &mut self.pars,
            ScoreCategory::Bogey => &mut self.bogeys,
            ScoreCategory::DoubleBogeyPlus => &mut self.double_bogeys_or_worse,
        };
        *slot += 1;
    }

    #[must_use]
    pub fn fairway_percentage(&self) -> Option<u32> {
        percentage(self.fairways_hit, self.fairways_recorded)
    }

    #[must_use]
    pub fn gir_percentage(&self) -> Option<u32> {
        percentage(self.greens_in_regulation, self.greens_recorded)
    }

    #[must_use]
    pub fn up_and_down_percentage(&self) -> Option<u32> {
        percentage(self.up_and_downs, u32::from(self.holes_played))
    }
}

/// `round(hit / recorded * 100)`, or `None` with nothing recorded.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percentage(hit: u32, recorded: u32) -> Option<u32> {
    if recorded == 0 {
        return None;
    }
    Some((f64::from(hit) / f64::from(recorded) * 100.0).round() as u32)
}

/// The `playerStats` blob: a numbers-only snapshot of the last computed
/// statistics, kept for fast cold-start display.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub total_score: i32,
    pub total_over: i32,
    pub fairways_hit: u32,
    pub greens_in_regulation: u32,
    pub up_and_downs: u32,
    pub sand_saves: u32,
    pub total_putts: i32,
    pub total_holes_played: u32,
}

impl From<&RoundStatistics> for PlayerStats {
    fn from(stats: &RoundStatistics) -> Self {
        Self {
            total_score: stats.total_strokes,
            total_over: stats.to_par,
            fairways_hit: stats.fairways_hit,
            greens_in_regulation: stats.greens_in_regulation,
            up_and_downs: stats.up_and_downs,
            sand_saves: stats.sand_saves,
            total_putts: stats.total_putts,
            total_holes_played: u32::from(stats.holes_played),
        }
    }
}

/// Shown once all 18 holes are in.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub total_strokes: i32,
    pub to_par: String,
    pub total_putts: i32,
}

impl fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Score: {}\nTo Par: {}\nPutts: {}",
            self.total_strokes, self.to_par, self.total_putts
        )
    }
}
