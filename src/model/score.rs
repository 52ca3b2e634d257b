use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Recorded holes for a round, keyed by hole number. Serializes to the
/// `golfScores` blob (`{"1": {...}, "2": {...}}`).
pub type HoleMap = BTreeMap<u8, HoleResult>;

/// Upper bound for strokes, putts and penalties on a single hole.
pub const MAX_STROKES: i32 = 99;

/// Outcome of one played hole, in the shape the `golfScores` blob stores it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HoleResult {
    #[serde(rename = "score")]
    pub strokes: i32,
    #[serde(default)]
    pub putts: i32,
    #[serde(rename = "sandie", default)]
    pub sand_save: bool,
    #[serde(default)]
    pub up_down: bool,
    #[serde(rename = "penalty", default)]
    pub penalty_strokes: i32,
    #[serde(default)]
    pub fairway_hit: bool,
    #[serde(default)]
    pub green_in_regulation: bool,
}

impl HoleResult {
    #[must_use]
    pub fn to_par(&self, par: i32) -> i32 {
        self.strokes.saturating_sub(par)
    }

    /// Sand flag set and the hole finished at par or better.
    #[must_use]
    pub fn sand_save_achieved(&self, par: i32) -> bool {
        crate::score::is_sand_save(self.sand_save, self.strokes, par)
    }

    /// Difficulty-adjusted expected score minus strokes. Index 1 (hardest)
    /// expects half a stroke over par, index 18 expects par plus 1/36.
    #[must_use]
    pub fn strokes_gained(&self, par: i32, stroke_index: u8) -> f64 {
        let difficulty = f64::from(19 - i32::from(stroke_index)) / 18.0;
        let expected = f64::from(par) + difficulty * 0.5;
        expected - f64::from(self.strokes)
    }
}

/// Five-tier classification shared by the statistics breakdown and the
/// scorecard cell colors.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreCategory {
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogeyPlus,
}

impl ScoreCategory {
    pub const ALL: [Self; 5] = [
        Self::Eagle,
        Self::Birdie,
        Self::Par,
        Self::Bogey,
        Self::DoubleBogeyPlus,
    ];

    #[must_use]
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            i32::MIN..=-2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            _ => Self::DoubleBogeyPlus,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Eagle => "eagle",
            Self::Birdie => "birdie",
            Self::Par => "par",
            Self::Bogey => "bogey",
            Self::DoubleBogeyPlus => "double-bogey",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Eagle => "#F5CE42",
            Self::Birdie => "#FF5555",
            Self::Par => "#3F88C5",
            Self::Bogey => "#8E7CC3",
            Self::DoubleBogeyPlus => "#000000",
        }
    }

    /// Plural label used by the statistics breakdown.
    #[must_use]
    pub fn breakdown_label(self) -> &'static str {
        match self {
            Self::Eagle => "Eagles",
            Self::Birdie => "Birdies",
            Self::Par => "Pars",
            Self::Bogey => "Bogeys",
            Self::DoubleBogeyPlus => "Doubles+",
        }
    }
}

impl From<i32> for ScoreCategory {
    fn from(value: i32) -> Self {
        Self::from_diff(value)
    }
}

/// Display name for a single hole's score. Finer than `ScoreCategory`
/// at both ends; `category()` folds it back to the five tiers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreDescription {
    AlbatrossOrBetter,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogeyOrWorse,
}

impl ScoreDescription {
    #[must_use]
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            i32::MIN..=-3 => Self::AlbatrossOrBetter,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            _ => Self::TripleBogeyOrWorse,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AlbatrossOrBetter => "Albatross+",
            Self::Eagle => "Eagle",
            Self::Birdie => "Birdie",
            Self::Par => "Par",
            Self::Bogey => "Bogey",
            Self::DoubleBogey => "Double Bogey",
            Self::TripleBogeyOrWorse => "Triple+ Bogey",
        }
    }

    #[must_use]
    pub fn category(self) -> ScoreCategory {
        match self {
            Self::AlbatrossOrBetter | Self::Eagle => ScoreCategory::Eagle,
            Self::Birdie => ScoreCategory::Birdie,
            Self::Par => ScoreCategory::Par,
            Self::Bogey => ScoreCategory::Bogey,
            Self::DoubleBogey | Self::TripleBogeyOrWorse => ScoreCategory::DoubleBogeyPlus,
        }
    }
}

impl fmt::Display for ScoreDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category of one scorecard cell, which may not have a score yet.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellCategory {
    Unrecorded,
    Scored(ScoreCategory),
}

impl CellCategory {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Unrecorded => "unrecorded",
            Self::Scored(category) => category.css_class(),
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Unrecorded => "#888888",
            Self::Scored(category) => category.color(),
        }
    }
}
