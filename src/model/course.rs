use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::ScorecardError;

pub const HOLES_PER_ROUND: u8 = 18;
pub const HOLES_PER_NINE: u8 = 9;

/// Built-in course. Hole 1 is the par-4, 420-yard, index-1 hole from the
/// scorecard table; see DESIGN.md for why that table was chosen.
const QUTAB_NAME: &str = "Qutab Golf Course";
const QUTAB_HOLES: [(u32, i32, u8); 18] = [
    (420, 4, 1),
    (314, 4, 17),
    (324, 4, 11),
    (295, 4, 15),
    (368, 4, 7),
    (182, 3, 13),
    (365, 4, 3),
    (513, 5, 5),
    (327, 4, 9),
    (116, 4, 18),
    (316, 4, 12),
    (400, 4, 10),
    (150, 4, 14),
    (154, 4, 6),
    (319, 3, 8),
    (493, 4, 4),
    (410, 5, 2),
    (305, 4, 16),
];

#[must_use]
pub fn is_valid_hole(hole: u8) -> bool {
    (1..=HOLES_PER_ROUND).contains(&hole)
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleDefinition {
    pub yards: u32,
    pub par: i32,
    #[serde(rename = "index")]
    pub stroke_index: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nine {
    Front,
    Back,
}

impl Nine {
    #[must_use]
    pub fn of(hole: u8) -> Option<Self> {
        match hole {
            1..=9 => Some(Self::Front),
            10..=18 => Some(Self::Back),
            _ => None,
        }
    }

    #[must_use]
    pub fn holes(self) -> RangeInclusive<u8> {
        match self {
            Self::Front => 1..=HOLES_PER_NINE,
            Self::Back => (HOLES_PER_NINE + 1)..=HOLES_PER_ROUND,
        }
    }

    /// Scorecard column label for the nine's subtotal.
    #[must_use]
    pub fn total_label(self) -> &'static str {
        match self {
            Self::Front => "OUT",
            Self::Back => "IN",
        }
    }
}

impl fmt::Display for Nine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Front => "front nine",
            Self::Back => "back nine",
        };
        write!(f, "{s}")
    }
}

/// An 18-hole course table. Construction always validates, so every
/// `Course` in the program has exactly 18 well-formed holes.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Course {
    name: String,
    holes: Vec<HoleDefinition>,
}

#[derive(Deserialize)]
struct CourseFile {
    name: String,
    holes: Vec<HoleDefinition>,
}

impl Course {
    /// # Errors
    ///
    /// Returns `ScorecardError::Course` unless there are exactly 18 holes, each
    /// with par 3-5 and positive yardage, and the stroke indices are 1-18 with
    /// no repeats.
    pub fn new(name: impl Into<String>, holes: Vec<HoleDefinition>) -> Result<Self, ScorecardError> {
        if holes.len() != usize::from(HOLES_PER_ROUND) {
            return Err(ScorecardError::Course(format!(
                "expected {HOLES_PER_ROUND} holes, found {}",
                holes.len()
            )));
        }

        let mut seen_indices = HashSet::new();
        for (idx, hole) in holes.iter().enumerate() {
            let number = idx + 1;
            if !(3..=5).contains(&hole.par) {
                return Err(ScorecardError::Course(format!(
                    "hole {number}: par {} is not 3, 4 or 5",
                    hole.par
                )));
            }
            if hole.yards == 0 {
                return Err(ScorecardError::Course(format!("hole {number}: yardage must be positive")));
            }
            if !is_valid_hole(hole.stroke_index) {
                return Err(ScorecardError::Course(format!(
                    "hole {number}: stroke index {} is outside 1-18",
                    hole.stroke_index
                )));
            }
            if !seen_indices.insert(hole.stroke_index) {
                return Err(ScorecardError::Course(format!(
                    "hole {number}: stroke index {} is used twice",
                    hole.stroke_index
                )));
            }
        }

        Ok(Self {
            name: name.into(),
            holes,
        })
    }

    #[must_use]
    pub fn qutab() -> Self {
        Self {
            name: QUTAB_NAME.to_string(),
            holes: QUTAB_HOLES
                .iter()
                .map(|&(yards, par, stroke_index)| HoleDefinition {
                    yards,
                    par,
                    stroke_index,
                })
                .collect(),
        }
    }

    /// Parse and validate a course table written as TOML:
    ///
    /// ```toml
    /// name = "Home Course"
    /// [[holes]]
    /// yards = 420
    /// par = 4
    /// index = 1
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ScorecardError::Parse` for malformed TOML and
    /// `ScorecardError::Course` when the table fails validation.
    pub fn from_toml_str(contents: &str) -> Result<Self, ScorecardError> {
        let file: CourseFile = toml::from_str(contents)?;
        Self::new(file.name, file.holes)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hole(&self, hole: u8) -> Option<&HoleDefinition> {
        if is_valid_hole(hole) {
            self.holes.get(usize::from(hole - 1))
        } else {
            None
        }
    }

    #[must_use]
    pub fn par(&self, hole: u8) -> Option<i32> {
        self.hole(hole).map(|h| h.par)
    }

    /// Holes with their 1-based numbers.
    pub fn holes(&self) -> impl Iterator<Item = (u8, &HoleDefinition)> {
        (1..=HOLES_PER_ROUND).zip(self.holes.iter())
    }

    pub fn nine(&self, nine: Nine) -> impl Iterator<Item = (u8, &HoleDefinition)> {
        let range = nine.holes();
        self.holes().filter(move |(number, _)| range.contains(number))
    }

    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    #[must_use]
    pub fn nine_par(&self, nine: Nine) -> i32 {
        self.nine(nine).map(|(_, h)| h.par).sum()
    }

    #[must_use]
    pub fn total_yards(&self) -> u32 {
        self.holes.iter().map(|h| h.yards).sum()
    }

    #[must_use]
    pub fn nine_yards(&self, nine: Nine) -> u32 {
        self.nine(nine).map(|(_, h)| h.yards).sum()
    }
}

impl Default for Course {
    fn default() -> Self {
        Self::qutab()
    }
}
