use log::debug;

use crate::model::{HoleResult, MAX_STROKES, ScoreDescription};

pub const DEFAULT_STROKES: i32 = 4;
pub const DEFAULT_PUTTS: i32 = 2;

/// `"E"` for even, `"+n"` over par, `"-n"` under par.
#[must_use]
pub fn relative_to_par(strokes: i32, par: i32) -> String {
    let diff = strokes.saturating_sub(par);
    match diff {
        0 => "E".to_string(),
        d if d > 0 => format!("+{d}"),
        d => d.to_string(),
    }
}

#[must_use]
pub fn score_description(strokes: i32, par: i32) -> ScoreDescription {
    ScoreDescription::from_diff(strokes.saturating_sub(par))
}

/// On the green with at least two putts' worth of par left: one stroke on a
/// par 3, two on a par 4, three on a par 5.
#[must_use]
pub fn is_green_in_regulation(strokes: i32, putts: i32, par: i32) -> bool {
    strokes.saturating_sub(putts) <= par.saturating_sub(2)
}

#[must_use]
pub fn is_sand_save(sand_save: bool, strokes: i32, par: i32) -> bool {
    sand_save && strokes <= par
}

/// Confirmation line shown after a hole is submitted.
#[must_use]
pub fn submit_feedback(strokes: i32, par: i32) -> &'static str {
    match strokes.saturating_sub(par) {
        i32::MIN..=-2 => "Eagle or better! Incredible shot!",
        -1 => "Birdie! Great play!",
        0 => "Par. Solid play!",
        1 => "Bogey. Not bad!",
        2 => "Double Bogey. Keep it up!",
        _ => "Score saved successfully",
    }
}

/// Working values for the hole being edited.
///
/// Setters never fail: out-of-range input is ignored and the previous value
/// stays. `putts <= strokes` holds after every call, and it is always strokes
/// that move to restore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleEntryModel {
    strokes: i32,
    putts: i32,
    sand_save: bool,
    up_down: bool,
    penalty: i32,
}

impl Default for HoleEntryModel {
    fn default() -> Self {
        Self {
            strokes: DEFAULT_STROKES,
            putts: DEFAULT_PUTTS,
            sand_save: false,
            up_down: false,
            penalty: 0,
        }
    }
}

impl HoleEntryModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a recorded hole back into the editor.
    #[must_use]
    pub fn from_result(result: &HoleResult) -> Self {
        let mut entry = Self {
            strokes: result.strokes.clamp(1, MAX_STROKES),
            putts: 0,
            sand_save: result.sand_save,
            up_down: result.up_down,
            penalty: result.penalty_strokes.clamp(0, MAX_STROKES),
        };
        entry.set_putts(result.putts);
        entry
    }

    #[must_use]
    pub fn strokes(&self) -> i32 {
        self.strokes
    }

    #[must_use]
    pub fn putts(&self) -> i32 {
        self.putts
    }

    #[must_use]
    pub fn sand_save(&self) -> bool {
        self.sand_save
    }

    #[must_use]
    pub fn up_down(&self) -> bool {
        self.up_down
    }

    #[must_use]
    pub fn penalty(&self) -> i32 {
        self.penalty
    }

    /// Values outside 1..=`MAX_STROKES` are ignored. A value below the
    /// current putt count is raised to it; putts are never rewritten here.
    pub fn set_strokes(&mut self, strokes: i32) {
        if !(1..=MAX_STROKES).contains(&strokes) {
            debug!("ignoring stroke count {strokes}");
            return;
        }
        self.strokes = strokes.max(self.putts);
    }

    /// Values outside 0..=`MAX_STROKES` are ignored. Putts past the stroke
    /// count drag strokes up with them.
    pub fn set_putts(&mut self, putts: i32) {
        if !(0..=MAX_STROKES).contains(&putts) {
            debug!("ignoring putt count {putts}");
            return;
        }
        self.putts = putts;
        if putts > self.strokes {
            self.strokes = putts;
        }
    }

    pub fn set_sand_save(&mut self, sand_save: bool) {
        self.sand_save = sand_save;
    }

    pub fn set_up_down(&mut self, up_down: bool) {
        self.up_down = up_down;
    }

    pub fn set_penalty(&mut self, penalty: i32) {
        if !(0..=MAX_STROKES).contains(&penalty) {
            debug!("ignoring penalty count {penalty}");
            return;
        }
        self.penalty = penalty;
    }

    pub fn increment_strokes(&mut self) {
        self.set_strokes(self.strokes.saturating_add(1));
    }

    pub fn decrement_strokes(&mut self) {
        self.set_strokes(self.strokes.saturating_sub(1));
    }

    pub fn increment_putts(&mut self) {
        self.set_putts(self.putts.saturating_add(1));
    }

    pub fn decrement_putts(&mut self) {
        self.set_putts(self.putts.saturating_sub(1));
    }

    pub fn increment_penalty(&mut self) {
        self.set_penalty(self.penalty.saturating_add(1));
    }

    pub fn decrement_penalty(&mut self) {
        self.set_penalty(self.penalty.saturating_sub(1));
    }

    #[must_use]
    pub fn relative_to_par(&self, par: i32) -> String {
        relative_to_par(self.strokes, par)
    }

    #[must_use]
    pub fn description(&self, par: i32) -> ScoreDescription {
        score_description(self.strokes, par)
    }

    #[must_use]
    pub fn sand_save_achieved(&self, par: i32) -> bool {
        is_sand_save(self.sand_save, self.strokes, par)
    }

    /// Freeze the editor into a `HoleResult`. The fairway flag mirrors the
    /// sand checkbox because fairways are not tracked separately.
    #[must_use]
    pub fn snapshot_as_hole_result(&self, par: i32) -> HoleResult {
        HoleResult {
            strokes: self.strokes,
            putts: self.putts,
            sand_save: self.sand_save,
            up_down: self.up_down,
            penalty_strokes: self.penalty,
            fairway_hit: self.sand_save,
            green_in_regulation: is_green_in_regulation(self.strokes, self.putts, par),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_stops_at_floor() {
        let mut entry = HoleEntryModel::new();
        entry.set_putts(0);
        for _ in 0..10 {
            entry.decrement_strokes();
            entry.decrement_putts();
            entry.decrement_penalty();
        }
        assert_eq!(entry.strokes(), 1);
        assert_eq!(entry.putts(), 0);
        assert_eq!(entry.penalty(), 0);
    }

    #[test]
    fn from_result_repairs_putts_over_strokes() {
        let stored = HoleResult {
            strokes: 2,
            putts: 3,
            sand_save: false,
            up_down: true,
            penalty_strokes: 0,
            fairway_hit: false,
            green_in_regulation: false,
        };
        let entry = HoleEntryModel::from_result(&stored);
        assert_eq!(entry.putts(), 3);
        assert_eq!(entry.strokes(), 3);
        assert!(entry.up_down());
    }
}
