use log::warn;

use super::hole_entry::{HoleEntryModel, relative_to_par};
use crate::error::ScorecardError;
use crate::model::{
    CellCategory, Course, HOLES_PER_ROUND, HoleMap, HoleResult, MAX_STROKES, Nine, NineTotals,
    PlayerStats, RoundPhase, RoundStatistics, RoundSummary, ScoreCategory, is_valid_hole,
};

/// Minimum recorded holes before a projection is offered.
pub const MIN_HOLES_FOR_PROJECTION: usize = 5;

/// Cell category for the scorecard grid. Kept separate from
/// `score_description`, which has finer labels.
#[must_use]
pub fn score_color_category(strokes: Option<i32>, par: i32) -> CellCategory {
    match strokes {
        None => CellCategory::Unrecorded,
        Some(strokes) => {
            CellCategory::Scored(ScoreCategory::from_diff(strokes.saturating_sub(par)))
        }
    }
}

/// Exactly holes 1-18 recorded: every hole present and no other keys.
#[must_use]
pub fn is_round_complete(holes: &HoleMap) -> bool {
    holes.len() == usize::from(HOLES_PER_ROUND)
        && (1..=HOLES_PER_ROUND).all(|hole| holes.contains_key(&hole))
}

/// Linear-pace projection: current total plus the per-hole average for every
/// hole still to play. Only holes 1-18 count. `None` under five holes or
/// once all 18 are in (callers use the actual total then).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn project_final_score(holes: &HoleMap) -> Option<i32> {
    let (recorded, total) = holes
        .iter()
        .filter(|(number, _)| is_valid_hole(**number))
        .fold((0usize, 0i32), |(count, total), (_, h)| {
            (count + 1, total.saturating_add(h.strokes))
        });
    let holes_per_round = usize::from(HOLES_PER_ROUND);
    if recorded < MIN_HOLES_FOR_PROJECTION || recorded >= holes_per_round {
        return None;
    }

    let average = f64::from(total) / recorded as f64;
    let remaining = holes_per_round - recorded;
    Some((f64::from(total) + average * remaining as f64).round() as i32)
}

/// Pure statistics pass over a hole map. Entries for holes the course does
/// not have are ignored.
#[must_use]
pub fn compute_statistics(holes: &HoleMap, course: &Course) -> RoundStatistics {
    let mut stats = RoundStatistics {
        total_par: course.total_par(),
        front_nine: NineTotals {
            par: course.nine_par(Nine::Front),
            ..NineTotals::default()
        },
        back_nine: NineTotals {
            par: course.nine_par(Nine::Back),
            ..NineTotals::default()
        },
        ..RoundStatistics::default()
    };

    for (&number, result) in holes {
        let (Some(definition), Some(nine)) = (course.hole(number), Nine::of(number)) else {
            continue;
        };
        let par = definition.par;

        stats.holes_played += 1;
        stats.total_strokes = stats.total_strokes.saturating_add(result.strokes);
        stats.total_putts = stats.total_putts.saturating_add(result.putts);
        stats.total_penalties = stats.total_penalties.saturating_add(result.penalty_strokes);

        stats.fairways_recorded += 1;
        stats.greens_recorded += 1;
        if result.fairway_hit {
            stats.fairways_hit += 1;
        }
        if result.green_in_regulation {
            stats.greens_in_regulation += 1;
        }
        if result.up_down {
            stats.up_and_downs += 1;
        }
        if result.sand_save {
            stats.sand_save_attempts += 1;
        }
        if result.sand_save_achieved(par) {
            stats.sand_saves += 1;
        }

        stats.bump_category(ScoreCategory::from_diff(result.to_par(par)));
        stats.strokes_gained += result.strokes_gained(par, definition.stroke_index);

        let nine_totals = match nine {
            Nine::Front => &mut stats.front_nine,
            Nine::Back => &mut stats.back_nine,
        };
        nine_totals.strokes = nine_totals.strokes.saturating_add(result.strokes);
        nine_totals.putts = nine_totals.putts.saturating_add(result.putts);
        nine_totals.played_par += par;
        nine_totals.holes_played += 1;
    }

    stats.to_par = stats.total_strokes.saturating_sub(stats.total_par);
    stats.complete = is_round_complete(holes);
    stats.projected_final_score = project_final_score(holes);
    stats
}

/// Owns the recorded holes of the round in progress and answers every
/// round-level question from them.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundAggregator {
    course: Course,
    holes: HoleMap,
}

impl RoundAggregator {
    #[must_use]
    pub fn new(course: Course) -> Self {
        Self {
            course,
            holes: HoleMap::new(),
        }
    }

    /// Replace the hole map with a stored one. Entries for holes outside
    /// 1-18, with fewer than one stroke, or with any count above
    /// `MAX_STROKES` are dropped; putts past strokes
    /// are repaired by raising strokes. Returns how many entries were
    /// dropped.
    pub fn hydrate(&mut self, stored: HoleMap) -> usize {
        let mut dropped = 0;
        let mut holes = HoleMap::new();
        for (number, result) in stored {
            if !is_valid_hole(number) {
                warn!("dropping stored score for unknown hole {number}");
                dropped += 1;
                continue;
            }
            match normalize(result) {
                Some(result) => {
                    holes.insert(number, result);
                }
                None => {
                    warn!("dropping malformed stored score for hole {number}: {result:?}");
                    dropped += 1;
                }
            }
        }
        self.holes = holes;
        dropped
    }

    /// Insert or overwrite one hole. In-memory only; persisting the result is
    /// the caller's next step.
    ///
    /// # Errors
    ///
    /// Returns `ScorecardError::InvalidHole` for hole numbers outside 1-18 and
    /// `ScorecardError::Other` for a result with no strokes, negative counts,
    /// or counts above `MAX_STROKES`.
    pub fn record_hole(&mut self, hole: u8, result: HoleResult) -> Result<(), ScorecardError> {
        if !is_valid_hole(hole) {
            return Err(ScorecardError::InvalidHole(hole));
        }
        let result = normalize(result).ok_or_else(|| {
            ScorecardError::Other(format!("hole {hole}: result {result:?} is out of range"))
        })?;
        self.holes.insert(hole, result);
        Ok(())
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub fn holes(&self) -> &HoleMap {
        &self.holes
    }

    #[must_use]
    pub fn hole(&self, hole: u8) -> Option<&HoleResult> {
        self.holes.get(&hole)
    }

    /// Editor values for `hole`: the recorded result, or the fresh-hole
    /// defaults.
    #[must_use]
    pub fn entry_for_hole(&self, hole: u8) -> HoleEntryModel {
        self.hole(hole)
            .map(HoleEntryModel::from_result)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn statistics(&self) -> RoundStatistics {
        compute_statistics(&self.holes, &self.course)
    }

    #[must_use]
    pub fn player_stats(&self) -> PlayerStats {
        PlayerStats::from(&self.statistics())
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        RoundPhase::from_holes_played(self.holes.len())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        is_round_complete(&self.holes)
    }

    #[must_use]
    pub fn projected_final_score(&self) -> Option<i32> {
        project_final_score(&self.holes)
    }

    #[must_use]
    pub fn cell_category(&self, hole: u8) -> CellCategory {
        match self.course.par(hole) {
            Some(par) => score_color_category(self.hole(hole).map(|h| h.strokes), par),
            None => CellCategory::Unrecorded,
        }
    }

    /// Total strokes against par for the whole course, as `"E"`, `"+n"`, `"-n"`.
    #[must_use]
    pub fn score_to_par_display(&self) -> String {
        let total = self
            .holes
            .values()
            .fold(0i32, |total, h| total.saturating_add(h.strokes));
        relative_to_par(total, self.course.total_par())
    }

    #[must_use]
    pub fn round_summary(&self) -> Option<RoundSummary> {
        if !self.is_complete() {
            return None;
        }
        let stats = self.statistics();
        Some(RoundSummary {
            total_strokes: stats.total_strokes,
            to_par: relative_to_par(stats.total_strokes, stats.total_par),
            total_putts: stats.total_putts,
        })
    }
}

fn normalize(mut result: HoleResult) -> Option<HoleResult> {
    let in_range = (1..=MAX_STROKES).contains(&result.strokes)
        && (0..=MAX_STROKES).contains(&result.putts)
        && (0..=MAX_STROKES).contains(&result.penalty_strokes);
    if !in_range {
        return None;
    }
    if result.putts > result.strokes {
        result.strokes = result.putts;
    }
    Some(result)
}
