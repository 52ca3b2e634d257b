use log::warn;

use crate::error::ScorecardError;
use crate::model::{
    Course, HOLES_PER_ROUND, HoleMap, MAX_STROKES, PlayerStats, RoundSummary, is_valid_hole,
};
use crate::score::{DEFAULT_PUTTS, HoleEntryModel, RoundAggregator, submit_feedback};
use crate::storage::{
    PersistenceGateway, load_holes, load_player_stats, save_holes, save_player_stats,
};

/// Everything the hole editor and scorecard screens show for one round.
#[derive(Debug, Clone)]
pub struct ScorecardModel {
    pub current_hole: u8,
    pub entry: HoleEntryModel,
    pub round: RoundAggregator,
    /// Last `playerStats` snapshot read from or written to storage.
    pub cached_stats: Option<PlayerStats>,
    pub feedback: Option<String>,
    pub summary: Option<RoundSummary>,
    pub error: Option<ScorecardError>,
    pub loaded: bool,
}

impl ScorecardModel {
    #[must_use]
    pub fn new(course: Course) -> Self {
        Self {
            current_hole: 1,
            entry: HoleEntryModel::default(),
            round: RoundAggregator::new(course),
            cached_stats: None,
            feedback: None,
            summary: None,
            error: None,
            loaded: false,
        }
    }

    #[must_use]
    pub fn current_par(&self) -> i32 {
        self.round.course().par(self.current_hole).unwrap_or(4)
    }

    /// Snapshot the editor into the round for the current hole.
    fn save_current(&mut self) -> Result<(), ScorecardError> {
        let result = self.entry.snapshot_as_hole_result(self.current_par());
        self.round.record_hole(self.current_hole, result)
    }

    fn move_to(&mut self, hole: u8) {
        self.current_hole = hole;
        self.entry = self.round.entry_for_hole(hole);
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    ScreenLoad,
    HolesLoaded(Option<HoleMap>),
    StatsLoaded(Option<PlayerStats>),
    LoadFailed(ScorecardError),
    /// Show a hole in the editor without saving the one being left.
    OpenHole(u8),
    SetStrokes(i32),
    SetPutts(i32),
    SetSandSave(bool),
    SetUpDown(bool),
    SetPenalty(i32),
    SubmitHole,
    NextHole,
    PreviousHole,
    GoToHole(u8),
    SaveCurrent,
    Persisted(PlayerStats),
    Failed(ScorecardError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    LoadHoles,
    LoadStats,
    /// Write both the hole map and the statistics snapshot.
    PersistRound,
}

/// Apply one message. Every in-memory change happens here, synchronously;
/// the returned effects only talk to storage.
pub fn update(model: &mut ScorecardModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::ScreenLoad => vec![Effect::LoadStats, Effect::LoadHoles],
        Msg::HolesLoaded(stored) => {
            if let Some(stored) = stored {
                let dropped = model.round.hydrate(stored);
                if dropped > 0 {
                    warn!("ignored {dropped} malformed stored hole(s)");
                }
            }
            let hole = model.current_hole;
            model.move_to(hole);
            model.summary = model.round.round_summary();
            model.loaded = true;
            vec![]
        }
        Msg::StatsLoaded(stats) => {
            model.cached_stats = stats;
            vec![]
        }
        Msg::LoadFailed(e) => {
            warn!("falling back to an empty round: {e}");
            model.error = Some(e);
            model.loaded = true;
            vec![]
        }
        Msg::OpenHole(hole) => {
            if is_valid_hole(hole) {
                model.feedback = None;
                model.move_to(hole);
            } else {
                model.error = Some(ScorecardError::InvalidHole(hole));
            }
            vec![]
        }
        Msg::SetStrokes(n) => {
            model.entry.set_strokes(n);
            vec![]
        }
        Msg::SetPutts(n) => {
            model.entry.set_putts(n);
            vec![]
        }
        Msg::SetSandSave(flag) => {
            model.entry.set_sand_save(flag);
            vec![]
        }
        Msg::SetUpDown(flag) => {
            model.entry.set_up_down(flag);
            vec![]
        }
        Msg::SetPenalty(n) => {
            model.entry.set_penalty(n);
            vec![]
        }
        Msg::SubmitHole => {
            let par = model.current_par();
            let strokes = model.entry.strokes();
            if let Err(e) = model.save_current() {
                model.error = Some(e);
                return vec![];
            }
            model.feedback = Some(submit_feedback(strokes, par).to_string());
            if model.current_hole < HOLES_PER_ROUND {
                let next = model.current_hole + 1;
                model.move_to(next);
            } else {
                model.summary = model.round.round_summary();
            }
            vec![Effect::PersistRound]
        }
        Msg::NextHole => {
            let target = model.current_hole.checked_add(1);
            navigate(model, target)
        }
        Msg::PreviousHole => {
            let target = model.current_hole.checked_sub(1);
            navigate(model, target)
        }
        Msg::GoToHole(hole) => navigate(model, Some(hole)),
        Msg::SaveCurrent => match model.save_current() {
            Ok(()) => vec![Effect::PersistRound],
            Err(e) => {
                model.error = Some(e);
                vec![]
            }
        },
        Msg::Persisted(stats) => {
            model.cached_stats = Some(stats);
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

/// Messages that load `hole` into the editor, fill it with one score and
/// submit it. Putts default to two, or to the stroke count when that is
/// lower.
///
/// # Errors
///
/// Returns `ScorecardError::InvalidHole` for holes off the course and
/// `ScorecardError::Other` for counts the editor would ignore or putts above
/// strokes.
pub fn record_messages(
    hole: u8,
    strokes: i32,
    putts: Option<i32>,
    sand_save: bool,
    up_down: bool,
    penalty: i32,
) -> Result<Vec<Msg>, ScorecardError> {
    if !is_valid_hole(hole) {
        return Err(ScorecardError::InvalidHole(hole));
    }
    if !(1..=MAX_STROKES).contains(&strokes) {
        return Err(ScorecardError::Other(format!(
            "strokes must be between 1 and {MAX_STROKES}, got {strokes}"
        )));
    }
    let putts = putts.unwrap_or(DEFAULT_PUTTS.min(strokes));
    if !(0..=strokes).contains(&putts) {
        return Err(ScorecardError::Other(format!(
            "putts must be between 0 and the stroke count {strokes}, got {putts}"
        )));
    }
    if !(0..=MAX_STROKES).contains(&penalty) {
        return Err(ScorecardError::Other(format!(
            "penalty must be between 0 and {MAX_STROKES}, got {penalty}"
        )));
    }

    // Putts first: strokes are clamped to whatever putt count the editor holds.
    Ok(vec![
        Msg::OpenHole(hole),
        Msg::SetPutts(putts),
        Msg::SetStrokes(strokes),
        Msg::SetSandSave(sand_save),
        Msg::SetUpDown(up_down),
        Msg::SetPenalty(penalty),
        Msg::SubmitHole,
    ])
}

/// Quietly save the hole being left, then load the target hole into the
/// editor. Targets off the course or equal to the current hole do nothing.
fn navigate(model: &mut ScorecardModel, target: Option<u8>) -> Vec<Effect> {
    let Some(target) = target.filter(|&h| is_valid_hole(h) && h != model.current_hole) else {
        return vec![];
    };
    if let Err(e) = model.save_current() {
        model.error = Some(e);
        return vec![];
    }
    model.feedback = None;
    model.move_to(target);
    vec![Effect::PersistRound]
}

pub struct Deps<'a, S: PersistenceGateway + ?Sized> {
    pub storage: &'a S,
}

impl<S: PersistenceGateway + ?Sized> Clone for Deps<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: PersistenceGateway + ?Sized> Copy for Deps<'_, S> {}

pub async fn run_effect<S>(effect: Effect, model: &ScorecardModel, deps: Deps<'_, S>) -> Msg
where
    S: PersistenceGateway + ?Sized,
{
    match effect {
        Effect::LoadHoles => match load_holes(deps.storage).await {
            Ok(holes) => Msg::HolesLoaded(holes),
            Err(e) => Msg::LoadFailed(ScorecardError::from(e)),
        },
        Effect::LoadStats => match load_player_stats(deps.storage).await {
            Ok(stats) => Msg::StatsLoaded(stats),
            Err(e) => Msg::LoadFailed(ScorecardError::from(e)),
        },
        Effect::PersistRound => {
            let holes = model.round.holes();
            let stats = model.round.player_stats();
            let (holes_result, stats_result) = futures::join!(
                save_holes(deps.storage, holes),
                save_player_stats(deps.storage, &stats)
            );
            match holes_result.and(stats_result) {
                Ok(()) => Msg::Persisted(stats),
                Err(e) => Msg::Failed(ScorecardError::from(e)),
            }
        }
    }
}
