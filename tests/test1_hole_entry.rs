use rusty_scorecard::model::{MAX_STROKES, ScoreCategory, ScoreDescription};
use rusty_scorecard::score::{
    DEFAULT_PUTTS, DEFAULT_STROKES, HoleEntryModel, is_green_in_regulation, is_sand_save,
    relative_to_par, score_description, submit_feedback,
};

#[test]
fn test1_relative_to_par_formats() {
    assert_eq!(relative_to_par(4, 4), "E");
    assert_eq!(relative_to_par(6, 4), "+2");
    assert_eq!(relative_to_par(2, 4), "-2");
    assert_eq!(relative_to_par(80, 72), "+8");
    assert_eq!(relative_to_par(70, 72), "-2");

    for par in 3..=5 {
        for strokes in 1..=12 {
            let shown = relative_to_par(strokes, par);
            let diff = strokes - par;
            if diff == 0 {
                assert_eq!(shown, "E");
            } else {
                assert_eq!(shown.parse::<i32>().ok(), Some(diff), "strokes {strokes} par {par}");
                assert_eq!(shown.starts_with('+'), diff > 0);
            }
        }
    }
}

#[test]
fn test1_fresh_hole_defaults() {
    let entry = HoleEntryModel::new();
    assert_eq!(entry.strokes(), DEFAULT_STROKES);
    assert_eq!(entry.putts(), DEFAULT_PUTTS);
    assert!(!entry.sand_save());
    assert!(!entry.up_down());
    assert_eq!(entry.penalty(), 0);
    assert_eq!(entry.relative_to_par(4), "E");
}

#[test]
fn test1_putts_never_exceed_strokes() {
    // Every two-step edit sequence over a small value range.
    let values = -1..=6;
    for first in values.clone() {
        for second in values.clone() {
            for putts_first in [true, false] {
                let mut entry = HoleEntryModel::new();
                if putts_first {
                    entry.set_putts(first);
                    entry.set_strokes(second);
                } else {
                    entry.set_strokes(first);
                    entry.set_putts(second);
                }
                assert!(entry.strokes() >= 1, "{entry:?}");
                assert!(entry.putts() >= 0, "{entry:?}");
                assert!(entry.putts() <= entry.strokes(), "{entry:?}");
            }
        }
    }
}

#[test]
fn test1_putts_drag_strokes_up() {
    let mut entry = HoleEntryModel::new();
    entry.set_strokes(3);
    entry.set_putts(5);
    assert_eq!(entry.putts(), 5);
    assert_eq!(entry.strokes(), 5);

    entry.increment_putts();
    assert_eq!((entry.strokes(), entry.putts()), (6, 6));
}

#[test]
fn test1_strokes_below_putts_are_clamped() {
    let mut entry = HoleEntryModel::new();
    entry.set_putts(3);
    entry.set_strokes(2);
    assert_eq!(entry.strokes(), 3);
    assert_eq!(entry.putts(), 3);
}

#[test]
fn test1_out_of_range_input_is_ignored() {
    let mut entry = HoleEntryModel::new();
    entry.set_strokes(6);
    entry.set_putts(1);
    entry.set_penalty(2);

    entry.set_strokes(0);
    entry.set_strokes(-3);
    entry.set_putts(-1);
    entry.set_penalty(-1);

    assert_eq!(entry.strokes(), 6);
    assert_eq!(entry.putts(), 1);
    assert_eq!(entry.penalty(), 2);
}

#[test]
fn test1_green_in_regulation() {
    assert!(is_green_in_regulation(4, 2, 4));
    assert!(is_green_in_regulation(5, 3, 4));
    assert!(!is_green_in_regulation(6, 2, 4));
    assert!(is_green_in_regulation(3, 2, 3));
    assert!(!is_green_in_regulation(4, 2, 3));
    assert!(is_green_in_regulation(5, 2, 5));
    assert!(!is_green_in_regulation(6, 2, 5));
}

#[test]
fn test1_snapshot_derives_gir_and_mirrors_sand_flag() {
    let mut entry = HoleEntryModel::new();
    entry.set_strokes(5);
    entry.set_putts(3);
    entry.set_sand_save(true);
    entry.set_up_down(true);
    entry.set_penalty(1);

    let result = entry.snapshot_as_hole_result(4);
    assert_eq!(result.strokes, 5);
    assert_eq!(result.putts, 3);
    assert!(result.sand_save);
    assert!(result.up_down);
    assert_eq!(result.penalty_strokes, 1);
    assert!(result.green_in_regulation);
    assert_eq!(result.fairway_hit, result.sand_save);

    entry.set_sand_save(false);
    entry.set_putts(1);
    let result = entry.snapshot_as_hole_result(4);
    assert!(!result.fairway_hit);
    assert!(!result.green_in_regulation);
}

#[test]
fn test1_descriptions_and_categories() {
    assert_eq!(score_description(2, 4), ScoreDescription::Eagle);
    assert_eq!(score_description(2, 4).category(), ScoreCategory::Eagle);
    assert_eq!(score_description(2, 5), ScoreDescription::AlbatrossOrBetter);
    assert_eq!(score_description(2, 5).label(), "Albatross+");
    assert_eq!(score_description(2, 5).category(), ScoreCategory::Eagle);
    assert_eq!(score_description(3, 4).label(), "Birdie");
    assert_eq!(score_description(4, 4).label(), "Par");
    assert_eq!(score_description(5, 4).label(), "Bogey");
    assert_eq!(score_description(6, 4).to_string(), "Double Bogey");
    assert_eq!(score_description(6, 4).category(), ScoreCategory::DoubleBogeyPlus);
    assert_eq!(score_description(9, 4).to_string(), "Triple+ Bogey");

    assert_eq!(ScoreCategory::from_diff(-3), ScoreCategory::Eagle);
    assert_eq!(ScoreCategory::from(-1), ScoreCategory::Birdie);
    assert_eq!(ScoreCategory::from(5), ScoreCategory::DoubleBogeyPlus);
}

#[test]
fn test1_sand_save_needs_par_or_better() {
    assert!(is_sand_save(true, 4, 4));
    assert!(is_sand_save(true, 2, 3));
    assert!(!is_sand_save(true, 5, 4));
    assert!(!is_sand_save(false, 3, 4));

    let mut entry = HoleEntryModel::new();
    entry.set_sand_save(true);
    assert!(entry.sand_save_achieved(4));
    entry.increment_strokes();
    assert!(!entry.sand_save_achieved(4));
}

#[test]
fn test1_submit_feedback_by_score() {
    assert_eq!(submit_feedback(2, 4), "Eagle or better! Incredible shot!");
    assert_eq!(submit_feedback(1, 4), "Eagle or better! Incredible shot!");
    assert_eq!(submit_feedback(3, 4), "Birdie! Great play!");
    assert_eq!(submit_feedback(4, 4), "Par. Solid play!");
    assert_eq!(submit_feedback(5, 4), "Bogey. Not bad!");
    assert_eq!(submit_feedback(6, 4), "Double Bogey. Keep it up!");
    assert_eq!(submit_feedback(8, 4), "Score saved successfully");
}

#[test]
fn test1_increment_and_decrement() {
    let mut entry = HoleEntryModel::new();
    entry.increment_strokes();
    entry.increment_penalty();
    assert_eq!(entry.strokes(), 5);
    assert_eq!(entry.penalty(), 1);

    // Strokes cannot drop below the two default putts.
    for _ in 0..5 {
        entry.decrement_strokes();
    }
    assert_eq!(entry.strokes(), 2);
    entry.decrement_putts();
    entry.decrement_strokes();
    assert_eq!((entry.strokes(), entry.putts()), (1, 1));
}

#[test]
fn test1_counts_stop_at_the_cap() {
    let mut entry = HoleEntryModel::new();
    entry.set_strokes(i32::MAX);
    entry.set_putts(i32::MAX);
    entry.set_penalty(i32::MAX);
    assert_eq!((entry.strokes(), entry.putts(), entry.penalty()), (4, 2, 0));

    entry.set_strokes(MAX_STROKES);
    entry.set_penalty(MAX_STROKES);
    entry.increment_strokes();
    entry.increment_penalty();
    assert_eq!(entry.strokes(), MAX_STROKES);
    assert_eq!(entry.penalty(), MAX_STROKES);

    entry.set_putts(MAX_STROKES);
    entry.increment_putts();
    assert_eq!(entry.putts(), MAX_STROKES);
    assert!(entry.putts() <= entry.strokes());
}
