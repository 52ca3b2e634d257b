use maud::{Markup, html};

use crate::model::{CellCategory, Nine, NineTotals, RoundStatistics, ScoreCategory, percentage};
use crate::score::{RoundAggregator, relative_to_par};

#[must_use]
pub fn score_with_category(score: i32, category: CellCategory) -> Markup {
    let combined_classes = format!("score-shape-{} {}", category.css_class(), category.css_class());
    html! {
        span class=(combined_classes) style={ "color: " (category.color()) } { (score) }
    }
}

fn ratio_cell(hit: u32, recorded: u32) -> String {
    match percentage(hit, recorded) {
        Some(pct) => format!("{hit}/{recorded} ({pct}%)"),
        None => "-".to_string(),
    }
}

fn render_nine(round: &RoundAggregator, nine: Nine, totals: &NineTotals) -> Markup {
    let course = round.course();
    html! {
        thead {
            tr {
                th { "Hole" }
                @for (number, _) in course.nine(nine) {
                    th { (number) }
                }
                th class="total" { (nine.total_label()) }
            }
        }
        tbody {
            tr class="par-row" {
                td { "Par" }
                @for (_, hole) in course.nine(nine) {
                    td { (hole.par) }
                }
                td class="total" { (totals.par) }
            }
            tr class="yards-row" {
                td { "Yards" }
                @for (_, hole) in course.nine(nine) {
                    td { (hole.yards) }
                }
                td class="total" { (course.nine_yards(nine)) }
            }
            tr class="index-row" {
                td { "Index" }
                @for (_, hole) in course.nine(nine) {
                    td { (hole.stroke_index) }
                }
                td class="total" {}
            }
            tr class="score-row" {
                td { "Score" }
                @for (number, _) in course.nine(nine) {
                    @let category = round.cell_category(number);
                    td class=(category.css_class()) {
                        @if let Some(result) = round.hole(number) {
                            (score_with_category(result.strokes, category))
                        } @else {
                            "-"
                        }
                    }
                }
                td class="total" { (totals.strokes) }
            }
            tr class="putts-row" {
                td { "Putts" }
                @for (number, _) in course.nine(nine) {
                    td {
                        @if let Some(result) = round.hole(number) {
                            (result.putts)
                        } @else {
                            "-"
                        }
                    }
                }
                td class="total" { (totals.putts) }
            }
        }
    }
}

#[must_use]
pub fn render_statistics(stats: &RoundStatistics) -> Markup {
    html! {
        div class="scorecard-stats" {
            div class="stat" { span class="label" { "Total" } span class="value" { (stats.total_strokes) } }
            div class="stat" {
                span class="label" { "Score to Par" }
                span class="value" { (relative_to_par(stats.total_strokes, stats.total_par)) }
            }
            div class="stat" { span class="label" { "Putts" } span class="value" { (stats.total_putts) } }
            div class="stat" {
                span class="label" { "Fairways" }
                span class="value" { (ratio_cell(stats.fairways_hit, stats.fairways_recorded)) }
            }
            div class="stat" {
                span class="label" { "Greens in Regulation" }
                span class="value" { (ratio_cell(stats.greens_in_regulation, stats.greens_recorded)) }
            }
            div class="stat" {
                span class="label" { "Up & Downs" }
                span class="value" { (ratio_cell(stats.up_and_downs, u32::from(stats.holes_played))) }
            }
            div class="stat" {
                span class="label" { "Sand Saves" }
                span class="value" { (stats.sand_saves) "/" (stats.sand_save_attempts) }
            }
            div class="stat" { span class="label" { "Penalties" } span class="value" { (stats.total_penalties) } }
            div class="stat" {
                span class="label" { "Strokes Gained" }
                span class="value" { (format!("{:+.1}", stats.strokes_gained)) }
            }

            div class="breakdown" {
                @for category in ScoreCategory::ALL {
                    div class="breakdown-row" {
                        span class={ "breakdown-dot " (category.css_class()) } style={ "background-color: " (category.color()) } {}
                        span class="breakdown-label" { (category.breakdown_label()) ": " }
                        span class="breakdown-value" { (stats.category_count(category)) }
                    }
                }
            }

            @if let Some(projected) = stats.projected_final_score {
                div class="projected-score" {
                    span class="label" { "Projected Score:" }
                    span class="value" { (projected) }
                }
            }
            @if stats.complete {
                p class="round-complete" { "Round complete" }
            }
        }
    }
}

/// Front nine, back nine and the statistics panel for the round.
#[must_use]
pub fn render_scorecard(round: &RoundAggregator) -> Markup {
    let stats = round.statistics();
    html! {
        div class="scorecard" {
            h2 class="course-name" { (round.course().name()) }
            table class="scorecard-table front-nine" {
                (render_nine(round, Nine::Front, &stats.front_nine))
            }
            table class="scorecard-table back-nine" {
                (render_nine(round, Nine::Back, &stats.back_nine))
            }
            p class="scorecard-total" {
                "TOT " (stats.total_strokes) " / par " (stats.total_par)
            }
            (render_statistics(&stats))
        }
    }
}
