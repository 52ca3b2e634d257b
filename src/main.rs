use anyhow::{Context, Result};
use clap::Parser;

use rusty_scorecard::config::{Cli, Command, load_config};
use rusty_scorecard::model::{CellCategory, Nine, ScoreCategory};
use rusty_scorecard::mvu::{Deps, Msg, ScorecardModel, record_messages, run_scorecard};
use rusty_scorecard::score::{relative_to_par, score_color_category, score_description};
use rusty_scorecard::storage::{SCORES_KEY, SqliteStore};
use rusty_scorecard::view::render_scorecard;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let config = load_config(Cli::parse())?;

    let store = SqliteStore::open(&config.db_path)
        .with_context(|| format!("open scorecard db {}", config.db_path.display()))?;
    let deps = Deps { storage: &store };

    let mut model = ScorecardModel::new(config.course);
    if let Err(e) = run_scorecard(&mut model, Msg::ScreenLoad, deps).await {
        eprintln!("Warning: could not load saved round ({e}); starting from an empty round.");
    }

    match config.command {
        Command::Record {
            hole,
            strokes,
            putts,
            sandie,
            up_down,
            penalty,
        } => {
            let messages = record_messages(hole, strokes, putts, sandie, up_down, penalty)?;
            model.error = None;
            for msg in messages {
                run_scorecard(&mut model, msg, deps)
                    .await
                    .context("save round")?;
            }
            if let Some(e) = &model.error {
                anyhow::bail!("{e}");
            }

            let par = model.round.course().par(hole).unwrap_or(4);
            let Some(recorded) = model.round.hole(hole).copied() else {
                anyhow::bail!("hole {hole} was not recorded");
            };
            println!(
                "Hole {hole}: {} ({}, {})",
                recorded.strokes,
                relative_to_par(recorded.strokes, par),
                score_description(recorded.strokes, par)
            );
            if let Some(feedback) = &model.feedback {
                println!("{feedback}");
            }
            if let Some(summary) = &model.summary {
                println!("Round Complete!\n{summary}");
            }
        }
        Command::Show { html } => {
            if html {
                println!("{}", render_scorecard(&model.round).into_string());
            } else {
                print_scorecard(&model);
                if let Some(ts) = store.last_updated(SCORES_KEY).await? {
                    println!("Last saved {}.", ts.format("%Y-%m-%d %H:%M:%S UTC"));
                }
            }
        }
        Command::Hole { hole } => {
            model.error = None;
            run_scorecard(&mut model, Msg::OpenHole(hole), deps).await?;
            if let Some(e) = &model.error {
                anyhow::bail!("{e}");
            }
            let Some(definition) = model.round.course().hole(hole).copied() else {
                anyhow::bail!("hole {hole} is not on the course");
            };
            let entry = model.entry;
            println!(
                "Hole {hole}: par {} | {} yards | index {}",
                definition.par, definition.yards, definition.stroke_index
            );
            println!(
                "Strokes {} ({}, {}) | Putts {} | Sandie {} | Up/Down {} | Penalty {}",
                entry.strokes(),
                entry.relative_to_par(definition.par),
                entry.description(definition.par),
                entry.putts(),
                entry.sand_save(),
                entry.up_down(),
                entry.penalty()
            );
            if model.round.hole(hole).is_none() {
                println!("(not recorded yet)");
            }
        }
    }

    Ok(())
}

fn print_scorecard(model: &ScorecardModel) {
    let round = &model.round;
    let course = round.course();
    let stats = round.statistics();
    println!("{} ({})", course.name(), round.phase());

    for (nine, totals) in [(Nine::Front, &stats.front_nine), (Nine::Back, &stats.back_nine)] {
        let mut holes_line = format!("{:<6}", "Hole");
        let mut par_line = format!("{:<6}", "Par");
        let mut score_line = format!("{:<6}", "Score");
        for (number, hole) in course.nine(nine) {
            holes_line.push_str(&format!("{number:>4}"));
            par_line.push_str(&format!("{:>4}", hole.par));
            let strokes = round.hole(number).map(|r| r.strokes);
            let cell = match strokes {
                Some(s) => format!("{s}{}", category_marker(score_color_category(strokes, hole.par))),
                None => "-".to_string(),
            };
            score_line.push_str(&format!("{cell:>4}"));
        }
        holes_line.push_str(&format!("{:>5}", nine.total_label()));
        par_line.push_str(&format!("{:>5}", totals.par));
        score_line.push_str(&format!("{:>5}", totals.strokes));
        println!("{holes_line}\n{par_line}\n{score_line}");
    }

    println!(
        "Total {} | To par {} | Putts {} | Penalties {}",
        stats.total_strokes,
        relative_to_par(stats.total_strokes, stats.total_par),
        stats.total_putts,
        stats.total_penalties
    );
    println!(
        "Fairways {}/{} | GIR {}/{} | Up&Downs {} | Sand saves {}/{}",
        stats.fairways_hit,
        stats.fairways_recorded,
        stats.greens_in_regulation,
        stats.greens_recorded,
        stats.up_and_downs,
        stats.sand_saves,
        stats.sand_save_attempts
    );
    println!(
        "Eagles {} | Birdies {} | Pars {} | Bogeys {} | Doubles+ {}",
        stats.eagles, stats.birdies, stats.pars, stats.bogeys, stats.double_bogeys_or_worse
    );
    if let Some(projected) = stats.projected_final_score {
        println!("Projected Score: {projected}");
    }
}

fn category_marker(category: CellCategory) -> &'static str {
    match category {
        CellCategory::Scored(ScoreCategory::Eagle) => "*",
        CellCategory::Scored(ScoreCategory::Birdie) => "o",
        CellCategory::Scored(ScoreCategory::Bogey) => "^",
        CellCategory::Scored(ScoreCategory::DoubleBogeyPlus) => "#",
        CellCategory::Scored(ScoreCategory::Par) | CellCategory::Unrecorded => "",
    }
}
