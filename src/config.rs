use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Course;

pub const DEFAULT_DB_PATH: &str = "scorecard.db";

#[derive(Parser, Debug)]
#[command(author, version, about = "Record holes and view the scorecard for a round of golf")]
pub struct Cli {
    /// SQLite file holding the round
    #[arg(long)]
    pub db: Option<PathBuf>,
    #[arg(long)]
    pub config_toml: Option<PathBuf>,
    /// Course table to score against instead of the built-in course
    #[arg(long)]
    pub course_toml: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record (or overwrite) the score for one hole
    Record {
        #[arg(long)]
        hole: u8,
        #[arg(long)]
        strokes: i32,
        /// Defaults to 2, or to the stroke count when that is lower
        #[arg(long)]
        putts: Option<i32>,
        #[arg(long)]
        sandie: bool,
        #[arg(long)]
        up_down: bool,
        #[arg(long, default_value_t = 0)]
        penalty: i32,
    },
    /// Print the scorecard and round statistics
    Show {
        /// Emit an HTML fragment instead of text
        #[arg(long)]
        html: bool,
    },
    /// Print what the editor would show for one hole
    Hole { hole: u8 },
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    db_path: Option<PathBuf>,
    course_toml: Option<PathBuf>,
}

#[derive(Debug)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub course: Course,
    pub command: Command,
}

/// Load config from CLI and optional TOML file. CLI values win over the file,
/// the file wins over defaults.
///
/// # Errors
/// Returns an error if the config file or course file is unreadable or
/// invalid.
pub fn load_config(cli: Cli) -> Result<AppConfig> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    let db_path = cli
        .db
        .or(file_config.db_path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

    let course = match cli.course_toml.or(file_config.course_toml) {
        Some(path) => load_course(&path)?,
        None => Course::default(),
    };

    Ok(AppConfig {
        db_path,
        course,
        command: cli.command,
    })
}

/// # Errors
/// Returns an error if the file is unreadable or not a valid course table.
pub fn load_course(path: &Path) -> Result<Course> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read course toml {}", path.display()))?;
    Course::from_toml_str(&contents).with_context(|| format!("parse course toml {}", path.display()))
}
