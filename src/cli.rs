use crate::types::config::ChartFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sdg-radar",
    version,
    about = "SDG 7 and SDG 13 attribute survey scoring with radar charts"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding sdg-radar.toml
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the survey questions and their options
    Questions(QuestionsCommand),
    /// Print the percentage score per category
    Score(ScoreCommand),
    /// Write a radar chart per category
    Chart(ChartCommand),
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// TOML file with one table of answers per category
    #[arg(long)]
    pub answers: PathBuf,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ChartCommand {
    #[arg(long)]
    pub answers: PathBuf,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Overrides chart.format from the config
    #[arg(long, value_enum)]
    pub format: Option<ImageFormat>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl From<ImageFormat> for ChartFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => ChartFormat::Png,
            ImageFormat::Svg => ChartFormat::Svg,
        }
    }
}
