mod assess;
mod chart;
mod cli;
mod config;
mod error;
mod logging;
mod report;
mod scoring;
mod survey;
mod types;

use crate::chart::{chart_file_name, renderer_for, RadarChart};
use crate::error::SurveyError;
use crate::report::manifest::{self, ChartManifest};
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, SurveyError> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let loaded = config::load_config(&cli.dir)?;
    if loaded.is_none() {
        tracing::info!(
            "no config layer found for {}; using defaults",
            cli.dir.display()
        );
    }
    let cfg = loaded.unwrap_or_default();

    match cli.command {
        cli::Commands::Questions(cmd) => {
            for category in survey::select_categories(cmd.category.as_deref())? {
                println!("## {} ({})", category.name, category.title);
                for question in category.questions {
                    println!("{}", question.name);
                    for option in &question.options {
                        println!("  - {option}");
                    }
                }
                println!();
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let sheet = survey::answers::load_answers(&cmd.answers)?;
            let categories = survey::select_categories(cmd.category.as_deref())?;
            let survey_report = assess::assess(&categories, &sheet, cfg.rating_policy())?;

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&survey_report, output_format)?;
            println!("{rendered}");

            if survey_report.has_defaulted_answers() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Chart(cmd) => {
            let mut settings = cfg.chart_settings();
            if let Some(format) = cmd.format {
                settings.format = format.into();
            }
            let renderer = renderer_for(&settings);

            let sheet = survey::answers::load_answers(&cmd.answers)?;
            let categories = survey::select_categories(cmd.category.as_deref())?;
            let survey_report = assess::assess(&categories, &sheet, cfg.rating_policy())?;
            let mut chart_manifest = ChartManifest::new();

            for category_report in &survey_report.categories {
                let mut radar =
                    RadarChart::build(&category_report.ratings, &category_report.labels)?;
                if settings.title {
                    radar = radar.with_title(category_report.score_line());
                }
                let data = renderer.render(&radar)?;
                let file = chart_file_name(&category_report.category, renderer.format());
                let path = manifest::write_chart(&cmd.out_dir, &file, &data)?;
                chart_manifest.record(
                    &category_report.category,
                    &file,
                    renderer.format().mime_type(),
                    &data,
                );
                tracing::info!(path = %path.display(), bytes = data.len(), "wrote radar chart");
                println!("{}", category_report.score_line());
                println!("chart: {}", path.display());
            }

            let manifest_path = manifest::write_manifest(&cmd.out_dir, &chart_manifest)?;
            println!("manifest: {}", manifest_path.display());

            if survey_report.has_defaulted_answers() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) if e.is_input_error() => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::INVALID_INPUT);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
