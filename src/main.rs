use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use sprout::cli::{Cli, Commands};
use sprout::error::SproutError;
use sprout::generator::EpicGenerator;
use sprout::ids::SequentialIds;
use sprout::model::{
    Dimension, EffortSize, GenerationResult, GoalRecord, QualityLevel, SmartAssessment,
    ValidationReport,
};
use sprout::text::truncate_with_ellipsis;
use sprout::validator::GoalValidator;

fn main() -> Result<()> {
    let cli = Cli::parse();
    sprout::logging::init(cli.verbose, cli.log_file.as_deref());

    match cli.command {
        Commands::Validate { file, json } => cmd_validate(&file, json),
        Commands::Generate {
            file,
            json,
            sequential_ids,
        } => cmd_generate(&file, json, sequential_ids),
        Commands::Sizes { json } => cmd_sizes(json),
    }
}

fn cmd_validate(file: &str, json: bool) -> Result<()> {
    let text = read_input(file)?;
    let validator = GoalValidator::new();
    let report = validator.validate_goals(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn cmd_generate(file: &str, json: bool, sequential_ids: bool) -> Result<()> {
    let content = read_input(file)?;
    let value: serde_json::Value =
        serde_json::from_str(&content).context("Failed to parse goals file as JSON")?;
    if !value.is_array() {
        return Err(SproutError::Validation(
            "expected a JSON array of goal records".to_string(),
        )
        .into());
    }
    let goals: Vec<GoalRecord> =
        serde_json::from_value(value).context("Failed to parse goal records")?;

    let mut generator = if sequential_ids {
        EpicGenerator::with_ids(Box::new(SequentialIds::new()))
    } else {
        EpicGenerator::new()
    };
    let result = generator.generate_epics_and_features(&goals);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

fn cmd_sizes(json: bool) -> Result<()> {
    if json {
        let scale: Vec<_> = EffortSize::ALL
            .iter()
            .map(|size| {
                serde_json::json!({
                    "size": size.to_string(),
                    "points": size.points(),
                    "description": size.description(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&scale)?);
    } else {
        for size in EffortSize::ALL {
            println!(
                "{:<4} {:>2} {}",
                size.to_string().cyan(),
                size.points(),
                size.description()
            );
        }
    }
    Ok(())
}

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))
}

fn print_report(report: &ValidationReport) {
    println!("{} {}", "Goals found:".bold(), report.goals_count);
    println!(
        "{} {}",
        "SMART score:".bold(),
        format_score(report.smart_score)
    );
    println!(
        "{} {}",
        "Quality:    ".bold(),
        format_quality(report.quality_level)
    );

    for (i, goal) in report.goals.iter().enumerate() {
        println!(
            "\n{} {}",
            format!("{}.", i + 1).cyan(),
            truncate_with_ellipsis(&goal.title, 70).bold()
        );
        println!(
            "   Score: {}  {}",
            format_score(goal.smart_score),
            format_assessment(&goal.smart_assessment)
        );
        for issue in &goal.issues {
            println!("   {} {}", "!".yellow(), issue);
        }
    }

    if !report.recommendations.is_empty() {
        println!("\n{}", "Recommendations".bold());
        for recommendation in &report.recommendations {
            println!("- {}", recommendation);
        }
    }
}

fn print_result(result: &GenerationResult) {
    for epic in &result.epics {
        println!(
            "{} {} [{}] [{}]",
            epic.id.cyan(),
            epic.title.bold(),
            epic.priority.to_string().blue(),
            epic.category.magenta()
        );
        for feature in &epic.features {
            println!(
                "  {} {:<34} {:<3} {:>2}pt  {}",
                feature.id.cyan(),
                feature.title,
                feature.effort_size.to_string().blue(),
                feature.effort_points,
                feature.assigned_team.to_string().magenta()
            );
        }
        println!(
            "  {} features, {} points\n",
            epic.feature_count, epic.total_effort
        );
    }

    if !result.team_assignments.is_empty() {
        println!("{}", "Team assignments".bold());
        for (team, titles) in &result.team_assignments {
            println!("  {:<10} {} features", team.to_string().magenta(), titles.len());
        }
        println!();
    }

    let summary = &result.summary;
    println!("{}", "Summary".bold());
    println!("  Epics:           {}", summary.total_epics);
    println!("  Features:        {}", summary.total_features);
    println!("  Effort points:   {}", summary.total_effort_points);
    println!("  Estimated weeks: {}", summary.estimated_weeks);
    println!("  Teams involved:  {}", summary.teams_involved);
}

fn format_score(score: u8) -> colored::ColoredString {
    let text = format!("{}/100", score);
    match score {
        75..=u8::MAX => text.green(),
        40..=74 => text.yellow(),
        _ => text.red(),
    }
}

fn format_quality(level: QualityLevel) -> colored::ColoredString {
    match level {
        QualityLevel::Excellent | QualityLevel::Good => level.to_string().green(),
        QualityLevel::Fair => level.to_string().yellow(),
        QualityLevel::Poor | QualityLevel::VeryPoor => level.to_string().red(),
        QualityLevel::NoGoalsFound => level.to_string().dimmed(),
    }
}

fn format_assessment(assessment: &SmartAssessment) -> String {
    Dimension::ALL
        .iter()
        .map(|dimension| {
            let letter = match dimension {
                Dimension::Specific => "S",
                Dimension::Measurable => "M",
                Dimension::Achievable => "A",
                Dimension::Relevant => "R",
                Dimension::TimeBound => "T",
            };
            if assessment.get(*dimension) {
                letter.green().to_string()
            } else {
                letter.red().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
