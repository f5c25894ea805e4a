// SPDX-License-Identifier: MIT

//! lenscoach: Local AI Photography Coach
//!
//! CLI entry point: offline EXIF coaching, LLM-backed Q&A, and creative
//! shot-list generation against a local Ollama runtime.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use lenscoach::assistant::Assistant;
use lenscoach::coach::CoachingAgent;
use lenscoach::config::AppConfig;
use lenscoach::ollama::OllamaClient;
use lenscoach::orchestrator::Orchestrator;
use lenscoach::session::MemorySessionStore;
use lenscoach::vision::VisionAnalyzer;
use lenscoach::{CoachError, Result};

/// Minimum length for a shot-list theme; shorter themes give the model
/// nothing to plan around
const MIN_THEME_LEN: usize = 16;

/// lenscoach CLI - Local AI Photography Coach
#[derive(Parser, Debug)]
#[command(name = "lenscoach")]
#[command(version = "0.1.0")]
#[command(about = "Local AI photography coach", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long, global = true)]
    trace: bool,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format for results
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the offline coaching pipeline on a question, optionally with a photo
    Coach {
        /// The photography question
        query: String,

        /// Photo to analyze for composition issues
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// User id for the coaching session
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Ask a photography question, answered by the local model with
    /// retrieved principles as grounding context
    Ask {
        /// The question to answer
        question: String,
    },

    /// Generate a creative 6-step shot list for a theme
    ShotList {
        /// Photography theme or mood (at least 16 characters)
        theme: String,
    },

    /// Show AI engine status
    Status {
        /// Check specific model availability
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Generate a default configuration file
    Generate {
        /// Output path
        #[arg(short, long, default_value = "config.json")]
        output: PathBuf,
    },

    /// Validate configuration file
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Commands::Coach { query, image, user } => {
            run_coach(config, query, image, user, &cli.format)
        }
        Commands::Ask { question } => run_ask(config, question).await,
        Commands::ShotList { theme } => run_shot_list(config, theme).await,
        Commands::Status { model } => run_status(config, model).await,
        Commands::Config { action } => run_config_command(config, action, &cli.config),
    }
}

/// Run the offline coaching pipeline
fn run_coach(
    config: AppConfig,
    query: String,
    image: Option<PathBuf>,
    user: Option<String>,
    format: &str,
) -> Result<()> {
    let user_id = user.unwrap_or(config.default_user);
    let mut orchestrator = Orchestrator::new(
        VisionAnalyzer::new(),
        CoachingAgent::new(),
        MemorySessionStore::new(),
    );

    let result = orchestrator.run(&user_id, image.as_deref(), &query);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let Some(vision) = &result.vision {
        println!("=== Vision Analysis ===");
        println!("{}", vision.composition_summary);
        if let Some(model) = &vision.exif.model {
            println!("Camera: {}", model);
        }
        if let Some(f) = vision.exif.f_number {
            println!("Aperture: f/{}", f);
        }
        if let Some(fl) = vision.exif.focal_length {
            println!("Focal length: {}mm", fl);
        }
        if let Some(iso) = vision.exif.iso {
            println!("ISO: {}", iso);
        }
        if let Some(err) = &vision.exif.error {
            println!("EXIF warning: {}", err);
        }
        println!();
    }

    println!("=== Coaching Text ===");
    println!("{}", result.coach.text);

    println!("\n=== Suggested Exercise ===");
    println!("{}", result.coach.exercise);

    println!("\n=== Principles Used ===");
    for p in &result.coach.principles {
        println!("- {} ({}): {}", p.topic, p.level, p.text);
    }

    Ok(())
}

/// Ask the local model a question grounded in retrieved principles
async fn run_ask(config: AppConfig, question: String) -> Result<()> {
    let assistant = Assistant::new(&config.ai_engine);

    info!("Answering with model '{}'", config.ai_engine.models.text);
    let (answer, principles) = assistant.answer(&question).await;

    println!("=== Answer ===");
    println!("{}", answer);

    println!("\n=== Sources ===");
    for p in &principles {
        println!("- {} ({}): {}", p.topic, p.level, p.text);
    }

    Ok(())
}

/// Generate a creative shot list
async fn run_shot_list(config: AppConfig, theme: String) -> Result<()> {
    if theme.trim().len() < MIN_THEME_LEN {
        return Err(CoachError::InvalidInput(format!(
            "Theme too short; describe mood, location, and style in at least {} characters",
            MIN_THEME_LEN
        )));
    }

    let assistant = Assistant::new(&config.ai_engine);

    info!("Generating shot list with model '{}'", config.ai_engine.models.text);
    let shot_list = assistant.shot_list(&theme).await;

    println!("=== Creative Shot List ===");
    println!("{}", shot_list);

    Ok(())
}

/// Run status check
async fn run_status(config: AppConfig, model: Option<String>) -> Result<()> {
    let client = OllamaClient::new(&config.ai_engine.url);

    println!("lenscoach v0.1.0 Status");
    println!("=======================");

    match client.health_check().await {
        Ok(()) => println!("Ollama: Running"),
        Err(e) => println!("Ollama: Error - {}", e),
    }

    match client.list_models().await {
        Ok(models) => {
            let wanted = model.as_deref().unwrap_or(&config.ai_engine.models.text);
            println!("\nAvailable models:");
            for m in &models {
                let marker = if m.starts_with(wanted) { "→" } else { " " };
                println!("  {} {}", marker, m);
            }
        }
        Err(e) => println!("  Error listing models: {}", e),
    }

    println!("\nConfiguration:");
    println!("  Engine URL: {}", config.ai_engine.url);
    println!("  Text model: {}", config.ai_engine.models.text);
    println!("  Default user: {}", config.default_user);

    Ok(())
}

/// Run config commands
fn run_config_command(
    config: AppConfig,
    action: ConfigCommands,
    config_path: &std::path::Path,
) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
        ConfigCommands::Generate { output } => {
            let default_config = AppConfig::default();
            default_config.save(&output)?;
            println!("Generated config at {:?}", output);
        }
        ConfigCommands::Validate => {
            println!("Configuration at {:?} is valid", config_path);
            println!("  Engine URL: {}", config.ai_engine.url);
            println!("  Text model: {}", config.ai_engine.models.text);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_coach_command() {
        let cli = Cli::try_parse_from([
            "lenscoach",
            "coach",
            "How do I improve this photo?",
            "--image",
            "/tmp/photo.jpg",
            "--user",
            "alex",
        ])
        .unwrap();

        match cli.command {
            Commands::Coach { query, image, user } => {
                assert_eq!(query, "How do I improve this photo?");
                assert_eq!(image, Some(PathBuf::from("/tmp/photo.jpg")));
                assert_eq!(user.as_deref(), Some("alex"));
            }
            _ => panic!("Expected Coach command"),
        }
    }

    #[test]
    fn test_cli_coach_without_image() {
        let cli = Cli::try_parse_from(["lenscoach", "coach", "rule of thirds"]).unwrap();

        match cli.command {
            Commands::Coach { image, user, .. } => {
                assert!(image.is_none());
                assert!(user.is_none());
            }
            _ => panic!("Expected Coach command"),
        }
    }

    #[test]
    fn test_cli_shot_list_command() {
        let cli = Cli::try_parse_from(["lenscoach", "shot-list", "moody autumn forest portrait"])
            .unwrap();

        match cli.command {
            Commands::ShotList { theme } => {
                assert_eq!(theme, "moody autumn forest portrait");
            }
            _ => panic!("Expected ShotList command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from([
            "lenscoach", "--verbose", "--format", "json", "coach", "q",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["lenscoach", "--format", "yaml", "coach", "q"]).is_err());
    }
}
