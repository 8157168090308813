use amar_core::*;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "amar")]
#[command(about = "BMI calculator and health-metric tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a BMI and record it in the history
    Calc {
        /// Height in centimeters
        height: String,

        /// Weight in kilograms
        weight: String,
    },

    /// Show recorded calculations, newest first
    History,

    /// Show or toggle the dark-mode preference
    Theme {
        /// Flip the preference and persist it
        #[arg(long)]
        toggle: bool,
    },

    /// List the built-in health tips
    Tips,

    /// Show the built-in example profiles
    Examples,
}

fn main() -> Result<()> {
    // Initialize logging
    amar_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    match cli.command {
        Some(Commands::Calc { height, weight }) => cmd_calc(&data_dir, &height, &weight),
        Some(Commands::History) => cmd_history(&data_dir),
        Some(Commands::Theme { toggle }) => cmd_theme(&data_dir, toggle),
        Some(Commands::Tips) => cmd_tips(&config),
        Some(Commands::Examples) => cmd_examples(),
        None => cmd_interactive(&data_dir, &config),
    }
}

fn history_path(data_dir: &Path) -> PathBuf {
    data_dir.join("history.json")
}

fn theme_path(data_dir: &Path) -> PathBuf {
    data_dir.join("theme.json")
}

fn cmd_calc(data_dir: &Path, height: &str, weight: &str) -> Result<()> {
    let Some(measurement) = Measurement::parse(height, weight) else {
        println!("Enter a numeric height and weight to calculate BMI.");
        return Ok(());
    };

    record_measurement(data_dir, &measurement)
}

/// Run a measurement through the engine and, when it yields a result,
/// render it and record it. A measurement the engine rejects simply means
/// no calculation was performed; prior history stays untouched.
fn record_measurement(data_dir: &Path, measurement: &Measurement) -> Result<()> {
    let Some(result) = measurement.bmi() else {
        println!("Height and weight must both be positive to calculate BMI.");
        return Ok(());
    };

    display_result(&result);

    let path = history_path(data_dir);
    let log = HistoryLog::load(&path);
    let log = log.append(HistoryEntry::record(&result, measurement));
    log.save(&path)?;

    tracing::info!("Recorded BMI {} ({})", result.value, result.category);
    Ok(())
}

fn cmd_history(data_dir: &Path) -> Result<()> {
    let log = HistoryLog::load(&history_path(data_dir));

    if log.is_empty() {
        println!("No BMI calculations yet");
        return Ok(());
    }

    println!("BMI History");
    println!();
    for entry in log.entries() {
        println!(
            "  {}  BMI {} ({})  -  height {} cm, weight {} kg",
            entry.date,
            entry.bmi,
            category_of(entry.bmi),
            entry.height,
            entry.weight
        );
    }

    Ok(())
}

fn cmd_theme(data_dir: &Path, toggle: bool) -> Result<()> {
    let path = theme_path(data_dir);
    let mut theme = ThemePreference::load(&path);

    if toggle {
        theme = theme.toggled();
        theme.save(&path)?;
        tracing::info!("Theme preference saved");
    }

    println!(
        "Theme: {}",
        if theme.dark_mode { "dark" } else { "light" }
    );
    Ok(())
}

fn cmd_tips(config: &Config) -> Result<()> {
    println!(
        "Health tips (rotating every {} seconds):",
        config.tips.rotation_seconds
    );
    for (i, tip) in HEALTH_TIPS.iter().enumerate() {
        println!("  {}. {}", i + 1, tip);
    }
    Ok(())
}

fn cmd_examples() -> Result<()> {
    println!("Adult BMI Examples");
    for profile in example_profiles() {
        println!();
        println!("  {}", profile.description);
        println!("    Height: {} cm", profile.height_cm);
        println!("    Weight: {} kg", profile.weight_kg);
        println!(
            "    BMI: {} ({})",
            profile.result.value, profile.result.category
        );
    }
    Ok(())
}

fn cmd_interactive(data_dir: &Path, config: &Config) -> Result<()> {
    // The tip banner rotates for as long as the session is open
    let mut ticker = TipTicker::start(config.tips.rotation_interval());

    println!("ℹ {}", ticker.current());
    println!();

    let height = prompt_line("Height (cm): ")?;
    let weight = prompt_line("Weight (kg): ")?;

    match Measurement::parse(&height, &weight) {
        Some(measurement) => record_measurement(data_dir, &measurement)?,
        None => println!("Enter your height and weight to calculate BMI"),
    }

    ticker.stop();
    Ok(())
}

fn display_result(result: &BmiResult) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  YOUR BMI");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {}", result.value);
    println!("  {}", result.category);
    println!();
    println!("  ℹ {}", result.risk_note);
    println!();
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}
