mod config;
mod report;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use npt_core::events::domain::event_provider::EventProvider;
use npt_core::events::infrastructure::json_event_reader::JsonEventReader;
use npt_core::pipeline::batch_npt_use_case::{default_worker_count, BatchNptUseCase};
use npt_core::pipeline::pipeline_logger::LogPipelineLogger;
use npt_core::shared::event::Half;
use npt_core::shared::half_events::HalfEvents;

/// Net playing time per half from normalized match event files.
#[derive(Parser)]
#[command(name = "npt")]
struct Cli {
    /// Event file or directory of event files (*.json).
    input: PathBuf,

    /// Half to report: firstHalf, secondHalf, firstHalfExtra, secondHalfExtra.
    #[arg(long, default_value = "firstHalf")]
    half: String,

    /// Team whose event segment is reported.
    #[arg(long, default_value = "Home")]
    team: String,

    /// Report every half and team found in the input.
    #[arg(long)]
    all: bool,

    /// Output format: text or json.
    #[arg(long, default_value = "text")]
    format: String,

    /// Worker threads (defaults to available parallelism).
    #[arg(long)]
    threads: Option<usize>,

    /// JSON config file (defaults to the per-user config, if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Restart category substrings (comma-separated), overriding config.
    #[arg(long, value_delimiter = ',')]
    restart_patterns: Option<Vec<String>>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let half = validate(&cli)?;

    let config = config::resolve(
        cli.config.as_deref(),
        config::default_config_path(),
        cli.restart_patterns,
    )?;
    log::info!(
        "Restart patterns: {}",
        config.restart_category_patterns.join(", ")
    );

    let provider: Box<dyn EventProvider> = Box::new(JsonEventReader::new());
    let halves = provider.load(&cli.input)?;
    let selected = select(halves, cli.all, half, &cli.team);
    if selected.is_empty() {
        return Err(format!(
            "No events for {half} / {} in {}",
            cli.team,
            cli.input.display()
        )
        .into());
    }

    let workers = cli.threads.unwrap_or_else(default_worker_count);
    let mut use_case =
        BatchNptUseCase::new(&config, workers, Box::new(LogPipelineLogger::default()));
    let results = use_case.execute(&selected);

    let output = match cli.format.as_str() {
        "json" => report::format_json(&results)?,
        _ => report::format_text(&results),
    };
    print!("{output}");
    Ok(())
}

fn validate(cli: &Cli) -> Result<Half, Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input not found: {}", cli.input.display()).into());
    }
    if cli.format != "text" && cli.format != "json" {
        return Err(format!("Format must be 'text' or 'json', got '{}'", cli.format).into());
    }
    if cli.threads == Some(0) {
        return Err("Threads must be at least 1".into());
    }
    Half::parse(&cli.half).ok_or_else(|| {
        let valid: Vec<&str> = Half::ALL.iter().map(|h| h.as_str()).collect();
        format!(
            "Half must be one of: {}, got '{}'",
            valid.join(", "),
            cli.half
        )
        .into()
    })
}

fn select(halves: Vec<HalfEvents>, all: bool, half: Half, team: &str) -> Vec<HalfEvents> {
    if all {
        halves
    } else {
        halves.into_iter().filter(|h| h.matches(half, team)).collect()
    }
}
