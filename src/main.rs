//! uxaudit - Configuration core for the UX AI audit pipeline
//!
//! A CLI tool that resolves every tunable parameter from the environment,
//! establishes the on-disk layout, and validates LLM credentials before
//! an audit run is started.
//!
//! Exit codes:
//!   0 - Success (settings resolved and mandatory credentials present)
//!   1 - Runtime error (malformed setting, missing credential, filesystem failure)

mod cli;
mod config;
mod error;
mod heuristics;
mod logging;
mod models;
mod personas;

use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::Settings;
use tracing::{debug, info};

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    match run(args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Resolve settings, establish the layout, and validate credentials.
fn run(args: Args) -> Result<()> {
    load_env_file(&args)?;

    let settings = Settings::from_env(&args.root)?;

    settings
        .ensure_directories()
        .context("Failed to establish data directories")?;

    logging::init(&args.log_level(&settings.log_level), &settings.log_file())
        .context("Failed to initialize logging")?;

    info!("uxaudit v{}", env!("CARGO_PKG_VERSION"));
    debug!("Root directory: {}", settings.root.display());

    settings.validate()?;

    if args.show {
        print_settings(&settings, args.format)?;
    }

    println!("✓ Configuration validated successfully");
    Ok(())
}

/// Load an env override file before settings are resolved.
///
/// An explicit --env-file must load; the default .env is best-effort.
fn load_env_file(args: &Args) -> Result<()> {
    if let Some(ref env_file) = args.env_file {
        dotenvy::from_path(env_file)
            .with_context(|| format!("Failed to load env file: {}", env_file.display()))?;
    } else {
        let _ = dotenvy::dotenv();
    }
    Ok(())
}

/// Print the resolved settings in the requested format.
fn print_settings(settings: &Settings, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&settings.summary())
                .context("Failed to serialize settings summary")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let key_status = |set: bool| if set { "set" } else { "not set" };

            println!("\n🔧 Resolved settings:");
            println!(
                "   Vision LLM: {} (OPENAI_API_KEY {})",
                settings.openai_model,
                key_status(settings.openai_api_key.is_some())
            );
            println!(
                "   Fallback vision LLM: {} (GEMINI_API_KEY {})",
                settings.gemini_model,
                key_status(settings.gemini_api_key.is_some())
            );
            println!(
                "   Auxiliary text LLM: {} at {} (DEEPSEEK_API_KEY {})",
                settings.deepseek_model,
                settings.deepseek_base_url,
                key_status(settings.deepseek_api_key.is_some())
            );
            println!(
                "   Session: max {} steps, viewport {}x{}",
                settings.max_steps, settings.viewport_width, settings.viewport_height
            );
            println!(
                "   Grid overlay: {}px cells, color {}",
                settings.grid_size, settings.grid_color
            );
            println!(
                "   Timeouts: navigation {}ms, screenshot {}ms, page load wait {}ms",
                settings.navigation_timeout_ms,
                settings.screenshot_timeout_ms,
                settings.page_load_wait_ms
            );
            println!(
                "   Storage: screenshots {}, reports {}, logs {}",
                settings.screenshots_dir().display(),
                settings.reports_dir().display(),
                settings.logs_dir().display()
            );
            let sentiment_scale = models::Sentiment::ALL
                .iter()
                .map(|s| format!("{}={}", s, s.score()))
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "   Reference data: {} personas, {} heuristics, sentiment scale {}",
                personas::all().len(),
                heuristics::all().len(),
                sentiment_scale
            );
        }
    }
    Ok(())
}
