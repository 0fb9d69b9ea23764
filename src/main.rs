//! gendesign - terminal studio for AI-generated product design options
//!
//! This is the binary entry point. Startup order: logging, settings, API
//! key, generation client, then the TUI or the headless runner.

use std::path::PathBuf;

use clap::Parser;
use gendesign_app::{config, Engine};
use gendesign_core::{DesignParameters, Strength};
use gendesign_gen::GeminiClient;
use tracing::info;

/// Generative Design Studio - AI design options for a product idea
#[derive(Parser, Debug)]
#[command(name = "gendesign")]
#[command(about = "Generate and compare AI design options in the terminal", long_about = None)]
struct Args {
    /// Run one generation and print NDJSON events instead of the TUI
    #[arg(long)]
    headless: bool,

    /// Product description (headless)
    #[arg(long, value_name = "TEXT")]
    prompt: Option<String>,

    /// Main material (headless)
    #[arg(long)]
    material: Option<String>,

    /// Cost ceiling in rupiah (headless)
    #[arg(long, value_name = "RUPIAH")]
    max_cost: Option<u64>,

    /// Rendah, Sedang, Tinggi or "Sangat Tinggi" (headless)
    #[arg(long)]
    strength: Option<Strength>,

    /// Config file instead of ./.gendesign/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default ./.gendesign/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    /// Command line values over the form defaults
    fn design_parameters(&self) -> DesignParameters {
        let defaults = DesignParameters::default();
        DesignParameters {
            prompt: self.prompt.clone().unwrap_or(defaults.prompt),
            material: self.material.clone().unwrap_or(defaults.material),
            max_cost: self.max_cost.unwrap_or(defaults.max_cost),
            strength: self.strength.unwrap_or(defaults.strength),
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    gendesign_core::logging::init()?;

    let project_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        config::init_config_dir(&project_dir)?;
        println!(
            "Config written to {}",
            project_dir
                .join(config::GENDESIGN_DIR)
                .join(config::CONFIG_FILENAME)
                .display()
        );
        return Ok(());
    }

    let settings = match &args.config {
        Some(path) => config::load_settings_from(path),
        None => config::load_settings(&project_dir),
    };
    info!("Using model {}", settings.generator.model);

    // The key is read once, here, and handed to the client explicitly
    let api_key = config::resolve_api_key(&settings.generator)?;
    let client = GeminiClient::new(config::generator_config(&settings.generator, api_key));
    let engine = Engine::from_settings(settings, client);

    if args.headless {
        let mut stdout = std::io::stdout().lock();
        let outcome = gendesign::run_headless(engine, args.design_parameters(), &mut stdout).await?;
        let code = outcome.exit_code();
        if code != 0 {
            std::process::exit(code);
        }
        return Ok(());
    }

    gendesign_tui::run(engine).await?;
    Ok(())
}
