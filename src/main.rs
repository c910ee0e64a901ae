//! Handwriting Screener - Dysgraphia stroke-analysis CLI
//!
//! Loads captured screening sessions and reports motor, fluency and spatial
//! indicators for each student.

use handwriting_screener::app::cli::{Cli, Commands, ConfigAction};
use handwriting_screener::app::config::{Config, OutputFormat};
use handwriting_screener::app::report::{render_json, ReportBuilder};
use handwriting_screener::capture::validation::{collect_issues, validate_canvas, ValidationError};
use handwriting_screener::workflow::Session;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    // Execute command
    match cli.command {
        Commands::Analyze {
            input,
            output,
            per_prompt,
            json,
        } => {
            run_analyze(&input, output, per_prompt, json, &config)?;
        }
        Commands::Validate { session } => {
            run_validate(&session, &config)?;
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn load_session(path: &Path) -> anyhow::Result<Session> {
    if !path.exists() {
        anyhow::bail!("Session file not found: {:?}", path);
    }
    let session = Session::load(path)?;
    info!(
        "Loaded session for '{}' with {} prompts ({} strokes)",
        session.metadata.student_name,
        session.prompts.len(),
        session.stroke_count()
    );
    Ok(session)
}

fn run_analyze(
    input: &Path,
    output: Option<PathBuf>,
    per_prompt: bool,
    json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let session = load_session(input)?;
    let canvas = session.canvas_or(config.canvas.size());
    let strict = config.validation.strict;

    let (results, titles) = if per_prompt {
        let results = session.analyze_prompts(canvas, strict)?;
        let titles = session
            .prompts
            .iter()
            .enumerate()
            .map(|(i, p)| format!("Prompt {} ({})", i + 1, p.prompt_type))
            .collect::<Vec<_>>();
        (results, titles)
    } else {
        let result = session.analyze(canvas, strict)?;
        let title = format!(
            "{} (Grade {})",
            session.metadata.student_name, session.metadata.grade
        );
        (vec![result], vec![title])
    };

    let rendered = if json || config.output.format == OutputFormat::Json {
        render_json(&results, config.output.pretty)?
    } else {
        let sections: Vec<_> = titles.into_iter().zip(results.iter()).collect();
        ReportBuilder::new().build(&sections)?
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, rendered)?;
            info!("Wrote report to {:?}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn run_validate(path: &Path, config: &Config) -> anyhow::Result<()> {
    info!("Validating {:?}", path);

    let session = load_session(path)?;
    let canvas = session.canvas_or(config.canvas.size());

    let mut issues = Vec::new();
    if let Err(e) = validate_canvas(&canvas) {
        issues.push(("canvas".to_string(), e));
    }
    for (i, prompt) in session.prompts.iter().enumerate() {
        issues.extend(
            collect_issues(&prompt.strokes, &canvas)
                .into_iter()
                .filter(|e| !matches!(e, ValidationError::InvalidCanvas { .. }))
                .map(|e| (format!("prompt {}", i + 1), e)),
        );
    }

    if issues.is_empty() {
        println!("Validation PASSED");
        Ok(())
    } else {
        println!("Validation FAILED:");
        for (location, err) in &issues {
            println!("  - [{}] {}", location, err);
        }
        anyhow::bail!("Validation failed with {} errors", issues.len())
    }
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    config.save_default()?;
    println!("Created config at {:?}", config_path);
    println!("\nConfig content:\n{}", config.to_toml()?);

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str = config.to_toml()?;
            println!("Configuration ({:?}):\n", Config::default_path());
            println!("{}", toml_str);
        }
        ConfigAction::Get { key } => match config.get(&key)? {
            Some(v) => println!("{} = {}", key, v),
            None => anyhow::bail!("Configuration key '{}' not found", key),
        },
        ConfigAction::Reset { force } => {
            let config_path = Config::default_path();

            if config_path.exists() && !force {
                println!("Config exists at {:?}", config_path);
                println!("Use --force to reset to defaults");
                return Ok(());
            }

            Config::default().save_default()?;
            println!("Configuration reset to defaults at {:?}", config_path);
        }
    }

    Ok(())
}
