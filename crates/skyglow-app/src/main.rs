mod app;
mod cli;
mod commands;
mod render;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();

    let config_path = args
        .config
        .clone()
        .or_else(|| skyglow_config::toml_loader::default_config_path().ok());
    let loaded = skyglow_config::load_config_from(args.config.as_deref());

    // Initialize logging
    let log_directive = match (&args.log_level, &loaded) {
        (Some(level), _) if !level.contains('=') => format!("skyglow={level}"),
        (Some(directive), _) => directive.clone(),
        (None, Ok(config)) => format!("skyglow={}", config.logging.level.as_str()),
        (None, Err(_)) => "skyglow=info".to_string(),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "skyglow=info".parse().expect("static directive")),
            ),
        )
        .init();

    tracing::debug!("Skyglow v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        skyglow_config::SkyglowConfig::default()
    });

    let app = app::App::build(config, config_path, args.prefs, args.command.at());

    match commands::execute(&app, &args.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("skyglow: {e}");
            ExitCode::FAILURE
        }
    }
}
