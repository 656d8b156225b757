//! Entry point for the "From Dal-Roti to Cola-Chips" scrollytelling viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml` (or `--config PATH`).
//! - Launch the GUI, or replay a headless scroll sweep with `--simulate`.

mod app;
mod config;
mod simulate;
mod theme;

use crate::app::run_app;
use crate::config::load_config;
use anyhow::{Context, Result, anyhow};
use scrolly_core::story::story_sections;
use std::env;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";
const DEFAULT_SIMULATION_STEP_PX: f32 = 120.0;
const USAGE: &str = "Usage: dal-roti-scrolly [--simulate [STEP_PX]] [--config PATH]";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CliArgs {
    config_path: PathBuf,
    simulate_step: Option<f32>,
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let config = load_config(&args.config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    let sections = story_sections().context("Story sections are invalid")?;

    if let Some(step) = args.simulate_step {
        info!(step, sections = sections.len(), "Running headless scroll simulation");
        return simulate::run_simulation(&config, sections, step);
    }

    info!(
        config = %args.config_path.display(),
        level = %config.log_level,
        theme = %config.theme,
        "Starting scrollytelling viewer"
    );
    run_app(config, sections).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs {
        config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        simulate_step: None,
    };
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--simulate" => {
                let step = match args.next_if(|next| !next.starts_with("--")) {
                    Some(raw) => raw
                        .parse::<f32>()
                        .ok()
                        .filter(|step| step.is_finite() && *step > 0.0)
                        .ok_or_else(|| anyhow!("Invalid simulation step: {raw}\n{USAGE}"))?,
                    None => DEFAULT_SIMULATION_STEP_PX,
                };
                parsed.simulate_step = Some(step);
            }
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--config needs a path\n{USAGE}"))?;
                parsed.config_path = PathBuf::from(path);
            }
            "-h" | "--help" => return Err(anyhow!(USAGE)),
            other => return Err(anyhow!("Unknown argument: {other}\n{USAGE}")),
        }
    }

    Ok(parsed)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_opens_window_with_default_config() {
        let parsed = parse_args(Vec::new()).expect("empty args are valid");
        assert_eq!(parsed.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(parsed.simulate_step, None);
    }

    #[test]
    fn simulate_step_is_optional() {
        let parsed = parse_args(args(&["--simulate", "--config", "x.toml"])).expect("valid");
        assert_eq!(parsed.simulate_step, Some(DEFAULT_SIMULATION_STEP_PX));
        assert_eq!(parsed.config_path, PathBuf::from("x.toml"));

        let parsed = parse_args(args(&["--simulate", "250"])).expect("valid");
        assert_eq!(parsed.simulate_step, Some(250.0));
    }

    #[test]
    fn rejects_bad_step_and_unknown_flags() {
        assert!(parse_args(args(&["--simulate", "0"])).is_err());
        assert!(parse_args(args(&["--simulate", "fast"])).is_err());
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["page.html"])).is_err());
    }
}
