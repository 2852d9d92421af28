//! CLI entry point for typewriter.

mod cli;

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use typewriter::config::{load_config, render_config_toml, validate, Config};
use typewriter::cycle::{start, Frames, Script};
use typewriter::logging::init_tracing;
use typewriter::timer::TokioTimer;
use typewriter::tui::{print_banner, TerminalSurface};

/// Frames printed by `--plan` when `--steps` is not given.
const DEFAULT_PLAN_STEPS: u64 = 20;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_tracing();

    // Load config.
    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    apply_cli_overrides(&mut config, &args);
    if let Err(e) = validate(&config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    if args.print_config {
        match render_config_toml(&config) {
            Ok(text) => print!("{text}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if args.plan {
        let steps = args.steps.unwrap_or(DEFAULT_PLAN_STEPS);
        if let Err(e) = print_plan(&mut io::stdout(), &config, steps) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run_live(config, args.steps).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// CLI flags win over both the config file and environment overrides.
fn apply_cli_overrides(config: &mut Config, args: &cli::Args) {
    if !args.sentences.is_empty() {
        config.script.sentences = args.sentences.clone();
    }
    if let Some(delay) = args.initial_delay_ms {
        config.pacing.initial_delay_ms = delay;
    }
    if args.no_color {
        config.display.color = false;
    }
    if args.no_banner {
        config.display.banner = false;
    }
}

/// Write `delay_ms<TAB>text` per frame without sleeping.
fn print_plan<W: Write>(
    out: &mut W,
    config: &Config,
    steps: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = Script::new(config.script.sentences.iter().cloned())?;
    let pacing = config.pacing.pacing();
    let take = usize::try_from(steps).unwrap_or(usize::MAX);
    for frame in Frames::new(&script).take(take) {
        writeln!(out, "{}\t{}", pacing.duration(frame.delay).as_millis(), frame.text)?;
    }
    out.flush()?;
    Ok(())
}

async fn run_live(config: Config, steps: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let display = &config.display;
    let color = display.color && io::stdout().is_terminal();
    let script = open_live(&mut io::stdout(), &config, color)?;
    let surface = TerminalSurface::stdout(
        display.color,
        display.prefix.clone(),
        display.cursor.clone(),
    );
    let mut options = config.pacing.cycle_options();
    options.max_steps = steps;

    let handle = start(script.sentences().to_vec(), surface, TokioTimer, options)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let stopper = handle.stopper();
    let interrupted_flag = Arc::clone(&interrupted);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received");
            interrupted_flag.store(true, Ordering::Relaxed);
            stopper.stop();
        }
    });

    let mut outcome = handle.join().await?;
    finish_line(&mut outcome.surface, interrupted.load(Ordering::Relaxed));
    Ok(())
}

/// Validate the script, then print the banner. An empty script writes nothing.
fn open_live<W: Write>(
    out: &mut W,
    config: &Config,
    color: bool,
) -> Result<Script, Box<dyn std::error::Error>> {
    let script = Script::new(config.script.sentences.iter().cloned())?;
    if config.display.banner {
        print_banner(out, &config.display.banner_lines, color)?;
    }
    Ok(script)
}

/// Erase the animated line after Ctrl-C; otherwise keep the last frame.
fn finish_line<W: Write + Send>(surface: &mut TerminalSurface<W>, interrupted: bool) {
    if interrupted {
        surface.clear();
    } else {
        surface.end_line();
    }
}
