//! focuscycle - an alternating work/break countdown timer for the terminal
//!
//! Runs a foreground countdown in the Pomodoro style:
//! - 25 minutes of focused work (configurable)
//! - 5 minutes of break (configurable)
//! - Sessions alternate automatically until interrupted

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tokio::time::{interval, Duration};

use focuscycle::cli::{Cli, Commands, Display, RunArgs};
use focuscycle::clock::TokioClock;
use focuscycle::notify::{LogNotifier, Notifier, TerminalNotifier};
use focuscycle::timer::SessionTimer;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run(args)) => run_timer(args).await?,
        Some(Commands::Completions { shell }) => generate_completions(shell),
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Runs the countdown in the foreground until Ctrl+C.
async fn run_timer(args: RunArgs) -> Result<()> {
    let config = args.to_config()?;
    let notifier: Arc<dyn Notifier> = if args.no_bell {
        Arc::new(LogNotifier)
    } else {
        Arc::new(TerminalNotifier::new())
    };

    let mut timer = SessionTimer::new(config, Arc::new(TokioClock), notifier);
    timer.start();

    if !args.json {
        println!("タイマーを開始しました（Ctrl+Cで終了）");
    }

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    // Poll faster than the tick interval and redraw only on change, so
    // the display never lags a tick by more than the poll period.
    let mut render = interval(Duration::from_millis(200));
    let mut last = None;

    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            _ = render.tick() => {
                let snapshot = timer.snapshot();
                if last.as_ref() == Some(&snapshot) {
                    continue;
                }

                if args.json {
                    println!("{}", serde_json::to_string(&snapshot)?);
                } else {
                    print!("\r{}", Display::render_status_line(&snapshot));
                    io::stdout().flush()?;
                }
                last = Some(snapshot);
            }
        }
    }

    // Dropping the timer cancels the tick subscription.
    drop(timer);

    if !args.json {
        println!();
        println!("タイマーを停止しました");
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
