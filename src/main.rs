//! rpncalc - Reverse Polish Notation calculator
//!
//! Usage:
//!   rpncalc                 Start interactive REPL
//!   rpncalc 2 5 +           Evaluate arguments, print top of stack
//!   rpncalc -c "2 5 +"      Evaluate one line

mod cli;
mod rcfile;
mod repl;
mod terminal;

use rpncalc::{AngleMode, Calculator};
use std::env;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cli::{execute_batch, execute_command, parse_args, print_help, print_version};
use terminal::View;

/// Log to stderr, filtered by RPNCALC_LOG (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env("RPNCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let config = rcfile::load_config();
    let mut calc = match Calculator::with_config(&config) {
        Ok(calc) => calc,
        Err(e) => {
            warn!("config: {}", e);
            Calculator::new()
        }
    };

    if cli.degrees {
        calc.set_angle_mode(AngleMode::Degrees);
    }

    let view = if cli.eng { View::Eng } else { View::Plain };

    if let Some(line) = cli.command {
        return execute_command(&mut calc, &line, view);
    }

    if !cli.tokens.is_empty() {
        return execute_batch(&mut calc, &cli.tokens, view);
    }

    match repl::run_repl(calc, config.banner) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
