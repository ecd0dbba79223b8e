use rpncalc::Calculator;
use std::process::ExitCode;

use crate::terminal::{self, View};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
#[derive(Debug, Default)]
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) tokens: Vec<String>,
    pub(crate) help: bool,
    pub(crate) version: bool,
    pub(crate) eng: bool,
    pub(crate) degrees: bool,
}

/// Parse command-line arguments.
///
/// Anything that is not a known flag is a calculator token, so negative
/// numbers (`-5`) and `-` pass through. `--` ends flag parsing.
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "-c" => {
                // Everything after -c is the line
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                }
                break;
            }
            "--" => {
                cli.tokens.extend(args[i + 1..].iter().cloned());
                break;
            }
            "--help" | "-h" => cli.help = true,
            "--version" | "-V" => cli.version = true,
            "--eng" => cli.eng = true,
            "--deg" => cli.degrees = true,
            token => cli.tokens.push(token.to_string()),
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"rpncalc {} - Reverse Polish Notation calculator

USAGE:
    rpncalc                   Start interactive REPL
    rpncalc <tokens...>       Evaluate each argument, print top of stack
    rpncalc -c "<line>"       Evaluate one line, print its result
    rpncalc --help            Show this help message
    rpncalc --version         Show version

OPTIONS:
    --eng                     Print the result in engineering notation
    --deg                     Start in degrees mode
    --                        Treat everything after as tokens

CONFIGURATION:
    ~/.rpncalc.toml           Settings and named constants
    RPNCALC_CONFIG            Alternative config file path
    RPNCALC_ANGLE             deg | rad
    RPNCALC_DIGITS            Significant digits for engineering notation
    RPNCALC_SI                Use SI prefixes (1/0)
    RPNCALC_BANNER            Show REPL banner
    RPNCALC_LOG               Log filter (e.g. debug)
{}"#,
        VERSION,
        operations_help()
    );
}

pub(crate) fn print_version() {
    println!("rpncalc {}", VERSION);
}

/// Operation reference, shared with the REPL's `help`
pub(crate) fn operations_help() -> &'static str {
    r#"
STACK:
    <number>                  Push: 10, -3, 0x1f, 0o17, 0b101, 2.5, .5, 1e-3
    pop, p                    Remove top
    clear, c                  Empty the stack
    duplicate, dup, d         a -> a a
    swap, w                   a b -> b a

ARITHMETIC:
    + - * /                   a b - is a - b ('x' is the same as '*')

CONSTANTS:
    pi, e                     Plus any [constants] from the config file

FUNCTIONS:
    square, sq                x -> x*x
    sqrt                      Square root
    pow                       a b pow is a to the power b
    sin cos tan               Angle in the current mode
    asin acos atan            Result in the current mode
    ln, exp                   Natural log, e to the x
    deg, rad                  Switch angle mode

REPL COMMANDS:
    <empty line>              Show the whole stack
    t                         Show top
    eng                       Show top in engineering notation
    hex                       Show top (integer) in hexadecimal
    time                      Show top (seconds) as H:MM:SS
    help                      Show this help
    q, quit, exit             Leave"#
}

/// Evaluate one line and print what it yields, or the top of the stack
pub(crate) fn execute_command(calc: &mut Calculator, line: &str, view: View) -> ExitCode {
    match terminal::execute_line(calc, line, false) {
        Ok(result) => {
            let shown = match &result {
                Some(value) => Some(terminal::render(calc, value, view)),
                None => terminal::render_top(calc, view),
            };
            report(shown)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Evaluate each token as its own line, then print the top of the stack
pub(crate) fn execute_batch(calc: &mut Calculator, tokens: &[String], view: View) -> ExitCode {
    for token in tokens {
        if let Err(e) = terminal::execute_line(calc, token, false) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    match terminal::render_top(calc, view) {
        Some(shown) => report(Some(shown)),
        None => {
            eprintln!("Error: Stack underflow: top");
            ExitCode::FAILURE
        }
    }
}

fn report(shown: Option<Result<String, String>>) -> ExitCode {
    match shown {
        Some(Ok(text)) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}
