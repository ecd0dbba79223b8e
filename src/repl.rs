use rpncalc::{resolver, Calculator};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper, Result as RlResult};
use std::borrow::Cow;

use crate::cli::operations_help;
use crate::rcfile::history_path;
use crate::terminal::{self, execute_line, View};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Words handled by the REPL itself, before evaluation
const REPL_COMMANDS: &[&str] = &["t", "eng", "hex", "time", "help", "q", "quit", "exit"];

/// Line editor helper: completion of operation names and a stack hint
struct RpnHelper {
    /// Completion candidates: operations, constants, REPL commands
    words: Vec<String>,
    /// Stack preview shown on an empty line
    stack_hint: Option<String>,
}

impl RpnHelper {
    fn new(calc: &Calculator) -> Self {
        let mut helper = RpnHelper {
            words: Vec::new(),
            stack_hint: None,
        };
        helper.sync(calc);
        helper
    }

    /// Refresh from the calculator before each prompt
    fn sync(&mut self, calc: &Calculator) {
        let mut words: Vec<String> = resolver::names()
            .chain(REPL_COMMANDS.iter().copied())
            .map(String::from)
            .collect();
        words.extend(calc.constant_names().map(String::from));
        words.sort();
        words.dedup();
        self.words = words;
        self.stack_hint = terminal::stack_preview(calc);
    }
}

impl Helper for RpnHelper {}

impl Completer for RpnHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Find the word being completed
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        let prefix = &line[start..pos];

        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }

        let pairs = self
            .words
            .iter()
            .filter(|w| w.starts_with(prefix))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();

        Ok((start, pairs))
    }
}

impl Hinter for RpnHelper {
    type Hint = String;

    fn hint(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if line.is_empty() {
            self.stack_hint.clone()
        } else {
            None
        }
    }
}

impl Highlighter for RpnHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        // Dim the stack hint
        Cow::Owned(format!("\x1b[90m{}\x1b[0m", hint))
    }
}

impl Validator for RpnHelper {}

/// Run the interactive loop until `q` or end of input
pub(crate) fn run_repl(mut calc: Calculator, banner: bool) -> RlResult<()> {
    let mut rl: Editor<RpnHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(RpnHelper::new(&calc)));

    let history_path = history_path();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    if banner {
        println!("rpncalc {} - Reverse Polish Notation calculator", VERSION);
        println!("  Type 'q' or Ctrl-D to quit, 'help' for operations");
    }

    loop {
        if let Some(helper) = rl.helper_mut() {
            helper.sync(&calc);
        }

        let prompt = format!("({}) > ", calc.depth());

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                // Empty line shows the stack
                if trimmed.is_empty() {
                    terminal::print_stack(&calc);
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                match trimmed {
                    "q" | "quit" | "exit" => break,
                    "help" | ".help" | ".h" => {
                        println!("{}", operations_help());
                        continue;
                    }
                    "t" => {
                        terminal::print_top(&calc, View::Plain);
                        continue;
                    }
                    "eng" => {
                        terminal::print_top(&calc, View::Eng);
                        continue;
                    }
                    "hex" => {
                        terminal::print_top(&calc, View::Hex);
                        continue;
                    }
                    "time" => {
                        terminal::print_top(&calc, View::Time);
                        continue;
                    }
                    _ => {}
                }

                if let Err(e) = execute_line(&mut calc, trimmed, true) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C discards the current line
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}
