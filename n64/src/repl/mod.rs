//! Interactive prompt over a script [`Session`]

use crate::config::Config;
use crate::script::{ScriptError, Session};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

const HISTORY_FILE: &str = ".n64_history";

/// What a line of input asks the loop to do
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// REPL state
pub struct Repl {
    editor: DefaultEditor,
    session: Session,
    config: Config,
    history_path: Option<PathBuf>,
}

impl Repl {
    pub fn new(config: Config) -> RlResult<Self> {
        let editor = DefaultEditor::new()?;
        let history_path = if config.history {
            dirs_home().map(|h| h.join(HISTORY_FILE))
        } else {
            None
        };

        let mut repl = Repl {
            editor,
            session: Session::with_mode(config.mode()),
            config,
            history_path,
        };

        if let Some(ref path) = repl.history_path
            && let Err(err) = repl.editor.load_history(path)
        {
            log::debug!("no history loaded from {}: {err}", path.display());
        }

        Ok(repl)
    }

    pub fn run(&mut self) -> RlResult<()> {
        println!("n64 {}", env!("CARGO_PKG_VERSION"));
        println!("Type :help for help, :quit to exit.\n");

        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);

                    let (out, outcome) = handle_line(&mut self.session, &self.config, line);
                    for msg in out {
                        match msg {
                            Ok(text) => println!("{text}"),
                            Err(text) => eprintln!("{text}"),
                        }
                    }
                    if outcome == Outcome::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Goodbye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {err}");
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path
            && let Err(err) = self.editor.save_history(path)
        {
            log::warn!("could not save history to {}: {err}", path.display());
        }

        Ok(())
    }
}

/// Evaluate one line. Returns printable output (`Err` for stderr) and
/// whether to keep going.
pub fn handle_line(
    session: &mut Session,
    config: &Config,
    line: &str,
) -> (Vec<Result<String, String>>, Outcome) {
    if line.starts_with(':') {
        return handle_command(session, line);
    }

    match session.eval(line) {
        Ok(Some(value)) => (vec![Ok(value.render(config.radix))], Outcome::Continue),
        Ok(None) => (Vec::new(), Outcome::Continue),
        Err(err) => (vec![Err(describe(&err))], Outcome::Continue),
    }
}

fn describe(err: &ScriptError) -> String {
    match err {
        ScriptError::Lexer { message, .. } => format!("Lexer error: {message}"),
        ScriptError::Parser { message, .. } => format!("Parse error: {message}"),
        ScriptError::Runtime { .. } | ScriptError::Unbound { .. } => {
            format!("Runtime error: {}", err.message())
        }
    }
}

fn handle_command(session: &mut Session, cmd: &str) -> (Vec<Result<String, String>>, Outcome) {
    match cmd {
        ":quit" | ":q" | ":exit" => (vec![Ok("Goodbye!".to_string())], Outcome::Quit),
        ":help" | ":h" | ":?" => (vec![Ok(help())], Outcome::Continue),
        ":vars" => {
            let lines = session
                .bindings()
                .map(|(name, value)| Ok(format!("{name} = {value}")))
                .collect();
            (lines, Outcome::Continue)
        }
        ":clear" => {
            session.clear();
            (vec![Ok("Bindings cleared.".to_string())], Outcome::Continue)
        }
        _ => (
            vec![Err(format!("Unknown command: {cmd}\nType :help for help."))],
            Outcome::Continue,
        ),
    }
}

fn help() -> String {
    [
        "Commands:",
        "  :help, :h, :?   Show this help",
        "  :quit, :q       Exit the REPL",
        "  :vars           List bindings",
        "  :clear          Remove all bindings",
        "",
        "You can enter:",
        "  let x = u64(\"ff\", 16)     bind a value (also i64(..), int64(..))",
        "  x.iaddn(1)                mutate a binding in place",
        "  x.add(y).toString(16)     copying forms leave x alone",
    ]
    .join("\n")
}

/// Get home directory
fn dirs_home() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}
