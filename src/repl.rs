use std::path::PathBuf;

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{interpret_line, interpreter::evaluator::core::Strategy};

/// The prompt shown before each input line.
pub const PROMPT: &str = "lispy> ";

/// Returns the text printed when the REPL starts.
///
/// # Example
/// ```
/// use fishlisp::repl::banner;
///
/// assert!(banner().starts_with("FishLisp Version "));
/// assert!(banner().contains("Ctrl+c"));
/// ```
#[must_use]
pub fn banner() -> String {
    format!("FishLisp Version {}\nPress Ctrl+c to Exit\n",
            env!("CARGO_PKG_VERSION"))
}

/// REPL with line editing and history.
///
/// Nothing but the history carries over from one line to the next.
pub struct Repl {
    editor:   DefaultEditor,
    strategy: Strategy,
    history:  Option<PathBuf>,
}

impl Repl {
    /// Creates a REPL, loading history from `history` if a path is given.
    ///
    /// A missing or unreadable history file is not an error.
    pub fn new(strategy: Strategy, history: Option<PathBuf>) -> rustyline::Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if let Some(path) = &history
           && let Err(e) = editor.load_history(path)
        {
            log::debug!("no history loaded from {}: {e}", path.display());
        }

        Ok(Self { editor,
                  strategy,
                  history })
    }

    /// Reads a line from the user.
    pub fn read_line(&mut self) -> rustyline::Result<String> {
        self.editor.readline(PROMPT)
    }

    /// Adds a line to history.
    pub fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            log::debug!("line not added to history: {e}");
        }
    }

    /// Runs the loop until Ctrl-C or end of input.
    ///
    /// Each line is recorded in history, then evaluated, and its output line
    /// is printed to stdout.
    ///
    /// # Errors
    /// Returns the editor's error if reading from the terminal fails.
    pub fn run(&mut self) -> rustyline::Result<()> {
        let result = loop {
            match self.read_line() {
                Ok(line) => {
                    self.add_history(&line);
                    println!("{}", interpret_line(&line, self.strategy));
                },
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break Ok(()),
                Err(e) => break Err(e),
            }
        };

        if let Err(e) = self.save_history() {
            log::warn!("could not save history: {e}");
        }
        result
    }

    /// Saves history, if a history file was given.
    ///
    /// # Errors
    /// Returns the editor's error if the file cannot be written.
    pub fn save_history(&mut self) -> rustyline::Result<()> {
        match &self.history {
            Some(path) => self.editor.save_history(path),
            None => Ok(()),
        }
    }
}
