use std::{fs, path::PathBuf};

use clap::{Parser, ValueEnum};
use fishlisp::{
    interpret_line, interpret_script,
    interpreter::evaluator::core::Strategy,
    repl::{Repl, banner},
};

/// fishlisp is a tiny prefix-notation calculator language. Without arguments
/// it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single line and exits.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Evaluates every non-blank line of a file and exits.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// How expressions are evaluated.
    #[arg(short, long, value_enum, default_value_t = Mode::Tree)]
    mode: Mode,

    /// File to load REPL history from and save it to.
    #[arg(long)]
    history: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Walk the parse tree.
    Tree,
    /// Read the parse tree into symbols and S-expressions, then reduce those.
    Value,
}

impl From<Mode> for Strategy {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Tree => Self::ParseTree,
            Mode::Value => Self::ValueTree,
        }
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let strategy = Strategy::from(args.mode);

    if let Some(line) = args.eval {
        println!("{}", interpret_line(&line, strategy));
        return;
    }

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                                                   eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                             path.display());
                                                   std::process::exit(1);
                                               });

        for output in interpret_script(&script, strategy) {
            println!("{output}");
        }
        return;
    }

    println!("{}", banner());

    let result = Repl::new(strategy, args.history).and_then(|mut repl| repl.run());
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
